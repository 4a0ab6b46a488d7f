use std::time::Duration;

use api::AppState;
use async_graphql::{Request, Variables};
use mongodb::options::{ClientOptions, ServerAddress};
use mongodb::Client;

/// Build an AppState backed by a lazily-connecting client.
///
/// The driver only opens sockets on first use, so schema-level tests that
/// never reach a resolver touching the database run without a live server.
pub fn setup_test_state() -> AppState {
    std::env::set_var("JWT_SECRET", "test-secret");

    let options = ClientOptions::builder()
        .hosts(vec![ServerAddress::Tcp {
            host: "localhost".to_string(),
            port: Some(27017),
        }])
        .server_selection_timeout(Some(Duration::from_secs(5)))
        .build();

    let client = Client::with_options(options).expect("Failed to build Mongo client");
    AppState::new(client.database("accounts_test")).expect("Failed to create AppState")
}

/// Helper function to execute GraphQL queries and mutations
#[allow(dead_code)]
pub async fn execute_graphql(
    schema: &async_graphql::Schema<
        api::gql::QueryRoot,
        api::gql::MutationRoot,
        async_graphql::EmptySubscription,
    >,
    query: &str,
    variables: Option<Variables>,
    auth_claims: Option<api::auth::Claims>,
) -> async_graphql::Response {
    let mut request = Request::new(query);

    if let Some(vars) = variables {
        request = request.variables(vars);
    }

    if let Some(claims) = auth_claims {
        request = request.data(claims);
    }

    schema.execute(request).await
}
