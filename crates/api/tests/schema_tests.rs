mod common;

use api::gql::build_schema;
use common::*;

#[tokio::test]
async fn test_merged_schema_keeps_fields_from_both_sources() {
    let state = setup_test_state();
    let schema = build_schema(state);

    let sdl = schema.sdl();

    // Fields contributed by the accounts roots
    assert!(sdl.contains("me: User!"), "accounts `me` field lost: {sdl}");
    assert!(
        sdl.contains("register(input: RegisterInput!): User!"),
        "accounts `register` field lost"
    );
    assert!(
        sdl.contains("login(input: LoginInput!): AuthPayload!"),
        "accounts `login` field lost"
    );

    // Fields contributed by the user-resolver roots
    assert!(
        sdl.contains("users(pagination: PaginationInput): PaginatedUsers!"),
        "user `users` field lost"
    );
    assert!(sdl.contains("user(id: ID!): User"), "user `user` field lost");
    assert!(
        sdl.contains("deleteUser(id: ID!): Boolean!"),
        "user `deleteUser` field lost"
    );
}

#[tokio::test]
async fn test_valid_query_executes_successfully() {
    let state = setup_test_state();
    let schema = build_schema(state);

    let query = "{ __schema { queryType { name } mutationType { name } } }";
    let response = execute_graphql(&schema, query, None, None).await;

    assert!(
        response.errors.is_empty(),
        "Valid query should succeed: {:?}",
        response.errors
    );

    let data = response.data.into_json().unwrap();
    assert_eq!(data["__schema"]["queryType"]["name"], "QueryRoot");
    assert_eq!(data["__schema"]["mutationType"]["name"], "MutationRoot");
}

#[tokio::test]
async fn test_invalid_query_returns_well_formed_error() {
    let state = setup_test_state();
    let schema = build_schema(state);

    let response = execute_graphql(&schema, "{ noSuchField }", None, None).await;

    assert!(
        !response.errors.is_empty(),
        "Query against an unknown field should fail"
    );
    // The error response must still serialize cleanly for the client.
    let json = serde_json::to_value(&response).expect("response should serialize");
    assert!(json["errors"][0]["message"].is_string());
}

#[tokio::test]
async fn test_me_requires_authentication() {
    let state = setup_test_state();
    let schema = build_schema(state);

    let response = execute_graphql(&schema, "{ me { id email } }", None, None).await;

    assert!(
        !response.errors.is_empty(),
        "Unauthenticated `me` should fail"
    );
    assert!(response.errors[0].message.contains("Authentication required"));
}

#[tokio::test]
async fn test_users_requires_authentication() {
    let state = setup_test_state();
    let schema = build_schema(state);

    let query = r#"
        query Users {
            users {
                items { id email }
                totalCount
            }
        }
    "#;

    let response = execute_graphql(&schema, query, None, None).await;

    assert!(
        !response.errors.is_empty(),
        "Unauthenticated `users` should fail"
    );
    assert!(response.errors[0]
        .message
        .contains("You must be logged in to perform this action"));
}

#[tokio::test]
async fn test_delete_user_requires_authentication() {
    let state = setup_test_state();
    let schema = build_schema(state);

    let mutation = r#"mutation { deleteUser(id: "652f1b2e9d3e4a0001000000") }"#;
    let response = execute_graphql(&schema, mutation, None, None).await;

    assert!(
        !response.errors.is_empty(),
        "Unauthenticated `deleteUser` should fail"
    );
    assert!(response.errors[0]
        .message
        .contains("You must be logged in to perform this action"));
}

#[tokio::test]
async fn test_delete_user_requires_admin_role() {
    let state = setup_test_state();
    let schema = build_schema(state);

    let now = chrono::Utc::now().timestamp();
    let claims = api::auth::Claims {
        sub: mongodb::bson::oid::ObjectId::new().to_hex(),
        email: "plain-user@test.com".to_string(),
        role: "user".to_string(),
        iat: now,
        exp: now + 3600,
    };

    let mutation = r#"mutation { deleteUser(id: "652f1b2e9d3e4a0001000000") }"#;
    let response = execute_graphql(&schema, mutation, None, Some(claims)).await;

    assert!(
        !response.errors.is_empty(),
        "Non-admin `deleteUser` should fail"
    );
    assert!(response.errors[0]
        .message
        .contains("Administrator privileges required"));
}

#[tokio::test]
async fn test_user_lookup_requires_authentication() {
    let state = setup_test_state();
    let schema = build_schema(state);

    let query = r#"query { user(id: "652f1b2e9d3e4a0001000000") { id } }"#;
    let response = execute_graphql(&schema, query, None, None).await;

    assert!(
        !response.errors.is_empty(),
        "Unauthenticated `user` lookup should fail"
    );
}
