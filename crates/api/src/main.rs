use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::app::build_router;
use api::gql::build_schema;
use api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let mongo_host = std::env::var("MONGO_HOST").unwrap_or_else(|_| "localhost".into());
    let db_name = std::env::var("DB_NAME").unwrap_or_else(|_| "accounts".into());

    // Connection must be up before any schema construction that depends on it.
    let db = infra::db::connect(&mongo_host, &db_name).await?;

    let state = AppState::new(db)?;

    // Build the merged GraphQL schema from the gql module
    let schema = build_schema(state.clone());

    let app = build_router(state, schema);

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "4000".into())
        .parse()?;
    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server ready at http://localhost:{}/graphql", port);

    axum::serve(listener, app).await?;
    Ok(())
}
