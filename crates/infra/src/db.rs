use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

/// Open a connection to the document database and verify it is reachable.
///
/// The driver connects lazily, so we issue a `ping` here: an unreachable
/// server fails startup instead of the first query.
pub async fn connect(host: &str, db_name: &str) -> mongodb::error::Result<Database> {
    let uri = format!("mongodb://{host}:27017/{db_name}");

    let mut options = ClientOptions::parse(&uri).await?;
    options.server_selection_timeout = Some(Duration::from_secs(5));
    options.connect_timeout = Some(Duration::from_secs(3));

    let client = Client::with_options(options)?;
    let db = client.database(db_name);

    db.run_command(doc! { "ping": 1 }).await?;
    tracing::info!("Connected to MongoDB at {} (database: {})", host, db_name);

    Ok(db)
}
