/// Unified error type for GraphQL resolvers.
///
/// async-graphql has a blanket `impl<T: Display + Send + Sync + 'static> From<T> for Error`,
/// so any type implementing `Display` auto-converts via `?`.
///
/// This enum gives us:
///   - `From<mongodb::error::Error>` — logs the DB detail, shows a sanitized message to clients
///   - `From<bson::oid::Error>` — shows "Invalid ID: …"
#[derive(Debug)]
pub enum GqlError {
    Mongo(mongodb::error::Error),
    ObjectId(mongodb::bson::oid::Error),
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Mongo(e) => {
                // Log the real error server-side; return a generic message to clients
                tracing::error!("Database error: {e}");
                write!(f, "Internal database error")
            }
            GqlError::ObjectId(e) => write!(f, "Invalid ID: {e}"),
        }
    }
}

impl std::error::Error for GqlError {}

impl From<mongodb::error::Error> for GqlError {
    fn from(e: mongodb::error::Error) -> Self {
        GqlError::Mongo(e)
    }
}

impl From<mongodb::bson::oid::Error> for GqlError {
    fn from(e: mongodb::bson::oid::Error) -> Self {
        GqlError::ObjectId(e)
    }
}

/// Extension trait that converts any `Result<T, E>` where `E: Display`
/// into `async_graphql::Result<T>` with a contextual message prefix.
///
/// Usage: `PasswordService::hash_password(pw).gql_err("Registration failed")?`
pub trait ResultExt<T> {
    fn gql_err(self, context: &str) -> std::result::Result<T, async_graphql::Error>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    fn gql_err(self, context: &str) -> std::result::Result<T, async_graphql::Error> {
        self.map_err(|e| async_graphql::Error::new(format!("{context}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn malformed_object_id_maps_to_invalid_id_message() {
        let err = GqlError::from(ObjectId::parse_str("not-an-object-id").unwrap_err());
        assert!(err.to_string().starts_with("Invalid ID:"));
    }

    #[test]
    fn gql_err_prefixes_the_context() {
        let result: Result<(), &str> = Err("boom");
        let err = result.gql_err("Login failed").unwrap_err();
        assert_eq!(err.message, "Login failed: boom");
    }
}
