use mongodb::Database;

use crate::auth::{AuthConfig, JwtService};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    jwt_service: JwtService,
}

impl AppState {
    pub fn new(db: Database) -> anyhow::Result<Self> {
        let auth_config = AuthConfig::from_env()?;
        let jwt_service = JwtService::new(&auth_config);

        Ok(Self { db, jwt_service })
    }

    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }
}
