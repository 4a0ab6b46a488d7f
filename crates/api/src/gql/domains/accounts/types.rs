use async_graphql::{InputObject, SimpleObject};

use crate::gql::types::User;

#[derive(InputObject)]
pub struct RegisterInput {
    pub email: String,
    pub username: Option<String>,
    pub password: String,
}

#[derive(InputObject)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(SimpleObject)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}
