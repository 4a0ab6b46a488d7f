use async_graphql::{Enum, InputObject, SimpleObject, ID};
use chrono::{DateTime, Utc};

use infra::models::UserDoc;

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
pub enum Role {
    #[graphql(name = "ADMIN")]
    Admin,
    #[graphql(name = "USER")]
    User,
}

impl From<String> for Role {
    fn from(role: String) -> Self {
        match role.as_str() {
            "admin" => Role::Admin,
            "user" => Role::User,
            _ => Role::User, // Default to user for invalid roles
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => "admin".to_string(),
            Role::User => "user".to_string(),
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct User {
    pub id: ID,
    pub email: String,
    pub username: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<UserDoc> for User {
    fn from(doc: UserDoc) -> Self {
        User {
            id: doc.id.to_hex().into(),
            email: doc.email,
            username: doc.username,
            role: Role::from(doc.role),
            created_at: doc.created_at,
        }
    }
}

#[derive(InputObject)]
pub struct PaginationInput {
    pub limit: Option<i64>,
    pub offset: Option<u64>,
}

#[derive(SimpleObject)]
#[graphql(concrete(name = "PaginatedUsers", params(User)))]
pub struct PaginatedResponse<T: async_graphql::OutputType> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub page_size: i32,
    pub offset: i32,
    pub has_next_page: bool,
}
