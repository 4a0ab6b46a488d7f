use async_graphql::{Context, Object, Result};
use mongodb::bson::oid::ObjectId;

use crate::auth::{Claims, PasswordService};
use crate::gql::error::{GqlError, ResultExt};
use crate::gql::types::{Role, User};
use crate::state::AppState;
use infra::repos::users::{self, CreateUserData};

use super::types::{AuthPayload, LoginInput, RegisterInput};

// ── Queries ──────────────────────────────────────────────────────────

#[derive(Default)]
pub struct AccountsQuery;

#[Object]
impl AccountsQuery {
    /// Get the current authenticated user's information
    async fn me(&self, ctx: &Context<'_>) -> Result<User> {
        let claims = ctx
            .data::<Claims>()
            .map_err(|_| async_graphql::Error::new("Authentication required"))?;

        let user_id = ObjectId::parse_str(&claims.sub).map_err(GqlError::from)?;

        let state = ctx.data::<AppState>()?;

        let user = users::get_by_id(&state.db, user_id)
            .await
            .map_err(GqlError::from)?
            .ok_or_else(|| async_graphql::Error::new("User not found"))?;

        Ok(user.into())
    }
}

// ── Mutations ────────────────────────────────────────────────────────

#[derive(Default)]
pub struct AccountsMutation;

#[Object]
impl AccountsMutation {
    /// Register a new user with email and password
    async fn register(&self, ctx: &Context<'_>, input: RegisterInput) -> Result<User> {
        let state = ctx.data::<AppState>()?;

        PasswordService::validate_password_strength(&input.password)
            .gql_err("Invalid password")?;

        let password_hash =
            PasswordService::hash_password(&input.password).gql_err("Registration failed")?;

        let existing = users::get_by_email(&state.db, &input.email)
            .await
            .map_err(GqlError::from)?;
        if existing.is_some() {
            return Err(async_graphql::Error::new(
                "User with this email already exists",
            ));
        }

        let user = users::create(
            &state.db,
            CreateUserData {
                email: input.email,
                username: input.username,
                password_hash: Some(password_hash),
                role: Role::User.into(),
            },
        )
        .await
        .map_err(GqlError::from)?;

        Ok(user.into())
    }

    /// Login with email and password (returns JWT token)
    async fn login(&self, ctx: &Context<'_>, input: LoginInput) -> Result<AuthPayload> {
        let state = ctx.data::<AppState>()?;

        let user_doc = users::get_by_email(&state.db, &input.email)
            .await
            .map_err(GqlError::from)?;

        let user_doc = match user_doc {
            Some(doc) => doc,
            None => return Err(async_graphql::Error::new("Invalid credentials")),
        };

        if let Some(ref password_hash) = user_doc.password_hash {
            if !PasswordService::verify_password(&input.password, password_hash)
                .gql_err("Login failed")?
            {
                return Err(async_graphql::Error::new("Invalid credentials"));
            }
        } else {
            return Err(async_graphql::Error::new("User has no password set"));
        }

        let token = state
            .jwt_service()
            .create_token(
                user_doc.id,
                user_doc.email.clone(),
                user_doc.role.clone(),
            )
            .gql_err("Login failed")?;

        Ok(AuthPayload {
            token,
            user: user_doc.into(),
        })
    }
}
