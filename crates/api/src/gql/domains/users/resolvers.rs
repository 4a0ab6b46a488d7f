use async_graphql::{Context, Object, Result, ID};
use mongodb::bson::oid::ObjectId;

use crate::auth::permissions::{require_admin, require_role};
use crate::gql::error::GqlError;
use crate::gql::types::{PaginatedResponse, PaginationInput, Role, User};
use crate::state::AppState;
use infra::repos::users;

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// List users (authenticated users only)
    async fn users(
        &self,
        ctx: &Context<'_>,
        pagination: Option<PaginationInput>,
    ) -> Result<PaginatedResponse<User>> {
        let _viewer = require_role(ctx, Role::User).await?;

        let state = ctx.data::<AppState>()?;

        let page = pagination.unwrap_or(PaginationInput {
            limit: Some(50),
            offset: Some(0),
        });
        let limit = page.limit.unwrap_or(50).clamp(1, 100);
        let offset = page.offset.unwrap_or(0);

        let (docs, total_count) = tokio::try_join!(
            users::list(&state.db, limit, offset),
            users::count(&state.db)
        )
        .map_err(GqlError::from)?;

        let items: Vec<User> = docs.into_iter().map(User::from).collect();
        let fetched = items.len();
        let has_next_page = has_more(offset, fetched, total_count);

        Ok(PaginatedResponse {
            items,
            total_count: total_count as i64,
            page_size: fetched as i32,
            offset: offset as i32,
            has_next_page,
        })
    }

    /// Look up a single user by ID (authenticated users only)
    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<User>> {
        let _viewer = require_role(ctx, Role::User).await?;

        let state = ctx.data::<AppState>()?;

        let user_id = ObjectId::parse_str(id.as_str()).map_err(GqlError::from)?;

        let doc = users::get_by_id(&state.db, user_id)
            .await
            .map_err(GqlError::from)?;

        Ok(doc.map(User::from))
    }
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    /// Delete a user (admins only)
    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let _admin = require_admin(ctx).await?;

        let state = ctx.data::<AppState>()?;

        let user_id = ObjectId::parse_str(id.as_str()).map_err(GqlError::from)?;

        let deleted = users::delete(&state.db, user_id)
            .await
            .map_err(GqlError::from)?;

        if !deleted {
            return Err(async_graphql::Error::new("User not found"));
        }

        Ok(true)
    }
}

// Pagination cursors stay in u64; only the response fields narrow.
fn has_more(offset: u64, fetched: usize, total: u64) -> bool {
    offset.saturating_add(fetched as u64) < total
}
