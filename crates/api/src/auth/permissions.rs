use async_graphql::{Context, Error, Result};
use mongodb::bson::oid::ObjectId;

use crate::auth::Claims;
use crate::gql::types::{Role, User};
use crate::state::AppState;

/// Authorization checker consulted before guarded resolver bodies run.
///
/// The role carried in the JWT claims is checked first, so an
/// unauthenticated or under-privileged request is rejected without a
/// database round-trip.
pub async fn require_role(ctx: &Context<'_>, required_role: Role) -> Result<User> {
    let claims = ctx
        .data::<Claims>()
        .map_err(|_| Error::new("You must be logged in to perform this action"))?;

    let claims_role = Role::from(claims.role.clone());
    if !has_required_role(&claims_role, required_role) {
        return Err(Error::new(match required_role {
            Role::Admin => format!(
                "Access denied: Administrator privileges required. Your current role is {:?}",
                claims_role
            ),
            Role::User => "Access denied: You need to be a registered user".to_string(),
        }));
    }

    let user_id = ObjectId::parse_str(&claims.sub)
        .map_err(|e| Error::new(format!("Invalid user ID: {}", e)))?;

    let state = ctx.data::<AppState>()?;
    let user = infra::repos::users::get_by_id(&state.db, user_id)
        .await
        .map_err(|e| Error::new(e.to_string()))?
        .ok_or_else(|| Error::new("User not found"))?;

    Ok(user.into())
}

/// Check if the authenticated user is an admin (global access)
pub async fn require_admin(ctx: &Context<'_>) -> Result<User> {
    require_role(ctx, Role::Admin).await
}

fn has_required_role(user_role: &Role, required_role: Role) -> bool {
    match required_role {
        Role::Admin => *user_role == Role::Admin,
        Role::User => true, // Everyone has user permissions
    }
}
