use async_graphql::MergedObject;

use crate::gql::domains::accounts::AccountsQuery;
use crate::gql::domains::users::UserQuery;

/// Single query root merging the accounts fields and the user-resolver
/// fields; every field from both sources stays queryable.
#[derive(MergedObject, Default)]
pub struct QueryRoot(AccountsQuery, UserQuery);
