use async_graphql::MergedObject;

use crate::gql::domains::accounts::AccountsMutation;
use crate::gql::domains::users::UserMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(AccountsMutation, UserMutation);
