pub mod resolvers;

pub use resolvers::{UserMutation, UserQuery};
