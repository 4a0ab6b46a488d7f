pub mod users;

pub use users::CreateUserData;
