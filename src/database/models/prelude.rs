//! Wrapper for the models

pub use super::credential::Entity as Credential;
pub use super::customer::Entity as Customer;
pub use super::product::Entity as Product;
pub use super::server::Entity as Server;
pub use super::user::Entity as User;
