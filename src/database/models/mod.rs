//! Contains the models that represent the database entries
//!
//! Also contains the [sea_orm] implementation and intrinsic models
//!
//! [sea_orm]: https://www.sea-ql.org/SeaORM/docs/introduction/orm/

pub mod prelude;

pub mod credential;
pub mod customer;
pub mod product;
pub mod server;
pub mod user;
