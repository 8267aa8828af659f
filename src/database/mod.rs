//! Persistence layer: models, connection handling and the database operations

pub mod connection;
pub mod models;
pub mod schema;
pub mod service;
pub mod service_trait;
