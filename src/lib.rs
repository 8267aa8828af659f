//! Persistence models of the dashboard web application:
//! - products with transactional save/delete helpers (see [database::service])
//! - customers, servers, users and credentials as plain CRUD tables (see [database::models])
//! - the [InvalidUsage][exceptions::exception::InvalidUsage] error handed to the web layer
//! - configuration via `application.toml` (see [configuration])
//!
//! # Testing
//! Database operations are tested against the sea-orm `MockDatabase`, which the
//! dev-dependencies enable. The startup flow is tested against a mocked
//! [DatabaseTrait][database::service_trait::DatabaseTrait].

pub mod configuration;
pub mod database;
pub mod exceptions;
