//! Application level errors handed to the web layer

pub mod exception;
