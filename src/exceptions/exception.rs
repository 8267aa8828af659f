//! The [InvalidUsage] error returned to callers of the persistence layer

use log::debug;
use sea_orm::{DbErr, RuntimeErr};
use serde_json::{Map, Value};
use strum_macros::Display;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
/// The HTTP status codes the persistence layer answers with.
pub enum HttpStatus {
    #[strum(serialize = "Bad Request")]
    BadRequest = 400,
    #[strum(serialize = "Unprocessable Entity")]
    UnprocessableEntity = 422,
}

impl HttpStatus {
    pub fn code(self) -> u16 {
        self as u16
    }
}

/// Error carrying a message and the HTTP status the web layer should respond with
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} (status {status_code})")]
pub struct InvalidUsage {
    pub message: String,
    pub status_code: u16,
    /// Extra fields merged into [InvalidUsage::to_dict]
    pub payload: Option<Map<String, Value>>,
}

impl InvalidUsage {
    pub fn new(message: impl Into<String>, status_code: u16) -> Self {
        InvalidUsage {
            message: message.into(),
            status_code,
            payload: None,
        }
    }

    /// Creates an error with the default status [HttpStatus::BadRequest]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, HttpStatus::BadRequest.code())
    }

    pub fn with_payload(mut self, payload: Map<String, Value>) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Wraps the message of the driver error behind `err`
    pub fn from_db_err(err: &DbErr, status_code: u16) -> Self {
        let message = driver_message(err);
        debug!("Translating database error '{}' to status {}", err, status_code);
        Self::new(message, status_code)
    }

    /// Body of the error response: the payload with `message` added
    pub fn to_dict(&self) -> Value {
        let mut body = self.payload.clone().unwrap_or_default();
        body.insert("message".to_owned(), Value::String(self.message.clone()));
        Value::Object(body)
    }
}

/// Extracts the message of the underlying driver error, without sea-orm's wrapping
pub fn driver_message(err: &DbErr) -> String {
    match err {
        DbErr::Conn(runtime) | DbErr::Exec(runtime) | DbErr::Query(runtime) => {
            runtime_message(runtime)
        }
        DbErr::Custom(message) | DbErr::Type(message) | DbErr::RecordNotFound(message) => {
            message.clone()
        }
        other => other.to_string(),
    }
}

fn runtime_message(err: &RuntimeErr) -> String {
    match err {
        RuntimeErr::SqlxError(sqlx_error) => sqlx_error
            .as_database_error()
            .map(|database_error| database_error.message().to_owned())
            .unwrap_or_else(|| sqlx_error.to_string()),
        RuntimeErr::Internal(message) => message.clone(),
    }
}
