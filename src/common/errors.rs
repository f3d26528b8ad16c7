use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::RequiredField;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field(s): {}", join_fields(.0))]
    MissingFields(Vec<RequiredField>),
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryError {
    #[error("Relay rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Could not reach the relay: {0}")]
    Transport(String),

    #[error("Too many messages from this client, try again later")]
    RateLimited,

    #[error("The relay is not configured")]
    Unavailable,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error("A message is already being sent")]
    InFlight,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Local storage is not available")]
    Unavailable,

    #[error("Local storage access failed: {0}")]
    Access(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable {0} must be set")]
    Missing(&'static str),
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(RequiredField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
