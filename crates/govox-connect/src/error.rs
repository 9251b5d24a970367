//! Error types for the govox-connect crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorldError {
    #[error("gRPC transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("gRPC status error: {0}")]
    Status(#[from] tonic::Status),

    #[error("Connection to world host {addr} failed: {reason}")]
    ConnectionFailed { addr: String, reason: String },

    #[error("World response missing field: {0}")]
    MissingPayload(&'static str),
}
