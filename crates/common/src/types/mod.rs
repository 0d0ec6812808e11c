use serde::Serialize;

/// Liveness payload returned by `/health`.
#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body returned by delete endpoints.
#[derive(Serialize, Debug)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
