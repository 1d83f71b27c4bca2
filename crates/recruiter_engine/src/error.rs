use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("invalid backend address: {0}")]
    InvalidEndpoint(String),
    #[error("{0}")]
    Transport(String),
    #[error("http status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response from server: {0}")]
    InvalidResponse(String),
}

impl BackendError {
    /// Text shown to the user: the server's own message when it sent one,
    /// otherwise a generic description of what went wrong.
    pub fn user_message(&self) -> String {
        match self {
            BackendError::InvalidEndpoint(detail) => format!("Invalid backend address: {detail}"),
            BackendError::Transport(detail) => detail.clone(),
            BackendError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            BackendError::Status {
                status,
                message: None,
            } => format!("HTTP error! status: {status}"),
            BackendError::InvalidResponse(detail) => {
                format!("Unexpected response from server: {detail}")
            }
        }
    }
}
