use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    TaskNotFound,
    Parse,
    Storage,
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct TasklyError {
    pub code: ErrorCode,
    pub message: String,
}

impl TasklyError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn task_not_found(id: u64) -> Self {
        Self::new(ErrorCode::TaskNotFound, format!("Task not found: {id}"))
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Parse, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Storage, message)
    }
}

impl From<std::io::Error> for TasklyError {
    fn from(e: std::io::Error) -> Self {
        Self::storage(e.to_string())
    }
}

impl From<serde_json::Error> for TasklyError {
    fn from(e: serde_json::Error) -> Self {
        Self::parse(e.to_string())
    }
}
