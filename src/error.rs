use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphQLError {
    #[error("Cursor encoding error: {0}")]
    CursorEncoding(String),

    #[error("Cursor payload error: {0}")]
    CursorPayload(String),
}

impl GraphQLError {
    pub fn cursor_encoding(message: impl Into<String>) -> Self {
        Self::CursorEncoding(message.into())
    }

    pub fn cursor_payload(message: impl Into<String>) -> Self {
        Self::CursorPayload(message.into())
    }
}

pub type GraphQLResult<T> = Result<T, GraphQLError>;
