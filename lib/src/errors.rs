// Serialization errors

use std::fmt;

use quadstore::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializeError {
    /// A quad handed to the serializer violates the data model.
    InvalidQuad(StoreError),
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SerializeError::InvalidQuad(e) => write!(f, "cannot serialize quad: {}", e),
        }
    }
}

impl std::error::Error for SerializeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SerializeError::InvalidQuad(e) => Some(e),
        }
    }
}

impl From<StoreError> for SerializeError {
    fn from(e: StoreError) -> Self {
        SerializeError::InvalidQuad(e)
    }
}
