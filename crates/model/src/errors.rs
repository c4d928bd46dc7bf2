use std::fmt::{Display, Formatter};

/// Why a menu payload could not be read.
#[derive(Debug)]
pub enum MenuDataError {
    /// The payload is not valid JSON.
    Json(serde_json::Error),
    /// The payload parsed but its root is not an object.
    InvalidRoot(&'static str),
}

impl Display for MenuDataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(e) => write!(f, "Menu payload is not valid JSON: {e}"),
            Self::InvalidRoot(kind) => {
                write!(f, "Menu payload must be a JSON object, found {kind}")
            }
        }
    }
}

impl std::error::Error for MenuDataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::InvalidRoot(_) => None,
        }
    }
}

impl From<serde_json::Error> for MenuDataError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}
