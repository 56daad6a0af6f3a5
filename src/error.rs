use std::fmt;

#[derive(Debug)]
pub enum OcrError {
    InvalidArgument(String),
    Io(String, std::io::Error),
    Network(String, reqwest::Error),
    Encode(serde_json::Error),
    Decode(String, serde_json::Error),
}

impl fmt::Display for OcrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OcrError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            OcrError::Io(msg, e) => write!(f, "{}: {}", msg, e),
            OcrError::Network(msg, e) => write!(f, "{}: {}", msg, e),
            OcrError::Encode(e) => write!(f, "Failed to encode request JSON: {}", e),
            OcrError::Decode(msg, e) => write!(f, "{}: {}", msg, e),
        }
    }
}

impl std::error::Error for OcrError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OcrError::InvalidArgument(_) => None,
            OcrError::Io(_, e) => Some(e),
            OcrError::Network(_, e) => Some(e),
            OcrError::Encode(e) => Some(e),
            OcrError::Decode(_, e) => Some(e),
        }
    }
}

pub type ClientResult<T> = Result<T, OcrError>;
