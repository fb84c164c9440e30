//! Error types surfaced by key-value storage backends.
use std::{fmt, io};

/// Failures raised while reading or writing stored values.
#[derive(Debug)]
pub enum StorageError {
    Io { key: Option<String>, source: io::Error },
    Serialization { key: Option<String>, message: String },
}

impl StorageError {
    pub fn io(key: Option<&str>, source: io::Error) -> Self {
        Self::Io {
            key: key.map(str::to_string),
            source,
        }
    }

    pub fn serialization(key: Option<&str>, message: impl Into<String>) -> Self {
        Self::Serialization {
            key: key.map(str::to_string),
            message: message.into(),
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Io { key, .. } | Self::Serialization { key, .. } => key.as_deref(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.key().unwrap_or("<store>");
        match self {
            Self::Io { source, .. } => write!(f, "storage io failure for {}: {}", key, source),
            Self::Serialization { message, .. } => {
                write!(f, "storage serialization failure for {}: {}", key, message)
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Serialization { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_key() {
        let error = StorageError::serialization(Some("em_sphere.mood"), "bad json");
        assert!(error.to_string().contains("em_sphere.mood"));
        assert_eq!(error.key(), Some("em_sphere.mood"));

        let io_error = StorageError::io(None, io::Error::new(io::ErrorKind::Other, "disk"));
        assert!(io_error.to_string().contains("<store>"));
        assert!(std::error::Error::source(&io_error).is_some());
    }
}
