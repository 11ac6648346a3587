use std::fmt;

/// Central error types for the listing showcase
#[derive(Debug)]
pub enum AppError {
    /// Filesystem error (listing data, config file)
    Filesystem(std::io::Error),
    /// Listing data could not be decoded
    Parse(serde_json::Error),
    /// Config file could not be decoded
    Config(toml::de::Error),
    /// Validation error (e.g. duplicate listing ids, bad config values)
    Validation(String),
    /// Resource not found
    NotFound(String),
    /// General error
    #[allow(dead_code)]
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Filesystem(e) => write!(f, "Filesystem error: {}", e),
            AppError::Parse(e) => write!(f, "Listing data error: {}", e),
            AppError::Config(e) => write!(f, "Config error: {}", e),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Filesystem(e) => Some(e),
            AppError::Parse(e) => Some(e),
            AppError::Config(e) => Some(e),
            _ => None,
        }
    }
}

// Conversions from other error types
impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Filesystem(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Parse(e)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Config(e)
    }
}

/// User-friendly error messages for UI
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Filesystem(_) => {
                "The listing data could not be read. Please try again later.".to_string()
            }
            AppError::Parse(_) => "The listing data is damaged.".to_string(),
            AppError::Config(_) => "The configuration file is invalid.".to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::NotFound(msg) => format!("{} was not found.", msg),
            AppError::Other(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions_keep_source() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, AppError::Parse(_)));
        assert!(std::error::Error::source(&err).is_some());

        let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.to_string().starts_with("Filesystem error"));
    }

    #[test]
    fn test_user_message_for_not_found() {
        let err = AppError::NotFound("Listing 42".to_string());
        assert_eq!(err.user_message(), "Listing 42 was not found.");
    }
}
