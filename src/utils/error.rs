use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unexpected status {status} from {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },
}

impl PortfolioError {
    /// Short message suitable for printing to a terminal user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            PortfolioError::ApiError(e) if e.is_connect() => {
                "Could not reach the portfolio backend".to_string()
            }
            PortfolioError::ApiError(e) if e.is_timeout() => {
                "The portfolio backend did not answer in time".to_string()
            }
            PortfolioError::ConfigError { .. }
            | PortfolioError::InvalidConfigValueError { .. }
            | PortfolioError::UrlError(_) => format!("Configuration problem: {}", self),
            PortfolioError::NotFound { resource } => format!("{} does not exist", resource),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

/// Failure of a contact form submission, worded for the person filling in the form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Please check your form data and try again")]
    Validation,

    #[error("Server error. Please try again later")]
    Server,

    #[error("Failed to send message. Please try again")]
    Transport,
}

impl SubmissionError {
    /// Maps an HTTP status of a rejected submission onto the user-facing category.
    pub fn from_status(status: u16) -> Self {
        match status {
            422 => SubmissionError::Validation,
            500..=599 => SubmissionError::Server,
            _ => SubmissionError::Transport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_error_from_status() {
        assert_eq!(SubmissionError::from_status(422), SubmissionError::Validation);
        assert_eq!(SubmissionError::from_status(500), SubmissionError::Server);
        assert_eq!(SubmissionError::from_status(503), SubmissionError::Server);
        assert_eq!(SubmissionError::from_status(404), SubmissionError::Transport);
        assert_eq!(SubmissionError::from_status(400), SubmissionError::Transport);
    }

    #[test]
    fn test_submission_messages() {
        assert_eq!(
            SubmissionError::Validation.to_string(),
            "Please check your form data and try again"
        );
        assert_eq!(
            SubmissionError::Server.to_string(),
            "Server error. Please try again later"
        );
        assert_eq!(
            SubmissionError::Transport.to_string(),
            "Failed to send message. Please try again"
        );
    }
}
