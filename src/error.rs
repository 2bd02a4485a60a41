//! Error types for otscan

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for otscan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Errors returned by the OneTrust API or the transport underneath it
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Access token request failed.\nStatus Code: {status}\nBody: {body}")]
    Authentication { status: u16, body: String },

    #[error("Build upload failed.\nStatus Code: {status}\nBody: {body}")]
    Upload { status: u16, body: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Transport("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Transport("Failed to connect to OneTrust".to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Failures of the scan workflow that are not HTTP errors
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Build file not found at path: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The token endpoint answered 2xx but carried no `access_token`.
    #[error("Token endpoint reported success but returned no access token")]
    MissingAccessToken,
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Missing required option `--{flag}`. Pass the flag, set {env}, or run `otscan init`.")]
    MissingField {
        flag: &'static str,
        env: &'static str,
    },

    #[error("'app_name' is required when 'app_id' is not provided")]
    MissingAppName,

    #[error("Invalid value for 'platform': {0}. Allowed values: IOS, ANDROID")]
    InvalidPlatform(String),

    #[error("Invalid environment '{value}': {reason}")]
    InvalidEnvironment { value: String, reason: &'static str },
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_authentication_carries_status_and_body() {
        let err = ApiError::Authentication {
            status: 401,
            body: "{\"error\":\"invalid_client\"}".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Status Code: 401"));
        assert!(msg.contains("invalid_client"));
    }

    #[test]
    fn test_api_error_upload_carries_status_and_body() {
        let err = ApiError::Upload {
            status: 413,
            body: "Payload Too Large".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("413"));
        assert!(msg.contains("Payload Too Large"));
    }

    #[test]
    fn test_api_error_transport() {
        let err = ApiError::Transport("Connection refused".to_string());
        assert!(err.to_string().contains("Connection refused"));
    }

    #[test]
    fn test_api_error_invalid_response() {
        let err = ApiError::InvalidResponse("expected value at line 1".to_string());
        assert!(err.to_string().contains("expected value"));
    }

    #[test]
    fn test_scan_error_file_not_found_shows_path() {
        let err = ScanError::FileNotFound(PathBuf::from("/tmp/missing.ipa"));
        assert!(err.to_string().contains("/tmp/missing.ipa"));
    }

    #[test]
    fn test_scan_error_missing_access_token() {
        let err = ScanError::MissingAccessToken;
        assert!(err.to_string().contains("no access token"));
    }

    #[test]
    fn test_config_error_missing_field_names_flag_and_env() {
        let err = ConfigError::MissingField {
            flag: "client-id",
            env: "ONETRUST_CLIENT_ID",
        };
        let msg = err.to_string();
        assert!(msg.contains("--client-id"));
        assert!(msg.contains("ONETRUST_CLIENT_ID"));
        assert!(msg.contains("otscan init"));
    }

    #[test]
    fn test_config_error_invalid_platform() {
        let err = ConfigError::InvalidPlatform("web".to_string());
        let msg = err.to_string();
        assert!(msg.contains("web"));
        assert!(msg.contains("IOS, ANDROID"));
    }

    #[test]
    fn test_config_error_invalid_environment() {
        let err = ConfigError::InvalidEnvironment {
            value: "https://app-eu".to_string(),
            reason: "must not include protocol (https://)",
        };
        assert!(err.to_string().contains("https://app-eu"));
    }

    #[test]
    fn test_error_from_api_error() {
        let err: Error = ApiError::Transport("boom".to_string()).into();

        match err {
            Error::Api(ApiError::Transport(_)) => (),
            _ => panic!("Expected Error::Api(ApiError::Transport)"),
        }
    }

    #[test]
    fn test_error_from_scan_error() {
        let err: Error = ScanError::MissingAccessToken.into();

        match err {
            Error::Scan(ScanError::MissingAccessToken) => (),
            _ => panic!("Expected Error::Scan(ScanError::MissingAccessToken)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
