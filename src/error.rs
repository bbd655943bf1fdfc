use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("FetchError: {0}")]
    Fetch(#[from] FetchError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration field '{field}' is missing or empty")]
    MissingField { field: String, hint: String },
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    #[error("Configuration parse error in {path}: {message}")]
    Parse { path: String, message: String },
}

/// Why a single page fetch failed.
///
/// The `Display` output is the failure reason reported to the operator and
/// is kept stable: callers compare it verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network/IO Error: {detail}")]
    Transport { detail: String },
    #[error("HTTP Error: {status} - {body}")]
    Protocol { status: u16, body: String },
    #[error("Malformed Response: {detail}")]
    MalformedResponse { detail: String },
}

impl FetchError {
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration serialization failed: {message}")]
    Serialize { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: String },
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Terminal output error: {0}")]
    TerminalOutput(String),
}

impl AppError {
    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Config(ConfigError::MissingField { hint, .. }) => Some(hint.clone()),
            AppError::Config(ConfigError::InvalidValue { reason, .. }) => Some(reason.clone()),
            AppError::Config(ConfigError::Parse { .. }) => {
                Some("Fix the TOML syntax or regenerate it with 'config init --force'".to_string())
            }
            AppError::Fetch(FetchError::Transport { .. }) => {
                Some("Check your network connection and the configured base_url".to_string())
            }
            AppError::Fetch(FetchError::Protocol { status: 404, .. }) => {
                Some("The endpoint was not found; verify the base_url path".to_string())
            }
            AppError::Fetch(FetchError::MalformedResponse { .. }) => Some(
                "The endpoint did not return a JSON object with a 'data' array".to_string(),
            ),
            AppError::Storage(StorageError::AlreadyExists { .. }) => {
                Some("Pass --force to overwrite the existing file".to_string())
            }
            _ => None,
        }
    }
}
