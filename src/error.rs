use std::path::PathBuf;
use thiserror::Error;

/// doxmdx error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    ConfigValidation(String),

    #[error("{0}")]
    Xml(#[from] sxd_document::parser::Error),

    #[error("Malformed XML in {path}: {message}")]
    MalformedInput { path: PathBuf, message: String },

    #[error("Symbol not found in catalog: {0}")]
    SymbolNotFound(String),

    #[error("Detail file for {symbol} not found: {path}")]
    MissingDetailFile { symbol: String, path: PathBuf },

    #[error("Cannot read catalog {path}: {message}")]
    CatalogUnavailable { path: PathBuf, message: String },

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for doxmdx operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a config validation error
    pub fn config_validation(msg: impl Into<String>) -> Self {
        Error::ConfigValidation(msg.into())
    }

    /// Create a malformed input error
    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::MalformedInput {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a missing detail file error
    pub fn missing_detail(symbol: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Error::MissingDetailFile {
            symbol: symbol.into(),
            path: path.into(),
        }
    }

    /// Create a catalog error
    pub fn catalog(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::CatalogUnavailable {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Whether this error only affects a single symbol of a batch
    pub fn is_symbol_local(&self) -> bool {
        matches!(
            self,
            Error::Xml(_)
                | Error::MalformedInput { .. }
                | Error::SymbolNotFound(_)
                | Error::MissingDetailFile { .. }
        )
    }
}
