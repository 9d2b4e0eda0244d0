// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlobeError {
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    #[error("Unknown location: {name}")]
    UnknownLocation { name: String },
}

impl GlobeError {
    /// Lese- oder Dekodierfehler einer Datei (die einzige Fehlerklasse, die nach außen geht)
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            Self::Io(_) | Self::Parse(_) | Self::InvalidTopology { .. }
        )
    }
}

pub type GlobeResult<T> = Result<T, GlobeError>;
