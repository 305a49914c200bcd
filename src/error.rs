use brandmap_common::RecordError;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to fetch {resource}: {status}")]
    Fetch {
        resource: &'static str,
        status: StatusCode,
    },

    #[error("Network error while fetching {resource}: {source}")]
    Transport {
        resource: &'static str,
        source: reqwest::Error,
    },

    #[error("Malformed {resource}: {source}")]
    Decode {
        resource: &'static str,
        source: serde_json::Error,
    },

    #[error("Invalid market record {key}: {source}")]
    InvalidRecord { key: String, source: RecordError },
}

impl LoadError {
    pub fn resource(&self) -> &'static str {
        match self {
            LoadError::Fetch { resource, .. }
            | LoadError::Transport { resource, .. }
            | LoadError::Decode { resource, .. } => *resource,
            LoadError::InvalidRecord { .. } => "market data",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LoadError::Fetch { status, .. } if status.is_server_error() => {
                format!("The {} is temporarily unavailable.", self.resource())
            }
            LoadError::Fetch { status, .. } if *status == StatusCode::NOT_FOUND => {
                format!("The {} could not be found.", self.resource())
            }
            LoadError::Transport { .. } => "Check your internet connection.".to_string(),
            LoadError::Decode { .. } | LoadError::InvalidRecord { .. } => {
                format!("The {} is damaged and can't be displayed.", self.resource())
            }
            _ => self.to_string(),
        }
    }
}
