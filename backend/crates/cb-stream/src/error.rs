use cb_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("Channel limit exceeded: {current} open streams (max: {max}) {location}")]
    ChannelLimitExceeded {
        current: usize,
        max: usize,
        location: ErrorLocation,
    },

    #[error("Failed to encode frame: {source} {location}")]
    Encode {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl StreamError {
    /// Stable code reported to HTTP clients
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ChannelLimitExceeded { .. } => "CHANNEL_LIMIT",
            Self::Encode { .. } => "ENCODE_ERROR",
        }
    }
}

impl From<CoreError> for StreamError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Encode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StreamError>;
