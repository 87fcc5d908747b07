//! Video URL value object

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::domain::error::InvalidVideoUrlError;

/// Value object for a public video URL passed to the service as a file
/// reference. Only absolute http(s) URLs with a host are accepted.
///
/// The trimmed input is kept as typed; `Url` is only used to validate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoUrl {
    raw: String,
}

impl VideoUrl {
    /// Parse and validate a URL
    pub fn parse(input: &str) -> Result<Self, InvalidVideoUrlError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(InvalidVideoUrlError::Empty);
        }

        let url = Url::parse(trimmed).map_err(|e| InvalidVideoUrlError::Malformed {
            input: trimmed.to_string(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(InvalidVideoUrlError::UnsupportedScheme {
                    scheme: other.to_string(),
                })
            }
        }

        if url.host_str().is_none() {
            return Err(InvalidVideoUrlError::Malformed {
                input: trimmed.to_string(),
                reason: "missing host".to_string(),
            });
        }

        Ok(Self {
            raw: trimmed.to_string(),
        })
    }

    /// Get the URL as sent in `file_data.file_uri`
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for VideoUrl {
    type Err = InvalidVideoUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VideoUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
