// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Crate-wide error type.
///
/// Remote failures are stringly-typed on purpose: the UI never branches on
/// the cause beyond its broad class, it only logs and degrades to an empty
/// or fallback state.
#[derive(Debug, Clone)]
pub enum Error {
    /// Transport-level failure talking to the content store or asset CDN.
    Http(String),
    /// The content store answered with a non-success status.
    Api(String),
    /// A response body could not be deserialized.
    Decode(String),
    /// Downloaded image bytes could not be decoded into pixels.
    Image(String),
    /// Configuration file problems.
    Config(String),
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Api(e) => write!(f, "Content API Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode(err.to_string())
        } else if err.is_status() {
            Error::Api(err.to_string())
        } else {
            Error::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_http_error() {
        let err = Error::Http("connection refused".to_string());
        assert_eq!(format!("{}", err), "HTTP Error: connection refused");
    }

    #[test]
    fn display_formats_api_error() {
        let err = Error::Api("status 500".into());
        assert_eq!(format!("{}", err), "Content API Error: status 500");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn from_json_error_produces_decode_variant() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }
}
