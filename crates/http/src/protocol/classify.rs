//! Classifiers turning status line tokens into numbers.
//!
//! Both are total: input that does not match a known value maps to an "unrecognized"
//! result instead of an error.

use http::{StatusCode, Version};

/// Protocol version announced on a response line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Protocol {
    /// Not parsed yet, or not a recognized `HTTP/x.y` string.
    #[default]
    Unknown,
    Http09,
    Http10,
    Http11,
}

impl Protocol {
    /// Classifies a protocol token such as `HTTP/1.1`.
    pub fn parse(protocol: &[u8]) -> Self {
        match protocol {
            b"HTTP/0.9" => Self::Http09,
            b"HTTP/1.0" => Self::Http10,
            b"HTTP/1.1" => Self::Http11,
            _ => Self::Unknown,
        }
    }

    pub fn version(self) -> Option<Version> {
        match self {
            Self::Unknown => None,
            Self::Http09 => Some(Version::HTTP_09),
            Self::Http10 => Some(Version::HTTP_10),
            Self::Http11 => Some(Version::HTTP_11),
        }
    }

    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }
}

/// Classifies a status token; `None` means the token is not a status code.
///
/// Exactly three digits in `100..=999` are accepted, surrounding whitespace is ignored.
pub fn parse_status(status: &[u8]) -> Option<StatusCode> {
    StatusCode::from_bytes(status.trim_ascii()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_protocol() {
        assert_eq!(Protocol::parse(b"HTTP/1.1"), Protocol::Http11);
        assert_eq!(Protocol::parse(b"HTTP/1.0"), Protocol::Http10);
        assert_eq!(Protocol::parse(b"HTTP/0.9"), Protocol::Http09);
        assert_eq!(Protocol::parse(b"HTTP/2.0"), Protocol::Unknown);
        assert_eq!(Protocol::parse(b"http/1.1"), Protocol::Unknown);
        assert_eq!(Protocol::parse(b""), Protocol::Unknown);

        assert_eq!(Protocol::Http11.version(), Some(Version::HTTP_11));
        assert_eq!(Protocol::Unknown.version(), None);
        assert!(!Protocol::default().is_known());
    }

    #[test]
    fn classify_status() {
        assert_eq!(parse_status(b"200"), Some(StatusCode::OK));
        assert_eq!(parse_status(b"404"), Some(StatusCode::NOT_FOUND));
        assert_eq!(parse_status(b" 302 "), Some(StatusCode::FOUND));
        assert_eq!(parse_status(b"999").map(|s| s.as_u16()), Some(999));

        assert_eq!(parse_status(b""), None);
        assert_eq!(parse_status(b"99"), None);
        assert_eq!(parse_status(b"1000"), None);
        assert_eq!(parse_status(b"abc"), None);
        assert_eq!(parse_status(b"20x"), None);
    }
}
