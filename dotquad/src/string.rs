//! Validation of strings and raw bytes.

use crate::segment::{self, SEGMENT_COUNT};

/// Returns `true` if `s` is a dotted-decimal IPv4 address
///
/// ```
/// assert!(dotquad::string::is_valid_ipv4("10.0.0.1"));
/// assert!(!dotquad::string::is_valid_ipv4("10.0.0.01"));
/// ```
#[inline]
pub fn is_valid_ipv4(s: &str) -> bool {
    segment::is_valid_address(s.as_bytes())
}

/// Same as [`is_valid_ipv4`], but `bytes` are not required to be UTF-8.
///
/// ```
/// assert!(dotquad::string::is_valid_ipv4_bytes(b"127.0.0.1"));
/// assert!(!dotquad::string::is_valid_ipv4_bytes(b"127.0.0.1\xff"));
/// ```
#[inline]
pub fn is_valid_ipv4_bytes(bytes: &[u8]) -> bool {
    segment::is_valid_address(bytes)
}

/// Four segments of `s` if it is a valid address
///
/// ```
/// assert_eq!(dotquad::string::segments("8.8.4.4"), Some(["8", "8", "4", "4"]));
/// assert_eq!(dotquad::string::segments("8.8.4"), None);
/// ```
pub fn segments(s: &str) -> Option<[&str; SEGMENT_COUNT]> {
    is_valid_ipv4(s).then(|| split_unchecked(s))
}

/// `s` must have exactly three separators.
pub(crate) fn split_unchecked(s: &str) -> [&str; SEGMENT_COUNT] {
    let mut iter = s.split(char::from(segment::SEPARATOR));
    [(); SEGMENT_COUNT].map(|()| iter.next().unwrap_or_default())
}
