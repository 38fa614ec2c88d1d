//! Segment rules shared by [dotquad] and its macros.
//!
//! [dotquad]: https://docs.rs/dotquad

#![no_std]

pub const SEPARATOR: u8 = b'.';

pub const SEGMENT_COUNT: usize = 4;

const MAX_SEGMENT_LEN: usize = 3;

const MAX_SEGMENT_VALUE: u16 = 255;

#[inline]
pub fn has_valid_length(segment: &[u8]) -> bool {
    !segment.is_empty() && segment.len() <= MAX_SEGMENT_LEN
}

/// ASCII digits only. Multi-byte characters never pass
/// because none of their bytes is below `0x80`.
#[inline]
pub fn is_numeric(segment: &[u8]) -> bool {
    segment.iter().all(u8::is_ascii_digit)
}

#[inline]
pub fn has_no_leading_zeros(segment: &[u8]) -> bool {
    segment.len() == 1 || segment.first() != Some(&b'0')
}

/// Expects a segment that already passed [`has_valid_length`] and [`is_numeric`].
#[inline]
pub fn is_in_valid_range(segment: &[u8]) -> bool {
    segment
        .iter()
        .fold(0u16, |value, digit| value * 10 + u16::from(digit - b'0'))
        <= MAX_SEGMENT_VALUE
}

pub fn is_valid_segment(segment: &[u8]) -> bool {
    has_valid_length(segment)
        && is_numeric(segment)
        && has_no_leading_zeros(segment)
        && is_in_valid_range(segment)
}

/// Splits on every separator, keeping empty segments at either end
/// and between consecutive separators.
#[inline]
pub fn split(bytes: &[u8]) -> impl Iterator<Item = &[u8]> + Clone {
    bytes.split(|&byte| byte == SEPARATOR)
}

pub fn is_valid_address(bytes: &[u8]) -> bool {
    !bytes.is_empty()
        && split(bytes).count() == SEGMENT_COUNT
        && split(bytes).all(is_valid_segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length() {
        assert!(!has_valid_length(b""));
        assert!(has_valid_length(b"1"));
        assert!(has_valid_length(b"255"));
        assert!(!has_valid_length(b"0255"));
    }

    #[test]
    fn numeric() {
        assert!(is_numeric(b"0123456789"));
        for segment in ["-1", "+1", "a", "1a", " 1", "1 ", "0x1", "١", "１"] {
            assert!(!is_numeric(segment.as_bytes()), "{segment:?}");
        }
    }

    #[test]
    fn leading_zeros() {
        assert!(has_no_leading_zeros(b"0"));
        assert!(has_no_leading_zeros(b"10"));
        assert!(has_no_leading_zeros(b"100"));
        assert!(!has_no_leading_zeros(b"00"));
        assert!(!has_no_leading_zeros(b"01"));
        assert!(!has_no_leading_zeros(b"007"));
    }

    #[test]
    fn range() {
        assert!(is_in_valid_range(b"0"));
        assert!(is_in_valid_range(b"255"));
        assert!(!is_in_valid_range(b"256"));
        assert!(!is_in_valid_range(b"999"));
    }

    #[test]
    fn split_keeps_empty_segments() {
        assert_eq!(split(b".1.2.3").count(), 4);
        assert_eq!(split(b"1..2.3").nth(1), Some(&b""[..]));
        assert_eq!(split(b"1.2.3.").last(), Some(&b""[..]));
        assert_eq!(split(b"").count(), 1);
    }

    #[test]
    fn address() {
        assert!(is_valid_address(b"192.168.1.1"));
        assert!(!is_valid_address(b""));
        assert!(!is_valid_address(b"..."));
        assert!(!is_valid_address(b"1.2.3"));
        assert!(!is_valid_address(b"1.2.3.4.5"));
    }
}
