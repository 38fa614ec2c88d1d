use crate::{segment::SEGMENT_COUNT, string};
use core::{fmt, ops::Deref};

/// String slice that is known to be a dotted-decimal IPv4 address.
///
/// ```
/// use dotquad::Ipv4Str;
///
/// let addr = Ipv4Str::new("172.16.254.1").unwrap();
/// assert_eq!(addr.segments(), ["172", "16", "254", "1"]);
/// assert!(Ipv4Str::new("172.16.254.01").is_err());
/// ```
///
/// Addresses are not ordered, since comparing them as text would put
/// `10.0.0.1` before `9.0.0.1`.
///
/// ```compile_fail
/// use dotquad::Ipv4Str;
///
/// let a = Ipv4Str::new("10.0.0.1").unwrap();
/// let b = Ipv4Str::new("9.0.0.1").unwrap();
/// let _ = a < b;
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Ipv4Str<'a>(&'a str);

impl<'a> Ipv4Str<'a> {
    pub fn new(s: &'a str) -> Result<Self, InvalidIpv4> {
        if string::is_valid_ipv4(s) {
            Ok(Self(s))
        } else {
            Err(InvalidIpv4)
        }
    }

    /// Expansion target of the `ipv4` macro, which validates `s` at compile time.
    #[doc(hidden)]
    pub const fn __new_unchecked(s: &'a str) -> Self {
        Self(s)
    }

    #[inline]
    pub const fn as_str(&self) -> &'a str {
        self.0
    }

    #[inline]
    pub fn segments(&self) -> [&'a str; SEGMENT_COUNT] {
        string::split_unchecked(self.0)
    }
}

impl<'a> TryFrom<&'a str> for Ipv4Str<'a> {
    type Error = InvalidIpv4;

    #[inline]
    fn try_from(s: &'a str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl Deref for Ipv4Str<'_> {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        self.0
    }
}

impl AsRef<str> for Ipv4Str<'_> {
    #[inline]
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl PartialEq<str> for Ipv4Str<'_> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Ipv4Str<'_> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Ipv4Str<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The string is not a dotted-decimal IPv4 address.
///
/// Carries no detail on which rule failed.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct InvalidIpv4;

impl fmt::Display for InvalidIpv4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid IPv4 address")
    }
}

impl core::error::Error for InvalidIpv4 {}
