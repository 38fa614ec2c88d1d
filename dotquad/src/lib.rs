//! Dotquad validates IPv4 addresses written in dotted-decimal notation.
//!
//! An address is valid if it consists of exactly four segments separated by `.`,
//! and every segment is one to three ASCII digits without a leading zero
//! (unless the segment is `0` itself) denoting a number from 0 to 255.
//! Nothing else is accepted: no whitespace, no signs, no octal or hexadecimal
//! segments, no shortened forms like `127.1`, no CIDR suffixes.
//!
//! ```
//! use dotquad::is_valid_ipv4_address;
//!
//! assert!(is_valid_ipv4_address("192.168.1.1"));
//! assert!(is_valid_ipv4_address("0.0.0.0"));
//! assert!(is_valid_ipv4_address("255.255.255.255"));
//!
//! assert!(!is_valid_ipv4_address("256.1.1.1"));
//! assert!(!is_valid_ipv4_address("192.168.01.1"));
//! assert!(!is_valid_ipv4_address(".1.2.3.4"));
//! assert!(!is_valid_ipv4_address("1.2.3"));
//! assert!(!is_valid_ipv4_address(""));
//! assert!(!is_valid_ipv4_address(&123));
//! assert!(!is_valid_ipv4_address(&None::<&str>));
//! ```
//!
//! Validation never panics, never allocates, and reports no reason for rejecting the input.
//!
//! # Crate features
//!
//! - **`alloc`** *(enabled by default)* – [`Candidate`] implementations for owned
//!   strings and collections using alloc crate.
//! - **`macros`** *(enabled by default)* – [`ipv4`] macro.
//! - **`find-dotquad`** – finds dotquad package to be used in macros
//!   even if it has been renamed in Cargo.toml. **`macros`** feature is required.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(feature = "find-dotquad", not(feature = "macros")))]
core::compile_error!(
    r#""find-dotquad" feature doesn't do anything unless "macros" feature is enabled"#
);

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

pub mod string;

mod address;
mod candidate;

use dotquad_core as segment;

pub use address::{InvalidIpv4, Ipv4Str};
pub use candidate::Candidate;

/// Returns `true` if `input` is a string holding a dotted-decimal IPv4 address.
///
/// Values that are not strings (see [`Candidate`]) are never valid.
///
/// ```
/// use core::any::Any;
/// use dotquad::is_valid_ipv4_address;
///
/// let inputs: [&dyn Any; 3] = [&"10.0.0.1", &10u8, &()];
/// assert_eq!(inputs.map(is_valid_ipv4_address), [true, false, false]);
/// ```
#[inline]
pub fn is_valid_ipv4_address<T: Candidate + ?Sized>(input: &T) -> bool {
    input
        .as_candidate_str()
        .is_some_and(string::is_valid_ipv4)
}

/// Creates [`Ipv4Str`] from a string literal checked at compile time.
///
/// ```
/// let addr = dotquad::ipv4!("192.168.0.1");
/// assert_eq!(addr.segments(), ["192", "168", "0", "1"]);
/// ```
///
/// ```compile_fail
/// let addr = dotquad::ipv4!("192.168.0.01");
/// ```
#[cfg(feature = "macros")]
#[cfg_attr(docsrs, doc(cfg(feature = "macros")))]
pub use dotquad_macros::ipv4;
