/// Anchored equivalent of the validator in [regex] syntax.
///
/// [regex]: https://docs.rs/regex
pub const REGEX_IPV4_PATTERN: &str = r"^(?:(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])$";
