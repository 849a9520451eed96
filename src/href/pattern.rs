use once_cell::sync::Lazy;
use regex::Regex;

/// Source of [`HREF_REGEX`], kept around for error messages
pub const HREF_PATTERN: &str = r"^(https?://|//)([^:/?#]+)(:?\d*)(/?[^?#]*)(\??[^#]*)(#?.*)$";

/// Matches absolute http(s) links, or scheme-less links starting with `//`.
///
/// Capture groups: scheme with `://` (or a bare `//`), host, `:port`, path,
/// `?query` and `#fragment`.
pub static HREF_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(HREF_PATTERN).unwrap()
});
