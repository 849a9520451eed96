use std::borrow::Cow;
use tracing::warn;

// Reserved and unreserved URI characters that survive encoding untouched
const URI_SAFE: &str = ";,/?:@&=+$#-_.!~*'()";

#[inline]
fn is_uri_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || URI_SAFE.contains(c)
}

/// Percent-encodes every character that may not appear verbatim in a URI.
///
/// Structural delimiters (`:`, `/`, `?`, `#`, ...) are left alone so the
/// result can still be split into its components. `%` itself is encoded,
/// which keeps [`decode_component`] an exact inverse.
pub fn encode_uri(input: &str) -> Cow<'_, str> {
    if input.chars().all(is_uri_safe) {
        return Cow::Borrowed(input);
    }

    let mut encoded = String::with_capacity(input.len() * 3);
    let mut buf = [0u8; 4];
    for c in input.chars() {
        if is_uri_safe(c) {
            encoded.push(c);
        } else {
            encoded.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }
    Cow::Owned(encoded)
}

/// Reverses percent-encoding of a single URL component.
///
/// Byte sequences that do not decode to UTF-8 leave the component as it was.
pub fn decode_component(input: &str) -> Cow<'_, str> {
    match urlencoding::decode(input) {
        Ok(decoded) => decoded,
        Err(e) => {
            warn!("Leaving component undecoded, not valid UTF-8: {}", e);
            Cow::Borrowed(input)
        }
    }
}
