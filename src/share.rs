//! Share codec: a reversible, URL-safe encoding of one generated-code
//! snapshot, carried in the location fragment as `#/share/<token>`.
//!
//! Sharing transfers only the last rendered artifact, never chat history.

use std::io::{Read, Write};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;

use crate::errors::ShareDecodeError;

/// Fragment prefix recognized at page load.
pub const SHARE_FRAGMENT_PREFIX: &str = "#/share/";

/// Compress-then-encode. DEFLATE keeps typical generated documents well
/// under common URL length limits; the URL-safe alphabet needs no percent
/// escaping.
pub fn encode(source: &str) -> String {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    // Writing to an in-memory Vec cannot fail.
    if encoder.write_all(source.as_bytes()).is_err() {
        return String::new();
    }
    match encoder.finish() {
        Ok(compressed) => URL_SAFE_NO_PAD.encode(compressed),
        Err(_) => String::new(),
    }
}

/// Inverse of [`encode`]. Any malformed token fails softly with
/// [`ShareDecodeError`]; callers skip shared-content loading on failure.
pub fn decode(token: &str) -> Result<String, ShareDecodeError> {
    let compressed = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|e| ShareDecodeError(format!("base64: {e}")))?;
    let mut source = String::new();
    DeflateDecoder::new(compressed.as_slice())
        .read_to_string(&mut source)
        .map_err(|e| ShareDecodeError(format!("inflate: {e}")))?;
    Ok(source)
}

/// The full fragment for a snapshot, ready to append to the page URL.
pub fn share_fragment(source: &str) -> String {
    format!("{SHARE_FRAGMENT_PREFIX}{}", encode(source))
}

/// Pull the token out of a location fragment, if it matches the share
/// pattern.
pub fn parse_share_fragment(fragment: &str) -> Option<&str> {
    match fragment.strip_prefix(SHARE_FRAGMENT_PREFIX) {
        Some(token) if !token.is_empty() => Some(token),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_plain_text() {
        let text = "hello world";
        assert_eq!(decode(&encode(text)).unwrap(), text);
    }

    #[test]
    fn round_trips_markup_and_multiline() {
        let text = "<!DOCTYPE html>\n<html>\n  <body class=\"a&b\">\n    <p>x < y && y > z</p>\n  </body>\n</html>\n";
        assert_eq!(decode(&encode(text)).unwrap(), text);
    }

    #[test]
    fn round_trips_unicode() {
        let text = "héllo — 世界 🎨";
        assert_eq!(decode(&encode(text)).unwrap(), text);
    }

    #[test]
    fn token_is_url_safe() {
        let token = encode("<html><body>some generated page\nwith lines</body></html>");
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn garbage_token_fails_softly() {
        assert!(decode("not%valid!token").is_err());
        assert!(decode("").is_err());
    }

    #[test]
    fn valid_base64_that_is_not_deflate_fails_softly() {
        let token = URL_SAFE_NO_PAD.encode(b"just plain bytes");
        assert!(decode(&token).is_err());
    }

    #[test]
    fn fragment_parsing_matches_share_pattern_only() {
        assert_eq!(parse_share_fragment("#/share/abc123"), Some("abc123"));
        assert_eq!(parse_share_fragment("#/share/"), None);
        assert_eq!(parse_share_fragment("#/other/abc"), None);
        assert_eq!(parse_share_fragment(""), None);
    }

    #[test]
    fn share_fragment_decodes_back() {
        let fragment = share_fragment("<p>shared</p>");
        let token = parse_share_fragment(&fragment).unwrap();
        assert_eq!(decode(token).unwrap(), "<p>shared</p>");
    }
}
