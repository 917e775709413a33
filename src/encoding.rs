//! Transcoding between the legacy export encoding and UTF-8.

use encoding_rs::Encoding;
use tracing::warn;

use crate::error::AnalysisError;

pub const DEFAULT_ENCODING_LABEL: &str = "Shift_JIS";

/// Looks up an encoding by its WHATWG label (`shift_jis`, `sjis`, `euc-jp`, ...).
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding, AnalysisError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| AnalysisError::UnknownEncoding(label.to_string()))
}

/// Decodes raw input bytes. Malformed sequences become U+FFFD.
pub fn decode(bytes: &[u8], encoding: &'static Encoding) -> String {
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        warn!(
            encoding = encoding.name(),
            "Input contained malformed byte sequences"
        );
    }
    text.into_owned()
}

/// Encodes output text. Characters the encoding cannot represent are written
/// as numeric character references.
pub fn encode(text: &str, encoding: &'static Encoding) -> Vec<u8> {
    let (bytes, _, had_errors) = encoding.encode(text);
    if had_errors {
        warn!(
            encoding = encoding.name(),
            "Output contained unmappable characters"
        );
    }
    bytes.into_owned()
}
