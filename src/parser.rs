//! Decoding of the legacy-encoded survey export into CSV records.

use csv::ReaderBuilder;
use encoding_rs::Encoding;
use std::io::Read;

use crate::encoding::decode;
use crate::error::AnalysisError;

/// Reads all of `input` and decodes it from `encoding` into UTF-8 text.
///
/// # Errors
///
/// Returns an error if reading from `input` fails.
pub fn decode_input<R: Read>(
    mut input: R,
    encoding: &'static Encoding,
) -> Result<String, AnalysisError> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    Ok(decode(&bytes, encoding))
}

/// Builds a strict CSV reader over decoded survey text.
///
/// Headers are not interpreted by the reader; the title row is handled by
/// [`crate::stats::extract_subscales`].
pub fn survey_reader(text: &str) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(false)
        .from_reader(text.as_bytes())
}
