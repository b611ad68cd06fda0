//! Decoding of MIME "encoded-word" header values (`=?charset?encoding?payload?=`).
//! Patch headers use this form for author names that are not plain ASCII.

use crate::error::{Error, Result};
use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use encoding_rs::Encoding;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// Matches a single encoded word. The payload can not contain `?` or whitespace.
static ENCODED_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"=\?([^?\s]+)\?([A-Za-z])\?([^?\s]*)\?=").expect("encoded-word pattern is valid")
});

/// Mail agents are not consistent about padding, so both forms are accepted.
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Returns true when `value` may contain encoded words and has to go through
/// [`decode_header_value`]. Anything else is returned unchanged by the decoder.
pub fn needs_decoding(value: &str) -> bool {
    value.contains('=') || value.starts_with("=?UTF-8")
}

/// Decodes a header value, replacing every encoded word with its text.
///
/// # Arguments
/// * `value` - Trimmed header value, without the `<email>` part
///
/// # Returns
/// * `Result<String>` - The decoded value, or the input itself when it holds no encoded words
///
/// # Errors
/// * `Error::DecodingError` if a word names an unknown charset or encoding,
///   or its payload is not valid base64 / quoted-printable / charset data
///
/// Whitespace between two adjacent encoded words is dropped, any other text is kept as-is.
pub fn decode_header_value(value: &str) -> Result<String> {
    if !needs_decoding(value) {
        return Ok(value.to_string());
    }

    let mut decoded = String::with_capacity(value.len());
    let mut last_end = 0;
    let mut previous_encoded = false;

    for caps in ENCODED_WORD.captures_iter(value) {
        let Some(word) = caps.get(0) else { continue };
        let gap = &value[last_end..word.start()];
        if !(previous_encoded && gap.trim().is_empty()) {
            decoded.push_str(gap);
        }
        decoded.push_str(&decode_word(value, &caps[1], &caps[2], &caps[3])?);
        last_end = word.end();
        previous_encoded = true;
    }
    decoded.push_str(&value[last_end..]);

    if previous_encoded {
        debug!("Decoded header value '{value}' as '{decoded}'");
    }
    Ok(decoded)
}

fn decode_word(value: &str, charset: &str, encoding: &str, payload: &str) -> Result<String> {
    // RFC 2231 allows a language suffix: `UTF-8*en`
    let label = charset.split('*').next().unwrap_or(charset);
    let charset = Encoding::for_label(label.as_bytes())
        .ok_or_else(|| Error::decoding(value, format!("unsupported charset '{label}'")))?;

    let bytes = match encoding {
        "B" | "b" => BASE64
            .decode(payload)
            .map_err(|e| Error::decoding(value, format!("invalid base64 payload: {e}")))?,
        "Q" | "q" => decode_q(payload)
            .ok_or_else(|| Error::decoding(value, "invalid quoted-printable payload"))?,
        other => {
            return Err(Error::decoding(value, format!("unsupported encoding '{other}'")));
        }
    };

    let (text, had_errors) = charset.decode_without_bom_handling(&bytes);
    if had_errors {
        return Err(Error::decoding(value, format!("payload is not valid {}", charset.name())));
    }
    Ok(text.into_owned())
}

/// The "Q" encoding: quoted-printable where `_` stands for a space.
fn decode_q(payload: &str) -> Option<Vec<u8>> {
    let mut bytes = Vec::with_capacity(payload.len());
    let mut input = payload.bytes();
    while let Some(b) = input.next() {
        match b {
            b'_' => bytes.push(b' '),
            b'=' => {
                let high = hex_value(input.next()?)?;
                let low = hex_value(input.next()?)?;
                bytes.push((high << 4) | low);
            }
            _ => bytes.push(b),
        }
    }
    Some(bytes)
}

fn hex_value(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}
