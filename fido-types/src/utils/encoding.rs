//! Encoding helpers shared by the `fido` crates so that binary identifiers are rendered the same
//! way everywhere.

use data_encoding::{Specification, BASE64URL, BASE64URL_NOPAD, BASE64_NOPAD, HEXLOWER};

const PADDING: char = '=';

/// Convert bytes to base64url without padding
pub fn base64url(data: &[u8]) -> String {
    BASE64URL_NOPAD.encode(data)
}

/// Convert bytes to lowercase hexadecimal
pub fn hex(data: &[u8]) -> String {
    HEXLOWER.encode(data)
}

/// Try parsing from base64 with or without padding
pub(crate) fn try_from_base64(input: &str) -> Option<Vec<u8>> {
    BASE64_NOPAD
        .decode(input.trim_end_matches(PADDING).as_bytes())
        .ok()
}

/// Try parsing from base64url with or without padding
pub fn try_from_base64url(input: &str) -> Option<Vec<u8>> {
    let specs = Specification {
        check_trailing_bits: false,
        padding: None,
        ..BASE64URL.specification()
    };
    let encoding = specs.encoding().ok()?;
    encoding
        .decode(input.trim_end_matches(PADDING).as_bytes())
        .ok()
}
