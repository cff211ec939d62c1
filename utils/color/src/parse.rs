use alloc::{format, string::String};

use super::HexColorError;

const OPAQUE: u32 = 0xFF00_0000;

const fn hex_digit(b: u8) -> u32 {
    match b {
        b'0'..=b'9' => (b - b'0') as u32,
        b'a'..=b'f' => (b - b'a' + 10) as u32,
        b'A'..=b'F' => (b - b'A' + 10) as u32,
        _ => panic!("invalid hex digit"),
    }
}

const fn prefix_len(bytes: &[u8]) -> usize {
    if !bytes.is_empty() && bytes[0] == b'#' {
        1
    } else {
        0
    }
}

/// Compile-time parser used for the built-in constants.
///
/// Panics on malformed input, which turns a typo in a constant into a build error.
pub const fn parse_hex_color(s: &str) -> u32 {
    let bytes = s.as_bytes();
    let offset = prefix_len(bytes);
    let digits = bytes.len() - offset;
    if digits != 6 && digits != 8 {
        panic!("expected 6 or 8 hex digits");
    }

    let mut value = 0_u32;
    let mut i = offset;
    while i < bytes.len() {
        value = (value << 4) | hex_digit(bytes[i]);
        i += 1;
    }

    if digits == 6 { value | OPAQUE } else { value }
}

const fn parse_runtime_hex_digit(b: u8, index: usize) -> Result<u32, HexColorError> {
    match b {
        b'0'..=b'9' => Ok((b - b'0') as u32),
        b'a'..=b'f' => Ok((b - b'a' + 10) as u32),
        b'A'..=b'F' => Ok((b - b'A' + 10) as u32),
        _ => Err(HexColorError::InvalidDigit(index)),
    }
}

/// Parses `#RRGGBB`, `RRGGBB`, `#AARRGGBB` or `AARRGGBB`.
///
/// Six digits yield an opaque color.
pub fn parse_hex_color_runtime(s: &str) -> Result<u32, HexColorError> {
    let bytes = s.as_bytes();
    let offset = prefix_len(bytes);
    let digits = bytes.len() - offset;
    if digits != 6 && digits != 8 {
        return Err(HexColorError::InvalidLength(digits));
    }

    let mut value = 0_u32;
    for (index, &b) in bytes.iter().enumerate().skip(offset) {
        value = (value << 4) | parse_runtime_hex_digit(b, index)?;
    }

    Ok(if digits == 6 { value | OPAQUE } else { value })
}

/// Formats a packed color as fixed-width uppercase hex without a `#`.
pub fn format_hex_color(value: u32, include_alpha: bool) -> String {
    if include_alpha {
        format!("{value:08X}")
    } else {
        format!("{:06X}", value & 0x00FF_FFFF)
    }
}
