use crate::error::WireError;

/// The 85 printable symbols of the Z85 alphabet, indexed by digit value.
///
/// | Range   | Symbols                          |
/// |---------|----------------------------------|
/// | 0..10   | `0`–`9`                          |
/// | 10..36  | `a`–`z`                          |
/// | 36..62  | `A`–`Z`                          |
/// | 62..85  | `.-:+=^!/*?&<>()[]{}@%$#`        |
pub const ALPHABET: &[u8; 85] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#";

/// Symbol used to right-pad a short trailing group before decoding it.
///
/// This is the last alphabet entry (digit 84). Padding with the largest
/// digit rounds the partial value up, so truncating the decoded group
/// recovers the original leading bytes exactly.
pub const PADDING_SYMBOL: u8 = ALPHABET[84];

/// Decode table entry for bytes that are not in the alphabet.
pub const INVALID_SYMBOL: u8 = 0xFF;

#[allow(clippy::cast_possible_truncation)]
const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID_SYMBOL; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Byte value → digit value, or [`INVALID_SYMBOL`].
///
/// Built at compile time and never mutated, so it is shared freely
/// between any number of encoders and decoders.
pub const DECODE_TABLE: [u8; 256] = build_decode_table();

/// Digit value of `symbol`, or `None` if it is not in the alphabet.
#[must_use]
pub const fn symbol_index(symbol: u8) -> Option<u8> {
    match DECODE_TABLE[symbol as usize] {
        INVALID_SYMBOL => None,
        digit => Some(digit),
    }
}

/// Permissive digit lookup used by the chunk transform.
///
/// Bytes outside the alphabet count as digit 0. Callers that need to
/// reject them run [`find_invalid_symbol`] first.
#[must_use]
pub const fn digit(symbol: u8) -> u8 {
    match symbol_index(symbol) {
        Some(digit) => digit,
        None => 0,
    }
}

/// Returns `true` if `symbol` is one of the 85 alphabet bytes.
#[must_use]
pub const fn is_symbol(symbol: u8) -> bool {
    symbol_index(symbol).is_some()
}

/// Check that every byte of `text` belongs to the alphabet.
///
/// # Errors
///
/// [`WireError::InvalidSymbol`] for the first offending byte, with its
/// offset from the start of `text`.
pub fn find_invalid_symbol(text: &[u8]) -> Result<(), WireError> {
    match text.iter().position(|&b| !is_symbol(b)) {
        Some(offset) => Err(WireError::InvalidSymbol {
            symbol: text[offset],
            offset,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_85_distinct_symbols() {
        let mut seen = [false; 256];
        for &b in ALPHABET {
            assert!(!seen[b as usize], "duplicate symbol {:?}", b as char);
            seen[b as usize] = true;
        }
        assert_eq!(seen.iter().filter(|&&s| s).count(), 85);
    }

    #[test]
    fn decode_table_inverts_alphabet() {
        for (i, &symbol) in ALPHABET.iter().enumerate() {
            assert_eq!(symbol_index(symbol), Some(u8::try_from(i).unwrap()));
        }
    }

    #[test]
    fn padding_symbol_is_last_digit() {
        assert_eq!(PADDING_SYMBOL, b'#');
        assert_eq!(symbol_index(PADDING_SYMBOL), Some(84));
    }

    #[test]
    fn non_alphabet_bytes_are_rejected() {
        for b in [b' ', b'"', b'\'', b',', b';', b'\\', b'_', b'`', b'|', b'~', b'\n', 0x00, 0x80, 0xFF] {
            assert_eq!(symbol_index(b), None, "byte {b:#04X}");
            assert_eq!(digit(b), 0);
        }
    }

    #[test]
    fn find_invalid_symbol_reports_first_offset() {
        assert!(find_invalid_symbol(b"Hello").is_ok());
        assert!(find_invalid_symbol(b"").is_ok());

        let err = find_invalid_symbol(b"Hel~o_").unwrap_err();
        assert!(matches!(
            err,
            WireError::InvalidSymbol {
                symbol: b'~',
                offset: 3
            }
        ));
    }
}
