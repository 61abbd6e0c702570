/// Implementation of `z85 validate`.
///
/// Reads the whole input and checks it is text this codec would produce.
/// Prints `✓` lines on success and a `✗` diagnostic on failure; the main
/// dispatcher turns the failure into exit code 1.
///
/// # Success output
///
/// ```text
/// ✓ Symbols: all 17 bytes are in the Z85 alphabet
/// ✓ Length: 17 symbols decode to 13 bytes
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: invalid symbol 0x0A at offset 17
/// ✗ Error: length 6 leaves a single trailing symbol (decodes to nothing)
/// ```
use std::io::Read;

use anyhow::{Context, Result, anyhow};
use z85_wire::chunk::{ENCODED_CHUNK_LEN, decoded_len};
use z85_wire::find_invalid_symbol;

use crate::ValidateArgs;
use crate::streams;

/// Run the `z85 validate` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not valid Z85.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let input_path = args.input.as_deref();
    let mut text = Vec::new();
    streams::open_input(input_path)?
        .read_to_end(&mut text)
        .with_context(|| format!("cannot read {}", streams::describe(input_path)))?;

    match check(&text) {
        Ok(()) => {
            println!(
                "✓ Symbols: all {} bytes are in the Z85 alphabet",
                text.len()
            );
            println!(
                "✓ Length: {} symbols decode to {} bytes",
                text.len(),
                decoded_len(text.len())
            );
            Ok(())
        }
        Err(diagnostic) => {
            println!("✗ Error: {diagnostic}");
            Err(anyhow!("validation failed"))
        }
    }
}

/// Symbol check first, then the length rule: no encoder output ends in
/// a group of one symbol.
fn check(text: &[u8]) -> Result<(), String> {
    find_invalid_symbol(text).map_err(|e| e.to_string())?;
    if text.len() % ENCODED_CHUNK_LEN == 1 {
        return Err(format!(
            "length {} leaves a single trailing symbol (decodes to nothing)",
            text.len()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_encoder_output() {
        assert!(check(b"").is_ok());
        assert!(check(b"li").is_ok());
        assert!(check(b"nm=QNzY<mxA+]nfaP").is_ok());
    }

    #[test]
    fn rejects_invalid_symbol() {
        assert_eq!(
            check(b"Hello\n").unwrap_err(),
            "invalid symbol 0x0A at offset 5"
        );
    }

    #[test]
    fn rejects_single_trailing_symbol() {
        assert!(check(b"Hello0").unwrap_err().contains("single trailing symbol"));
    }
}
