/// Implementation of `z85 decode`.
///
/// Pipes the input through a [`Z85Decoder`] bound to the output and
/// closes it at end of input.
///
/// ```text
/// ┌──────────────┬───────────────────────────────────────────────────────┐
/// │ Mode         │ Non-alphabet input byte                               │
/// ├──────────────┼───────────────────────────────────────────────────────┤
/// │ default      │ decoded as digit 0, no error                          │
/// │ --strict     │ "invalid symbol 0x0A at offset 17", exit code 1       │
/// └──────────────┴───────────────────────────────────────────────────────┘
/// ```
///
/// A trailing group of a single symbol decodes to nothing in both modes.
use std::io;

use anyhow::{Context, Result};
use z85_decoder::{DecoderConfig, SymbolPolicy, Z85Decoder};

use crate::DecodeArgs;
use crate::streams;

/// Run the `z85 decode` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, the output cannot be
/// written, or `--strict` is set and the input holds a non-alphabet byte.
pub fn run(args: &DecodeArgs) -> Result<()> {
    let input_path = args.input.as_deref();
    let mut input = streams::open_input(input_path)?;
    let output = streams::open_output(args.output.as_deref())?;

    let config = DecoderConfig {
        symbols: if args.strict {
            SymbolPolicy::Strict
        } else {
            SymbolPolicy::Permissive
        },
    };

    let mut decoder = Z85Decoder::with_config(output, config);
    let copied = io::copy(&mut input, &mut decoder)
        .with_context(|| format!("failed to decode {}", streams::describe(input_path)))?;
    decoder.close().context("failed to write decoded output")?;

    tracing::debug!(symbols = copied, strict = args.strict, "decode complete");
    Ok(())
}
