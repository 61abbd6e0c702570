/// Implementation of `z85 encode`.
///
/// Pipes the input through a [`Z85Encoder`] bound to the output and
/// closes it at end of input, which writes the truncated final group (if
/// any) and flushes. Matches `z85_encoder::encode` over the whole input
/// byte for byte.
use std::io;

use anyhow::{Context, Result};
use z85_encoder::Z85Encoder;

use crate::EncodeArgs;
use crate::streams;

/// Run the `z85 encode` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be
/// written.
pub fn run(args: &EncodeArgs) -> Result<()> {
    let input_path = args.input.as_deref();
    let mut input = streams::open_input(input_path)?;
    let output = streams::open_output(args.output.as_deref())?;

    let mut encoder = Z85Encoder::new(output);
    let copied = io::copy(&mut input, &mut encoder)
        .with_context(|| format!("failed to encode {}", streams::describe(input_path)))?;
    encoder.close().context("failed to write encoded output")?;

    tracing::debug!(bytes = copied, "encode complete");
    Ok(())
}
