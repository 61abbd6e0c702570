/// Configuration for Z85 decoding, bulk or streaming.
///
/// ```text
/// ┌──────────┬──────────────────────────────────────────────────────┐
/// │ Field    │ Purpose                                              │
/// ├──────────┼──────────────────────────────────────────────────────┤
/// │ symbols  │ What to do with bytes outside the 85-symbol alphabet │
/// └──────────┴──────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    pub symbols: SymbolPolicy,
}

impl DecoderConfig {
    /// Configuration that rejects any non-alphabet byte.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            symbols: SymbolPolicy::Strict,
        }
    }
}

/// Handling of input bytes that are not Z85 symbols.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SymbolPolicy {
    /// Treat unknown bytes as digit 0 and keep going. Never fails, but
    /// the output for such input is meaningless. This is the
    /// historical behavior and the default.
    #[default]
    Permissive,

    /// Fail with [`WireError::InvalidSymbol`](z85_wire::WireError::InvalidSymbol)
    /// at the first unknown byte.
    Strict,
}
