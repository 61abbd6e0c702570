/// Errors raised by the Z85 wire layer.
///
/// The chunk transform itself is total; the only wire-level failure is
/// an input byte outside the alphabet, and only paths that opt into
/// validation report it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// A byte that is not a Z85 symbol was found where one was required.
    #[error("invalid symbol {symbol:#04X} at offset {offset}")]
    InvalidSymbol { symbol: u8, offset: usize },
}
