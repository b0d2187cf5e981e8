use thiserror::Error;

/// Ways a hex color string can fail to parse.
///
/// The validation pattern tolerates a missing `#` prefix but the parser does
/// not, so that case gets its own variant instead of folding into
/// [`ParseHexError::InvalidFormat`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseHexError {
    #[error("invalid hex color `{0}`")]
    InvalidFormat(String),

    #[error("hex color `{0}` is missing its `#` prefix")]
    MissingPrefix(String),
}
