//! Result type alias for userdeck operations.

use super::deck_error::DeckError;

/// Type alias for Results using [`DeckError`].
///
/// ```ignore
/// use userdeck::error::DeckResult;
///
/// fn load() -> DeckResult<RecordSet> {
///     Ok(source.fetch().await?)
/// }
/// ```
pub type DeckResult<T> = Result<T, DeckError>;
