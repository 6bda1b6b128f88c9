use thiserror::Error;

/// An error that occurred while parsing a duration literal from the manifest.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("'{0}' is not a valid duration literal")]
    Syntax(String),
    #[error("duration unit '{0}' is not supported")]
    UnitNotSupported(String),
}
