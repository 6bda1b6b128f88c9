use thiserror::Error;

/// Errors surfaced by the registry and runner operations. None of these are
/// fatal to the process; callers log them and continue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("unknown test section '{0}'")]
    UnknownSection(String),
    #[error("test section '{0}' is already registered")]
    DuplicateSection(String),
}
