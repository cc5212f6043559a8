//! Error types for dialect operations.

/// Errors that can occur while translating to dialect-specific SQL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialectError {
    /// The identifier is empty.
    #[error("Identifier is empty")]
    EmptyIdentifier,

    /// The identifier exceeds the dialect's maximum length.
    #[error("Identifier '{identifier}' is {len} bytes long, maximum is {max}")]
    IdentifierTooLong {
        /// The rejected identifier.
        identifier: String,
        /// Its length in bytes.
        len: usize,
        /// The dialect's limit.
        max: usize,
    },

    /// The identifier contains a character the dialect cannot quote.
    #[error("Identifier '{identifier}' contains disallowed character {character:?}")]
    DisallowedCharacter {
        /// The rejected identifier.
        identifier: String,
        /// The first offending character.
        character: char,
    },

    /// A column option name was not recognized.
    #[error("Unknown column option: {0}")]
    UnknownOption(String),

    /// A statement kind name was not recognized.
    #[error("Unknown statement kind: {0}")]
    UnknownStatementKind(String),
}

/// Result type for dialect operations.
pub type Result<T> = std::result::Result<T, DialectError>;
