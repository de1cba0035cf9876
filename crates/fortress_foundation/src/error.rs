//! Error types for the Fortress of Peril.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::entity::EntityKind;

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Pushes a frame onto this error's context, creating one if needed.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(frame));
        self
    }

    /// Creates a duplicate key error.
    #[must_use]
    pub fn duplicate_key(entity: EntityKind, key: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateKey {
            entity,
            key: key.into(),
        })
    }

    /// Creates a lookup miss error.
    #[must_use]
    pub fn not_found(entity: EntityKind, key: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound {
            entity,
            key: key.into(),
        })
    }

    /// Creates an invalid direction error.
    #[must_use]
    pub fn invalid_direction(token: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDirection(token.into()))
    }

    /// Creates a malformed world definition error.
    #[must_use]
    pub fn world_definition(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::WorldDefinition(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if this is a lookup miss.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(e.to_string()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A room name or coordinate was registered twice.
    #[error("duplicate {entity} key: {key}")]
    DuplicateKey {
        /// The class of entity being registered.
        entity: EntityKind,
        /// The colliding key, rendered for display.
        key: String,
    },

    /// A lookup by name, index, or coordinate missed.
    #[error("{entity} not found: {key}")]
    NotFound {
        /// The class of entity being looked up.
        entity: EntityKind,
        /// The key that missed, rendered for display.
        key: String,
    },

    /// Navigation was given a token outside the navigable direction set.
    #[error("invalid direction: {0}")]
    InvalidDirection(String),

    /// A world definition could not be read or was inconsistent.
    #[error("world definition error: {0}")]
    WorldDefinition(String),

    /// An I/O failure.
    #[error("i/o error: {0}")]
    Io(String),

    /// Internal error (line editor failures and the like).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or other origin.
    pub source: Option<String>,
    /// Operations in progress, outermost last.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
