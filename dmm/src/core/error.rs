//! Validation errors raised while building a command spec.

use thiserror::Error;

use crate::core::param::Field;

/// A range/resolution value the instrument would not accept.
///
/// Always raised at construction time; a `CommandSpec` that exists is valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidParameter {
    /// A string that is not one of `MIN`, `MAX`, `DEF` (any case).
    #[error("invalid {field} parameter: {value:?} is not one of MIN, MAX, DEF")]
    UnknownKeyword { field: Field, value: String },

    /// A number that is zero, negative, or not finite.
    #[error("invalid {field} parameter: {value} must be a finite number > 0")]
    NotPositive { field: Field, value: String },

    /// A value that is neither a number nor a string.
    #[error("unexpected type for {field} parameter: {value}")]
    UnexpectedType { field: Field, value: String },

    /// Resolution set while range is still `DEF`.
    #[error("resolution {resolution} specified without a valid (non-DEF) range")]
    ResolutionWithoutRange { resolution: String },
}

impl InvalidParameter {
    /// Field the error is reported against.
    ///
    /// The cross-field error is attributed to `resolution`, the value that
    /// cannot be honoured.
    pub fn field(&self) -> Field {
        match self {
            Self::UnknownKeyword { field, .. }
            | Self::NotPositive { field, .. }
            | Self::UnexpectedType { field, .. } => *field,
            Self::ResolutionWithoutRange { .. } => Field::Resolution,
        }
    }

    /// Offending value as the caller supplied it.
    pub fn value(&self) -> &str {
        match self {
            Self::UnknownKeyword { value, .. }
            | Self::NotPositive { value, .. }
            | Self::UnexpectedType { value, .. } => value,
            Self::ResolutionWithoutRange { resolution } => resolution,
        }
    }
}

/// Command name or prefix that does not match a supported instruction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command {0:?} (expected measure-voltage-dc or configure-current-ac)")]
pub struct UnknownCommand(pub String);
