//! Binder errors.

use nwrap_host::TypeTag;

use crate::SlotKind;

/// Why a bind failed.
///
/// The boolean `bind` collapses all of these into `false`; `try_bind` and
/// friends report them.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("expected {expected} argument(s), got {got}")]
    Arity { expected: usize, got: usize },

    /// The call reported more arguments than it would hand out.
    #[error("argument {position} is missing")]
    MissingArgument { position: usize },

    #[error("argument {position} should be {expected}, got {found}")]
    TypeMismatch {
        position: usize,
        expected: SlotKind,
        found: TypeTag,
    },
}

impl BindError {
    /// The argument position the error refers to, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            BindError::Arity { .. } => None,
            BindError::MissingArgument { position } | BindError::TypeMismatch { position, .. } => {
                Some(*position)
            }
        }
    }
}
