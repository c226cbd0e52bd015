//! Formatter errors

use core::fmt;

use crate::args::ArgKind;

/// Errors reported by the engine
///
/// Malformed directives are never errors (they are echoed literally) and
/// full buffers truncate silently. The only failures are arguments that
/// do not line up with the format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatError {
    /// A directive needed an argument but the list was exhausted
    MissingArgument {
        /// Position the argument was expected at
        index: usize,
    },
    /// The argument at `index` cannot serve the directive
    TypeMismatch {
        index: usize,
        expected: ArgKind,
        found: ArgKind,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::MissingArgument { index } => {
                write!(f, "missing argument {}", index)
            }
            FormatError::TypeMismatch {
                index,
                expected,
                found,
            } => write!(
                f,
                "argument {} is {:?}, directive expects {:?}",
                index, found, expected
            ),
        }
    }
}
