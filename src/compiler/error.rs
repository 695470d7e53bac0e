//! Lowering errors.

use thiserror::Error;

use crate::String;

/// Errors that can occur while lowering an expression.
///
/// The expression tree is produced by an earlier, already-scope-checked phase,
/// so the only failure that originates here is a variable name missing from
/// the frame-offset table. There is no recovery: lowering of the unit stops at
/// the first unresolved reference and the caller is expected to discard the
/// truncated builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("unresolved variable `{name}`")]
    UnresolvedVariable { name: String },
}
