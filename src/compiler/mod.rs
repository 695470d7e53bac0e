//! Expression lowering: turns expression trees into stack-machine code.
//!
//! ## Design
//!
//! - Exhaustive match over the closed expression variants; adding a node kind
//!   without a lowering rule is a compile error
//! - Operand evaluation order is pinned by the pop convention documented on
//!   [`crate::asm::Instruction`] and derived uniformly at every synthesis
//!   site
//! - The engine appends to a caller-owned [`crate::asm::CodeBuilder`] and
//!   holds no other mutable state

mod error;
mod lower;


pub use error::CompileError;
pub use lower::{ExprCompiler, FrameOffsets};
