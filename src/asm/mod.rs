//! Assembly layer: the instruction set and the append-only code builder.
//!
//! This is the boundary handed to the printer/assembler: a finished
//! [`Program`] is an ordered instruction sequence plus a table of named labels
//! recorded by position.

mod code;
mod instruction;

pub use code::{CodeBuilder, Program};
pub use instruction::Instruction;
