#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{format, string::String, string::ToString, vec, vec::Vec};

pub mod asm;
pub mod compiler;
pub mod syntax;

pub use asm::{CodeBuilder, Instruction, Program};
pub use compiler::{CompileError, ExprCompiler, FrameOffsets};
pub use syntax::{BinOp, Expr, Literal, UnaryOp};
