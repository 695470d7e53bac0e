//! The expression lowering engine.

use hashbrown::HashMap;

use crate::{
    String,
    asm::{CodeBuilder, Instruction},
    compiler::CompileError,
    syntax::{BinOp, Expr, Literal, UnaryOp},
};

/// Read-only mapping from variable name to frame slot, built by the
/// scope/frame resolution phase before lowering starts. It must cover every
/// name reachable from the expressions handed to the compiler.
pub type FrameOffsets<'a> = HashMap<&'a str, u32>;

/// Lowers expression trees into instructions on a caller-owned builder.
///
/// Each successful [`lower`](ExprCompiler::lower) call appends a run of
/// instructions whose execution pushes exactly one value net: the
/// expression's result. Booleans use the {0, 1} integer encoding throughout.
/// The engine holds no state of its own beyond the two borrows, so it can be
/// reused across independent expressions of the same unit.
pub struct ExprCompiler<'c, 'a> {
    code: &'c mut CodeBuilder,
    offsets: &'c FrameOffsets<'a>,
}

impl<'c, 'a> ExprCompiler<'c, 'a> {
    pub fn new(code: &'c mut CodeBuilder, offsets: &'c FrameOffsets<'a>) -> Self {
        Self { code, offsets }
    }

    fn emit(&mut self, instruction: Instruction) {
        self.code.push_instruction(instruction);
    }

    /// Lower one expression, appending its instruction run to the builder.
    ///
    /// On an unresolved variable the failing node appends nothing, but
    /// instructions already emitted for earlier siblings remain; the caller
    /// discards the truncated builder.
    pub fn lower(&mut self, expr: &Expr<'a>) -> Result<(), CompileError> {
        tracing::trace!(node = ?expr, "lowering expression");
        let depth_before = self.code.stack_depth();

        match expr {
            Expr::Literal(Literal::Int(value)) => {
                self.emit(Instruction::Push(*value));
            }

            Expr::Literal(Literal::Bool(value)) => {
                self.emit(Instruction::Push(if *value { 1 } else { 0 }));
            }

            Expr::Ident(name) => {
                let slot = self.offsets.get(name).copied().ok_or_else(|| {
                    CompileError::UnresolvedVariable {
                        name: String::from(*name),
                    }
                })?;
                self.emit(Instruction::ReadFrame(slot));
            }

            Expr::Unary { op, expr } => match op {
                UnaryOp::Not => {
                    self.lower(expr)?;
                    self.emit(Instruction::Not);
                }
                UnaryOp::Neg => {
                    // 0 - operand, under the same push order as binary SUB.
                    self.emit(Instruction::Push(0));
                    self.lower(expr)?;
                    self.emit(Instruction::Sub);
                }
            },

            Expr::Binary { op, left, right } => match op {
                BinOp::Add => {
                    self.lower(left)?;
                    self.lower(right)?;
                    self.emit(Instruction::Add);
                }
                BinOp::Sub => {
                    self.lower(left)?;
                    self.lower(right)?;
                    self.emit(Instruction::Sub);
                }
                BinOp::Mul => {
                    self.lower(left)?;
                    self.lower(right)?;
                    self.emit(Instruction::Mul);
                }
                BinOp::Div => {
                    self.lower(left)?;
                    self.lower(right)?;
                    self.emit(Instruction::Div);
                }
                BinOp::And => {
                    // On {0,1} operands conjunction is multiplication. Both
                    // sides are always evaluated; no short-circuit.
                    self.lower(left)?;
                    self.lower(right)?;
                    self.emit(Instruction::Mul);
                }
                BinOp::Or => {
                    // a or b == not(not a and not b). Both sides are always
                    // evaluated; no short-circuit.
                    self.lower(left)?;
                    self.emit(Instruction::Not);
                    self.lower(right)?;
                    self.emit(Instruction::Not);
                    self.emit(Instruction::Mul);
                    self.emit(Instruction::Not);
                }
                BinOp::Eq => {
                    self.lower(left)?;
                    self.lower(right)?;
                    self.emit(Instruction::Eq);
                }
                BinOp::Neq => {
                    self.lower(left)?;
                    self.lower(right)?;
                    self.emit(Instruction::Eq);
                    self.emit(Instruction::Not);
                }
                BinOp::Lt => {
                    self.lower(left)?;
                    self.lower(right)?;
                    self.emit(Instruction::Lt);
                }
                BinOp::Gt => {
                    // a > b == b < a: swap the push order under the fixed
                    // pop convention.
                    self.lower(right)?;
                    self.lower(left)?;
                    self.emit(Instruction::Lt);
                }
                BinOp::Le => {
                    // a <= b == not(a > b)
                    self.lower(right)?;
                    self.lower(left)?;
                    self.emit(Instruction::Lt);
                    self.emit(Instruction::Not);
                }
                BinOp::Ge => {
                    // a >= b == not(a < b)
                    self.lower(left)?;
                    self.lower(right)?;
                    self.emit(Instruction::Lt);
                    self.emit(Instruction::Not);
                }
            },
        }

        debug_assert_eq!(
            self.code.stack_depth(),
            depth_before + 1,
            "lowering must push exactly one value net"
        );
        Ok(())
    }
}
