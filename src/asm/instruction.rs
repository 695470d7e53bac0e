//! Instruction set of the target stack machine.

use core::fmt;

/// A single VM instruction.
///
/// # Stack Discipline
///
/// The machine evaluates on a single operand stack with no registers. Stack
/// effect notation: `[..., a, b] -> [..., result]` where `b` is the top of
/// stack.
///
/// # Pop Convention
///
/// Every two-operand instruction pops the **right** operand first (it is on
/// top), then the left, and pushes `left OP right`. Operands are therefore
/// always pushed left-then-right. The lowering engine relies on this single
/// convention for every non-commutative synthesis site (SUB, DIV, LT and the
/// comparisons and negation derived from them); it must never be re-derived
/// per call site.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Push a literal integer. Booleans use the {0, 1} encoding; there is no
    /// separate boolean push.
    /// Stack: `[...] -> [..., value]`
    Push(i64),

    /// Stack: `[..., a, b] -> [..., a + b]`
    Add,

    /// Stack: `[..., a, b] -> [..., a - b]`
    Sub,

    /// Stack: `[..., a, b] -> [..., a * b]`
    Mul,

    /// Stack: `[..., a, b] -> [..., a / b]` (semantics of division by zero
    /// are the machine's, not this crate's)
    Div,

    /// Equality compare, pushing 1 or 0.
    /// Stack: `[..., a, b] -> [..., a == b]`
    Eq,

    /// Less-than compare, pushing 1 or 0.
    /// Stack: `[..., a, b] -> [..., a < b]`
    Lt,

    /// Logical negate on the {0, 1} encoding. Negating any other value is
    /// undefined at this level.
    /// Stack: `[..., a] -> [..., !a]`
    Not,

    /// Read a frame slot and push its value.
    /// Stack: `[...] -> [..., frame[slot]]`
    ReadFrame(u32),
}

impl Instruction {
    /// Number of values this instruction pops before pushing its result.
    ///
    /// Every instruction in this set pushes exactly one value, so the net
    /// stack effect is `1 - pops()`. The builder uses this to track exact
    /// stack depth as instructions are appended, which is how the
    /// per-expression stack-balance invariant is checked and how
    /// `max_stack_size` is computed.
    pub fn pops(&self) -> usize {
        match self {
            Instruction::Push(_) | Instruction::ReadFrame(_) => 0,
            Instruction::Not => 1,
            Instruction::Add
            | Instruction::Sub
            | Instruction::Mul
            | Instruction::Div
            | Instruction::Eq
            | Instruction::Lt => 2,
        }
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Push(value) => write!(f, "PUSH {value}"),
            Instruction::Add => write!(f, "ADD"),
            Instruction::Sub => write!(f, "SUB"),
            Instruction::Mul => write!(f, "MUL"),
            Instruction::Div => write!(f, "DIV"),
            Instruction::Eq => write!(f, "EQ"),
            Instruction::Lt => write!(f, "LT"),
            Instruction::Not => write!(f, "NOT"),
            Instruction::ReadFrame(slot) => write!(f, "RFR {slot}"),
        }
    }
}
