//! Expression trees consumed by the lowering engine.
//!
//! Trees are immutable and arena-allocated: nodes reference their children as
//! `&'a Expr<'a>` inside a caller-owned [`bumpalo::Bump`]. The compiler only
//! ever reads them.

use bumpalo::Bump;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'a> {
    Binary {
        op: BinOp,
        left: &'a Expr<'a>,
        right: &'a Expr<'a>,
    },
    Unary {
        op: UnaryOp,
        expr: &'a Expr<'a>,
    },
    Literal(Literal),
    Ident(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    Int(i64),
    Bool(bool),
}

/// Binary operator tags.
///
/// A single closed set: arithmetic, logical, and comparison operators all
/// lower through the same emission table, so there is no reason to split them
/// the way a type checker would.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    And,
    Or,
    Eq,
    Neq,
    Lt,
    Gt,
    Le,
    Ge,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Not,
}

impl<'a> Expr<'a> {
    // Arena constructors. The parser builds trees the same way; tests use
    // these directly.

    pub fn int(arena: &'a Bump, value: i64) -> &'a Expr<'a> {
        arena.alloc(Expr::Literal(Literal::Int(value)))
    }

    pub fn bool(arena: &'a Bump, value: bool) -> &'a Expr<'a> {
        arena.alloc(Expr::Literal(Literal::Bool(value)))
    }

    pub fn ident(arena: &'a Bump, name: &'a str) -> &'a Expr<'a> {
        arena.alloc(Expr::Ident(name))
    }

    pub fn binary(
        arena: &'a Bump,
        op: BinOp,
        left: &'a Expr<'a>,
        right: &'a Expr<'a>,
    ) -> &'a Expr<'a> {
        arena.alloc(Expr::Binary { op, left, right })
    }

    pub fn unary(arena: &'a Bump, op: UnaryOp, expr: &'a Expr<'a>) -> &'a Expr<'a> {
        arena.alloc(Expr::Unary { op, expr })
    }
}
