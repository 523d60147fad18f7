//! Operator methods on `Expr`.

use crate::ast::{BinaryOp, Expr, Node, UnaryOp, ValueKind};

/// Result kind of a binary node, following host promotion rules.
fn binary_kind(op: BinaryOp, left: &Expr, right: &Expr) -> ValueKind {
    if op.is_comparison() || matches!(op, BinaryOp::AndAlso | BinaryOp::OrElse) {
        return ValueKind::Boolean;
    }
    match op {
        BinaryOp::And | BinaryOp::Or | BinaryOp::ExclusiveOr => left.kind,
        BinaryOp::Add if left.is_string() || right.is_string() => ValueKind::String,
        // date minus date is a whole number of days
        BinaryOp::Subtract if left.kind == ValueKind::Date && right.kind == ValueKind::Date => {
            ValueKind::Integer
        }
        BinaryOp::Power => ValueKind::Real,
        BinaryOp::LeftShift | BinaryOp::RightShift => left.kind,
        BinaryOp::Coalesce if left.kind == ValueKind::Other => right.kind,
        BinaryOp::Coalesce => left.kind,
        _ => match (left.kind, right.kind) {
            (ValueKind::Real, _) | (_, ValueKind::Real) => ValueKind::Real,
            (ValueKind::Decimal, _) | (_, ValueKind::Decimal) => ValueKind::Decimal,
            (ValueKind::Other, kind) => kind,
            (kind, _) => kind,
        },
    }
}

#[allow(clippy::should_implement_trait)]
impl Expr {
    /// Build a binary node.
    pub fn binary(self, op: BinaryOp, right: Expr) -> Expr {
        let kind = binary_kind(op, &self, &right);
        Expr::new(
            Node::Binary {
                op,
                left: Box::new(self),
                right: Box::new(right),
            },
            kind,
        )
    }

    /// Build a unary node.
    pub fn unary(self, op: UnaryOp) -> Expr {
        let kind = self.kind;
        Expr::new(
            Node::Unary {
                op,
                operand: Box::new(self),
            },
            kind,
        )
    }

    pub fn eq(self, right: Expr) -> Expr {
        self.binary(BinaryOp::Equal, right)
    }

    pub fn ne(self, right: Expr) -> Expr {
        self.binary(BinaryOp::NotEqual, right)
    }

    pub fn lt(self, right: Expr) -> Expr {
        self.binary(BinaryOp::LessThan, right)
    }

    pub fn lte(self, right: Expr) -> Expr {
        self.binary(BinaryOp::LessThanOrEqual, right)
    }

    pub fn gt(self, right: Expr) -> Expr {
        self.binary(BinaryOp::GreaterThan, right)
    }

    pub fn gte(self, right: Expr) -> Expr {
        self.binary(BinaryOp::GreaterThanOrEqual, right)
    }

    /// Short-circuit and (`&&`)
    pub fn and(self, right: Expr) -> Expr {
        self.binary(BinaryOp::AndAlso, right)
    }

    /// Short-circuit or (`||`)
    pub fn or(self, right: Expr) -> Expr {
        self.binary(BinaryOp::OrElse, right)
    }

    /// `&`: logical on booleans, bitwise on integers
    pub fn bit_and(self, right: Expr) -> Expr {
        self.binary(BinaryOp::And, right)
    }

    /// `|`: logical on booleans, bitwise on integers
    pub fn bit_or(self, right: Expr) -> Expr {
        self.binary(BinaryOp::Or, right)
    }

    pub fn xor(self, right: Expr) -> Expr {
        self.binary(BinaryOp::ExclusiveOr, right)
    }

    pub fn add(self, right: Expr) -> Expr {
        self.binary(BinaryOp::Add, right)
    }

    pub fn sub(self, right: Expr) -> Expr {
        self.binary(BinaryOp::Subtract, right)
    }

    pub fn mul(self, right: Expr) -> Expr {
        self.binary(BinaryOp::Multiply, right)
    }

    pub fn div(self, right: Expr) -> Expr {
        self.binary(BinaryOp::Divide, right)
    }

    pub fn rem(self, right: Expr) -> Expr {
        self.binary(BinaryOp::Modulo, right)
    }

    pub fn pow(self, right: Expr) -> Expr {
        self.binary(BinaryOp::Power, right)
    }

    pub fn shl(self, right: Expr) -> Expr {
        self.binary(BinaryOp::LeftShift, right)
    }

    pub fn shr(self, right: Expr) -> Expr {
        self.binary(BinaryOp::RightShift, right)
    }

    /// Null-coalescing (`??`)
    pub fn coalesce(self, right: Expr) -> Expr {
        self.binary(BinaryOp::Coalesce, right)
    }

    pub fn not(self) -> Expr {
        self.unary(UnaryOp::Not)
    }

    pub fn neg(self) -> Expr {
        self.unary(UnaryOp::Negate)
    }

    /// Front-end inserted conversion to another kind.
    pub fn convert(self, kind: ValueKind) -> Expr {
        Expr::new(
            Node::Unary {
                op: UnaryOp::Convert,
                operand: Box::new(self),
            },
            kind,
        )
    }
}
