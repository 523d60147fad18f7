//! Column references.

use crate::ast::{Expr, Member, MethodFamily, Node, ValueKind};

/// A column of unknown kind.
pub fn col(name: &str) -> Expr {
    typed_col(name, ValueKind::Other)
}

/// A column whose values have the given kind.
pub fn typed_col(name: &str, kind: ValueKind) -> Expr {
    Expr::new(
        Node::Member(Member {
            object: None,
            name: name.to_string(),
            family: MethodFamily::Other,
        }),
        kind,
    )
}

/// String column
pub fn text_col(name: &str) -> Expr {
    typed_col(name, ValueKind::String)
}

/// Integer column
pub fn int_col(name: &str) -> Expr {
    typed_col(name, ValueKind::Integer)
}

/// Floating-point column
pub fn real_col(name: &str) -> Expr {
    typed_col(name, ValueKind::Real)
}

/// Decimal column
pub fn decimal_col(name: &str) -> Expr {
    typed_col(name, ValueKind::Decimal)
}

/// Date/time column
pub fn date_col(name: &str) -> Expr {
    typed_col(name, ValueKind::Date)
}

/// Boolean column
pub fn bool_col(name: &str) -> Expr {
    typed_col(name, ValueKind::Boolean)
}
