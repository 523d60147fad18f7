//! Captured constants.

use crate::ast::{Constant, Expr, HostKind, HostType, Node, Value, ValueKind};

/// A constant captured with the host type implied by its value.
pub fn lit(value: impl Into<Value>) -> Expr {
    let value = value.into();
    match value.host_kind() {
        Some(kind) => typed_lit(value, HostType::of(kind)),
        None => null(),
    }
}

/// A constant captured with an explicit host type.
pub fn typed_lit(value: impl Into<Value>, host: HostType) -> Expr {
    let kind = host.kind.value_kind();
    Expr::new(
        Node::Constant(Constant {
            value: value.into(),
            host,
        }),
        kind,
    )
}

/// An untyped NULL.
pub fn null() -> Expr {
    Expr::new(
        Node::Constant(Constant {
            value: Value::Null,
            host: HostType::nullable(HostKind::Other("object".to_string())),
        }),
        ValueKind::Other,
    )
}

/// A NULL of a nullable host type, e.g. `int?`.
pub fn null_of(kind: HostKind) -> Expr {
    typed_lit(Value::Null, HostType::nullable(kind))
}
