pub mod builders;
pub mod expr;
pub mod operators;
pub mod values;

pub use self::expr::{Constant, Expr, Member, MethodCall, Node, ValueKind};
pub use self::operators::{BinaryOp, MethodFamily, Signature, UnaryOp};
pub use self::values::{HostKind, HostType, Value};
