use serde::{Deserialize, Serialize};

use crate::ast::{BinaryOp, HostKind, HostType, MethodFamily, UnaryOp, Value};

/// Static result kind of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ValueKind {
    Boolean,
    String,
    Integer,
    Real,
    Decimal,
    Date,
    #[default]
    Other,
}

impl ValueKind {
    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueKind::Integer | ValueKind::Real | ValueKind::Decimal)
    }
}

/// A predicate tree node together with its result kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    pub node: Node,
    pub kind: ValueKind,
}

/// The node kinds a front end may produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A captured literal
    Constant(Constant),
    /// A column, or a property of a string/date value
    Member(Member),
    Unary { op: UnaryOp, operand: Box<Expr> },
    Binary { op: BinaryOp, left: Box<Expr>, right: Box<Expr> },
    MethodCall(MethodCall),
    /// `test ? if_true : if_false`
    Conditional {
        test: Box<Expr>,
        if_true: Box<Expr>,
        if_false: Box<Expr>,
    },
    /// Construction of a host value, e.g. a date from its parts
    Constructor { ty: HostKind, args: Vec<Expr> },
    ArrayLiteral(Vec<Expr>),
}

/// A literal and the host type it was captured as.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    pub value: Value,
    pub host: HostType,
}

/// Member access. Without an object this names a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(default)]
    pub object: Option<Box<Expr>>,
    pub name: String,
    #[serde(default)]
    pub family: MethodFamily,
}

/// Method invocation. Static methods have no object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub family: MethodFamily,
    pub method: String,
    #[serde(default)]
    pub object: Option<Box<Expr>>,
    #[serde(default)]
    pub args: Vec<Expr>,
}

impl MethodCall {
    /// Receiver (if any) followed by the arguments, the operand order
    /// rendering templates use.
    pub fn operands(&self) -> Vec<&Expr> {
        self.object
            .as_deref()
            .into_iter()
            .chain(self.args.iter())
            .collect()
    }
}

impl Expr {
    pub fn new(node: Node, kind: ValueKind) -> Self {
        Self { node, kind }
    }

    /// A null constant always satisfies `IS NULL` instead of binding.
    pub fn is_null_constant(&self) -> bool {
        matches!(&self.node, Node::Constant(c) if c.value.is_null())
    }

    pub fn is_boolean(&self) -> bool {
        self.kind == ValueKind::Boolean
    }

    pub fn is_integer(&self) -> bool {
        self.kind == ValueKind::Integer
    }

    pub fn is_string(&self) -> bool {
        self.kind == ValueKind::String
    }
}

fn write_list(f: &mut std::fmt::Formatter<'_>, items: &[Expr]) -> std::fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.node {
            Node::Constant(c) => write!(f, "{}", c.value),
            Node::Member(m) => match &m.object {
                Some(object) => write!(f, "{}.{}", object, m.name),
                None => write!(f, "{}", m.name),
            },
            Node::Unary { op, operand } => match op {
                UnaryOp::Not => write!(f, "!{}", operand),
                UnaryOp::Negate => write!(f, "-{}", operand),
                UnaryOp::Plus => write!(f, "+{}", operand),
                UnaryOp::Convert => write!(f, "{}", operand),
            },
            Node::Binary { op, left, right } => write!(f, "({} {} {})", left, op, right),
            Node::MethodCall(call) => {
                match &call.object {
                    Some(object) => write!(f, "{}.{}(", object, call.method)?,
                    None => write!(f, "{}.{}(", call.family, call.method)?,
                }
                write_list(f, &call.args)?;
                write!(f, ")")
            }
            Node::Conditional { test, if_true, if_false } => {
                write!(f, "({} ? {} : {})", test, if_true, if_false)
            }
            Node::Constructor { ty, args } => {
                write!(f, "new {}(", ty)?;
                write_list(f, args)?;
                write!(f, ")")
            }
            Node::ArrayLiteral(items) => {
                write!(f, "[")?;
                write_list(f, items)?;
                write!(f, "]")
            }
        }
    }
}
