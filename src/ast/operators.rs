use serde::{Deserialize, Serialize};

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    /// Equal (==)
    Equal,
    /// Not equal (!=)
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    /// Short-circuit and (&&)
    AndAlso,
    /// Short-circuit or (||)
    OrElse,
    /// Logical and on booleans, bitwise and on integers (&)
    And,
    /// Logical or on booleans, bitwise or on integers (|)
    Or,
    /// Exclusive or (^)
    ExclusiveOr,
    /// Addition, or concatenation when both sides are strings
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
    /// Null-coalescing (??)
    Coalesce,
    LeftShift,
    RightShift,
}

impl BinaryOp {
    /// Comparisons always produce a predicate.
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOp::Equal
                | BinaryOp::NotEqual
                | BinaryOp::LessThan
                | BinaryOp::LessThanOrEqual
                | BinaryOp::GreaterThan
                | BinaryOp::GreaterThanOrEqual
        )
    }

    /// Logical and/or. The eager `&`/`|` forms are logical only on
    /// boolean operands and bitwise otherwise.
    pub fn is_logical(&self, boolean: bool) -> bool {
        match self {
            BinaryOp::AndAlso | BinaryOp::OrElse => true,
            BinaryOp::And | BinaryOp::Or => boolean,
            _ => false,
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::LessThan => "<",
            BinaryOp::LessThanOrEqual => "<=",
            BinaryOp::GreaterThan => ">",
            BinaryOp::GreaterThanOrEqual => ">=",
            BinaryOp::AndAlso => "&&",
            BinaryOp::OrElse => "||",
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::ExclusiveOr => "^",
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
            BinaryOp::Power => "**",
            BinaryOp::Coalesce => "??",
            BinaryOp::LeftShift => "<<",
            BinaryOp::RightShift => ">>",
        };
        write!(f, "{}", symbol)
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    /// Logical not on booleans, bitwise complement on integers
    Not,
    Negate,
    Plus,
    /// Type conversion inserted by the front end; renders as its operand.
    Convert,
}

/// Which family a member or method belongs to.
///
/// Assigned once by the front end from the declaring type, so translation
/// dispatches on the tag instead of rediscovering type identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MethodFamily {
    StringOps,
    DateOps,
    DecimalOps,
    MathOps,
    #[default]
    Other,
}

impl std::fmt::Display for MethodFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MethodFamily::StringOps => write!(f, "string"),
            MethodFamily::DateOps => write!(f, "DateTime"),
            MethodFamily::DecimalOps => write!(f, "decimal"),
            MethodFamily::MathOps => write!(f, "Math"),
            MethodFamily::Other => write!(f, "object"),
        }
    }
}

/// Shape of a known method: receiver or not, and how many arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub name: &'static str,
    pub instance: bool,
    pub min_args: usize,
    pub max_args: usize,
}

const fn instance(name: &'static str, min_args: usize, max_args: usize) -> Signature {
    Signature { name, instance: true, min_args, max_args }
}

const fn stat(name: &'static str, min_args: usize, max_args: usize) -> Signature {
    Signature { name, instance: false, min_args, max_args }
}

const STRING_METHODS: &[Signature] = &[
    instance("StartsWith", 1, 1),
    instance("EndsWith", 1, 1),
    instance("Contains", 1, 1),
    instance("ToUpper", 0, 0),
    instance("ToLower", 0, 0),
    instance("Trim", 0, 0),
    instance("Substring", 1, 2),
    instance("IndexOf", 1, 2),
    instance("Replace", 2, 2),
    instance("Remove", 1, 2),
    stat("IsNullOrEmpty", 1, 1),
    stat("Concat", 1, usize::MAX),
    stat("Compare", 2, 2),
];

const DATE_METHODS: &[Signature] = &[
    instance("AddYears", 1, 1),
    instance("AddMonths", 1, 1),
    instance("AddDays", 1, 1),
    instance("AddHours", 1, 1),
    instance("AddMinutes", 1, 1),
    instance("AddSeconds", 1, 1),
    instance("AddMilliseconds", 1, 1),
    stat("Subtract", 2, 2),
    stat("Compare", 2, 2),
];

const DECIMAL_METHODS: &[Signature] = &[
    stat("Add", 2, 2),
    stat("Subtract", 2, 2),
    stat("Multiply", 2, 2),
    stat("Divide", 2, 2),
    stat("Remainder", 2, 2),
    stat("Negate", 1, 1),
    stat("Round", 1, 2),
    stat("Truncate", 1, 1),
    stat("Ceiling", 1, 1),
    stat("Floor", 1, 1),
    stat("Compare", 2, 2),
];

const MATH_METHODS: &[Signature] = &[
    stat("Abs", 1, 1),
    stat("Acos", 1, 1),
    stat("Asin", 1, 1),
    stat("Atan", 1, 1),
    stat("Atan2", 2, 2),
    stat("Cos", 1, 1),
    stat("Exp", 1, 1),
    stat("Sin", 1, 1),
    stat("Tan", 1, 1),
    stat("Sqrt", 1, 1),
    stat("Sign", 1, 1),
    stat("Pow", 2, 2),
    stat("Log", 1, 2),
    stat("Log10", 1, 1),
    stat("Round", 1, 2),
    stat("Truncate", 1, 1),
    stat("Ceiling", 1, 1),
    stat("Floor", 1, 1),
];

const OTHER_METHODS: &[Signature] = &[instance("Contains", 1, 1), stat("Compare", 2, 2)];

/// Methods every family understands.
const UNIVERSAL_METHODS: &[Signature] = &[instance("ToString", 0, 0), instance("CompareTo", 1, 1)];

const STRING_MEMBERS: &[&str] = &["Length"];

const DATE_MEMBERS: &[&str] = &[
    "Year",
    "Month",
    "Day",
    "Hour",
    "Minute",
    "Second",
    "Millisecond",
    "DayOfWeek",
    "DayOfYear",
];

impl MethodFamily {
    fn methods(&self) -> &'static [Signature] {
        match self {
            MethodFamily::StringOps => STRING_METHODS,
            MethodFamily::DateOps => DATE_METHODS,
            MethodFamily::DecimalOps => DECIMAL_METHODS,
            MethodFamily::MathOps => MATH_METHODS,
            MethodFamily::Other => OTHER_METHODS,
        }
    }

    /// Look up a known method by name.
    pub fn signature(&self, name: &str) -> Option<&'static Signature> {
        self.methods()
            .iter()
            .chain(UNIVERSAL_METHODS)
            .find(|sig| sig.name == name)
    }

    /// True when `name` is a known property of this family.
    pub fn has_member(&self, name: &str) -> bool {
        match self {
            MethodFamily::StringOps => STRING_MEMBERS.contains(&name),
            MethodFamily::DateOps => DATE_MEMBERS.contains(&name),
            _ => false,
        }
    }
}
