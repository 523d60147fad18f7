use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ast::{BinaryOp, Expr, HostKind, Member, MethodCall, UnaryOp, Value};
use crate::error::TranslateError;
use crate::transpiler::sql::{access, ansi, mysql, oracle, sqlce, sqlite, sqlserver};
use crate::types::TypeSystem;

/// Supported SQL Dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// ANSI-style defaults
    #[default]
    Generic,
    SqlServer,
    /// SQL Server Compact
    SqlServerCe,
    Oracle,
    Sqlite,
    Access,
    MySql,
}

impl Dialect {
    pub const ALL: [Dialect; 7] = [
        Dialect::Generic,
        Dialect::SqlServer,
        Dialect::SqlServerCe,
        Dialect::Oracle,
        Dialect::Sqlite,
        Dialect::Access,
        Dialect::MySql,
    ];

    pub fn rules(&self) -> &'static DialectRules {
        match self {
            Dialect::Generic => &ansi::RULES,
            Dialect::SqlServer => &sqlserver::RULES,
            Dialect::SqlServerCe => &sqlce::RULES,
            Dialect::Oracle => &oracle::RULES,
            Dialect::Sqlite => &sqlite::RULES,
            Dialect::Access => &access::RULES,
            Dialect::MySql => &mysql::RULES,
        }
    }

    pub fn name(&self) -> &'static str {
        self.rules().name
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Dialect {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "generic" | "ansi" => Ok(Dialect::Generic),
            "sqlserver" | "mssql" | "tsql" => Ok(Dialect::SqlServer),
            "sqlserverce" | "sqlce" => Ok(Dialect::SqlServerCe),
            "oracle" => Ok(Dialect::Oracle),
            "sqlite" => Ok(Dialect::Sqlite),
            "access" => Ok(Dialect::Access),
            "mysql" => Ok(Dialect::MySql),
            other => Err(TranslateError::Config(format!("unknown dialect '{}'", other))),
        }
    }
}

/// Renders a property of a string/date value, e.g. `s.Length`.
pub type MemberHook = fn(&Member) -> Option<&'static str>;
/// Renders a method call whose family/name/arity was validated.
pub type MethodHook = fn(&MethodCall) -> Option<&'static str>;
/// Structural rewrite of a binary node; `None` falls back to operator spelling.
pub type BinaryHook = fn(BinaryOp, &Expr, &Expr) -> Option<&'static str>;
/// Infix token for a binary operator; the flag is operand boolean-ness.
pub type OperatorHook = fn(BinaryOp, bool) -> Option<&'static str>;
/// Prefix token for a unary operator.
pub type UnaryHook = fn(UnaryOp, &Expr) -> Option<&'static str>;
/// Renders a constructor by type and argument count.
pub type ConstructorHook = fn(&HostKind, usize) -> Option<&'static str>;
/// Inline literal text, `None` when the dialect has no literal form.
pub type LiteralHook = fn(&Value) -> Option<String>;

/// How string concatenation chains are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcatStyle {
    /// `(a || b || c)`
    Infix(&'static str),
    /// `CONCAT(a, b, c)`
    Function(&'static str),
}

/// How `a ?? b ?? c` renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoalesceStyle {
    /// One `COALESCE(a, b, c)` over the right spine
    Flatten,
    /// Nested two-operand template
    Nested(&'static str),
}

/// How conditionals render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionalStyle {
    /// `(case when t1 then v1 when t2 then v2 else v3 end)`
    Case,
    /// Nested three-operand template
    Nested(&'static str),
}

/// Rendering rules of one dialect.
///
/// Templates name operands `{0}`, `{1}`, ...; operand 0 is the receiver of
/// an instance member or method. Dialects derive from another dialect's
/// record with struct-update syntax and override individual slots, and
/// every hook delegates the cases it does not handle to its parent's hook.
#[derive(Debug, Clone, Copy)]
pub struct DialectRules {
    pub name: &'static str,
    /// Placeholder prefix for bound parameters
    pub param_prefix: &'static str,
    pub types: TypeSystem,
    pub member: MemberHook,
    pub method: MethodHook,
    pub binary: BinaryHook,
    pub operator: OperatorHook,
    pub unary: UnaryHook,
    pub constructor: ConstructorHook,
    pub literal: LiteralHook,
    /// Whole days between `{0}` and `{1}` (`{0} - {1}`)
    pub date_diff: &'static str,
    /// Three-way ordinal comparison of `{0}` and `{1}`
    pub compare: &'static str,
    /// Predicate `{0}` used where a value is required
    pub value_coercion: &'static str,
    /// Value `{0}` used where a predicate is required
    pub predicate_coercion: &'static str,
    pub concat: ConcatStyle,
    pub coalesce: CoalesceStyle,
    pub conditional: ConditionalStyle,
}
