//! Microsoft Access (Jet/ACE SQL).
//!
//! Uses VBA function names, `IIF` instead of CASE, and -1 for true.

use crate::ast::{BinaryOp, Expr, HostKind, Member, MethodCall, MethodFamily, UnaryOp, Value};
use crate::transpiler::dialect::{
    CoalesceStyle, ConcatStyle, ConditionalStyle, DialectRules,
};
use crate::types::TypeSystem;

use super::ansi;

pub const RULES: DialectRules = DialectRules {
    name: "access",
    types: TypeSystem {
        string_default_size: 2000,
        binary_default_size: 4000,
    },
    member,
    method,
    binary,
    operator,
    unary,
    constructor,
    literal,
    date_diff: "DateDiff(\"d\", {1}, {0})",
    compare: "IIF({0} = {1}, 0, IIF({0} < {1}, -1, 1))",
    // comparisons already evaluate to -1/0
    value_coercion: "{0}",
    concat: ConcatStyle::Infix(" + "),
    coalesce: CoalesceStyle::Nested("IIF({0} is not null, {0}, {1})"),
    conditional: ConditionalStyle::Nested("IIF({0}, {1}, {2})"),
    ..ansi::RULES
};

pub fn member(m: &Member) -> Option<&'static str> {
    match (m.family, m.name.as_str()) {
        (MethodFamily::StringOps, "Length") => Some("Len({0})"),
        (MethodFamily::DateOps, "Year") => Some("Year({0})"),
        (MethodFamily::DateOps, "Month") => Some("Month({0})"),
        (MethodFamily::DateOps, "Day") => Some("Day({0})"),
        (MethodFamily::DateOps, "Hour") => Some("Hour({0})"),
        (MethodFamily::DateOps, "Minute") => Some("Minute({0})"),
        (MethodFamily::DateOps, "Second") => Some("Second({0})"),
        (MethodFamily::DateOps, "Millisecond") => None,
        (MethodFamily::DateOps, "DayOfWeek") => Some("(Weekday({0}) - 1)"),
        (MethodFamily::DateOps, "DayOfYear") => Some("DatePart(\"y\", {0})"),
        _ => ansi::member(m),
    }
}

pub fn method(call: &MethodCall) -> Option<&'static str> {
    let args = call.args.len();
    match (call.family, call.method.as_str(), args) {
        (MethodFamily::StringOps, "StartsWith", _) => Some("({0} like {1} + '%')"),
        (MethodFamily::StringOps, "EndsWith", _) => Some("({0} like '%' + {1})"),
        (MethodFamily::StringOps, "Contains", _) => Some("({0} like '%' + {1} + '%')"),
        (MethodFamily::StringOps, "ToUpper", _) => Some("UCase({0})"),
        (MethodFamily::StringOps, "ToLower", _) => Some("LCase({0})"),
        (MethodFamily::StringOps, "Trim", _) => Some("Trim({0})"),
        (MethodFamily::StringOps, "Substring", 1) => Some("Mid({0}, {1} + 1)"),
        (MethodFamily::StringOps, "Substring", _) => Some("Mid({0}, {1} + 1, {2})"),
        (MethodFamily::StringOps, "IndexOf", 1) => Some("(InStr({0}, {1}) - 1)"),
        (MethodFamily::StringOps, "IndexOf", _) => Some("(InStr({2} + 1, {0}, {1}) - 1)"),
        (MethodFamily::StringOps, "Replace", _) => Some("Replace({0}, {1}, {2})"),
        (MethodFamily::StringOps, "Remove", 1) => Some("Left({0}, {1})"),
        (MethodFamily::StringOps, "Remove", _) => Some("(Left({0}, {1}) + Mid({0}, {1} + {2} + 1))"),
        (MethodFamily::DateOps, "AddYears", _) => Some("DateAdd(\"yyyy\", {1}, {0})"),
        (MethodFamily::DateOps, "AddMonths", _) => Some("DateAdd(\"m\", {1}, {0})"),
        (MethodFamily::DateOps, "AddDays", _) => Some("DateAdd(\"d\", {1}, {0})"),
        (MethodFamily::DateOps, "AddHours", _) => Some("DateAdd(\"h\", {1}, {0})"),
        (MethodFamily::DateOps, "AddMinutes", _) => Some("DateAdd(\"n\", {1}, {0})"),
        (MethodFamily::DateOps, "AddSeconds", _) => Some("DateAdd(\"s\", {1}, {0})"),
        (MethodFamily::DateOps, "AddMilliseconds", _) => None,
        (MethodFamily::DecimalOps, "Remainder", _) => Some("({0} MOD {1})"),
        (MethodFamily::DecimalOps | MethodFamily::MathOps, "Round", 1) => Some("Round({0}, 0)"),
        (MethodFamily::DecimalOps | MethodFamily::MathOps, "Round", _) => Some("Round({0}, {1})"),
        (MethodFamily::DecimalOps | MethodFamily::MathOps, "Truncate", _) => Some("Fix({0})"),
        (MethodFamily::DecimalOps | MethodFamily::MathOps, "Ceiling", _) => Some("(-Int(-{0}))"),
        (MethodFamily::DecimalOps | MethodFamily::MathOps, "Floor", _) => Some("Int({0})"),
        (MethodFamily::MathOps, "Abs", _) => Some("Abs({0})"),
        (MethodFamily::MathOps, "Atan", _) => Some("Atn({0})"),
        (MethodFamily::MathOps, "Cos", _) => Some("Cos({0})"),
        (MethodFamily::MathOps, "Exp", _) => Some("Exp({0})"),
        (MethodFamily::MathOps, "Sin", _) => Some("Sin({0})"),
        (MethodFamily::MathOps, "Tan", _) => Some("Tan({0})"),
        (MethodFamily::MathOps, "Sqrt", _) => Some("Sqr({0})"),
        (MethodFamily::MathOps, "Sign", _) => Some("Sgn({0})"),
        (MethodFamily::MathOps, "Pow", _) => Some("({0}^{1})"),
        (MethodFamily::MathOps, "Log", 1) => Some("Log({0})"),
        (MethodFamily::MathOps, "Log", _) => Some("(Log({0}) / Log({1}))"),
        (MethodFamily::MathOps, "Log10", _) => Some("(Log({0}) / Log(10))"),
        (MethodFamily::MathOps, "Acos" | "Asin" | "Atan2", _) => None,
        (_, "ToString", _) => Some("CStr({0})"),
        _ => ansi::method(call),
    }
}

pub fn binary(op: BinaryOp, left: &Expr, right: &Expr) -> Option<&'static str> {
    match op {
        BinaryOp::Power => Some("({0}^{1})"),
        BinaryOp::LeftShift => Some("({0} * (2^{1}))"),
        BinaryOp::RightShift => Some("({0} \\ (2^{1}))"),
        BinaryOp::Divide if left.is_integer() && right.is_integer() => Some("Fix({0} / {1})"),
        BinaryOp::ExclusiveOr if !left.is_boolean() => None,
        _ => ansi::binary(op, left, right),
    }
}

pub fn operator(op: BinaryOp, boolean: bool) -> Option<&'static str> {
    match op {
        BinaryOp::And if !boolean => Some("BAND"),
        BinaryOp::Or if !boolean => Some("BOR"),
        BinaryOp::ExclusiveOr => Some("XOR"),
        BinaryOp::Modulo => Some("MOD"),
        _ => ansi::operator(op, boolean),
    }
}

pub fn unary(op: UnaryOp, operand: &Expr) -> Option<&'static str> {
    match op {
        UnaryOp::Not => Some("not "),
        _ => ansi::unary(op, operand),
    }
}

pub fn constructor(ty: &HostKind, args: usize) -> Option<&'static str> {
    match (ty, args) {
        (HostKind::DateTime, 3) => Some("DateSerial({0}, {1}, {2})"),
        (HostKind::DateTime, 6) => {
            Some("(DateSerial({0}, {1}, {2}) + TimeSerial({3}, {4}, {5}))")
        }
        _ => None,
    }
}

pub fn literal(value: &Value) -> Option<String> {
    match value {
        Value::Bool(b) => Some((if *b { "-1" } else { "0" }).to_string()),
        Value::DateTime(dt) => Some(format!("#{}#", dt.format("%Y-%m-%d %H:%M:%S"))),
        Value::DateTimeOffset(dt) => Some(format!("#{}#", dt.naive_utc().format("%Y-%m-%d %H:%M:%S"))),
        Value::Time(t) => Some(format!("#{}#", t.format("%H:%M:%S"))),
        Value::Bytes(_) => None,
        _ => ansi::literal(value),
    }
}
