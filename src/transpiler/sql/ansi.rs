//! ANSI-style defaults every dialect starts from.

use chrono::{NaiveDateTime, NaiveTime, Timelike};

use crate::ast::{BinaryOp, Expr, HostKind, Member, MethodCall, MethodFamily, UnaryOp, Value};
use crate::transpiler::dialect::{CoalesceStyle, ConcatStyle, ConditionalStyle, DialectRules};
use crate::types::TypeSystem;

pub const RULES: DialectRules = DialectRules {
    name: "generic",
    param_prefix: "@",
    types: TypeSystem::UNBOUNDED,
    member,
    method,
    binary,
    operator,
    unary,
    constructor,
    literal,
    date_diff: "TIMESTAMPDIFF(DAY, {1}, {0})",
    compare: "(case when {0} = {1} then 0 when {0} < {1} then -1 else 1 end)",
    value_coercion: "(case when {0} then 1 else 0 end)",
    predicate_coercion: "({0} <> 0)",
    concat: ConcatStyle::Infix(" || "),
    coalesce: CoalesceStyle::Flatten,
    conditional: ConditionalStyle::Case,
};

pub fn member(m: &Member) -> Option<&'static str> {
    match (m.family, m.name.as_str()) {
        (MethodFamily::StringOps, "Length") => Some("CHAR_LENGTH({0})"),
        (MethodFamily::DateOps, "Year") => Some("EXTRACT(year from {0})"),
        (MethodFamily::DateOps, "Month") => Some("EXTRACT(month from {0})"),
        (MethodFamily::DateOps, "Day") => Some("EXTRACT(day from {0})"),
        (MethodFamily::DateOps, "Hour") => Some("EXTRACT(hour from {0})"),
        (MethodFamily::DateOps, "Minute") => Some("EXTRACT(minute from {0})"),
        (MethodFamily::DateOps, "Second") => Some("EXTRACT(second from {0})"),
        (MethodFamily::DateOps, "Millisecond") => {
            Some("MOD(CAST(EXTRACT(second from {0}) * 1000 AS INTEGER), 1000)")
        }
        (MethodFamily::DateOps, "DayOfWeek") => Some("EXTRACT(dow from {0})"),
        (MethodFamily::DateOps, "DayOfYear") => Some("EXTRACT(doy from {0})"),
        _ => None,
    }
}

pub fn method(call: &MethodCall) -> Option<&'static str> {
    let args = call.args.len();
    let template = match call.family {
        MethodFamily::StringOps => match (call.method.as_str(), args) {
            ("StartsWith", _) => Some("({0} like {1} || '%')"),
            ("EndsWith", _) => Some("({0} like '%' || {1})"),
            ("Contains", _) => Some("({0} like '%' || {1} || '%')"),
            ("ToUpper", _) => Some("UPPER({0})"),
            ("ToLower", _) => Some("LOWER({0})"),
            ("Trim", _) => Some("TRIM({0})"),
            ("Substring", 1) => Some("SUBSTRING({0} FROM {1} + 1)"),
            ("Substring", _) => Some("SUBSTRING({0} FROM {1} + 1 FOR {2})"),
            ("IndexOf", 1) => Some("(POSITION({1} IN {0}) - 1)"),
            ("IndexOf", _) => Some(
                "(case when POSITION({1} IN SUBSTRING({0} FROM {2} + 1)) = 0 then -1 else POSITION({1} IN SUBSTRING({0} FROM {2} + 1)) + {2} - 1 end)",
            ),
            ("Replace", _) => Some("REPLACE({0}, {1}, {2})"),
            ("Remove", 1) => Some("SUBSTRING({0} FROM 1 FOR {1})"),
            ("Remove", _) => {
                Some("(SUBSTRING({0} FROM 1 FOR {1}) || SUBSTRING({0} FROM {1} + {2} + 1))")
            }
            ("IsNullOrEmpty", _) => Some("({0} is null or {0} = '')"),
            _ => None,
        },
        MethodFamily::DateOps => match call.method.as_str() {
            "AddYears" => Some("TIMESTAMPADD(YEAR, {1}, {0})"),
            "AddMonths" => Some("TIMESTAMPADD(MONTH, {1}, {0})"),
            "AddDays" => Some("TIMESTAMPADD(DAY, {1}, {0})"),
            "AddHours" => Some("TIMESTAMPADD(HOUR, {1}, {0})"),
            "AddMinutes" => Some("TIMESTAMPADD(MINUTE, {1}, {0})"),
            "AddSeconds" => Some("TIMESTAMPADD(SECOND, {1}, {0})"),
            "AddMilliseconds" => Some("TIMESTAMPADD(MICROSECOND, {1} * 1000, {0})"),
            _ => None,
        },
        MethodFamily::DecimalOps => match call.method.as_str() {
            "Add" => Some("({0} + {1})"),
            "Subtract" => Some("({0} - {1})"),
            "Multiply" => Some("({0} * {1})"),
            "Divide" => Some("({0} / {1})"),
            "Remainder" => Some("({0} % {1})"),
            "Negate" => Some("(-{0})"),
            _ => rounding(call),
        },
        MethodFamily::MathOps => match (call.method.as_str(), args) {
            ("Abs", _) => Some("ABS({0})"),
            ("Acos", _) => Some("ACOS({0})"),
            ("Asin", _) => Some("ASIN({0})"),
            ("Atan", _) => Some("ATAN({0})"),
            ("Atan2", _) => Some("ATAN2({0}, {1})"),
            ("Cos", _) => Some("COS({0})"),
            ("Exp", _) => Some("EXP({0})"),
            ("Sin", _) => Some("SIN({0})"),
            ("Tan", _) => Some("TAN({0})"),
            ("Sqrt", _) => Some("SQRT({0})"),
            ("Sign", _) => Some("SIGN({0})"),
            ("Pow", _) => Some("POWER({0}, {1})"),
            ("Log", 1) => Some("LN({0})"),
            ("Log", _) => Some("(LN({0}) / LN({1}))"),
            ("Log10", _) => Some("LOG10({0})"),
            _ => rounding(call),
        },
        MethodFamily::Other => None,
    };
    template.or_else(|| universal(call))
}

/// Round/Truncate/Ceiling/Floor, shared by the decimal and math families.
pub fn rounding(call: &MethodCall) -> Option<&'static str> {
    match (call.method.as_str(), call.args.len()) {
        ("Round", 1) => Some("ROUND({0}, 0)"),
        ("Round", _) => Some("ROUND({0}, {1})"),
        ("Truncate", _) => Some("TRUNC({0})"),
        ("Ceiling", _) => Some("CEILING({0})"),
        ("Floor", _) => Some("FLOOR({0})"),
        _ => None,
    }
}

fn universal(call: &MethodCall) -> Option<&'static str> {
    match call.method.as_str() {
        "ToString" => Some("CAST({0} AS VARCHAR)"),
        _ => None,
    }
}

pub fn binary(op: BinaryOp, left: &Expr, _right: &Expr) -> Option<&'static str> {
    match op {
        BinaryOp::Power => Some("({0} ^ {1})"),
        BinaryOp::LeftShift => Some("({0} * POWER(2, {1}))"),
        BinaryOp::RightShift => Some("({0} / POWER(2, {1}))"),
        BinaryOp::ExclusiveOr if left.is_boolean() => Some("({0} <> {1})"),
        BinaryOp::ExclusiveOr => Some("(({0} | {1}) - ({0} & {1}))"),
        _ => None,
    }
}

pub fn operator(op: BinaryOp, boolean: bool) -> Option<&'static str> {
    match op {
        BinaryOp::Equal => Some("="),
        BinaryOp::NotEqual => Some("<>"),
        BinaryOp::LessThan => Some("<"),
        BinaryOp::LessThanOrEqual => Some("<="),
        BinaryOp::GreaterThan => Some(">"),
        BinaryOp::GreaterThanOrEqual => Some(">="),
        BinaryOp::AndAlso => Some("and"),
        BinaryOp::OrElse => Some("or"),
        BinaryOp::And if boolean => Some("and"),
        BinaryOp::And => Some("&"),
        BinaryOp::Or if boolean => Some("or"),
        BinaryOp::Or => Some("|"),
        BinaryOp::Add => Some("+"),
        BinaryOp::Subtract => Some("-"),
        BinaryOp::Multiply => Some("*"),
        BinaryOp::Divide => Some("/"),
        BinaryOp::Modulo => Some("%"),
        _ => None,
    }
}

pub fn unary(op: UnaryOp, operand: &Expr) -> Option<&'static str> {
    match op {
        UnaryOp::Not if operand.is_boolean() => Some("not "),
        UnaryOp::Not => Some("~"),
        UnaryOp::Negate => Some("-"),
        UnaryOp::Plus | UnaryOp::Convert => Some(""),
    }
}

pub fn constructor(ty: &HostKind, args: usize) -> Option<&'static str> {
    match (ty, args) {
        (HostKind::DateTime, 3) => Some("CAST({0} || '-' || {1} || '-' || {2} AS DATE)"),
        (HostKind::DateTime, 6) => Some(
            "CAST({0} || '-' || {1} || '-' || {2} || ' ' || {3} || ':' || {4} || ':' || {5} AS TIMESTAMP)",
        ),
        _ => None,
    }
}

/// `yyyy-mm-dd HH:MM:SS`, with milliseconds only when present.
pub fn datetime_text(dt: &NaiveDateTime) -> String {
    if dt.nanosecond() == 0 {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
    }
}

pub fn time_text(t: &NaiveTime) -> String {
    if t.nanosecond() == 0 {
        t.format("%H:%M:%S").to_string()
    } else {
        t.format("%H:%M:%S%.3f").to_string()
    }
}

pub fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

pub fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}

pub fn literal(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(b) => (if *b { "1" } else { "0" }).to_string(),
        Value::I8(n) => n.to_string(),
        Value::U8(n) => n.to_string(),
        Value::I16(n) => n.to_string(),
        Value::U16(n) => n.to_string(),
        Value::I32(n) => n.to_string(),
        Value::U32(n) => n.to_string(),
        Value::I64(n) => n.to_string(),
        Value::U64(n) => n.to_string(),
        Value::F32(n) if n.is_finite() => n.to_string(),
        Value::F64(n) if n.is_finite() => n.to_string(),
        Value::F32(_) | Value::F64(_) => return None,
        Value::Decimal(d) => d.to_string(),
        Value::String(s) => quote(s),
        Value::Char(c) => quote(&c.to_string()),
        Value::DateTime(dt) => format!("TIMESTAMP '{}'", datetime_text(dt)),
        Value::DateTimeOffset(dt) => format!(
            "TIMESTAMP '{} {}'",
            datetime_text(&dt.naive_local()),
            dt.format("%:z")
        ),
        Value::Time(t) => format!("TIME '{}'", time_text(t)),
        Value::Bytes(b) => format!("X'{}'", hex(b)),
        Value::Guid(u) => quote(&u.to_string()),
    };
    Some(text)
}
