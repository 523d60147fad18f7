use crate::ast::{BinaryOp, Expr, HostKind, Member, MethodCall, MethodFamily, Value};
use crate::transpiler::dialect::DialectRules;

use super::ansi;

pub const RULES: DialectRules = DialectRules {
    name: "sqlite",
    member,
    method,
    binary,
    constructor,
    literal,
    date_diff: "CAST(JULIANDAY({0}) - JULIANDAY({1}) AS INTEGER)",
    ..ansi::RULES
};

pub fn member(m: &Member) -> Option<&'static str> {
    match (m.family, m.name.as_str()) {
        (MethodFamily::StringOps, "Length") => Some("LENGTH({0})"),
        (MethodFamily::DateOps, "Year") => Some("STRFTIME('%Y', {0})"),
        (MethodFamily::DateOps, "Month") => Some("STRFTIME('%m', {0})"),
        (MethodFamily::DateOps, "Day") => Some("STRFTIME('%d', {0})"),
        (MethodFamily::DateOps, "Hour") => Some("STRFTIME('%H', {0})"),
        (MethodFamily::DateOps, "Minute") => Some("STRFTIME('%M', {0})"),
        (MethodFamily::DateOps, "Second") => Some("STRFTIME('%S', {0})"),
        (MethodFamily::DateOps, "Millisecond") => {
            Some("(CAST(STRFTIME('%f', {0}) * 1000 AS INTEGER) % 1000)")
        }
        (MethodFamily::DateOps, "DayOfWeek") => Some("STRFTIME('%w', {0})"),
        (MethodFamily::DateOps, "DayOfYear") => Some("STRFTIME('%j', {0})"),
        _ => ansi::member(m),
    }
}

pub fn method(call: &MethodCall) -> Option<&'static str> {
    let args = call.args.len();
    match (call.family, call.method.as_str(), args) {
        (MethodFamily::StringOps, "StartsWith", _) => Some("LIKE({1} || '%', {0})"),
        (MethodFamily::StringOps, "EndsWith", _) => Some("LIKE('%' || {1}, {0})"),
        (MethodFamily::StringOps, "Contains", _) => Some("LIKE('%' || {1} || '%', {0})"),
        (MethodFamily::StringOps, "Substring", 1) => Some("SUBSTR({0}, {1} + 1)"),
        (MethodFamily::StringOps, "Substring", _) => Some("SUBSTR({0}, {1} + 1, {2})"),
        (MethodFamily::StringOps, "IndexOf", 1) => Some("(INSTR({0}, {1}) - 1)"),
        // INSTR takes no start position
        (MethodFamily::StringOps, "IndexOf", _) => None,
        (MethodFamily::StringOps, "Remove", 1) => Some("SUBSTR({0}, 1, {1})"),
        (MethodFamily::StringOps, "Remove", _) => {
            Some("(SUBSTR({0}, 1, {1}) || SUBSTR({0}, {1} + {2} + 1))")
        }
        (MethodFamily::DateOps, "AddYears", _) => Some("DATETIME({0}, {1} || ' years')"),
        (MethodFamily::DateOps, "AddMonths", _) => Some("DATETIME({0}, {1} || ' months')"),
        (MethodFamily::DateOps, "AddDays", _) => Some("DATETIME({0}, {1} || ' days')"),
        (MethodFamily::DateOps, "AddHours", _) => Some("DATETIME({0}, {1} || ' hours')"),
        (MethodFamily::DateOps, "AddMinutes", _) => Some("DATETIME({0}, {1} || ' minutes')"),
        (MethodFamily::DateOps, "AddSeconds", _) => Some("DATETIME({0}, {1} || ' seconds')"),
        (MethodFamily::DateOps, "AddMilliseconds", _) => {
            Some("DATETIME({0}, ({1} / 1000.0) || ' seconds')")
        }
        (MethodFamily::DecimalOps | MethodFamily::MathOps, "Truncate", _) => {
            Some("CAST({0} AS INTEGER)")
        }
        (MethodFamily::DecimalOps | MethodFamily::MathOps, "Ceiling", _) => {
            Some("(CAST({0} AS INTEGER) + ({0} > CAST({0} AS INTEGER)))")
        }
        (MethodFamily::DecimalOps | MethodFamily::MathOps, "Floor", _) => {
            Some("(CAST({0} AS INTEGER) - ({0} < CAST({0} AS INTEGER)))")
        }
        (_, "ToString", _) => Some("CAST({0} AS TEXT)"),
        _ => ansi::method(call),
    }
}

pub fn binary(op: BinaryOp, left: &Expr, right: &Expr) -> Option<&'static str> {
    match op {
        BinaryOp::Power => Some("POWER({0}, {1})"),
        _ => ansi::binary(op, left, right),
    }
}

pub fn constructor(ty: &HostKind, args: usize) -> Option<&'static str> {
    match (ty, args) {
        (HostKind::DateTime, 3) => Some("DATE(printf('%04d-%02d-%02d', {0}, {1}, {2}))"),
        (HostKind::DateTime, 6) => Some(
            "DATETIME(printf('%04d-%02d-%02d %02d:%02d:%02d', {0}, {1}, {2}, {3}, {4}, {5}))",
        ),
        _ => None,
    }
}

pub fn literal(value: &Value) -> Option<String> {
    match value {
        Value::DateTime(dt) => Some(ansi::quote(&ansi::datetime_text(dt))),
        Value::DateTimeOffset(dt) => Some(ansi::quote(&dt.to_rfc3339())),
        Value::Time(t) => Some(ansi::quote(&ansi::time_text(t))),
        _ => ansi::literal(value),
    }
}
