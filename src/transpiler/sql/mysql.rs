use crate::ast::{BinaryOp, Expr, HostKind, Member, MethodCall, MethodFamily, Value};
use crate::transpiler::dialect::{ConcatStyle, DialectRules};

use super::ansi;

pub const RULES: DialectRules = DialectRules {
    name: "mysql",
    member,
    method,
    binary,
    operator,
    constructor,
    literal,
    date_diff: "DATEDIFF({0}, {1})",
    concat: ConcatStyle::Function("CONCAT"),
    ..ansi::RULES
};

pub fn member(m: &Member) -> Option<&'static str> {
    match (m.family, m.name.as_str()) {
        (MethodFamily::DateOps, "Year") => Some("YEAR({0})"),
        (MethodFamily::DateOps, "Month") => Some("MONTH({0})"),
        (MethodFamily::DateOps, "Day") => Some("DAY({0})"),
        (MethodFamily::DateOps, "Hour") => Some("HOUR({0})"),
        (MethodFamily::DateOps, "Minute") => Some("MINUTE({0})"),
        (MethodFamily::DateOps, "Second") => Some("SECOND({0})"),
        (MethodFamily::DateOps, "Millisecond") => Some("FLOOR(MICROSECOND({0}) / 1000)"),
        (MethodFamily::DateOps, "DayOfWeek") => Some("(DAYOFWEEK({0}) - 1)"),
        (MethodFamily::DateOps, "DayOfYear") => Some("DAYOFYEAR({0})"),
        _ => ansi::member(m),
    }
}

pub fn method(call: &MethodCall) -> Option<&'static str> {
    let args = call.args.len();
    match (call.family, call.method.as_str(), args) {
        (MethodFamily::StringOps, "StartsWith", _) => Some("({0} like CONCAT({1}, '%'))"),
        (MethodFamily::StringOps, "EndsWith", _) => Some("({0} like CONCAT('%', {1}))"),
        (MethodFamily::StringOps, "Contains", _) => Some("({0} like CONCAT('%', {1}, '%'))"),
        (MethodFamily::StringOps, "Substring", 1) => Some("SUBSTRING({0}, {1} + 1)"),
        (MethodFamily::StringOps, "Substring", _) => Some("SUBSTRING({0}, {1} + 1, {2})"),
        (MethodFamily::StringOps, "IndexOf", 1) => Some("(LOCATE({1}, {0}) - 1)"),
        (MethodFamily::StringOps, "IndexOf", _) => Some("(LOCATE({1}, {0}, {2} + 1) - 1)"),
        (MethodFamily::StringOps, "Remove", 1) => Some("LEFT({0}, {1})"),
        (MethodFamily::StringOps, "Remove", _) => Some("INSERT({0}, {1} + 1, {2}, '')"),
        (MethodFamily::DateOps, "AddYears", _) => Some("DATE_ADD({0}, INTERVAL {1} YEAR)"),
        (MethodFamily::DateOps, "AddMonths", _) => Some("DATE_ADD({0}, INTERVAL {1} MONTH)"),
        (MethodFamily::DateOps, "AddDays", _) => Some("DATE_ADD({0}, INTERVAL {1} DAY)"),
        (MethodFamily::DateOps, "AddHours", _) => Some("DATE_ADD({0}, INTERVAL {1} HOUR)"),
        (MethodFamily::DateOps, "AddMinutes", _) => Some("DATE_ADD({0}, INTERVAL {1} MINUTE)"),
        (MethodFamily::DateOps, "AddSeconds", _) => Some("DATE_ADD({0}, INTERVAL {1} SECOND)"),
        (MethodFamily::DateOps, "AddMilliseconds", _) => {
            Some("DATE_ADD({0}, INTERVAL {1} * 1000 MICROSECOND)")
        }
        (MethodFamily::DecimalOps | MethodFamily::MathOps, "Truncate", _) => {
            Some("TRUNCATE({0}, 0)")
        }
        (MethodFamily::MathOps, "Log", 2) => Some("LOG({1}, {0})"),
        (_, "ToString", _) => Some("CAST({0} AS CHAR)"),
        _ => ansi::method(call),
    }
}

pub fn binary(op: BinaryOp, left: &Expr, right: &Expr) -> Option<&'static str> {
    match op {
        BinaryOp::Power => Some("POWER({0}, {1})"),
        // DIV truncates toward zero like host integer division
        BinaryOp::Divide if left.is_integer() && right.is_integer() => Some("({0} div {1})"),
        BinaryOp::ExclusiveOr if !left.is_boolean() => None,
        _ => ansi::binary(op, left, right),
    }
}

pub fn operator(op: BinaryOp, boolean: bool) -> Option<&'static str> {
    match op {
        BinaryOp::ExclusiveOr if !boolean => Some("^"),
        _ => ansi::operator(op, boolean),
    }
}

pub fn constructor(ty: &HostKind, args: usize) -> Option<&'static str> {
    match (ty, args) {
        (HostKind::DateTime, 3) => {
            Some("STR_TO_DATE(CONCAT({0}, '-', {1}, '-', {2}), '%Y-%m-%d')")
        }
        (HostKind::DateTime, 6) => Some(
            "STR_TO_DATE(CONCAT({0}, '-', {1}, '-', {2}, ' ', {3}, ':', {4}, ':', {5}), '%Y-%m-%d %H:%i:%s')",
        ),
        _ => None,
    }
}

pub fn literal(value: &Value) -> Option<String> {
    match value {
        Value::DateTime(dt) => Some(ansi::quote(&ansi::datetime_text(dt))),
        Value::DateTimeOffset(dt) => Some(ansi::quote(&ansi::datetime_text(&dt.naive_utc()))),
        Value::Time(t) => Some(ansi::quote(&ansi::time_text(t))),
        Value::String(s) => Some(format!("'{}'", s.replace('\\', "\\\\").replace('\'', "''"))),
        _ => ansi::literal(value),
    }
}
