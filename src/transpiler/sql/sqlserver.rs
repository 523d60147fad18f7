use crate::ast::{BinaryOp, Expr, HostKind, Member, MethodCall, MethodFamily, Value};
use crate::transpiler::dialect::{ConcatStyle, DialectRules};

use super::ansi;

pub const RULES: DialectRules = DialectRules {
    name: "sqlserver",
    member,
    method,
    binary,
    operator,
    constructor,
    literal,
    date_diff: "DATEDIFF(day, {1}, {0})",
    concat: ConcatStyle::Infix(" + "),
    ..ansi::RULES
};

pub fn member(m: &Member) -> Option<&'static str> {
    match (m.family, m.name.as_str()) {
        (MethodFamily::StringOps, "Length") => Some("LEN({0})"),
        (MethodFamily::DateOps, "Year") => Some("YEAR({0})"),
        (MethodFamily::DateOps, "Month") => Some("MONTH({0})"),
        (MethodFamily::DateOps, "Day") => Some("DAY({0})"),
        (MethodFamily::DateOps, "Hour") => Some("DATEPART(hour, {0})"),
        (MethodFamily::DateOps, "Minute") => Some("DATEPART(minute, {0})"),
        (MethodFamily::DateOps, "Second") => Some("DATEPART(second, {0})"),
        (MethodFamily::DateOps, "Millisecond") => Some("DATEPART(millisecond, {0})"),
        // DATEPART(weekday) counts from 1 on Sunday
        (MethodFamily::DateOps, "DayOfWeek") => Some("(DATEPART(weekday, {0}) - 1)"),
        (MethodFamily::DateOps, "DayOfYear") => Some("DATEPART(dayofyear, {0})"),
        _ => ansi::member(m),
    }
}

pub fn method(call: &MethodCall) -> Option<&'static str> {
    let args = call.args.len();
    match (call.family, call.method.as_str(), args) {
        (MethodFamily::StringOps, "StartsWith", _) => Some("({0} like {1} + '%')"),
        (MethodFamily::StringOps, "EndsWith", _) => Some("({0} like '%' + {1})"),
        (MethodFamily::StringOps, "Contains", _) => Some("({0} like '%' + {1} + '%')"),
        (MethodFamily::StringOps, "Trim", _) => Some("RTRIM(LTRIM({0}))"),
        (MethodFamily::StringOps, "Substring", 1) => Some("SUBSTRING({0}, {1} + 1, 8000)"),
        (MethodFamily::StringOps, "Substring", _) => Some("SUBSTRING({0}, {1} + 1, {2})"),
        (MethodFamily::StringOps, "IndexOf", 1) => Some("(CHARINDEX({1}, {0}) - 1)"),
        (MethodFamily::StringOps, "IndexOf", _) => Some("(CHARINDEX({1}, {0}, {2} + 1) - 1)"),
        (MethodFamily::StringOps, "Remove", 1) => Some("STUFF({0}, {1} + 1, 8000, '')"),
        (MethodFamily::StringOps, "Remove", _) => Some("STUFF({0}, {1} + 1, {2}, '')"),
        (MethodFamily::DateOps, "AddYears", _) => Some("DATEADD(year, {1}, {0})"),
        (MethodFamily::DateOps, "AddMonths", _) => Some("DATEADD(month, {1}, {0})"),
        (MethodFamily::DateOps, "AddDays", _) => Some("DATEADD(day, {1}, {0})"),
        (MethodFamily::DateOps, "AddHours", _) => Some("DATEADD(hour, {1}, {0})"),
        (MethodFamily::DateOps, "AddMinutes", _) => Some("DATEADD(minute, {1}, {0})"),
        (MethodFamily::DateOps, "AddSeconds", _) => Some("DATEADD(second, {1}, {0})"),
        (MethodFamily::DateOps, "AddMilliseconds", _) => Some("DATEADD(millisecond, {1}, {0})"),
        (MethodFamily::DecimalOps | MethodFamily::MathOps, "Truncate", _) => {
            Some("ROUND({0}, 0, 1)")
        }
        (MethodFamily::MathOps, "Atan2", _) => Some("ATN2({0}, {1})"),
        (MethodFamily::MathOps, "Log", 1) => Some("LOG({0})"),
        (MethodFamily::MathOps, "Log", _) => Some("LOG({0}, {1})"),
        (_, "ToString", _) => Some("CONVERT(NVARCHAR, {0})"),
        _ => ansi::method(call),
    }
}

pub fn binary(op: BinaryOp, left: &Expr, right: &Expr) -> Option<&'static str> {
    match op {
        BinaryOp::Power => Some("POWER({0}, {1})"),
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
        (HostKind::DateTime, 3) => Some(
            "CONVERT(DATETIME, CONVERT(NVARCHAR, {0}) + '/' + CONVERT(NVARCHAR, {1}) + '/' + CONVERT(NVARCHAR, {2}), 111)",
        ),
        (HostKind::DateTime, 6) => Some(
            "CONVERT(DATETIME, CONVERT(NVARCHAR, {0}) + '-' + CONVERT(NVARCHAR, {1}) + '-' + CONVERT(NVARCHAR, {2}) + ' ' + CONVERT(NVARCHAR, {3}) + ':' + CONVERT(NVARCHAR, {4}) + ':' + CONVERT(NVARCHAR, {5}), 120)",
        ),
        _ => ansi::constructor(ty, args),
    }
}

pub fn literal(value: &Value) -> Option<String> {
    match value {
        Value::DateTime(dt) => Some(ansi::quote(&ansi::datetime_text(dt))),
        Value::DateTimeOffset(dt) => Some(format!(
            "'{} {}'",
            ansi::datetime_text(&dt.naive_local()),
            dt.format("%:z")
        )),
        Value::Time(t) => Some(ansi::quote(&ansi::time_text(t))),
        Value::Bytes(b) => Some(format!("0x{}", ansi::hex(b))),
        _ => ansi::literal(value),
    }
}
