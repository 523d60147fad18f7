use crate::ast::{BinaryOp, Expr, HostKind, Member, MethodCall, MethodFamily, UnaryOp, Value};
use crate::transpiler::dialect::DialectRules;

use super::ansi;

pub const RULES: DialectRules = DialectRules {
    name: "oracle",
    param_prefix: ":",
    member,
    method,
    binary,
    unary,
    constructor,
    literal,
    date_diff: "TRUNC({0} - {1})",
    ..ansi::RULES
};

pub fn member(m: &Member) -> Option<&'static str> {
    match (m.family, m.name.as_str()) {
        (MethodFamily::StringOps, "Length") => Some("LENGTH({0})"),
        (MethodFamily::DateOps, "Millisecond") => Some("TO_NUMBER(TO_CHAR({0}, 'FF3'))"),
        // 'D' counts from 1 on Sunday
        (MethodFamily::DateOps, "DayOfWeek") => Some("(TO_CHAR({0}, 'D') - 1)"),
        (MethodFamily::DateOps, "DayOfYear") => Some("TO_NUMBER(TO_CHAR({0}, 'DDD'))"),
        _ => ansi::member(m),
    }
}

pub fn method(call: &MethodCall) -> Option<&'static str> {
    let args = call.args.len();
    match (call.family, call.method.as_str(), args) {
        (MethodFamily::StringOps, "StartsWith", _) => Some("({0} like ({1} || '%'))"),
        (MethodFamily::StringOps, "EndsWith", _) => Some("({0} like ('%' || {1}))"),
        (MethodFamily::StringOps, "Contains", _) => Some("({0} like ('%' || {1} || '%'))"),
        (MethodFamily::StringOps, "Trim", _) => Some("RTRIM(LTRIM({0}))"),
        (MethodFamily::StringOps, "Substring", 1) => Some("SUBSTR({0}, {1} + 1)"),
        (MethodFamily::StringOps, "Substring", _) => Some("SUBSTR({0}, {1} + 1, {2})"),
        (MethodFamily::StringOps, "IndexOf", 1) => Some("(INSTR({0}, {1}) - 1)"),
        (MethodFamily::StringOps, "IndexOf", _) => Some("(INSTR({0}, {1}, {2} + 1) - 1)"),
        (MethodFamily::StringOps, "Remove", 1) => Some("SUBSTR({0}, 1, {1})"),
        (MethodFamily::StringOps, "Remove", _) => {
            Some("(SUBSTR({0}, 1, {1}) || SUBSTR({0}, {1} + {2} + 1))")
        }
        (MethodFamily::DateOps, "AddYears", _) => Some("ADD_MONTHS({0}, {1} * 12)"),
        (MethodFamily::DateOps, "AddMonths", _) => Some("ADD_MONTHS({0}, {1})"),
        (MethodFamily::DateOps, "AddDays", _) => Some("({0} + {1})"),
        (MethodFamily::DateOps, "AddHours", _) => Some("({0} + {1} / 24)"),
        (MethodFamily::DateOps, "AddMinutes", _) => Some("({0} + {1} / 1440)"),
        (MethodFamily::DateOps, "AddSeconds", _) => Some("({0} + {1} / 86400)"),
        (MethodFamily::DateOps, "AddMilliseconds", _) => Some("({0} + {1} / 86400000)"),
        (MethodFamily::DecimalOps, "Remainder", _) => Some("MOD({0}, {1})"),
        (MethodFamily::DecimalOps | MethodFamily::MathOps, "Round", 1) => Some("ROUND({0})"),
        (MethodFamily::DecimalOps | MethodFamily::MathOps, "Ceiling", _) => Some("CEIL({0})"),
        (MethodFamily::MathOps, "Log", 2) => Some("LOG({1}, {0})"),
        (MethodFamily::MathOps, "Log10", _) => Some("LOG(10, {0})"),
        (_, "ToString", _) => Some("TO_CHAR({0})"),
        _ => ansi::method(call),
    }
}

pub fn binary(op: BinaryOp, left: &Expr, right: &Expr) -> Option<&'static str> {
    let integers = left.is_integer() && right.is_integer();
    match op {
        BinaryOp::Power => Some("POWER({0}, {1})"),
        BinaryOp::Divide if integers => Some("TRUNC({0} / {1})"),
        BinaryOp::RightShift => Some("TRUNC({0} / POWER(2, {1}))"),
        BinaryOp::Modulo => Some("MOD({0}, {1})"),
        BinaryOp::And if !left.is_boolean() => Some("BITAND({0}, {1})"),
        BinaryOp::Or if !left.is_boolean() => Some("({0} + {1} - BITAND({0}, {1}))"),
        BinaryOp::ExclusiveOr if !left.is_boolean() => Some("({0} + {1} - 2 * BITAND({0}, {1}))"),
        _ => ansi::binary(op, left, right),
    }
}

pub fn unary(op: UnaryOp, operand: &Expr) -> Option<&'static str> {
    match op {
        // no bitwise complement operator
        UnaryOp::Not if !operand.is_boolean() => None,
        _ => ansi::unary(op, operand),
    }
}

pub fn constructor(ty: &HostKind, args: usize) -> Option<&'static str> {
    match (ty, args) {
        (HostKind::DateTime, 3) => Some("TO_DATE({0} || '-' || {1} || '-' || {2}, 'yyyy-mm-dd')"),
        (HostKind::DateTime, 6) => Some(
            "TO_DATE({0} || '-' || {1} || '-' || {2} || ' ' || {3} || ':' || {4} || ':' || {5}, 'yyyy-mm-dd hh24:mi:ss')",
        ),
        _ => None,
    }
}

pub fn literal(value: &Value) -> Option<String> {
    match value {
        Value::DateTime(dt) => Some(format!(
            "TO_DATE('{}', 'yyyy-mm-dd hh24:mi:ss')",
            dt.format("%Y-%m-%d %H:%M:%S")
        )),
        Value::DateTimeOffset(dt) => Some(format!(
            "TO_TIMESTAMP_TZ('{}', 'yyyy-mm-dd hh24:mi:ss tzh:tzm')",
            dt.format("%Y-%m-%d %H:%M:%S %:z")
        )),
        Value::Time(t) => Some(format!("TO_DATE('{}', 'hh24:mi:ss')", t.format("%H:%M:%S"))),
        Value::Bytes(b) => Some(format!("HEXTORAW('{}')", ansi::hex(b))),
        _ => ansi::literal(value),
    }
}
