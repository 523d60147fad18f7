//! SQL Server Compact: the T-SQL rules except date-part extraction, which
//! only supports the DATEPART form.

use crate::ast::{Member, MethodFamily};
use crate::transpiler::dialect::DialectRules;

use super::sqlserver;

pub const RULES: DialectRules = DialectRules {
    name: "sqlserverce",
    member,
    ..sqlserver::RULES
};

pub fn member(m: &Member) -> Option<&'static str> {
    match (m.family, m.name.as_str()) {
        (MethodFamily::DateOps, "Year") => Some("DATEPART(year, {0})"),
        (MethodFamily::DateOps, "Month") => Some("DATEPART(month, {0})"),
        (MethodFamily::DateOps, "Day") => Some("DATEPART(day, {0})"),
        _ => sqlserver::member(m),
    }
}
