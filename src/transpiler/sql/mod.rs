//! Per-dialect rendering rules.

pub mod access;
pub mod ansi;
pub mod mysql;
pub mod oracle;
pub mod sqlce;
pub mod sqlite;
pub mod sqlserver;
