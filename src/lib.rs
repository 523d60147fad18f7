//! # sqlpred: predicate trees to dialect SQL
//!
//! Translates a boolean predicate tree (comparisons, logical connectives,
//! string/date/numeric method calls, conditionals) into the WHERE text of a
//! SQL dialect, with literals inlined or bound as typed parameters.
//!
//! ## Quick Example
//!
//! ```rust
//! use sqlpred::prelude::*;
//!
//! let pred = text_col("companyName")
//!     .eq(lit("drore"))
//!     .and(text_col("city").eq(lit("Hangzhou")));
//!
//! let result = pred.to_sql_parameterized(Dialect::SqlServer).unwrap();
//! assert_eq!(result.sql, "((companyName = @p0) and (city = @p1))");
//! assert_eq!(result.params.len(), 2);
//! ```
//!
//! ## Dialects
//!
//! | Dialect       | Placeholder | Concatenation |
//! |---------------|-------------|---------------|
//! | `generic`     | `@p0`       | `a \|\| b`    |
//! | `sqlserver`   | `@p0`       | `a + b`       |
//! | `sqlserverce` | `@p0`       | `a + b`       |
//! | `oracle`      | `:p0`       | `a \|\| b`    |
//! | `sqlite`      | `@p0`       | `a \|\| b`    |
//! | `access`      | `@p0`       | `a + b`       |
//! | `mysql`       | `@p0`       | `CONCAT(a, b)`|

pub mod ast;
pub mod config;
pub mod error;
pub mod transpiler;
pub mod types;

pub mod prelude {
    pub use crate::ast::builders::*;
    pub use crate::ast::*;
    pub use crate::config::TranslatorConfig;
    pub use crate::error::*;
    pub use crate::transpiler::{
        ConcatStyle, Dialect, ParameterPolicy, QueryParameter, QueryResult, ToSql, Translator,
    };
    pub use crate::types::{DbType, QueryType, SqlType};
}

pub use transpiler::{translate, translate_parameterized};
