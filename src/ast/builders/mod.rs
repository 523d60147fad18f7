//! Ergonomic builder functions for predicate trees.
//!
//! Builders compute each node's result kind the way a front end lowering
//! native predicate syntax would, so trees built here are ready to translate.
//!
//! # Modules
//!
//! - `columns` - Column references of a known kind
//! - `literals` - Captured constants (`lit`, `null`, typed nulls)
//! - `ext` - Operator methods on `Expr` (`eq`, `and`, `add`, ...)
//! - `functions` - Method calls, members, conditionals, constructors
//!
//! # Example
//! ```ignore
//! use sqlpred::ast::builders::*;
//!
//! let pred = text_col("companyName")
//!     .starts_with(lit("dr"))
//!     .and(text_col("city").eq(lit("Hangzhou")));
//! ```

pub mod columns;
pub mod ext;
pub mod functions;
pub mod literals;

pub use columns::*;
pub use functions::*;
pub use literals::*;
