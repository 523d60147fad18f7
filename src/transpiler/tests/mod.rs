//! Transpiler test modules.
//!
//! Tests are organized by category:
//! - `core`: Context model, coercions, structural rewrites, errors
//! - `dialects`: The same predicates across every dialect
//! - `methods`: String, date, decimal and math method translation
//! - `params`: Parameter binding, policies and type descriptors

mod core;
mod dialects;
mod params;
