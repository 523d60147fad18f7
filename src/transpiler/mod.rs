//! Predicate transpiler.
//!
//! Converts a predicate tree into dialect WHERE text, either with literals
//! inlined or with bound parameters.

pub mod context;
pub mod dialect;
pub mod params;
pub mod sql;

#[cfg(test)]
mod tests;

use crate::ast::Expr;
use crate::config::TranslatorConfig;
use crate::error::TranslateResult;

pub use context::{Context, is_predicate};
pub use dialect::{ConcatStyle, CoalesceStyle, ConditionalStyle, Dialect, DialectRules};
pub use params::{ParamContext, ParameterPolicy, QueryParameter, QueryResult};

/// Default bound on expression nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// How constants are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every constant as a dialect literal
    Inline,
    /// Constants selected by the policy become placeholders
    Parameterized(ParameterPolicy),
}

/// Trait for converting predicate trees to SQL.
pub trait ToSql {
    /// Convert with literals inlined, using the default dialect.
    fn to_sql(&self) -> TranslateResult<String> {
        self.to_sql_with_dialect(Dialect::default())
    }
    /// Convert with literals inlined.
    fn to_sql_with_dialect(&self, dialect: Dialect) -> TranslateResult<String>;
    /// Convert with every constant bound as a parameter.
    fn to_sql_parameterized(&self, dialect: Dialect) -> TranslateResult<QueryResult>;
}

impl ToSql for Expr {
    fn to_sql_with_dialect(&self, dialect: Dialect) -> TranslateResult<String> {
        Translator::new(dialect).translate(self)
    }

    fn to_sql_parameterized(&self, dialect: Dialect) -> TranslateResult<QueryResult> {
        Translator::new(dialect).translate_parameterized(self)
    }
}

/// Translate with literals inlined.
pub fn translate(expr: &Expr, dialect: Dialect) -> TranslateResult<String> {
    Translator::new(dialect).translate(expr)
}

/// Translate with bound parameters, mapping member names through `resolver`.
pub fn translate_parameterized(
    expr: &Expr,
    dialect: Dialect,
    resolver: Option<&dyn Fn(&str) -> String>,
) -> TranslateResult<QueryResult> {
    let mut translator = Translator::new(dialect);
    if let Some(resolver) = resolver {
        translator = translator.with_resolver(resolver);
    }
    translator.translate_parameterized(expr)
}

/// Configured entry point for repeated translations.
///
/// Holds no per-call state: every call builds a fresh [`Context`].
pub struct Translator<'r> {
    dialect: Dialect,
    policy: ParameterPolicy,
    max_depth: usize,
    resolver: Option<Box<dyn Fn(&str) -> String + 'r>>,
}

impl<'r> Translator<'r> {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            policy: ParameterPolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            resolver: None,
        }
    }

    pub fn from_config(config: &TranslatorConfig) -> Self {
        Self::new(config.dialect)
            .with_policy(config.parameters)
            .with_max_depth(config.max_depth)
    }

    pub fn with_policy(mut self, policy: ParameterPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Map member names to column names, e.g. `CompanyName` -> `company_name`.
    pub fn with_resolver(mut self, resolver: impl Fn(&str) -> String + 'r) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn translate(&self, expr: &Expr) -> TranslateResult<String> {
        self.run(expr, Mode::Inline).map(|result| result.sql)
    }

    pub fn translate_parameterized(&self, expr: &Expr) -> TranslateResult<QueryResult> {
        self.run(expr, Mode::Parameterized(self.policy))
    }

    fn run(&self, expr: &Expr, mode: Mode) -> TranslateResult<QueryResult> {
        let rules = self.dialect.rules();
        let mut context = Context::new(rules, mode, self.max_depth);
        if let Some(resolver) = &self.resolver {
            context = context.with_resolver(resolver.as_ref());
        }
        let (sql, params) = context.translate(expr)?;
        tracing::debug!(
            dialect = rules.name,
            mode = ?mode,
            params = params.len(),
            "translated predicate"
        );
        Ok(QueryResult { sql, params })
    }
}
