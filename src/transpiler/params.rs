//! Parameter binding for parameterized translation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ast::{Constant, Expr, HostType, Value};
use crate::error::TranslateResult;
use crate::types::{QueryType, TypeSystem};

/// Which constants become bound parameters in parameterized mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterPolicy {
    /// Every non-null constant is bound.
    #[default]
    All,
    /// Numeric and boolean constants are inlined; everything else is bound.
    NonNumeric,
}

impl ParameterPolicy {
    pub fn binds(&self, value: &Value) -> bool {
        match self {
            ParameterPolicy::All => !value.is_null(),
            ParameterPolicy::NonNumeric => {
                !(value.is_null() || value.is_numeric() || matches!(value, Value::Bool(_)))
            }
        }
    }
}

/// A bound parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryParameter {
    /// Generated name without the dialect prefix (`p0`, `p1`, ...)
    pub name: String,
    pub host_type: HostType,
    pub query_type: QueryType,
    pub value: Value,
}

/// WHERE text plus the parameters it references, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub sql: String,
    pub params: Vec<QueryParameter>,
}

impl std::fmt::Display for QueryResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sql)
    }
}

/// Context for parameterized translation.
///
/// One per call. Parameters are keyed by constant node so a node emitted
/// twice by a rewrite shares one placeholder.
#[derive(Debug, Default)]
pub struct ParamContext {
    /// Number of parameters allocated so far
    pub index: usize,
    /// Collected parameters in order
    pub params: Vec<QueryParameter>,
    by_node: HashMap<*const Expr, usize>,
}

impl ParamContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a constant and return the placeholder for it.
    pub fn add_param(
        &mut self,
        node: &Expr,
        constant: &Constant,
        prefix: &str,
        types: &TypeSystem,
    ) -> TranslateResult<String> {
        let key: *const Expr = node;
        if let Some(&slot) = self.by_node.get(&key) {
            return Ok(format!("{}{}", prefix, self.params[slot].name));
        }
        let query_type = types.resolve(&constant.host)?;
        let name = format!("p{}", self.index);
        self.by_node.insert(key, self.params.len());
        self.params.push(QueryParameter {
            name: name.clone(),
            host_type: constant.host.clone(),
            query_type,
            value: constant.value.clone(),
        });
        self.index += 1;
        Ok(format!("{}{}", prefix, name))
    }

    pub fn into_params(self) -> Vec<QueryParameter> {
        self.params
    }
}
