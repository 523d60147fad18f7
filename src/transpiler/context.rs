//! The recursive walk shared by every dialect.
//!
//! Each position in the output requires either a predicate (usable after
//! WHERE/AND/OR) or a value. `visit_predicate` and `visit_value` insert the
//! dialect's coercion when a subtree produces the other form; `visit`
//! renders a node as it naturally is.

use crate::ast::{BinaryOp, Constant, Expr, Member, MethodCall, MethodFamily, Node, UnaryOp, ValueKind};
use crate::error::{TranslateError, TranslateResult};

use super::Mode;
use super::dialect::{CoalesceStyle, ConcatStyle, ConditionalStyle, DialectRules};
use super::params::{ParamContext, QueryParameter};

/// True when the node renders as a boolean predicate rather than a value.
pub fn is_predicate(expr: &Expr) -> bool {
    match &expr.node {
        Node::Binary { op, left, .. } => {
            op.is_comparison()
                || op.is_logical(left.is_boolean())
                || (*op == BinaryOp::ExclusiveOr && left.is_boolean())
        }
        Node::Unary {
            op: UnaryOp::Not,
            operand,
        } => operand.is_boolean(),
        Node::Unary {
            op: UnaryOp::Convert,
            operand,
        } => is_predicate(operand),
        Node::MethodCall(_) => expr.is_boolean(),
        _ => false,
    }
}

/// Flatten a chain of string additions into its ordered pieces.
fn concat_parts<'e>(expr: &'e Expr, parts: &mut Vec<&'e Expr>) {
    match &expr.node {
        Node::Binary {
            op: BinaryOp::Add,
            left,
            right,
        } if expr.kind == ValueKind::String => {
            concat_parts(left, parts);
            concat_parts(right, parts);
        }
        _ => parts.push(expr),
    }
}

fn arity(min: usize, max: usize) -> String {
    if min == max {
        min.to_string()
    } else if max == usize::MAX {
        format!("at least {}", min)
    } else {
        format!("{}..={}", min, max)
    }
}

fn identity(name: &str) -> String {
    name.to_string()
}

/// Call-scoped translation state.
pub struct Context<'a> {
    rules: &'static DialectRules,
    mode: Mode,
    resolver: &'a dyn Fn(&str) -> String,
    sql: String,
    params: ParamContext,
    depth: usize,
    max_depth: usize,
}

impl<'a> Context<'a> {
    pub fn new(rules: &'static DialectRules, mode: Mode, max_depth: usize) -> Self {
        Self {
            rules,
            mode,
            resolver: &identity,
            sql: String::new(),
            params: ParamContext::new(),
            depth: 0,
            max_depth,
        }
    }

    /// Map column names through `resolver` instead of emitting them as is.
    pub fn with_resolver(mut self, resolver: &'a dyn Fn(&str) -> String) -> Self {
        self.resolver = resolver;
        self
    }

    /// Render `expr` as the whole WHERE predicate.
    pub fn translate(mut self, expr: &Expr) -> TranslateResult<(String, Vec<QueryParameter>)> {
        self.visit_predicate(expr)?;
        Ok((self.sql, self.params.into_params()))
    }

    fn unsupported(&self, node: &Expr) -> TranslateError {
        tracing::trace!(dialect = self.rules.name, construct = %node, "no rendering rule");
        TranslateError::unsupported(self.rules.name, node)
    }

    pub fn visit_predicate(&mut self, expr: &Expr) -> TranslateResult<()> {
        if is_predicate(expr) {
            self.visit(expr)
        } else {
            self.template(self.rules.predicate_coercion, &[expr], false)
        }
    }

    pub fn visit_value(&mut self, expr: &Expr) -> TranslateResult<()> {
        if is_predicate(expr) {
            self.template(self.rules.value_coercion, &[expr], true)
        } else {
            self.visit(expr)
        }
    }

    fn visit(&mut self, expr: &Expr) -> TranslateResult<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(TranslateError::malformed(format!(
                "expression nesting exceeds {} levels",
                self.max_depth
            )));
        }
        let result = match &expr.node {
            Node::Constant(c) => self.constant(expr, c),
            Node::Member(m) => match &m.object {
                None => {
                    let column = (self.resolver)(&m.name);
                    self.sql.push_str(&column);
                    Ok(())
                }
                Some(object) => self.member(expr, m, object),
            },
            Node::Unary { op, operand } => self.unary(expr, *op, operand),
            Node::Binary { op, left, right } => self.binary(expr, *op, left, right),
            Node::MethodCall(call) => self.method_call(expr, call),
            Node::Conditional { .. } => self.conditional(expr),
            Node::Constructor { ty, args } => match (self.rules.constructor)(ty, args.len()) {
                Some(tpl) => {
                    let operands: Vec<&Expr> = args.iter().collect();
                    self.template(tpl, &operands, false)
                }
                None => Err(self.unsupported(expr)),
            },
            Node::ArrayLiteral(_) => Err(self.unsupported(expr)),
        };
        self.depth -= 1;
        result
    }

    /// Render a template, visiting every operand in the same context.
    fn template(&mut self, tpl: &str, operands: &[&Expr], as_predicate: bool) -> TranslateResult<()> {
        self.render(tpl, operands, |_| as_predicate)
    }

    /// Render a template; `predicate(i)` picks the context of operand `i`.
    /// Operands are visited in the order they appear in the template.
    fn render(
        &mut self,
        tpl: &str,
        operands: &[&Expr],
        predicate: impl Fn(usize) -> bool,
    ) -> TranslateResult<()> {
        let mut rest = tpl;
        while let Some(open) = rest.find('{') {
            self.sql.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let index = after
                .find('}')
                .and_then(|close| after[..close].parse::<usize>().ok().map(|i| (i, close)));
            let Some((index, close)) = index else {
                return Err(TranslateError::malformed(format!("bad template `{}`", tpl)));
            };
            let Some(operand) = operands.get(index) else {
                return Err(TranslateError::malformed(format!(
                    "template `{}` needs operand {} but only {} given",
                    tpl,
                    index,
                    operands.len()
                )));
            };
            self.operand(operand, predicate(index))?;
            rest = &after[close + 1..];
        }
        self.sql.push_str(rest);
        Ok(())
    }

    /// Append an operand in the given context after whatever text precedes it.
    fn operand(&mut self, operand: &Expr, as_predicate: bool) -> TranslateResult<()> {
        let text = self.capture(|t| {
            if as_predicate {
                t.visit_predicate(operand)
            } else {
                t.visit_value(operand)
            }
        })?;
        // never emit `--`, which starts a comment
        if self.sql.ends_with('-') && text.starts_with('-') {
            self.sql.push('(');
            self.sql.push_str(&text);
            self.sql.push(')');
        } else {
            self.sql.push_str(&text);
        }
        Ok(())
    }

    /// Render into a fresh buffer and hand the text back.
    fn capture(
        &mut self,
        f: impl FnOnce(&mut Self) -> TranslateResult<()>,
    ) -> TranslateResult<String> {
        let outer = std::mem::take(&mut self.sql);
        let result = f(self);
        let inner = std::mem::replace(&mut self.sql, outer);
        result.map(|_| inner)
    }

    fn join(&mut self, parts: &[&Expr], separator: &str) -> TranslateResult<()> {
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(separator);
            }
            self.visit_value(part)?;
        }
        Ok(())
    }

    fn constant(&mut self, expr: &Expr, c: &Constant) -> TranslateResult<()> {
        if let Mode::Parameterized(policy) = self.mode {
            if policy.binds(&c.value) {
                let placeholder =
                    self.params
                        .add_param(expr, c, self.rules.param_prefix, &self.rules.types)?;
                self.sql.push_str(&placeholder);
                return Ok(());
            }
        }
        match (self.rules.literal)(&c.value) {
            Some(text) => {
                self.sql.push_str(&text);
                Ok(())
            }
            None => Err(self.unsupported(expr)),
        }
    }

    fn member(&mut self, expr: &Expr, m: &Member, object: &Expr) -> TranslateResult<()> {
        if !m.family.has_member(&m.name) {
            return Err(self.unsupported(expr));
        }
        match (self.rules.member)(m) {
            Some(tpl) => self.template(tpl, &[object], false),
            None => Err(self.unsupported(expr)),
        }
    }

    fn unary(&mut self, expr: &Expr, op: UnaryOp, operand: &Expr) -> TranslateResult<()> {
        if op == UnaryOp::Convert {
            return self.visit(operand);
        }
        let Some(token) = (self.rules.unary)(op, operand) else {
            return Err(self.unsupported(expr));
        };
        self.sql.push_str(token);
        self.operand(operand, op == UnaryOp::Not && operand.is_boolean())
    }

    fn binary(&mut self, expr: &Expr, op: BinaryOp, left: &Expr, right: &Expr) -> TranslateResult<()> {
        if matches!(op, BinaryOp::Equal | BinaryOp::NotEqual) {
            let other = if right.is_null_constant() {
                Some(left)
            } else if left.is_null_constant() {
                Some(right)
            } else {
                None
            };
            if let Some(other) = other {
                let tpl = if op == BinaryOp::Equal {
                    "({0} is null)"
                } else {
                    "({0} is not null)"
                };
                return self.template(tpl, &[other], false);
            }
        }

        match op {
            BinaryOp::Add if expr.kind == ValueKind::String => {
                let mut parts = Vec::new();
                concat_parts(expr, &mut parts);
                return self.concat(&parts);
            }
            BinaryOp::Subtract if left.kind == ValueKind::Date && right.kind == ValueKind::Date => {
                return self.template(self.rules.date_diff, &[left, right], false);
            }
            BinaryOp::Coalesce => return self.coalesce(left, right),
            _ => {}
        }

        let logical = op.is_logical(left.is_boolean());

        if let Some(tpl) = (self.rules.binary)(op, left, right) {
            return self.template(tpl, &[left, right], logical);
        }
        let Some(token) = (self.rules.operator)(op, left.is_boolean()) else {
            return Err(self.unsupported(expr));
        };
        self.sql.push('(');
        if logical {
            self.visit_predicate(left)?;
        } else {
            self.visit_value(left)?;
        }
        self.sql.push(' ');
        self.sql.push_str(token);
        self.sql.push(' ');
        if logical {
            self.visit_predicate(right)?;
        } else {
            self.visit_value(right)?;
        }
        self.sql.push(')');
        Ok(())
    }

    fn concat(&mut self, parts: &[&Expr]) -> TranslateResult<()> {
        match parts {
            [] => {
                self.sql.push_str("''");
                Ok(())
            }
            [single] => self.visit_value(single),
            _ => {
                match self.rules.concat {
                    ConcatStyle::Infix(token) => {
                        self.sql.push('(');
                        self.join(parts, token)?;
                    }
                    ConcatStyle::Function(name) => {
                        self.sql.push_str(name);
                        self.sql.push('(');
                        self.join(parts, ", ")?;
                    }
                }
                self.sql.push(')');
                Ok(())
            }
        }
    }

    fn coalesce(&mut self, left: &Expr, right: &Expr) -> TranslateResult<()> {
        match self.rules.coalesce {
            CoalesceStyle::Nested(tpl) => self.template(tpl, &[left, right], false),
            CoalesceStyle::Flatten => {
                let mut parts = vec![left];
                let mut tail = right;
                while let Node::Binary {
                    op: BinaryOp::Coalesce,
                    left,
                    right,
                } = &tail.node
                {
                    parts.push(left);
                    tail = &**right;
                }
                parts.push(tail);
                self.sql.push_str("COALESCE(");
                self.join(&parts, ", ")?;
                self.sql.push(')');
                Ok(())
            }
        }
    }

    fn method_call(&mut self, expr: &Expr, call: &MethodCall) -> TranslateResult<()> {
        let Some(sig) = call.family.signature(&call.method) else {
            return Err(self.unsupported(expr));
        };
        if sig.instance != call.object.is_some() {
            let shape = if sig.instance { "an instance" } else { "a static" };
            return Err(TranslateError::malformed(format!(
                "`{}` is {} method of {}",
                call.method, shape, call.family
            )));
        }
        if call.args.len() < sig.min_args || call.args.len() > sig.max_args {
            return Err(TranslateError::malformed(format!(
                "`{}` expects {} arguments, got {}",
                call.method,
                arity(sig.min_args, sig.max_args),
                call.args.len()
            )));
        }

        let operands = call.operands();
        match (call.family, call.method.as_str()) {
            (_, "CompareTo" | "Compare") => self.template(self.rules.compare, &operands, false),
            (_, "ToString") if operands[0].is_string() => self.visit_value(operands[0]),
            (MethodFamily::StringOps, "Concat") => {
                let mut parts = Vec::new();
                for arg in &call.args {
                    match &arg.node {
                        Node::ArrayLiteral(items) => {
                            items.iter().for_each(|item| concat_parts(item, &mut parts))
                        }
                        _ => concat_parts(arg, &mut parts),
                    }
                }
                self.concat(&parts)
            }
            (MethodFamily::DateOps, "Subtract") => {
                self.template(self.rules.date_diff, &operands, false)
            }
            (MethodFamily::Other, "Contains") => self.in_list(expr, operands[0], operands[1]),
            _ => match (self.rules.method)(call) {
                Some(tpl) => self.template(tpl, &operands, false),
                None => Err(self.unsupported(expr)),
            },
        }
    }

    /// `new[] { a, b }.Contains(x)` as `(x in (a, b))`.
    fn in_list(&mut self, expr: &Expr, list: &Expr, needle: &Expr) -> TranslateResult<()> {
        let Node::ArrayLiteral(items) = &list.node else {
            return Err(self.unsupported(expr));
        };
        if items.is_empty() {
            self.sql.push_str("(1 = 0)");
            return Ok(());
        }
        self.sql.push('(');
        self.visit_value(needle)?;
        self.sql.push_str(" in (");
        let items: Vec<&Expr> = items.iter().collect();
        self.join(&items, ", ")?;
        self.sql.push_str("))");
        Ok(())
    }

    fn conditional(&mut self, expr: &Expr) -> TranslateResult<()> {
        let Node::Conditional {
            test,
            if_true,
            if_false,
        } = &expr.node
        else {
            return Err(self.unsupported(expr));
        };
        match self.rules.conditional {
            ConditionalStyle::Nested(tpl) => {
                self.render(tpl, &[&**test, &**if_true, &**if_false], |i| i == 0)
            }
            ConditionalStyle::Case if test.is_boolean() => {
                self.sql.push_str("(case");
                let mut current = expr;
                while let Node::Conditional {
                    test,
                    if_true,
                    if_false,
                } = &current.node
                {
                    if !test.is_boolean() {
                        break;
                    }
                    self.sql.push_str(" when ");
                    self.visit_predicate(test)?;
                    self.sql.push_str(" then ");
                    self.visit_value(if_true)?;
                    current = &**if_false;
                }
                self.sql.push_str(" else ");
                self.visit_value(current)?;
                self.sql.push_str(" end)");
                Ok(())
            }
            ConditionalStyle::Case => self.template(
                "(case {0} when 0 then {2} else {1} end)",
                &[&**test, &**if_true, &**if_false],
                false,
            ),
        }
    }
}
