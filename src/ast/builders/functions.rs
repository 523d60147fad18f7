//! Method calls, members, conditionals and constructors.

use crate::ast::{Expr, HostKind, Member, MethodCall, MethodFamily, Node, ValueKind};

/// Result kind of a known method; unknown methods are `Other`.
fn method_kind(family: MethodFamily, method: &str) -> ValueKind {
    match (family, method) {
        (_, "ToString") => ValueKind::String,
        (_, "CompareTo" | "Compare") => ValueKind::Integer,
        (MethodFamily::StringOps, "StartsWith" | "EndsWith" | "Contains" | "IsNullOrEmpty") => {
            ValueKind::Boolean
        }
        (MethodFamily::StringOps, "IndexOf") => ValueKind::Integer,
        (MethodFamily::StringOps, _) => ValueKind::String,
        (MethodFamily::DateOps, "Subtract") => ValueKind::Integer,
        (MethodFamily::DateOps, _) => ValueKind::Date,
        (MethodFamily::DecimalOps, _) => ValueKind::Decimal,
        (MethodFamily::MathOps, "Sign") => ValueKind::Integer,
        (MethodFamily::MathOps, _) => ValueKind::Real,
        (MethodFamily::Other, "Contains") => ValueKind::Boolean,
        (MethodFamily::Other, _) => ValueKind::Other,
    }
}

/// A static method call, e.g. `Math.Abs(x)`.
pub fn call_static(family: MethodFamily, method: &str, args: Vec<Expr>) -> Expr {
    Expr::new(
        Node::MethodCall(MethodCall {
            family,
            method: method.to_string(),
            object: None,
            args,
        }),
        method_kind(family, method),
    )
}

/// `cond ? if_true : if_false`
pub fn conditional(test: Expr, if_true: Expr, if_false: Expr) -> Expr {
    let kind = if if_true.kind == ValueKind::Other {
        if_false.kind
    } else {
        if_true.kind
    };
    Expr::new(
        Node::Conditional {
            test: Box::new(test),
            if_true: Box::new(if_true),
            if_false: Box::new(if_false),
        },
        kind,
    )
}

/// `new DateTime(y, m, d)` or `new DateTime(y, m, d, h, mi, s)`
pub fn datetime(args: Vec<Expr>) -> Expr {
    Expr::new(
        Node::Constructor {
            ty: HostKind::DateTime,
            args,
        },
        ValueKind::Date,
    )
}

/// An inline array, e.g. the receiver of `new[] { 1, 2 }.Contains(x)`.
pub fn array(items: Vec<Expr>) -> Expr {
    Expr::new(Node::ArrayLiteral(items), ValueKind::Other)
}

/// `string.Concat(a, b, ...)`
pub fn concat(args: Vec<Expr>) -> Expr {
    call_static(MethodFamily::StringOps, "Concat", args)
}

/// `string.IsNullOrEmpty(s)`
pub fn is_null_or_empty(s: Expr) -> Expr {
    call_static(MethodFamily::StringOps, "IsNullOrEmpty", vec![s])
}

/// `Math.<method>(args)`
pub fn math(method: &str, args: Vec<Expr>) -> Expr {
    call_static(MethodFamily::MathOps, method, args)
}

/// `decimal.<method>(args)`
pub fn decimal(method: &str, args: Vec<Expr>) -> Expr {
    call_static(MethodFamily::DecimalOps, method, args)
}

/// `<family>.Compare(a, b)`
pub fn compare(family: MethodFamily, a: Expr, b: Expr) -> Expr {
    call_static(family, "Compare", vec![a, b])
}

impl Expr {
    /// An instance method call with this expression as receiver.
    pub fn call(self, family: MethodFamily, method: &str, args: Vec<Expr>) -> Expr {
        Expr::new(
            Node::MethodCall(MethodCall {
                family,
                method: method.to_string(),
                object: Some(Box::new(self)),
                args,
            }),
            method_kind(family, method),
        )
    }

    /// A property of this value, e.g. `s.Length` or `d.Year`.
    pub fn member(self, family: MethodFamily, name: &str) -> Expr {
        Expr::new(
            Node::Member(Member {
                object: Some(Box::new(self)),
                name: name.to_string(),
                family,
            }),
            ValueKind::Integer,
        )
    }

    fn string_call(self, method: &str, args: Vec<Expr>) -> Expr {
        self.call(MethodFamily::StringOps, method, args)
    }

    pub fn starts_with(self, prefix: Expr) -> Expr {
        self.string_call("StartsWith", vec![prefix])
    }

    pub fn ends_with(self, suffix: Expr) -> Expr {
        self.string_call("EndsWith", vec![suffix])
    }

    /// Substring search on a string receiver; on an array literal use
    /// [`Expr::in_array`].
    pub fn contains(self, needle: Expr) -> Expr {
        self.string_call("Contains", vec![needle])
    }

    pub fn to_upper(self) -> Expr {
        self.string_call("ToUpper", vec![])
    }

    pub fn to_lower(self) -> Expr {
        self.string_call("ToLower", vec![])
    }

    pub fn trim(self) -> Expr {
        self.string_call("Trim", vec![])
    }

    pub fn substring(self, start: Expr, length: Option<Expr>) -> Expr {
        let args = std::iter::once(start).chain(length).collect();
        self.string_call("Substring", args)
    }

    pub fn index_of(self, needle: Expr, start: Option<Expr>) -> Expr {
        let args = std::iter::once(needle).chain(start).collect();
        self.string_call("IndexOf", args)
    }

    pub fn replace(self, from: Expr, to: Expr) -> Expr {
        self.string_call("Replace", vec![from, to])
    }

    pub fn remove(self, start: Expr, count: Option<Expr>) -> Expr {
        let args = std::iter::once(start).chain(count).collect();
        self.string_call("Remove", args)
    }

    /// `s.Length`
    pub fn length(self) -> Expr {
        self.member(MethodFamily::StringOps, "Length")
    }

    /// `x.ToString()`
    pub fn to_text(self) -> Expr {
        self.call(MethodFamily::Other, "ToString", vec![])
    }

    /// `a.CompareTo(b)`
    pub fn compare_to(self, other: Expr) -> Expr {
        let family = match self.kind {
            ValueKind::String => MethodFamily::StringOps,
            ValueKind::Date => MethodFamily::DateOps,
            ValueKind::Decimal => MethodFamily::DecimalOps,
            _ => MethodFamily::Other,
        };
        self.call(family, "CompareTo", vec![other])
    }

    /// `new[] { ... }.Contains(self)`
    pub fn in_array(self, items: Vec<Expr>) -> Expr {
        array(items).call(MethodFamily::Other, "Contains", vec![self])
    }

    /// A date part such as `Year` or `DayOfWeek`.
    pub fn date_part(self, part: &str) -> Expr {
        self.member(MethodFamily::DateOps, part)
    }

    pub fn year(self) -> Expr {
        self.date_part("Year")
    }

    pub fn month(self) -> Expr {
        self.date_part("Month")
    }

    pub fn day(self) -> Expr {
        self.date_part("Day")
    }

    pub fn day_of_week(self) -> Expr {
        self.date_part("DayOfWeek")
    }

    /// Date arithmetic, e.g. `date_add("AddDays", n)`.
    pub fn date_add(self, method: &str, amount: Expr) -> Expr {
        self.call(MethodFamily::DateOps, method, vec![amount])
    }

    pub fn add_days(self, days: Expr) -> Expr {
        self.date_add("AddDays", days)
    }

    pub fn add_months(self, months: Expr) -> Expr {
        self.date_add("AddMonths", months)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::builders::*;
    use crate::ast::{MethodFamily, ValueKind};

    #[test]
    fn test_method_kinds() {
        assert_eq!(text_col("a").starts_with(lit("x")).kind, ValueKind::Boolean);
        assert_eq!(text_col("a").index_of(lit("x"), None).kind, ValueKind::Integer);
        assert_eq!(text_col("a").length().kind, ValueKind::Integer);
        assert_eq!(date_col("d").add_days(lit(1)).kind, ValueKind::Date);
        assert_eq!(math("Sqrt", vec![int_col("n")]).kind, ValueKind::Real);
        assert_eq!(int_col("n").in_array(vec![lit(1)]).kind, ValueKind::Boolean);
        assert_eq!(
            compare(MethodFamily::StringOps, text_col("a"), lit("b")).kind,
            ValueKind::Integer
        );
    }

    #[test]
    fn test_optional_args() {
        let call = text_col("a").substring(lit(1), None);
        assert_eq!(call.to_string(), "a.Substring(1)");
        let call = text_col("a").substring(lit(1), Some(lit(2)));
        assert_eq!(call.to_string(), "a.Substring(1, 2)");
    }
}
