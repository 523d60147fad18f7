//! Core translation tests: context model, rewrites and failures.

use pretty_assertions::assert_eq;

use crate::prelude::*;
use crate::transpiler::DEFAULT_MAX_DEPTH;

fn sql(expr: &Expr, dialect: Dialect) -> String {
    expr.to_sql_with_dialect(dialect).unwrap()
}

#[test]
fn test_null_comparison() {
    let expr = text_col("companyName").eq(null());
    assert_eq!(sql(&expr, Dialect::Generic), "(companyName is null)");

    let expr = text_col("companyName").ne(null());
    assert_eq!(sql(&expr, Dialect::Generic), "(companyName is not null)");

    let expr = null().eq(text_col("city"));
    assert_eq!(sql(&expr, Dialect::Oracle), "(city is null)");
}

#[test]
fn test_compare_to_case() {
    let expr = text_col("companyName").compare_to(lit("dr")).eq(lit(1));
    assert_eq!(
        sql(&expr, Dialect::Generic),
        "((case when companyName = 'dr' then 0 when companyName < 'dr' then -1 else 1 end) = 1)"
    );
    assert_eq!(
        sql(&expr, Dialect::SqlServer),
        "((case when companyName = 'dr' then 0 when companyName < 'dr' then -1 else 1 end) = 1)"
    );
    assert_eq!(
        sql(&expr, Dialect::Access),
        "(IIF(companyName = 'dr', 0, IIF(companyName < 'dr', -1, 1)) = 1)"
    );
}

#[test]
fn test_boolean_column_as_predicate() {
    assert_eq!(sql(&bool_col("active"), Dialect::Generic), "(active <> 0)");
    assert_eq!(sql(&bool_col("active").not(), Dialect::Generic), "not (active <> 0)");

    let expr = bool_col("active").and(int_col("n").gt(lit(3)));
    assert_eq!(sql(&expr, Dialect::Generic), "((active <> 0) and (n > 3))");
}

#[test]
fn test_predicate_as_value() {
    let expr = bool_col("a").eq(int_col("x").gt(lit(1)));
    assert_eq!(
        sql(&expr, Dialect::Generic),
        "(a = (case when (x > 1) then 1 else 0 end))"
    );
    // comparisons already yield -1/0
    assert_eq!(sql(&expr, Dialect::Access), "(a = (x > 1))");
}

#[test]
fn test_coercion_is_idempotent() {
    let pred = int_col("x").gt(lit(1));
    let once = int_col("y").eq(pred.clone().convert(ValueKind::Boolean));
    let twice = int_col("y").eq(
        pred.clone()
            .convert(ValueKind::Boolean)
            .convert(ValueKind::Boolean),
    );
    let plain = int_col("y").eq(pred.clone());

    let expected = "(y = (case when (x > 1) then 1 else 0 end))";
    assert_eq!(sql(&plain, Dialect::Generic), expected);
    assert_eq!(sql(&once, Dialect::Generic), expected);
    assert_eq!(sql(&twice, Dialect::Generic), expected);

    let top = pred.convert(ValueKind::Boolean).convert(ValueKind::Boolean);
    assert_eq!(sql(&top, Dialect::Generic), "(x > 1)");
}

#[test]
fn test_negate_never_emits_double_dash() {
    let expr = int_col("x").neg().neg().eq(lit(1));
    assert_eq!(sql(&expr, Dialect::Generic), "(-(-x) = 1)");

    let expr = lit(-5).neg().eq(int_col("x"));
    assert_eq!(sql(&expr, Dialect::Generic), "(-(-5) = x)");

    let expr = int_col("x").sub(lit(-1)).eq(lit(0));
    assert_eq!(sql(&expr, Dialect::Generic), "((x - -1) = 0)");
}

#[test]
fn test_negated_templates_never_emit_double_dash() {
    let expr = decimal("Negate", vec![lit(rust_decimal::Decimal::new(-5, 0))])
        .eq(decimal_col("d"))
        .and(int_col("tenant").eq(lit(3)));
    let s = sql(&expr, Dialect::Generic);
    assert_eq!(s, "(((-(-5)) = d) and (tenant = 3))");
    assert!(!s.contains("--"));

    let expr = math("Ceiling", vec![lit(-5.5)]).eq(real_col("x"));
    assert_eq!(sql(&expr, Dialect::Access), "((-Int(-(-5.5))) = x)");

    let expr = math("Ceiling", vec![real_col("y").neg()]).eq(real_col("x"));
    assert_eq!(sql(&expr, Dialect::Access), "((-Int(-(-y))) = x)");
}

#[test]
fn test_string_concat_flattening() {
    let expr = text_col("a").add(lit("-")).add(text_col("b")).eq(lit("x-y"));
    assert_eq!(sql(&expr, Dialect::Generic), "((a || '-' || b) = 'x-y')");
    assert_eq!(sql(&expr, Dialect::SqlServer), "((a + '-' + b) = 'x-y')");
    assert_eq!(sql(&expr, Dialect::MySql), "(CONCAT(a, '-', b) = 'x-y')");
}

#[test]
fn test_numeric_add_is_not_concat() {
    let expr = int_col("a").add(int_col("b")).add(lit(1)).gt(lit(0));
    assert_eq!(sql(&expr, Dialect::MySql), "(((a + b) + 1) > 0)");
}

#[test]
fn test_coalesce() {
    let expr = int_col("a")
        .coalesce(int_col("b").coalesce(lit(0)))
        .gt(lit(1));
    assert_eq!(sql(&expr, Dialect::Generic), "(COALESCE(a, b, 0) > 1)");
    assert_eq!(
        sql(&expr, Dialect::Access),
        "(IIF(a is not null, a, IIF(b is not null, b, 0)) > 1)"
    );
}

#[test]
fn test_shift_operators() {
    let expr = int_col("flags").shl(lit(2)).eq(lit(8));
    assert_eq!(sql(&expr, Dialect::Generic), "((flags * POWER(2, 2)) = 8)");
    assert_eq!(sql(&expr, Dialect::Access), "((flags * (2^2)) = 8)");

    let expr = int_col("flags").shr(lit(1)).eq(lit(2));
    assert_eq!(sql(&expr, Dialect::Oracle), "(TRUNC(flags / POWER(2, 1)) = 2)");
}

#[test]
fn test_integer_division_truncates() {
    let expr = int_col("a").div(int_col("b")).eq(lit(2));
    assert_eq!(sql(&expr, Dialect::Generic), "((a / b) = 2)");
    assert_eq!(sql(&expr, Dialect::Oracle), "(TRUNC(a / b) = 2)");
    assert_eq!(sql(&expr, Dialect::Access), "(Fix(a / b) = 2)");
    assert_eq!(sql(&expr, Dialect::MySql), "((a div b) = 2)");

    let expr = real_col("a").div(int_col("b")).eq(lit(2));
    assert_eq!(sql(&expr, Dialect::Oracle), "((a / b) = 2)");
}

#[test]
fn test_modulo_and_power() {
    let expr = int_col("a").rem(lit(2)).eq(lit(0));
    assert_eq!(sql(&expr, Dialect::Generic), "((a % 2) = 0)");
    assert_eq!(sql(&expr, Dialect::Oracle), "(MOD(a, 2) = 0)");
    assert_eq!(sql(&expr, Dialect::Access), "((a MOD 2) = 0)");

    let expr = int_col("a").pow(lit(2)).gt(lit(4));
    assert_eq!(sql(&expr, Dialect::Generic), "((a ^ 2) > 4)");
    assert_eq!(sql(&expr, Dialect::SqlServer), "(POWER(a, 2) > 4)");
    assert_eq!(sql(&expr, Dialect::Access), "((a^2) > 4)");
}

#[test]
fn test_bitwise_operators() {
    let expr = int_col("flags").bit_and(lit(4)).ne(lit(0));
    assert_eq!(sql(&expr, Dialect::Generic), "((flags & 4) <> 0)");
    assert_eq!(sql(&expr, Dialect::Oracle), "(BITAND(flags, 4) <> 0)");
    assert_eq!(sql(&expr, Dialect::Access), "((flags BAND 4) <> 0)");

    let expr = int_col("a").xor(int_col("b")).eq(lit(0));
    assert_eq!(sql(&expr, Dialect::Sqlite), "(((a | b) - (a & b)) = 0)");
    assert_eq!(sql(&expr, Dialect::SqlServer), "((a ^ b) = 0)");
    assert_eq!(sql(&expr, Dialect::Access), "((a XOR b) = 0)");
}

#[test]
fn test_eager_boolean_operators() {
    let expr = bool_col("a").bit_and(int_col("n").gt(lit(1)));
    assert_eq!(sql(&expr, Dialect::Generic), "((a <> 0) and (n > 1))");

    let expr = bool_col("a").xor(bool_col("b"));
    assert_eq!(sql(&expr, Dialect::Generic), "(a <> b)");
}

#[test]
fn test_conditional_chain_flattens() {
    let expr = conditional(
        int_col("a").gt(lit(10)),
        lit("big"),
        conditional(int_col("a").gt(lit(5)), lit("mid"), lit("small")),
    )
    .eq(lit("big"));
    assert_eq!(
        sql(&expr, Dialect::Generic),
        "((case when (a > 10) then 'big' when (a > 5) then 'mid' else 'small' end) = 'big')"
    );
    assert_eq!(
        sql(&expr, Dialect::Access),
        "(IIF((a > 10), 'big', IIF((a > 5), 'mid', 'small')) = 'big')"
    );
}

#[test]
fn test_conditional_on_integer_discriminant() {
    let expr = conditional(int_col("flag"), lit(1), lit(2)).eq(lit(1));
    assert_eq!(sql(&expr, Dialect::Generic), "((case flag when 0 then 2 else 1 end) = 1)");
}

#[test]
fn test_array_contains() {
    let expr = int_col("id").in_array(vec![lit(1), lit(2), lit(3)]);
    assert_eq!(sql(&expr, Dialect::Generic), "(id in (1, 2, 3))");

    let expr = int_col("id").in_array(vec![]);
    assert_eq!(sql(&expr, Dialect::Generic), "(1 = 0)");

    let result = int_col("id")
        .in_array(vec![lit(1), lit(2)])
        .to_sql_parameterized(Dialect::Oracle)
        .unwrap();
    assert_eq!(result.sql, "(id in (:p0, :p1))");
}

#[test]
fn test_datetime_constructor() {
    let expr = date_col("d").gt(datetime(vec![lit(2015), lit(1), lit(2)]));
    assert_eq!(sql(&expr, Dialect::Access), "(d > DateSerial(2015, 1, 2))");
    assert_eq!(
        sql(&expr, Dialect::Oracle),
        "(d > TO_DATE(2015 || '-' || 1 || '-' || 2, 'yyyy-mm-dd'))"
    );

    let bad = date_col("d").gt(datetime(vec![lit(2015), lit(1), lit(2), lit(3)]));
    assert!(matches!(
        bad.to_sql_with_dialect(Dialect::Access),
        Err(TranslateError::Unsupported { .. })
    ));
}

#[test]
fn test_date_difference() {
    let expr = date_col("a").sub(date_col("b")).gt(lit(7));
    assert_eq!(sql(&expr, Dialect::SqlServer), "(DATEDIFF(day, b, a) > 7)");
    assert_eq!(
        sql(&expr, Dialect::Sqlite),
        "(CAST(JULIANDAY(a) - JULIANDAY(b) AS INTEGER) > 7)"
    );

    let expr = call_static(MethodFamily::DateOps, "Subtract", vec![date_col("a"), date_col("b")])
        .gt(lit(7));
    assert_eq!(sql(&expr, Dialect::MySql), "(DATEDIFF(a, b) > 7)");
}

#[test]
fn test_column_resolver() {
    let expr = text_col("companyName").eq(null());
    let translator = Translator::new(Dialect::SqlServer).with_resolver(|name| format!("[{}]", name));
    assert_eq!(translator.translate(&expr).unwrap(), "([companyName] is null)");

    let upper = |name: &str| name.to_uppercase();
    let result = crate::translate_parameterized(
        &text_col("city").eq(lit("x")),
        Dialect::Generic,
        Some(&upper),
    )
    .unwrap();
    assert_eq!(result.sql, "(CITY = @p0)");
}

#[test]
fn test_deterministic_output() {
    let expr = text_col("companyName")
        .starts_with(lit("dr"))
        .and(date_col("createTime").year().eq(lit(2015)));
    for dialect in Dialect::ALL {
        let first = expr.to_sql_parameterized(dialect).unwrap();
        let second = expr.to_sql_parameterized(dialect).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_unknown_method_is_unsupported() {
    let expr = text_col("a")
        .call(MethodFamily::StringOps, "PadLeft", vec![lit(3)])
        .eq(lit("x"));
    let err = expr.to_sql().unwrap_err();
    assert!(matches!(err, TranslateError::Unsupported { dialect: "generic", .. }));
}

#[test]
fn test_wrong_arity_is_malformed() {
    let expr = text_col("a")
        .call(MethodFamily::StringOps, "Substring", vec![lit(1), lit(2), lit(3)])
        .eq(lit("x"));
    let err = expr.to_sql().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Malformed expression: `Substring` expects 1..=2 arguments, got 3"
    );

    let expr = call_static(MethodFamily::StringOps, "StartsWith", vec![text_col("a")]);
    assert!(matches!(expr.to_sql(), Err(TranslateError::Malformed(_))));
}

#[test]
fn test_unsupported_constructs() {
    let expr = date_col("t").date_part("Millisecond").eq(lit(0));
    let err = expr.to_sql_with_dialect(Dialect::Access).unwrap_err();
    assert_eq!(err.to_string(), "access dialect cannot translate `t.Millisecond`");

    let expr = int_col("n").not().eq(lit(0));
    assert!(expr.to_sql_with_dialect(Dialect::Oracle).is_err());
    assert_eq!(sql(&expr, Dialect::Generic), "(~n = 0)");

    let expr = real_col("x").eq(lit(f64::NAN));
    assert!(expr.to_sql().is_err());
    assert!(expr.to_sql_parameterized(Dialect::Generic).is_ok());

    let expr = array(vec![lit(1)]).eq(int_col("x"));
    assert!(expr.to_sql().is_err());
}

#[test]
fn test_depth_limit() {
    let mut expr = int_col("a");
    for _ in 0..DEFAULT_MAX_DEPTH + 44 {
        expr = expr.add(lit(1));
    }
    let expr = expr.gt(lit(0));

    let err = expr.to_sql().unwrap_err();
    assert!(matches!(err, TranslateError::Malformed(_)));

    let deep = Translator::new(Dialect::Generic).with_max_depth(1000);
    assert!(deep.translate(&expr).unwrap().starts_with("(((("));
}
