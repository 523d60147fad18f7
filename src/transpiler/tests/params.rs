//! Parameter binding: order, reuse, policies and type descriptors.

use pretty_assertions::assert_eq;

use crate::prelude::*;

#[test]
fn test_params_follow_text_order() {
    let expr = int_col("a")
        .eq(lit(1))
        .and(text_col("b").eq(lit("x")))
        .or(int_col("c").gt(lit(2)));
    let result = expr.to_sql_parameterized(Dialect::Generic).unwrap();

    assert_eq!(result.sql, "(((a = @p0) and (b = @p1)) or (c > @p2))");
    let names: Vec<&str> = result.params.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["p0", "p1", "p2"]);
    assert_eq!(result.params[0].value, Value::I32(1));
    assert_eq!(result.params[1].value, Value::from("x"));
    assert_eq!(result.params[2].value, Value::I32(2));
}

#[test]
fn test_template_order_not_tree_order() {
    let expr = text_col("name").index_of(lit("x"), Some(lit(4))).eq(lit(2));
    let result = expr.to_sql_parameterized(Dialect::SqlServer).unwrap();

    assert_eq!(result.sql, "((CHARINDEX(@p0, name, @p1 + 1) - 1) = @p2)");
    assert_eq!(result.params[0].value, Value::from("x"));
    assert_eq!(result.params[1].value, Value::I32(4));
    assert_eq!(result.params[2].value, Value::I32(2));
}

#[test]
fn test_index_of_start_reuses_placeholders() {
    let expr = text_col("name").index_of(lit("x"), Some(lit(4))).eq(lit(2));
    let result = expr.to_sql_parameterized(Dialect::Generic).unwrap();

    assert_eq!(
        result.sql,
        "((case when POSITION(@p0 IN SUBSTRING(name FROM @p1 + 1)) = 0 then -1 \
         else POSITION(@p0 IN SUBSTRING(name FROM @p1 + 1)) + @p1 - 1 end) = @p2)"
    );
    assert_eq!(result.params.len(), 3);
    assert_eq!(result.params[1].value, Value::I32(4));
}

#[test]
fn test_equal_constants_are_not_merged() {
    let expr = text_col("a").eq(lit("x")).or(text_col("b").eq(lit("x")));
    let result = expr.to_sql_parameterized(Dialect::Generic).unwrap();
    assert_eq!(result.sql, "((a = @p0) or (b = @p1))");
    assert_eq!(result.params.len(), 2);
}

#[test]
fn test_repeated_node_shares_placeholder() {
    let expr = text_col("companyName").compare_to(lit("dr")).eq(lit(1));
    let result = expr.to_sql_parameterized(Dialect::SqlServer).unwrap();

    assert_eq!(
        result.sql,
        "((case when companyName = @p0 then 0 when companyName < @p0 then -1 else 1 end) = @p1)"
    );
    assert_eq!(result.params.len(), 2);
    assert_eq!(result.params[0].value, Value::from("dr"));
    assert_eq!(result.params[1].value, Value::I32(1));
}

#[test]
fn test_nulls_are_never_bound() {
    let expr = int_col("a").eq(null_of(HostKind::I32));
    let result = expr.to_sql_parameterized(Dialect::Generic).unwrap();
    assert_eq!(result.sql, "(a is null)");
    assert!(result.params.is_empty());

    let expr = int_col("a").coalesce(null()).gt(lit(1));
    let result = expr.to_sql_parameterized(Dialect::Generic).unwrap();
    assert_eq!(result.sql, "(COALESCE(a, NULL) > @p0)");
    assert_eq!(result.params.len(), 1);
}

#[test]
fn test_non_numeric_policy() {
    let expr = text_col("companyName")
        .length()
        .eq(lit(9))
        .and(text_col("city").eq(lit("x")))
        .and(bool_col("active").eq(lit(true)));
    let result = Translator::new(Dialect::SqlServer)
        .with_policy(ParameterPolicy::NonNumeric)
        .translate_parameterized(&expr)
        .unwrap();

    assert_eq!(
        result.sql,
        "(((LEN(companyName) = 9) and (city = @p0)) and (active = 1))"
    );
    assert_eq!(result.params.len(), 1);
    assert_eq!(result.params[0].value, Value::from("x"));
}

#[test]
fn test_inline_mode_binds_nothing() {
    let expr = text_col("companyName").starts_with(lit("dr"));
    assert_eq!(
        expr.to_sql_with_dialect(Dialect::SqlServer).unwrap(),
        "(companyName like 'dr' + '%')"
    );
}

#[test]
fn test_parameter_types() {
    let expr = text_col("s")
        .eq(lit("x"))
        .and(int_col("n").eq(lit(5)))
        .and(int_col("m").eq(typed_lit(5, HostType::nullable(HostKind::I32))))
        .and(decimal_col("d").eq(lit(rust_decimal::Decimal::new(1250, 2))));
    let result = expr.to_sql_parameterized(Dialect::Generic).unwrap();
    let params = &result.params;

    assert_eq!(params[0].query_type.sql_type, SqlType::NVarChar);
    assert_eq!(params[0].query_type.length, crate::types::UNBOUNDED_LENGTH);
    assert!(!params[0].query_type.not_null);

    assert_eq!(params[1].query_type.sql_type, SqlType::Int);
    assert!(params[1].query_type.not_null);
    assert_eq!(params[1].query_type.db_type(), DbType::Int32);

    assert!(!params[2].query_type.not_null);
    assert_eq!(params[2].host_type, HostType::nullable(HostKind::I32));

    assert_eq!(params[3].query_type.sql_type, SqlType::Decimal);
    assert_eq!(params[3].query_type.precision, 29);
    assert_eq!(params[3].query_type.scale, 4);
}

#[test]
fn test_access_string_length() {
    let expr = text_col("s").eq(lit("x"));
    let result = expr.to_sql_parameterized(Dialect::Access).unwrap();
    assert_eq!(result.params[0].query_type.length, 2000);
    assert_eq!(result.params[0].query_type.to_string(), "NVarChar(2000)");
}

#[test]
fn test_unmapped_host_type() {
    let point = typed_lit("(1, 2)", HostType::of(HostKind::Other("Point".to_string())));
    let expr = col("location").eq(point);

    let err = expr.to_sql_parameterized(Dialect::Generic).unwrap_err();
    assert!(matches!(err, TranslateError::TypeResolution { ref host_type } if host_type == "Point"));

    // inline mode never resolves a database type
    assert_eq!(expr.to_sql().unwrap(), "(location = '(1, 2)')");
}

#[test]
fn test_oracle_prefix() {
    let expr = int_col("id").eq(lit(7));
    let result = expr.to_sql_parameterized(Dialect::Oracle).unwrap();
    assert_eq!(result.sql, "(id = :p0)");
    assert_eq!(result.params[0].name, "p0");
    assert_eq!(result.to_string(), "(id = :p0)");
}

#[test]
fn test_result_serializes() {
    let expr = text_col("city").eq(lit("Hangzhou"));
    let result = expr.to_sql_parameterized(Dialect::Generic).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["sql"], "(city = @p0)");
    assert_eq!(json["params"][0]["name"], "p0");
}
