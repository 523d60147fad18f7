//! The same predicates rendered by every dialect.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use test_case::test_case;

use crate::prelude::*;

#[test_case(Dialect::Generic, "(companyName like @p0 || '%')" ; "generic")]
#[test_case(Dialect::SqlServer, "(companyName like @p0 + '%')" ; "sqlserver")]
#[test_case(Dialect::SqlServerCe, "(companyName like @p0 + '%')" ; "sqlserverce")]
#[test_case(Dialect::Oracle, "(companyName like (:p0 || '%'))" ; "oracle")]
#[test_case(Dialect::Sqlite, "LIKE(@p0 || '%', companyName)" ; "sqlite")]
#[test_case(Dialect::Access, "(companyName like @p0 + '%')" ; "access")]
#[test_case(Dialect::MySql, "(companyName like CONCAT(@p0, '%'))" ; "mysql")]
fn test_starts_with(dialect: Dialect, expected: &str) {
    let expr = text_col("companyName").starts_with(lit("dr"));
    let result = expr.to_sql_parameterized(dialect).unwrap();
    assert_eq!(result.sql, expected);
    assert_eq!(result.params.len(), 1);
    assert_eq!(result.params[0].name, "p0");
    assert_eq!(result.params[0].value, Value::from("dr"));
    assert_eq!(result.params[0].query_type.sql_type, SqlType::NVarChar);
}

#[test_case(Dialect::Generic, "(CHAR_LENGTH(companyName) = 9)" ; "generic")]
#[test_case(Dialect::SqlServer, "(LEN(companyName) = 9)" ; "sqlserver")]
#[test_case(Dialect::SqlServerCe, "(LEN(companyName) = 9)" ; "sqlserverce")]
#[test_case(Dialect::Oracle, "(LENGTH(companyName) = 9)" ; "oracle")]
#[test_case(Dialect::Sqlite, "(LENGTH(companyName) = 9)" ; "sqlite")]
#[test_case(Dialect::Access, "(Len(companyName) = 9)" ; "access")]
#[test_case(Dialect::MySql, "(CHAR_LENGTH(companyName) = 9)" ; "mysql")]
fn test_string_length(dialect: Dialect, expected: &str) {
    let expr = text_col("companyName").length().eq(lit(9));
    assert_eq!(expr.to_sql_with_dialect(dialect).unwrap(), expected);
}

#[test_case(Dialect::Generic, "(EXTRACT(year from createTime) = 2015)" ; "generic")]
#[test_case(Dialect::SqlServer, "(YEAR(createTime) = 2015)" ; "sqlserver")]
#[test_case(Dialect::SqlServerCe, "(DATEPART(year, createTime) = 2015)" ; "sqlserverce")]
#[test_case(Dialect::Oracle, "(EXTRACT(year from createTime) = 2015)" ; "oracle")]
#[test_case(Dialect::Sqlite, "(STRFTIME('%Y', createTime) = 2015)" ; "sqlite")]
#[test_case(Dialect::Access, "(Year(createTime) = 2015)" ; "access")]
#[test_case(Dialect::MySql, "(YEAR(createTime) = 2015)" ; "mysql")]
fn test_year(dialect: Dialect, expected: &str) {
    let expr = date_col("createTime").year().eq(lit(2015));
    assert_eq!(expr.to_sql_with_dialect(dialect).unwrap(), expected);
}

#[test_case(Dialect::Generic, "(EXTRACT(dow from d) = 0)" ; "generic")]
#[test_case(Dialect::SqlServer, "((DATEPART(weekday, d) - 1) = 0)" ; "sqlserver")]
#[test_case(Dialect::SqlServerCe, "((DATEPART(weekday, d) - 1) = 0)" ; "sqlserverce")]
#[test_case(Dialect::Oracle, "((TO_CHAR(d, 'D') - 1) = 0)" ; "oracle")]
#[test_case(Dialect::Sqlite, "(STRFTIME('%w', d) = 0)" ; "sqlite")]
#[test_case(Dialect::Access, "((Weekday(d) - 1) = 0)" ; "access")]
#[test_case(Dialect::MySql, "((DAYOFWEEK(d) - 1) = 0)" ; "mysql")]
fn test_day_of_week_counts_from_sunday(dialect: Dialect, expected: &str) {
    let expr = date_col("d").day_of_week().eq(lit(0));
    assert_eq!(expr.to_sql_with_dialect(dialect).unwrap(), expected);
}

#[test]
fn test_null_check_is_dialect_independent() {
    let expr = text_col("companyName").eq(null());
    for dialect in Dialect::ALL {
        assert_eq!(
            expr.to_sql_with_dialect(dialect).unwrap(),
            "(companyName is null)",
            "{}",
            dialect
        );
    }
}

#[test]
fn test_conjunction_placeholders() {
    let expr = text_col("companyName")
        .eq(lit("drore"))
        .and(text_col("city").eq(lit("Hangzhou")));

    let result = expr.to_sql_parameterized(Dialect::SqlServer).unwrap();
    assert_eq!(result.sql, "((companyName = @p0) and (city = @p1))");

    let result = expr.to_sql_parameterized(Dialect::Oracle).unwrap();
    assert_eq!(result.sql, "((companyName = :p0) and (city = :p1))");
    assert_eq!(result.params[1].value, Value::from("Hangzhou"));
}

#[test]
fn test_sqlserverce_inherits_sqlserver() {
    let expr = date_col("d").date_part("Hour").eq(lit(1));
    assert_eq!(
        expr.to_sql_with_dialect(Dialect::SqlServerCe).unwrap(),
        "(DATEPART(hour, d) = 1)"
    );

    let expr = text_col("a").trim().eq(lit("x"));
    assert_eq!(
        expr.to_sql_with_dialect(Dialect::SqlServerCe).unwrap(),
        "(RTRIM(LTRIM(a)) = 'x')"
    );
}

#[test_case(Dialect::Generic, "(active = 1)" ; "generic")]
#[test_case(Dialect::Oracle, "(active = 1)" ; "oracle")]
#[test_case(Dialect::Access, "(active = -1)" ; "access")]
fn test_boolean_literal(dialect: Dialect, expected: &str) {
    let expr = bool_col("active").eq(lit(true));
    assert_eq!(expr.to_sql_with_dialect(dialect).unwrap(), expected);
}

#[test_case(Dialect::Generic, "(created > TIMESTAMP '2015-01-02 03:04:05')" ; "generic")]
#[test_case(Dialect::SqlServer, "(created > '2015-01-02 03:04:05')" ; "sqlserver")]
#[test_case(Dialect::Oracle, "(created > TO_DATE('2015-01-02 03:04:05', 'yyyy-mm-dd hh24:mi:ss'))" ; "oracle")]
#[test_case(Dialect::Sqlite, "(created > '2015-01-02 03:04:05')" ; "sqlite")]
#[test_case(Dialect::Access, "(created > #2015-01-02 03:04:05#)" ; "access")]
#[test_case(Dialect::MySql, "(created > '2015-01-02 03:04:05')" ; "mysql")]
fn test_datetime_literal(dialect: Dialect, expected: &str) {
    let when = NaiveDate::from_ymd_opt(2015, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap();
    let expr = date_col("created").gt(lit(when));
    assert_eq!(expr.to_sql_with_dialect(dialect).unwrap(), expected);
}

#[test]
fn test_string_escaping() {
    let expr = text_col("name").eq(lit("O'Brien"));
    assert_eq!(expr.to_sql().unwrap(), "(name = 'O''Brien')");

    let expr = text_col("path").eq(lit("a\\b"));
    assert_eq!(expr.to_sql_with_dialect(Dialect::MySql).unwrap(), "(path = 'a\\\\b')");
    assert_eq!(expr.to_sql_with_dialect(Dialect::SqlServer).unwrap(), "(path = 'a\\b')");
}

#[test]
fn test_byte_literals() {
    let expr = typed_col("data", ValueKind::Other).eq(lit(vec![0xCA_u8, 0xFE]));
    assert_eq!(
        expr.to_sql_with_dialect(Dialect::SqlServer).unwrap(),
        "(data = 0xCAFE)"
    );
    assert_eq!(
        expr.to_sql_with_dialect(Dialect::Oracle).unwrap(),
        "(data = HEXTORAW('CAFE'))"
    );
    assert!(expr.to_sql_with_dialect(Dialect::Access).is_err());
}

#[test]
fn test_dialect_names() {
    for dialect in Dialect::ALL {
        assert_eq!(dialect.rules().name, dialect.name());
    }
    assert_eq!(Dialect::Oracle.rules().param_prefix, ":");
    assert_eq!(Dialect::Access.rules().types.string_default_size, 2000);
}
