use pretty_assertions::assert_eq;

use gridstore_core::stmt::Value;
use gridstore_sql::{Serializer, Statement};

#[test]
fn multi_row_insert_binds_every_value() {
    let stmt = Statement::insert(
        "demo",
        vec!["id".to_string(), "label".to_string()],
        vec![
            vec![Value::I64(1), Value::String("a".to_string())],
            vec![Value::I64(2), Value::Null],
        ],
    );

    let mut params: Vec<Value> = Vec::new();
    let sql = Serializer::postgresql().serialize(&stmt, &mut params);

    assert_eq!(
        sql,
        "INSERT INTO \"demo\" (\"id\", \"label\") VALUES ($1, $2), ($3, $4);"
    );
    assert_eq!(
        params,
        vec![
            Value::I64(1),
            Value::String("a".to_string()),
            Value::I64(2),
            Value::Null,
        ]
    );
}

#[test]
fn values_never_appear_in_the_sql_text() {
    let stmt = Statement::insert(
        "demo",
        vec!["note".to_string()],
        vec![vec![Value::String("'); DROP TABLE x; --".to_string())]],
    );

    let mut params: Vec<Value> = Vec::new();
    let sql = Serializer::postgresql().serialize(&stmt, &mut params);

    assert_eq!(sql, "INSERT INTO \"demo\" (\"note\") VALUES ($1);");
    assert!(!sql.contains("DROP TABLE x"));
    assert_eq!(params.len(), 1);
}
