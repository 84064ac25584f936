use pretty_assertions::assert_eq;

use gridstore_core::stmt::Value;
use gridstore_sql::{Serializer, Statement};

#[test]
fn select_all() {
    let mut params: Vec<Value> = Vec::new();
    let sql = Serializer::postgresql().serialize(&Statement::select_all("demo"), &mut params);

    assert_eq!(sql, "SELECT * FROM \"demo\";");
    assert!(params.is_empty());
}

#[test]
fn table_list_binds_the_schema_name() {
    let mut params: Vec<Value> = Vec::new();
    let sql = Serializer::postgresql().serialize(&Statement::table_list("public"), &mut params);

    assert_eq!(
        sql,
        "SELECT table_name FROM information_schema.tables WHERE table_schema = $1 ORDER BY table_name;"
    );
    assert_eq!(params, vec![Value::String("public".to_string())]);
}
