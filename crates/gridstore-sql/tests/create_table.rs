use pretty_assertions::assert_eq;

use gridstore_core::{schema, stmt as core_stmt};
use gridstore_sql::{Serializer, Statement};

fn make_column(name: &str, ty: core_stmt::Type) -> schema::Column {
    schema::Column {
        name: name.to_string(),
        ty,
        storage_ty: schema::Type::from_app(ty),
    }
}

fn make_table(name: &str, columns: Vec<schema::Column>) -> schema::Table {
    schema::Table {
        name: name.to_string(),
        columns,
    }
}

#[test]
fn create_table_with_all_storage_types() {
    let table = make_table(
        "demo",
        vec![
            make_column("id", core_stmt::Type::I64),
            make_column("label", core_stmt::Type::String),
            make_column("score", core_stmt::Type::F64),
            make_column("created_at", core_stmt::Type::Timestamp),
        ],
    );

    let mut params = Vec::new();
    let sql = Serializer::postgresql().serialize(&Statement::create_table(&table), &mut params);

    assert_eq!(
        sql,
        "CREATE TABLE \"demo\" (\n    \"id\" INTEGER,\n    \"label\" TEXT,\n    \"score\" DOUBLE PRECISION,\n    \"created_at\" TIMESTAMP\n);"
    );
    assert!(params.is_empty(), "DDL should not bind any parameters");
}

#[test]
fn create_table_if_not_exists() {
    let table = make_table("demo", vec![make_column("id", core_stmt::Type::I64)]);

    let mut params = Vec::new();
    let sql = Serializer::postgresql().serialize(
        &Statement::create_table_if_not_exists(&table),
        &mut params,
    );

    assert_eq!(
        sql,
        "CREATE TABLE IF NOT EXISTS \"demo\" (\n    \"id\" INTEGER\n);"
    );
}

#[test]
fn boolean_columns_are_stored_as_text() {
    let table = make_table("flags", vec![make_column("active", core_stmt::Type::Bool)]);

    let mut params = Vec::new();
    let sql = Serializer::postgresql().serialize(&Statement::create_table(&table), &mut params);

    assert_eq!(sql, "CREATE TABLE \"flags\" (\n    \"active\" TEXT\n);");
}
