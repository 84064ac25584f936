use std::collections::HashSet;

use postgres::types::ToSql;
use tokio_postgres::error::SqlState;
use tracing::{debug, info};

use crate::{connect::Connector, row, Error, Frame, PgValue, Result};
use gridstore_core::{ident, schema, stmt};
use gridstore_sql as sql;

/// Rows inserted and committed per INSERT statement.
const BATCH_SIZE: usize = 1000;

/// What to do when saving over an existing table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveMode {
    /// Drop any existing table with this name, then create it fresh.
    /// Destructive and irreversible; there is no versioning.
    #[default]
    Replace,

    /// Create the table only if missing and append rows to it.
    Append,
}

/// The persistence gateway: the only component that talks to the
/// relational store.
///
/// Each operation acquires a fresh connection from the [`Connector`],
/// performs its work, and releases the connection on every exit path.
#[derive(Debug)]
pub struct Gateway {
    connector: Connector,
}

impl Gateway {
    pub fn new(connector: Connector) -> Self {
        Self { connector }
    }

    /// Table names currently present in the public schema,
    /// alphabetically sorted.
    pub async fn list_tables(&self) -> Result<Vec<String>> {
        let client = self.connector.connect().await?;

        let mut params = Vec::new();
        let sql_text = sql::Serializer::postgresql()
            .serialize(&sql::Statement::table_list("public"), &mut params);

        let params: Vec<PgValue> = params.into_iter().map(PgValue::from).collect();
        let args: Vec<&(dyn ToSql + Sync)> = params.iter().map(|param| param as _).collect();

        let rows = client.query(&sql_text, &args).await.map_err(Error::query)?;
        Ok(rows.iter().map(|row| row.get(0)).collect())
    }

    /// Materializes the whole table as a [`Frame`]. Tables are assumed
    /// small; there is no paging.
    pub async fn load_table(&self, name: &str) -> Result<Frame> {
        let client = self.connector.connect().await?;

        let mut params: Vec<stmt::Value> = Vec::new();
        let sql_text = sql::Serializer::postgresql()
            .serialize(&sql::Statement::select_all(name), &mut params);

        // Prepare first so an empty table still reports its columns.
        let prepared = client
            .prepare(&sql_text)
            .await
            .map_err(|err| load_error(name, err))?;
        let rows = client.query(&prepared, &[]).await.map_err(Error::query)?;

        let frame = row::frame_from_rows(prepared.columns(), &rows)?;
        debug!(table = name, rows = frame.row_count(), "loaded table");
        Ok(frame)
    }

    /// Saves a frame under the given name and returns the number of
    /// rows written.
    ///
    /// Rows are inserted in batches of [`BATCH_SIZE`], each committed
    /// on its own. A failure partway through leaves the batches
    /// committed so far in place; there is no retry and no cross-batch
    /// atomicity.
    pub async fn save_table(&self, frame: &Frame, name: &str, mode: SaveMode) -> Result<u64> {
        let table = derive_table(name, frame)?;

        let client = self.connector.connect().await?;
        let serializer = sql::Serializer::postgresql();
        let mut params: Vec<stmt::Value> = Vec::new();

        if mode == SaveMode::Replace {
            let sql_text = serializer.serialize(
                &sql::Statement::drop_table_if_exists(table.name.clone()),
                &mut params,
            );
            client.execute(&sql_text, &[]).await.map_err(Error::query)?;
        }

        let create = match mode {
            SaveMode::Replace => sql::Statement::create_table(&table),
            SaveMode::Append => sql::Statement::create_table_if_not_exists(&table),
        };
        let sql_text = serializer.serialize(&create, &mut params);
        client.execute(&sql_text, &[]).await.map_err(Error::query)?;

        let mut written = 0u64;
        for insert in plan_insert_batches(&table, frame) {
            let rows = insert.row_count() as u64;

            let mut params = Vec::new();
            let sql_text = serializer.serialize(&insert.into(), &mut params);

            let params: Vec<PgValue> = params.into_iter().map(PgValue::from).collect();
            let args: Vec<&(dyn ToSql + Sync)> = params.iter().map(|param| param as _).collect();

            // Each batch commits on its own; a failure here leaves the
            // earlier batches in place.
            client.execute(&sql_text, &args).await.map_err(Error::query)?;

            written += rows;
            debug!(table = %table.name, written, "committed batch");
        }

        info!(table = %table.name, rows = written, ?mode, "saved table");
        Ok(written)
    }

    /// Drops the table if it exists. Idempotent.
    pub async fn drop_table(&self, name: &str) -> Result<()> {
        let client = self.connector.connect().await?;

        let mut params: Vec<stmt::Value> = Vec::new();
        let sql_text = sql::Serializer::postgresql()
            .serialize(&sql::Statement::drop_table_if_exists(name), &mut params);

        client.execute(&sql_text, &[]).await.map_err(Error::query)?;
        info!(table = name, "dropped table");
        Ok(())
    }
}

fn load_error(name: &str, err: tokio_postgres::Error) -> Error {
    if err.code() == Some(&SqlState::UNDEFINED_TABLE) {
        Error::query(anyhow::anyhow!("table \"{name}\" does not exist"))
    } else {
        Error::query(err)
    }
}

/// Derives the table schema a frame will be saved under.
///
/// Identifiers are sanitized here, and nowhere else, before reaching
/// the store. Collisions after sanitization fail fast instead of
/// silently overwriting a column.
fn derive_table(name: &str, frame: &Frame) -> Result<schema::Table> {
    let table_name = ident::sanitize(name);
    if table_name.is_empty() {
        return Err(Error::schema(format!(
            "table name {name:?} sanitizes to an empty identifier"
        )));
    }

    if frame.column_count() == 0 {
        return Err(Error::schema("cannot save a table with no columns"));
    }

    let mut seen = HashSet::new();
    let mut columns = Vec::with_capacity(frame.column_count());

    for column in frame.columns() {
        let column_name = ident::sanitize(column.name());
        if column_name.is_empty() {
            return Err(Error::schema(format!(
                "column name {:?} sanitizes to an empty identifier",
                column.name()
            )));
        }
        if !seen.insert(column_name.clone()) {
            return Err(Error::schema(format!(
                "column name {:?} collides with another column after sanitization (both become \"{column_name}\")",
                column.name()
            )));
        }

        let ty = column.infer_ty();
        columns.push(schema::Column {
            name: column_name,
            ty,
            storage_ty: schema::Type::from_app(ty),
        });
    }

    Ok(schema::Table {
        name: table_name,
        columns,
    })
}

/// Splits a frame into per-batch INSERT statements of at most
/// [`BATCH_SIZE`] rows each.
fn plan_insert_batches(table: &schema::Table, frame: &Frame) -> Vec<sql::stmt::Insert> {
    let columns: Vec<String> = table.columns.iter().map(|c| c.name.clone()).collect();
    let row_count = frame.row_count();

    let mut batches = Vec::new();
    let mut start = 0;

    while start < row_count {
        let end = usize::min(start + BATCH_SIZE, row_count);
        let rows: Vec<Vec<stmt::Value>> = (start..end)
            .map(|index| frame.row(index).cloned().collect())
            .collect();

        batches.push(sql::stmt::Insert {
            table: table.name.clone(),
            columns: columns.clone(),
            rows,
        });

        start = end;
    }

    batches
}
