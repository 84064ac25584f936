use chrono::NaiveDateTime;
use postgres::{types::Type, Column, Row};

use gridstore_core::{stmt::Value, Error, Frame, Result};

/// Converts a materialized result set into a [`Frame`].
///
/// Column names and types come from the prepared statement, so an
/// empty table still reports its columns.
pub(crate) fn frame_from_rows(columns: &[Column], rows: &[Row]) -> Result<Frame> {
    let mut frame = Frame::new();

    for (index, column) in columns.iter().enumerate() {
        let mut values = Vec::with_capacity(rows.len());
        for row in rows {
            values.push(decode(row, index, column)?);
        }
        frame.push_column(column.name(), values)?;
    }

    Ok(frame)
}

/// Converts one PostgreSQL cell to a frame [`Value`]. SQL NULL maps
/// to [`Value::Null`] in every column type.
fn decode(row: &Row, index: usize, column: &Column) -> Result<Value> {
    let ty = column.type_();

    let value = if *ty == Type::INT2 {
        row.try_get::<_, Option<i16>>(index)
            .map(|v| v.map(|v| Value::I64(v as i64)))
    } else if *ty == Type::INT4 {
        row.try_get::<_, Option<i32>>(index)
            .map(|v| v.map(|v| Value::I64(v as i64)))
    } else if *ty == Type::INT8 {
        row.try_get::<_, Option<i64>>(index)
            .map(|v| v.map(Value::I64))
    } else if *ty == Type::FLOAT4 {
        row.try_get::<_, Option<f32>>(index)
            .map(|v| v.map(|v| Value::F64(v as f64)))
    } else if *ty == Type::FLOAT8 {
        row.try_get::<_, Option<f64>>(index)
            .map(|v| v.map(Value::F64))
    } else if *ty == Type::BOOL {
        row.try_get::<_, Option<bool>>(index)
            .map(|v| v.map(Value::Bool))
    } else if *ty == Type::TIMESTAMP {
        row.try_get::<_, Option<NaiveDateTime>>(index)
            .map(|v| v.map(Value::Timestamp))
    } else if *ty == Type::TEXT || *ty == Type::VARCHAR || *ty == Type::BPCHAR {
        row.try_get::<_, Option<String>>(index)
            .map(|v| v.map(Value::String))
    } else {
        return Err(Error::query(anyhow::anyhow!(
            "unsupported column type `{ty}` in column \"{}\"",
            column.name()
        )));
    };

    value
        .map(|v| v.unwrap_or(Value::Null))
        .map_err(Error::query)
}
