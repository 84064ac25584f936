use postgres::types::{accepts, private::BytesMut, to_sql_checked, IsNull, ToSql, Type};

use gridstore_core::stmt::Value;

/// Bridges a frame [`Value`] to the PostgreSQL binary protocol.
///
/// The target type comes from the prepared statement, so a value may
/// have to bend to the column it lands in: integers narrow into
/// INTEGER columns (erroring when out of range), numerics widen into
/// DOUBLE PRECISION, and anything bound to a TEXT column is rendered
/// as text. That last case is how mixed columns and booleans reach
/// their TEXT storage type.
#[derive(Debug)]
pub(crate) struct PgValue(pub(crate) Value);

impl From<Value> for PgValue {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl ToSql for PgValue {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> std::result::Result<IsNull, Box<dyn std::error::Error + Sync + Send>>
    where
        Self: Sized,
    {
        match &self.0 {
            Value::Null => Ok(IsNull::Yes),
            Value::I64(value) => match *ty {
                Type::INT4 => match i32::try_from(*value) {
                    Ok(value) => value.to_sql(ty, out),
                    Err(_) => Err(format!(
                        "integer value {value} does not fit in an INTEGER column"
                    )
                    .into()),
                },
                Type::INT8 => value.to_sql(ty, out),
                Type::FLOAT8 => (*value as f64).to_sql(ty, out),
                Type::TEXT | Type::VARCHAR => value.to_string().to_sql(ty, out),
                _ => Err(bind_error(&self.0, ty)),
            },
            Value::F64(value) => match *ty {
                Type::FLOAT8 => value.to_sql(ty, out),
                Type::TEXT | Type::VARCHAR => value.to_string().to_sql(ty, out),
                _ => Err(bind_error(&self.0, ty)),
            },
            Value::Timestamp(value) => match *ty {
                Type::TIMESTAMP => value.to_sql(ty, out),
                Type::TEXT | Type::VARCHAR => value
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string()
                    .to_sql(ty, out),
                _ => Err(bind_error(&self.0, ty)),
            },
            Value::Bool(value) => match *ty {
                Type::BOOL => value.to_sql(ty, out),
                Type::TEXT | Type::VARCHAR => {
                    if *value { "true" } else { "false" }.to_sql(ty, out)
                }
                _ => Err(bind_error(&self.0, ty)),
            },
            Value::String(value) => match *ty {
                Type::TEXT | Type::VARCHAR => value.to_sql(ty, out),
                _ => Err(bind_error(&self.0, ty)),
            },
        }
    }

    accepts!(BOOL, INT4, INT8, FLOAT8, TIMESTAMP, TEXT, VARCHAR);
    to_sql_checked!();
}

fn bind_error(value: &Value, ty: &Type) -> Box<dyn std::error::Error + Sync + Send> {
    format!("cannot bind {value:?} to a column of type {ty}").into()
}
