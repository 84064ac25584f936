//! Reads delimited files into a [`Frame`].
//!
//! Cells arrive as text; each column is scanned once to pick the
//! narrowest type that fits every non-empty cell, then parsed. Empty
//! cells become [`Value::Null`].

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};

use gridstore_core::{stmt::Value, Error, Frame, Result};

/// Reads a CSV or TSV file into a frame. The delimiter is picked from
/// the file extension: `tsv` and `tab` mean tab, anything else comma.
pub fn read_path(path: impl AsRef<Path>) -> Result<Frame> {
    let path = path.as_ref();

    let delimiter = match path.extension().and_then(|ext| ext.to_str()) {
        Some("tsv") | Some("tab") => b'\t',
        _ => b',',
    };

    let file = std::fs::File::open(path).map_err(Error::parse)?;
    from_reader(file, delimiter)
}

/// Reads delimited data into a frame. The first record is the header.
pub fn from_reader(rdr: impl std::io::Read, delimiter: u8) -> Result<Frame> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(rdr);

    let headers: Vec<String> = reader
        .headers()
        .map_err(Error::parse)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut cells: Vec<Vec<String>> = headers.iter().map(|_| Vec::new()).collect();

    for record in reader.records() {
        let record = record.map_err(Error::parse)?;
        for (index, column) in cells.iter_mut().enumerate() {
            column.push(record.get(index).unwrap_or("").to_string());
        }
    }

    let mut frame = Frame::new();
    for (header, column) in headers.into_iter().zip(cells) {
        let ty = classify(&column);
        let values = column
            .iter()
            .map(|cell| parse_cell(cell.trim(), ty))
            .collect();
        frame.push_column(header, values)?;
    }

    Ok(frame)
}

/// The narrowest cell type a text column parses as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellTy {
    I64,
    F64,
    Timestamp,
    String,
}

/// Scans a column of raw cells and picks its type. Empty cells are
/// skipped; integer and float cells unify to float; any other mix
/// falls back to text, as does an all-empty column.
fn classify(cells: &[String]) -> CellTy {
    let mut ty: Option<CellTy> = None;

    for cell in cells {
        let cell = cell.trim();
        if cell.is_empty() {
            continue;
        }

        let cell_ty = if cell.parse::<i64>().is_ok() {
            CellTy::I64
        } else if cell.parse::<f64>().is_ok() {
            CellTy::F64
        } else if parse_timestamp(cell).is_some() {
            CellTy::Timestamp
        } else {
            return CellTy::String;
        };

        ty = match (ty, cell_ty) {
            (None, ty) => Some(ty),
            (Some(ty), cell_ty) if ty == cell_ty => Some(ty),
            (Some(CellTy::I64), CellTy::F64) | (Some(CellTy::F64), CellTy::I64) => {
                Some(CellTy::F64)
            }
            _ => return CellTy::String,
        };
    }

    ty.unwrap_or(CellTy::String)
}

fn parse_cell(cell: &str, ty: CellTy) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }

    let parsed = match ty {
        CellTy::I64 => cell.parse::<i64>().ok().map(Value::I64),
        CellTy::F64 => cell.parse::<f64>().ok().map(Value::F64),
        CellTy::Timestamp => parse_timestamp(cell).map(Value::Timestamp),
        CellTy::String => Some(Value::String(cell.to_string())),
    };

    parsed.unwrap_or_else(|| Value::String(cell.to_string()))
}

fn parse_timestamp(cell: &str) -> Option<NaiveDateTime> {
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(value) = NaiveDateTime::parse_from_str(cell, format) {
            return Some(value);
        }
    }

    NaiveDate::parse_from_str(cell, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstore_core::stmt::Type;

    fn read(data: &str) -> Frame {
        from_reader(data.as_bytes(), b',').unwrap()
    }

    #[test]
    fn typed_columns() {
        let frame = read("id,score,label\n1,1.5,north\n2,2.5,south\n");

        assert_eq!(frame.column("id").unwrap().infer_ty(), Type::I64);
        assert_eq!(frame.column("score").unwrap().infer_ty(), Type::F64);
        assert_eq!(frame.column("label").unwrap().infer_ty(), Type::String);
        assert_eq!(
            frame.column("id").unwrap().values(),
            &[Value::I64(1), Value::I64(2)]
        );
    }

    #[test]
    fn empty_cells_are_null() {
        let frame = read("id,label\n1,\n,x\n");

        assert_eq!(
            frame.column("id").unwrap().values(),
            &[Value::I64(1), Value::Null]
        );
        assert_eq!(
            frame.column("label").unwrap().values(),
            &[Value::Null, Value::String("x".into())]
        );
    }

    #[test]
    fn numeric_mix_widens_to_float() {
        let frame = read("amount\n1\n2.5\n");
        assert_eq!(
            frame.column("amount").unwrap().values(),
            &[Value::F64(1.0), Value::F64(2.5)]
        );
    }

    #[test]
    fn mixed_column_stays_text() {
        let frame = read("v\n1\nbanana\n");
        assert_eq!(
            frame.column("v").unwrap().values(),
            &[Value::String("1".into()), Value::String("banana".into())]
        );
    }

    #[test]
    fn dates_and_datetimes() {
        let frame = read("day,at\n2024-01-02,2024-01-02 03:04:05\n");

        let day = frame.column("day").unwrap().values()[0].clone();
        let at = frame.column("at").unwrap().values()[0].clone();

        assert_eq!(
            day,
            Value::Timestamp(
                NaiveDate::from_ymd_opt(2024, 1, 2)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap()
            )
        );
        assert_eq!(
            at,
            Value::Timestamp(
                NaiveDate::from_ymd_opt(2024, 1, 2)
                    .unwrap()
                    .and_hms_opt(3, 4, 5)
                    .unwrap()
            )
        );
    }

    #[test]
    fn all_empty_column_is_text() {
        let frame = read("a,b\n1,\n2,\n");
        assert_eq!(frame.column("b").unwrap().infer_ty(), Type::String);
        assert_eq!(frame.column("b").unwrap().non_null(), 0);
    }

    #[test]
    fn tab_delimited() {
        let frame = from_reader("a\tb\n1\tx\n".as_bytes(), b'\t').unwrap();
        assert_eq!(frame.column_count(), 2);
        assert_eq!(frame.column("a").unwrap().values(), &[Value::I64(1)]);
    }
}
