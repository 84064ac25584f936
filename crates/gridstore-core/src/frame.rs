use crate::{
    stmt::{Type, Value},
    Result,
};

/// An in-memory table: ordered named columns, each a homogeneous
/// sequence of scalar values.
///
/// A frame has no identity beyond the current call; it is rebuilt
/// from the source file or from a query result each time.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Frame {
    columns: Vec<Column>,
}

/// A single named column of a [`Frame`].
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<Value>,
}

/// Basic descriptive statistics for a numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of non-null values
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column. Every column must hold one value per row.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<Value>) -> Result<()> {
        let name = name.into();

        if !self.columns.is_empty() && values.len() != self.row_count() {
            crate::bail!(
                "column {name:?} has {} values, expected {}",
                values.len(),
                self.row_count()
            );
        }

        self.columns.push(Column { name, values });
        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |column| column.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// The values of one row, in column order. `index` must be less
    /// than [`row_count`](Self::row_count).
    pub fn row(&self, index: usize) -> impl Iterator<Item = &Value> + '_ {
        self.columns.iter().map(move |column| &column.values[index])
    }
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn non_null(&self) -> usize {
        self.values.iter().filter(|value| !value.is_null()).count()
    }

    /// Infers the application type of the column.
    ///
    /// Nulls are skipped. Mixed integer/float columns widen to float;
    /// any other mix falls back to `String`, as does an all-null
    /// column.
    pub fn infer_ty(&self) -> Type {
        let mut ty: Option<Type> = None;

        for value in &self.values {
            let Some(value_ty) = value.ty() else { continue };

            ty = match ty {
                None => Some(value_ty),
                Some(ty) => match ty.unify(value_ty) {
                    Some(ty) => Some(ty),
                    None => return Type::String,
                },
            };
        }

        ty.unwrap_or(Type::String)
    }

    /// Descriptive statistics over the non-null values of a numeric
    /// column. `None` for non-numeric columns and columns with no
    /// non-null values.
    pub fn summary(&self) -> Option<Summary> {
        if !matches!(self.infer_ty(), Type::I64 | Type::F64) {
            return None;
        }

        let mut count = 0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;

        for value in self.values.iter().filter_map(Value::as_f64) {
            count += 1;
            min = min.min(value);
            max = max.max(value);
            sum += value;
        }

        if count == 0 {
            return None;
        }

        Some(Summary {
            count,
            min,
            max,
            mean: sum / count as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Frame {
        let mut frame = Frame::new();
        frame
            .push_column("id", vec![1i64.into(), 2i64.into(), 3i64.into()])
            .unwrap();
        frame
            .push_column("name", vec!["a".into(), Value::Null, "c".into()])
            .unwrap();
        frame
    }

    #[test]
    fn row_and_column_counts() {
        let frame = frame();
        assert_eq!(frame.row_count(), 3);
        assert_eq!(frame.column_count(), 2);
        assert!(!frame.is_empty());
        assert!(Frame::new().is_empty());
    }

    #[test]
    fn row_iterates_in_column_order() {
        let frame = frame();
        let row: Vec<&Value> = frame.row(1).collect();
        assert_eq!(row, vec![&Value::I64(2), &Value::Null]);
    }

    #[test]
    fn push_column_rejects_length_mismatch() {
        let mut frame = frame();
        let err = frame
            .push_column("bad", vec![Value::Null])
            .unwrap_err();
        assert!(err.to_string().contains("expected 3"));
    }

    #[test]
    fn infer_homogeneous() {
        assert_eq!(
            Column::new("a", vec![1i64.into(), Value::Null, 2i64.into()]).infer_ty(),
            Type::I64
        );
        assert_eq!(
            Column::new("b", vec![1.5.into(), 2.5.into()]).infer_ty(),
            Type::F64
        );
        assert_eq!(
            Column::new("c", vec![true.into(), false.into()]).infer_ty(),
            Type::Bool
        );
    }

    #[test]
    fn infer_numeric_mix_widens() {
        let column = Column::new("a", vec![1i64.into(), 2.5.into()]);
        assert_eq!(column.infer_ty(), Type::F64);
    }

    #[test]
    fn infer_mixed_is_string() {
        let column = Column::new("a", vec![1i64.into(), "x".into()]);
        assert_eq!(column.infer_ty(), Type::String);
    }

    #[test]
    fn infer_all_null_is_string() {
        let column = Column::new("a", vec![Value::Null, Value::Null]);
        assert_eq!(column.infer_ty(), Type::String);
    }

    #[test]
    fn numeric_summary() {
        let column = Column::new("a", vec![1i64.into(), Value::Null, 3i64.into()]);
        let summary = column.summary().unwrap();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 3.0);
        assert_eq!(summary.mean, 2.0);
    }

    #[test]
    fn text_column_has_no_summary() {
        let column = Column::new("a", vec!["x".into()]);
        assert_eq!(column.summary(), None);
        assert_eq!(column.non_null(), 1);
    }
}
