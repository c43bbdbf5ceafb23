use std::collections::HashMap;
use std::fmt;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::Serialize;

/// Canonical on-disk date form used by the scan index and QC exports.
pub const DATE_FMT: &str = "%Y-%m-%d";

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FMT)
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .with_context(|| format!("unrecognized date '{}'", raw))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

/// Parses a numeric CSV field. Blank and NaN-like fields are missing.
pub fn parse_number(raw: &str) -> Result<Option<f64>> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("nan") || raw.eq_ignore_ascii_case("na") {
        return Ok(None);
    }
    let value: f64 = raw
        .parse()
        .with_context(|| format!("expected a number, got '{}'", raw))?;
    if value.is_nan() {
        return Ok(None);
    }
    Ok(Some(value))
}

/// Identity of one scan within a tracer class.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ScanKey {
    pub subject_id: String,
    pub date: NaiveDate,
}

impl ScanKey {
    pub fn new(subject_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            subject_id: subject_id.into(),
            date,
        }
    }
}

impl fmt::Display for ScanKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.subject_id, format_date(self.date))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Number(f64),
    Text(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_f64(&self) -> Result<Option<f64>> {
        match self {
            Value::Null => Ok(None),
            Value::Number(v) => Ok(Some(*v)),
            Value::Text(s) => parse_number(s),
        }
    }

    /// CSV cell text. Missing values are written as empty fields and whole
    /// numbers keep one decimal, as a float column does (`1520.0`).
    pub fn render(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Number(v) if v.is_finite() && v.fract() == 0.0 => format!("{:.1}", v),
            Value::Number(v) => v.to_string(),
            Value::Text(s) => s.clone(),
        }
    }
}

impl From<Option<f64>> for Value {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Value::Null, Value::Number)
    }
}

impl From<Option<String>> for Value {
    fn from(v: Option<String>) -> Self {
        v.map_or(Value::Null, Value::Text)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Number(if v { 1.0 } else { 0.0 })
    }
}

/// Column-major header with row-major cells; the shape every export
/// transformation operates on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Builds a table from named records. Columns appear in first-seen
    /// order; cells a record does not carry are null.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Vec<(String, Value)>>,
    {
        let mut columns: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut staged: Vec<Vec<(usize, Value)>> = Vec::new();

        for record in records {
            let mut cells = Vec::with_capacity(record.len());
            for (name, value) in record {
                let idx = match index.get(&name) {
                    Some(&idx) => idx,
                    None => {
                        let idx = columns.len();
                        index.insert(name.clone(), idx);
                        columns.push(name);
                        idx
                    }
                };
                cells.push((idx, value));
            }
            staged.push(cells);
        }

        let width = columns.len();
        let rows = staged
            .into_iter()
            .map(|cells| {
                let mut row = vec![Value::Null; width];
                for (idx, value) in cells {
                    row[idx] = value;
                }
                row
            })
            .collect();
        Self { columns, rows }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    pub fn index_of(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Removes the named columns; names that are not present are ignored.
    pub fn drop_columns(&mut self, names: &[&str]) {
        let keep: Vec<bool> = self
            .columns
            .iter()
            .map(|c| !names.contains(&c.as_str()))
            .collect();
        let mut i = 0;
        self.columns.retain(|_| {
            let k = keep[i];
            i += 1;
            k
        });
        for row in &mut self.rows {
            let mut i = 0;
            row.retain(|_| {
                let k = keep[i];
                i += 1;
                k
            });
        }
    }

    pub fn rename_columns(&mut self, pairs: &[(&str, &str)]) {
        for column in &mut self.columns {
            if let Some((_, to)) = pairs.iter().find(|(from, _)| *from == column.as_str()) {
                *column = (*to).to_string();
            }
        }
    }

    /// Sets every cell of `name` to null, appending the column if absent.
    pub fn null_column(&mut self, name: &str) {
        match self.index_of(name) {
            Some(idx) => {
                for row in &mut self.rows {
                    row[idx] = Value::Null;
                }
            }
            None => {
                self.columns.push(name.to_string());
                for row in &mut self.rows {
                    row.push(Value::Null);
                }
            }
        }
    }

    pub fn map_column<F>(&mut self, name: &str, mut f: F) -> Result<()>
    where
        F: FnMut(&Value) -> Result<Value>,
    {
        let Some(idx) = self.index_of(name) else {
            bail!("column '{}' not present", name);
        };
        for (row_no, row) in self.rows.iter_mut().enumerate() {
            row[idx] = f(&row[idx]).with_context(|| format!("column '{}' row {}", name, row_no))?;
        }
        Ok(())
    }

    /// Projects onto `order`. Returns the projected table and the names
    /// in `order` that had no source column (filled with nulls).
    pub fn select(&self, order: &[&str]) -> (Table, Vec<String>) {
        let mut missing = Vec::new();
        let sources: Vec<Option<usize>> = order
            .iter()
            .map(|name| {
                let idx = self.index_of(name);
                if idx.is_none() {
                    missing.push((*name).to_string());
                }
                idx
            })
            .collect();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                sources
                    .iter()
                    .map(|src| src.map_or(Value::Null, |i| row[i].clone()))
                    .collect()
            })
            .collect();
        let table = Table {
            columns: order.iter().map(|s| (*s).to_string()).collect(),
            rows,
        };
        (table, missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_records_unions_columns_in_first_seen_order() {
        let table = Table::from_records(vec![
            vec![("a".to_string(), Value::Number(1.0))],
            vec![
                ("b".to_string(), Value::Text("x".into())),
                ("a".to_string(), Value::Number(2.0)),
            ],
        ]);
        assert_eq!(table.columns, vec!["a", "b"]);
        assert_eq!(table.rows[0], vec![Value::Number(1.0), Value::Null]);
        assert_eq!(table.rows[1], vec![Value::Number(2.0), Value::Text("x".into())]);
    }

    #[test]
    fn drop_ignores_absent_columns() {
        let mut table = Table::from_records(vec![vec![
            ("a".to_string(), Value::Number(1.0)),
            ("b".to_string(), Value::Number(2.0)),
        ]]);
        table.drop_columns(&["b", "zzz"]);
        assert_eq!(table.columns, vec!["a"]);
        assert_eq!(table.rows[0], vec![Value::Number(1.0)]);
    }

    #[test]
    fn whole_numbers_render_as_floats() {
        assert_eq!(Value::Number(1520.0).render(), "1520.0");
        assert_eq!(Value::Number(0.0).render(), "0.0");
        assert_eq!(Value::Number(1.0423).render(), "1.0423");
        assert_eq!(Value::Null.render(), "");
    }
}
