use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::schema::{ExportSchema, schema_for};
use crate::table::{Table, Value, parse_date};
use crate::tracer::Tracer;

/// Export dates are written month/day/two-digit-year.
pub const EXPORT_DATE_FMT: &str = "%m/%d/%y";

/// A class table in its published shape, every cell rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    pub tracer: Tracer,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Ordered columns with no source column; written as empty fields.
    pub missing: Vec<String>,
}

impl ExportTable {
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }
}

fn export_date(value: &Value) -> Result<Value> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::Text(s) if s.trim().is_empty() => Ok(Value::Null),
        Value::Text(s) => {
            let date: NaiveDate = parse_date(s)?;
            Ok(Value::Text(date.format(EXPORT_DATE_FMT).to_string()))
        }
        Value::Number(v) => anyhow::bail!("expected a date, got number {}", v),
    }
}

/// Integer string for present values, empty string for missing ones.
pub fn flag_text(value: &Value) -> Result<Value> {
    Ok(Value::Text(match value.as_f64()? {
        Some(v) => format!("{}", v.trunc() as i64),
        None => String::new(),
    }))
}

fn map_if_present<F>(table: &mut Table, name: &str, f: F) -> Result<()>
where
    F: FnMut(&Value) -> Result<Value>,
{
    if table.index_of(name).is_some() {
        table.map_column(name, f)?;
    }
    Ok(())
}

/// Applies `schema` to an internal table: drop, rename, placeholders,
/// retired columns, date reformat, flag stringification, final order.
pub fn apply_schema(schema: &ExportSchema, mut table: Table) -> Result<(Table, Vec<String>)> {
    table.drop_columns(schema.drop);
    table.rename_columns(schema.rename);
    for name in schema.placeholders {
        table.null_column(name);
    }
    for name in schema.retired {
        table.null_column(name);
    }
    map_if_present(&mut table, schema.date_column, export_date)
        .with_context(|| format!("formatting {}", schema.date_column))?;
    for name in schema.flag_columns {
        map_if_present(&mut table, name, flag_text)
            .with_context(|| format!("formatting flag column {}", name))?;
    }
    Ok(table.select(schema.columns))
}

pub fn format_export(tracer: Tracer, table: Table) -> Result<ExportTable> {
    let schema = schema_for(tracer);
    let (table, missing) = apply_schema(schema, table)
        .with_context(|| format!("formatting {} export", tracer))?;
    let rows = table
        .rows
        .iter()
        .map(|row| row.iter().map(Value::render).collect())
        .collect();
    Ok(ExportTable {
        tracer,
        columns: table.columns,
        rows,
        missing,
    })
}
