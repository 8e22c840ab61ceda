use std::fs::File;
use std::io::Read;
use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{Dataset, RawRecord, REQUIRED_COLUMNS};
use crate::error::{ChartError, Result};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a country-year dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`           – comma-delimited with a header row
/// * `.tsv` / `.txt`  – tab-delimited with a header row
/// * `.json`          – `[{ "location": "...", "time": 1960, ... }, ...]`
/// * `.parquet`       – flat string / integer / float columns
///
/// Every format must carry `time`, `fertility_rate`, `life_expectancy`,
/// `pop_mlns` and `location`. Other columns are ignored.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv_reader(File::open(path)?, b',')?,
        "tsv" | "txt" => load_csv_reader(File::open(path)?, b'\t')?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => {
            return Err(ChartError::UnsupportedFormat {
                extension: other.to_string(),
            })
        }
    };

    log::debug!(
        "Parsed {} rows from {} ({} rejected)",
        dataset.len(),
        path.display(),
        dataset.skipped_rows
    );
    Ok(dataset.with_source(path))
}

// ---------------------------------------------------------------------------
// Delimited text loader
// ---------------------------------------------------------------------------

/// Read delimited text with a header row from any reader.
pub fn load_csv_reader<R: Read>(reader: R, delimiter: u8) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(ChartError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    let records = reader
        .deserialize::<RawRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON (`df.to_json(orient='records')`). Cells may be
/// strings or numbers; `null` becomes an empty cell.
fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path)?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let records = root
        .as_array()
        .ok_or_else(|| ChartError::Malformed("expected top-level JSON array".into()))?;

    let mut raw = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .ok_or_else(|| ChartError::Malformed(format!("row {i} is not a JSON object")))?;

        let cell = |column: &str| -> Result<String> {
            obj.get(column)
                .map(json_to_text)
                .ok_or_else(|| ChartError::MissingColumn {
                    column: column.to_string(),
                })
        };

        raw.push(RawRecord {
            location: cell("location")?,
            time: cell("time")?,
            fertility_rate: cell("fertility_rate")?,
            life_expectancy: cell("life_expectancy")?,
            pop_mlns: cell("pop_mlns")?,
        });
    }

    Ok(Dataset::from_records(raw))
}

fn json_to_text(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file written by Pandas or Polars.
fn load_parquet(path: &Path) -> Result<Dataset> {
    let file = File::open(path)?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

    let mut raw = Vec::new();
    for batch_result in reader {
        let batch = batch_result?;

        let location = required_column(&batch, "location")?;
        let time = required_column(&batch, "time")?;
        let fertility = required_column(&batch, "fertility_rate")?;
        let life = required_column(&batch, "life_expectancy")?;
        let pop = required_column(&batch, "pop_mlns")?;

        for row in 0..batch.num_rows() {
            raw.push(RawRecord {
                location: cell_text(location, row),
                time: cell_text(time, row),
                fertility_rate: cell_text(fertility, row),
                life_expectancy: cell_text(life, row),
                pop_mlns: cell_text(pop, row),
            });
        }
    }

    Ok(Dataset::from_records(raw))
}

fn required_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a ArrayRef> {
    batch
        .schema()
        .index_of(name)
        .map(|idx| batch.column(idx))
        .map_err(|_| ChartError::MissingColumn {
            column: name.to_string(),
        })
}

/// Render a single Arrow cell as text; nulls become empty strings.
fn cell_text(col: &ArrayRef, row: usize) -> String {
    if col.is_null(row) {
        return String::new();
    }
    match col.data_type() {
        DataType::Utf8 => col.as_string::<i32>().value(row).to_string(),
        DataType::LargeUtf8 => col.as_string::<i64>().value(row).to_string(),
        DataType::Int32 => col.as_primitive::<Int32Type>().value(row).to_string(),
        DataType::Int64 => col.as_primitive::<Int64Type>().value(row).to_string(),
        DataType::Float32 => col.as_primitive::<Float32Type>().value(row).to_string(),
        DataType::Float64 => col.as_primitive::<Float64Type>().value(row).to_string(),
        other => {
            log::warn!("Unsupported column type {other:?}; treating cell as empty");
            String::new()
        }
    }
}
