use thiserror::Error;

/// Errors raised while loading a dataset or building a chart from it.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("unsupported file extension: .{extension}")]
    UnsupportedFormat { extension: String },

    /// One of the five required columns is absent from the header.
    #[error("required column '{column}' not found")]
    MissingColumn { column: String },

    #[error("malformed input: {0}")]
    Malformed(String),

    /// Min/max requested over a sequence with no usable values.
    #[error("cannot compute range of empty '{axis}' series")]
    EmptySeries { axis: &'static str },
}

pub type Result<T> = std::result::Result<T, ChartError>;
