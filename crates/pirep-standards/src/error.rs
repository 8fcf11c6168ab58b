use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("catalog {path} row {row}: {message}")]
    InvalidRow {
        path: PathBuf,
        row: usize,
        message: String,
    },

    #[error("catalog {path} defines no fields")]
    Empty { path: PathBuf },

    #[error("catalog {path} maps raw field {name} more than once")]
    DuplicateField { path: PathBuf, name: String },
}
