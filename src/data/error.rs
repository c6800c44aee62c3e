use thiserror::Error;

use crate::models::TableError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("not a readable xlsx workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),
    #[error("workbook has no worksheets")]
    NoWorksheet,
    #[error("worksheet has no header row")]
    MissingHeader,
    #[error(transparent)]
    Table(#[from] TableError),
}
