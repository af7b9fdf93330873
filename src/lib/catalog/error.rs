//! Error types for loading and browsing the catalog.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Any transport, status or read failure of the catalog resource.
    #[error("failed to load the course catalog, check the CSV source")]
    Fetch,

    /// A data row without the nine expected cells.
    #[error("malformed row {index}: expected 9 cells, found {cells}")]
    MalformedRow { index: usize, cells: usize },

    #[error("unknown day token '{0}'")]
    UnknownDay(String),

    #[error("no discipline with id '{0}' in the loaded catalog")]
    UnknownDiscipline(String),

    #[error("failed to access selection file: {0}")]
    SelectionIo(#[from] std::io::Error),

    #[error("selection file is not valid JSON: {0}")]
    SelectionJson(#[from] serde_json::Error),
}
