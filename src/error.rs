use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Report Error: top-level document is {0}, expected an object")]
    NotAnObject(&'static str),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),
}

pub type RsResult<T> = Result<T, ReportError>;
