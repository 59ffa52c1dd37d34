use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeosliceError {
    #[error("Search error: {0}")]
    SearchError(#[from] crate::search::SearchError),
    #[error("Hierarchy data error: {0}")]
    DataProcessing(#[from] geoslice_data_processing::DataError),
    #[error("Init Logging error: {0}")]
    InitLoggingError(#[from] tracing_subscriber::filter::ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GeosliceError>;
