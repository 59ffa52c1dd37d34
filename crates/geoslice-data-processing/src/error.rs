use thiserror::Error;
pub type Result<T> = std::result::Result<T, DataError>;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Hierarchy node under '{parent}' has an empty name")]
    EmptyName { parent: String },
    #[error("Duplicate name '{name}' under '{parent}'")]
    DuplicateName { parent: String, name: String },
    #[error("Environment variable {var} is set but empty")]
    EnvVar { var: &'static str },
}
