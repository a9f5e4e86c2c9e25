use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Cyclic dependency involving resource: {0}")]
    CyclicDependency(String),

    #[error("Invalid catalog: {0}")]
    Catalog(String),

    #[error("Model load failed: {0}")]
    ModelLoad(String),

    #[error("Import failed: {0}")]
    Import(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
