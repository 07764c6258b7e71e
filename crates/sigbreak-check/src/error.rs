use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Path {0} doesn't exist")]
    WorkingPath(String),

    #[error("The object {0} doesn't exist")]
    UnknownRef(String),

    #[error("Git error: {0}")]
    Git(String),

    #[error("Unknown language for file type '{0}'")]
    UnsupportedType(String),

    #[error("Configuration error: {0}")]
    Config(#[from] sigbreak_core::CoreError),
}

pub type CheckResult<T> = Result<T, CheckError>;
