use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatGenError>;

#[derive(Error, Debug)]
pub enum StatGenError {
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
