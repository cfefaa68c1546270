use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("Invalid stat range: low {low} is greater than high {high}")]
    InvalidRange { low: u32, high: u32 },
}

pub type Result<T> = std::result::Result<T, RosterError>;
