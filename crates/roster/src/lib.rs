pub mod error;
pub mod models;

pub use error::{Result, RosterError};
pub use models::{Athlete, StatRange};
