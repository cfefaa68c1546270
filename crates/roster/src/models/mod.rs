pub mod athlete;
pub mod stat_range;

pub use athlete::Athlete;
pub use stat_range::StatRange;
