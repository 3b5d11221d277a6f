pub mod configuration;
pub mod date_range;
pub mod holiday;
pub mod person;
pub mod stats;
pub mod vacation;
pub mod weekend;

pub use configuration::*;
pub use date_range::*;
pub use holiday::*;
pub use person::*;
pub use stats::*;
pub use vacation::*;
pub use weekend::*;
