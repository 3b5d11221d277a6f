#![allow(unused_imports)]
pub mod holiday_helpers;
pub mod person_helpers;
pub mod test_db;

pub use holiday_helpers::*;
pub use person_helpers::*;
pub use test_db::*;
