#![allow(dead_code)]
use chrono::NaiveDate;
use leavetrack::{
    domain::entities::{Country, Holiday},
    infrastructure::persistence::Database,
};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Insert a holiday directly into the store
pub async fn create_test_holiday(
    db: &Database,
    on: NaiveDate,
    name: &str,
    country: Country,
    region: Option<&str>,
) -> Holiday {
    let holiday = Holiday::new(on, name.to_string(), country, region.map(str::to_string));
    db.create_holiday(&holiday)
        .await
        .expect("Failed to create holiday");
    holiday
}
