use crate::domain::entities::{Country, Holiday};
use crate::domain::errors::DomainResult;
use crate::infrastructure::persistence::Database;
use chrono::NaiveDate;

/// Argentine national holidays, 2025 and 2026
const ARGENTINA_HOLIDAYS: &[(i32, u32, u32, &str)] = &[
    (2025, 1, 1, "New Year's Day"),
    (2025, 2, 24, "Carnival"),
    (2025, 2, 25, "Carnival"),
    (2025, 3, 24, "National Day of Remembrance for Truth and Justice"),
    (2025, 4, 2, "Malvinas War Veterans Day"),
    (2025, 4, 18, "Good Friday"),
    (2025, 5, 1, "Labour Day"),
    (2025, 5, 25, "May Revolution Day"),
    (2025, 6, 16, "Anniversary of the Death of General Martín Miguel de Güemes"),
    (2025, 6, 20, "Flag Day"),
    (2025, 7, 9, "Independence Day"),
    (2025, 8, 17, "Anniversary of the Death of General José de San Martín"),
    (2025, 10, 12, "Day of Respect for Cultural Diversity"),
    (2025, 11, 24, "National Sovereignty Day"),
    (2025, 12, 8, "Immaculate Conception Day"),
    (2025, 12, 25, "Christmas Day"),
    (2026, 1, 1, "New Year's Day"),
    (2026, 2, 16, "Carnival"),
    (2026, 2, 17, "Carnival"),
    (2026, 3, 24, "National Day of Remembrance for Truth and Justice"),
    (2026, 4, 2, "Malvinas War Veterans Day"),
    (2026, 4, 3, "Good Friday"),
    (2026, 5, 1, "Labour Day"),
    (2026, 5, 25, "May Revolution Day"),
    (2026, 6, 15, "Anniversary of the Death of General Martín Miguel de Güemes"),
    (2026, 6, 20, "Flag Day"),
    (2026, 7, 9, "Independence Day"),
    (2026, 8, 17, "Anniversary of the Death of General José de San Martín"),
    (2026, 10, 12, "Day of Respect for Cultural Diversity"),
    (2026, 11, 23, "National Sovereignty Day"),
    (2026, 12, 8, "Immaculate Conception Day"),
    (2026, 12, 25, "Christmas Day"),
];

pub fn argentina_holidays() -> Vec<Holiday> {
    ARGENTINA_HOLIDAYS
        .iter()
        .filter_map(|&(year, month, day, name)| {
            NaiveDate::from_ymd_opt(year, month, day)
                .map(|date| Holiday::new(date, name.to_string(), Country::AR, None))
        })
        .collect()
}

impl Database {
    /// Seed the national holiday calendar when the table is empty.
    ///
    /// Returns the number of holidays inserted.
    pub async fn seed_holidays(&self) -> DomainResult<usize> {
        if self.count_holidays().await? > 0 {
            tracing::debug!("Holiday table already populated, skipping seed");
            return Ok(0);
        }

        let inserted = self.insert_holidays(&argentina_holidays()).await?;

        tracing::info!("Seeded {} holidays", inserted);
        Ok(inserted)
    }
}
