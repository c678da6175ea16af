use chrono::NaiveDate;
use serde::Serialize;
use crate::server::model::CATALOG;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Payment {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
}

impl Payment {
    pub fn new(id: i64, name: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            date,
        }
    }

    /// Fixed payment listing. `today` is evaluated once per record.
    pub fn listing(today: impl Fn() -> NaiveDate) -> Vec<Payment> {
        CATALOG
            .iter()
            .map(|&(id, name, amount)| Payment::new(id, name, amount, today()))
            .collect()
    }
}
