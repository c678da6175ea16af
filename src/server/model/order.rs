use serde::Serialize;
use crate::server::model::CATALOG;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Order {
    pub id: i64,
    pub name: String,
    pub amount: f64,
}

impl Order {
    pub fn new(id: i64, name: impl Into<String>, amount: f64) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
        }
    }

    /// Fixed order listing, rebuilt on every call
    pub fn listing() -> Vec<Order> {
        CATALOG
            .iter()
            .map(|&(id, name, amount)| Order::new(id, name, amount))
            .collect()
    }
}
