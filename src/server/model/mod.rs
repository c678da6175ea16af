pub(crate) mod config;
pub(crate) mod headers;
pub(crate) mod order;
pub(crate) mod payment;

/// (id, name, amount) rows shared by the order and payment listings
pub(crate) const CATALOG: [(i64, &str, f64); 3] = [
    (1, "book", 1234.00),
    (2, "cars", 1224.00),
    (3, "disk", 1244.00),
];
