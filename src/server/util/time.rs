use chrono::NaiveDate;

pub(crate) mod helper {
    #[cfg(not(test))]
    pub use super::get_local_today;
    #[cfg(test)]
    pub use super::mock_chrono::get_local_today;
}


#[cfg(not(test))]
pub fn get_local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
