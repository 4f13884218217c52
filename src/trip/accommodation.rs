use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One lodging stay to be reimbursed through a purchase invoice draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accommodation {
    pub city: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    /// File URL of the receipt attached to the trip, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
}

impl Accommodation {
    pub fn new(city: impl Into<String>, from_date: NaiveDate, to_date: NaiveDate) -> Self {
        Self {
            city: city.into(),
            from_date,
            to_date,
            receipt: None,
        }
    }

    pub fn with_receipt(mut self, file_url: impl Into<String>) -> Self {
        self.receipt = Some(file_url.into());
        self
    }
}
