use serde::{Deserialize, Serialize};

/// Reference entity supplying the reimbursement rates of one region.
///
/// `accommodation` is the nightly addition paid when no lodging was
/// provided; `lists_accommodation` marks regions whose rate table carries
/// that addition, which also drives the "plus hotel" claim description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRegion {
    pub name: String,
    #[serde(default)]
    pub whole_day: f64,
    #[serde(default)]
    pub arrival_or_departure: f64,
    #[serde(default)]
    pub accommodation: f64,
    #[serde(default)]
    pub lists_accommodation: bool,
}

impl TripRegion {
    pub fn new(name: impl Into<String>, whole_day: f64, arrival_or_departure: f64) -> Self {
        Self {
            name: name.into(),
            whole_day,
            arrival_or_departure,
            accommodation: 0.0,
            lists_accommodation: false,
        }
    }

    pub fn with_accommodation(mut self, rate: f64) -> Self {
        self.accommodation = rate;
        self.lists_accommodation = true;
        self
    }
}
