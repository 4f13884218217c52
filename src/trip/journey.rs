use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One point-to-point travel segment of a business trip.
///
/// `distance` only matters for private-car journeys; document derivation
/// resets it to zero for every other mode so the kilometres cannot be
/// reimbursed twice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Journey {
    pub date: NaiveDate,
    pub mode_of_transport: ModeOfTransport,
    #[serde(default)]
    pub distance: f64,
    pub from_location: String,
    pub to_location: String,
    /// File URL of the receipt attached to the trip, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
}

impl Journey {
    pub fn new(
        date: NaiveDate,
        mode_of_transport: ModeOfTransport,
        from_location: impl Into<String>,
        to_location: impl Into<String>,
    ) -> Self {
        Self {
            date,
            mode_of_transport,
            distance: 0.0,
            from_location: from_location.into(),
            to_location: to_location.into(),
            receipt: None,
        }
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_receipt(mut self, file_url: impl Into<String>) -> Self {
        self.receipt = Some(file_url.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// Means of transport used for a journey segment.
pub enum ModeOfTransport {
    CarPrivate,
    Car,
    CarRental,
    Taxi,
    Bus,
    Train,
    Airplane,
    PublicTransport,
    Other(String),
}

impl fmt::Display for ModeOfTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ModeOfTransport::CarPrivate => "Car (private)",
            ModeOfTransport::Car => "Car",
            ModeOfTransport::CarRental => "Car (rental)",
            ModeOfTransport::Taxi => "Taxi",
            ModeOfTransport::Bus => "Bus",
            ModeOfTransport::Train => "Train",
            ModeOfTransport::Airplane => "Airplane",
            ModeOfTransport::PublicTransport => "Public Transport",
            ModeOfTransport::Other(label) => label,
        };
        f.write_str(label)
    }
}
