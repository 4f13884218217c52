use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{accommodation::Accommodation, allowance::Allowance, journey::Journey};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Aggregate root for one employee business trip.
///
/// Allowances, journeys and accommodations are owned by the trip; their
/// lifetime ends with it. `total_allowance` and `total_mileage_allowance`
/// are derived on every save and never entered by hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessTrip {
    pub id: Uuid,
    pub employee: String,
    pub company: String,
    pub project: Option<String>,
    pub cost_center: Option<String>,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    /// Name of the reimbursement-rate region, resolved through the host.
    pub region: Option<String>,
    #[serde(default)]
    pub status: TripStatus,
    #[serde(default)]
    pub total_allowance: f64,
    #[serde(default)]
    pub total_mileage_allowance: f64,
    #[serde(default)]
    pub allowances: Vec<Allowance>,
    #[serde(default)]
    pub journeys: Vec<Journey>,
    #[serde(default)]
    pub accommodations: Vec<Accommodation>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "BusinessTrip::schema_version_default")]
    pub schema_version: u8,
}

impl BusinessTrip {
    pub fn new(
        employee: impl Into<String>,
        company: impl Into<String>,
        from_date: NaiveDate,
        to_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            employee: employee.into(),
            company: company.into(),
            project: None,
            cost_center: None,
            from_date,
            to_date,
            region: None,
            status: TripStatus::Draft,
            total_allowance: 0.0,
            total_mileage_allowance: 0.0,
            allowances: Vec::new(),
            journeys: Vec::new(),
            accommodations: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_allowance(&mut self, allowance: Allowance) {
        self.allowances.push(allowance);
        self.touch();
    }

    pub fn add_journey(&mut self, journey: Journey) {
        self.journeys.push(journey);
        self.touch();
    }

    pub fn add_accommodation(&mut self, accommodation: Accommodation) {
        self.accommodations.push(accommodation);
        self.touch();
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.status, TripStatus::Submitted)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
/// Lifecycle state of a business trip; `Submitted` is terminal.
pub enum TripStatus {
    #[default]
    Draft,
    Submitted,
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TripStatus::Draft => "Draft",
            TripStatus::Submitted => "Submitted",
        };
        f.write_str(label)
    }
}
