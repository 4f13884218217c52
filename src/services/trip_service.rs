//! Save/submit lifecycle orchestration for business trips.

use tracing::{debug, info};

use crate::{
    errors::TripError,
    host::TripHost,
    services::{AllowanceService, DerivationOutcome, DerivationService, MileageService},
    trip::{BusinessTrip, TripStatus},
};

/// Drives the trip state machine: repeatable draft saves, one terminal
/// submit.
pub struct TripService;

impl TripService {
    /// Validates and recomputes a trip before it is persisted.
    ///
    /// Runs on every save, also after submission: date validation,
    /// whole-day time defaults, regional amounts, then the totals that
    /// depend on them. A region that cannot be resolved leaves all
    /// amounts untouched.
    pub fn save<H: TripHost>(trip: &mut BusinessTrip, host: &H) -> Result<(), TripError> {
        Self::validate_dates(trip)?;

        AllowanceService::apply_whole_day_bounds(trip);
        match trip.region.as_deref().and_then(|name| host.region(name)) {
            Some(region) => AllowanceService::apply_region_rates(trip, &region),
            None => debug!(trip = %trip.id, "no resolvable region, amounts left unchanged"),
        }

        trip.total_allowance = AllowanceService::total_allowance(trip);
        trip.total_mileage_allowance =
            MileageService::total(trip, host.settings().mileage_allowance);
        trip.touch();
        Ok(())
    }

    /// Submits a trip, deriving financial documents exactly once.
    ///
    /// `derivation_enabled` is the capability gate for the companion
    /// expense module; when it is off, or the trip has no allowances,
    /// submission completes without documents. A submitted trip cannot
    /// be submitted again.
    pub fn submit<H: TripHost>(
        trip: &mut BusinessTrip,
        host: &mut H,
        derivation_enabled: bool,
    ) -> Result<Option<DerivationOutcome>, TripError> {
        if trip.is_submitted() {
            return Err(TripError::AlreadySubmitted(trip.id));
        }

        Self::save(trip, host)?;
        trip.status = TripStatus::Submitted;
        info!(trip = %trip.id, "business trip submitted");

        if !derivation_enabled {
            debug!(trip = %trip.id, "document derivation disabled, skipping");
            return Ok(None);
        }
        if trip.allowances.is_empty() {
            debug!(trip = %trip.id, "trip has no allowances, skipping derivation");
            return Ok(None);
        }

        DerivationService::derive(trip, host).map(Some)
    }

    fn validate_dates(trip: &BusinessTrip) -> Result<(), TripError> {
        if trip.from_date > trip.to_date {
            return Err(TripError::DateOrder {
                from: trip.from_date,
                to: trip.to_date,
            });
        }
        Ok(())
    }
}
