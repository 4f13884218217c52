use crate::trip::{BusinessTrip, ModeOfTransport};

/// Aggregates private-car travel into a mileage allowance.
pub struct MileageService;

impl MileageService {
    /// Total reimbursable mileage: private-car kilometres times the
    /// per-kilometre rate currently configured.
    pub fn total(trip: &BusinessTrip, rate: f64) -> f64 {
        trip.journeys
            .iter()
            .filter(|journey| journey.mode_of_transport == ModeOfTransport::CarPrivate)
            .map(|journey| journey.distance)
            .sum::<f64>()
            * rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::Journey;
    use chrono::NaiveDate;

    fn trip_with_journeys() -> BusinessTrip {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let mut trip = BusinessTrip::new("EMP-0001", "Example GmbH", date, date);
        trip.add_journey(
            Journey::new(date, ModeOfTransport::CarPrivate, "Hamburg", "Berlin")
                .with_distance(100.0),
        );
        trip.add_journey(
            Journey::new(date, ModeOfTransport::CarRental, "Berlin", "Leipzig")
                .with_distance(190.0),
        );
        trip.add_journey(Journey::new(date, ModeOfTransport::Train, "Leipzig", "Hamburg"));
        trip
    }

    #[test]
    fn only_private_car_distance_counts() {
        let trip = trip_with_journeys();
        assert_eq!(MileageService::total(&trip, 0.3), 30.0);
    }

    #[test]
    fn rate_changes_apply_without_touching_journeys() {
        let trip = trip_with_journeys();
        assert_eq!(MileageService::total(&trip, 0.5), 50.0);
    }

    #[test]
    fn zero_rate_yields_zero() {
        let trip = trip_with_journeys();
        assert_eq!(MileageService::total(&trip, 0.0), 0.0);
    }
}
