//! Per-diem amount calculation against a region's rate table.

use crate::trip::{BusinessTrip, TripRegion, FULL_DAY_END, FULL_DAY_START};

/// Share of the whole-day rate deducted when breakfast was provided.
pub const BREAKFAST_SHARE: f64 = 0.2;
/// Share of the whole-day rate deducted when lunch was provided.
pub const LUNCH_SHARE: f64 = 0.4;
/// Share of the whole-day rate deducted when dinner was provided.
pub const DINNER_SHARE: f64 = 0.4;

/// Computes allowance amounts and trip-level totals.
pub struct AllowanceService;

impl AllowanceService {
    /// Normalizes whole-day allowances to the 00:00–23:59 bounds.
    pub fn apply_whole_day_bounds(trip: &mut BusinessTrip) {
        for allowance in &mut trip.allowances {
            if allowance.whole_day {
                allowance.from_time = *FULL_DAY_START;
                allowance.to_time = *FULL_DAY_END;
            }
        }
    }

    /// Recomputes every allowance amount from the region's rates.
    ///
    /// Meal deductions are always taken as shares of the whole-day rate,
    /// also on arrival/departure days where the base is smaller; the
    /// result is floored at zero.
    pub fn apply_region_rates(trip: &mut BusinessTrip, region: &TripRegion) {
        for allowance in &mut trip.allowances {
            let mut amount = if allowance.whole_day {
                region.whole_day
            } else {
                region.arrival_or_departure
            };

            if allowance.breakfast_was_provided {
                amount -= region.whole_day * BREAKFAST_SHARE;
            }
            if allowance.lunch_was_provided {
                amount -= region.whole_day * LUNCH_SHARE;
            }
            if allowance.dinner_was_provided {
                amount -= region.whole_day * DINNER_SHARE;
            }
            if !allowance.accommodation_was_provided {
                amount += region.accommodation;
            }

            allowance.amount = amount.max(0.0);
        }
    }

    /// Sum of all allowance amounts; zero for an empty list.
    pub fn total_allowance(trip: &BusinessTrip) -> f64 {
        trip.allowances.iter().map(|allowance| allowance.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::Allowance;
    use chrono::{NaiveDate, NaiveTime};

    fn trip() -> BusinessTrip {
        BusinessTrip::new(
            "EMP-0001",
            "Example GmbH",
            NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
        )
    }

    fn region() -> TripRegion {
        TripRegion::new("Germany", 28.0, 14.0).with_accommodation(20.0)
    }

    #[test]
    fn whole_day_bounds_are_applied_and_idempotent() {
        let mut trip = trip();
        let mut allowance = Allowance::whole_day(trip.from_date);
        allowance.from_time = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
        allowance.to_time = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
        trip.add_allowance(allowance);

        for _ in 0..2 {
            AllowanceService::apply_whole_day_bounds(&mut trip);
            assert_eq!(trip.allowances[0].from_time, *FULL_DAY_START);
            assert_eq!(trip.allowances[0].to_time, *FULL_DAY_END);
        }
    }

    #[test]
    fn segment_times_are_left_alone() {
        let mut trip = trip();
        let from = NaiveTime::from_hms_opt(14, 0, 0).unwrap();
        let to = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
        trip.add_allowance(Allowance::segment(trip.from_date, from, to));

        AllowanceService::apply_whole_day_bounds(&mut trip);
        assert_eq!(trip.allowances[0].from_time, from);
        assert_eq!(trip.allowances[0].to_time, to);
    }

    #[test]
    fn meal_deductions_come_off_the_whole_day_rate() {
        let mut trip = trip();
        let mut allowance = Allowance::whole_day(trip.from_date);
        allowance.breakfast_was_provided = true;
        allowance.accommodation_was_provided = true;
        trip.add_allowance(allowance);

        AllowanceService::apply_region_rates(&mut trip, &region());
        // 28 - 28 * 0.2, no accommodation addition
        assert_eq!(trip.allowances[0].amount, 22.4);
    }

    #[test]
    fn accommodation_rate_is_added_when_lodging_was_not_provided() {
        let mut trip = trip();
        trip.add_allowance(Allowance::whole_day(trip.from_date));

        AllowanceService::apply_region_rates(&mut trip, &region());
        assert_eq!(trip.allowances[0].amount, 48.0);
    }

    #[test]
    fn stacked_deductions_floor_at_zero_on_segment_days() {
        let mut trip = trip();
        let mut allowance = Allowance::segment(
            trip.from_date,
            NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        );
        allowance.breakfast_was_provided = true;
        allowance.lunch_was_provided = true;
        allowance.dinner_was_provided = true;
        allowance.accommodation_was_provided = true;
        trip.add_allowance(allowance);

        AllowanceService::apply_region_rates(&mut trip, &region());
        // 14 - 28 * (0.2 + 0.4 + 0.4) is well below zero before the floor
        assert_eq!(trip.allowances[0].amount, 0.0);
    }

    #[test]
    fn total_allowance_sums_all_entries() {
        let mut trip = trip();
        assert_eq!(AllowanceService::total_allowance(&trip), 0.0);

        trip.add_allowance(Allowance::whole_day(trip.from_date));
        trip.add_allowance(Allowance::whole_day(trip.to_date));
        AllowanceService::apply_region_rates(&mut trip, &region());

        assert_eq!(AllowanceService::total_allowance(&trip), 96.0);
    }
}
