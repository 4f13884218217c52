//! End-to-end derivation scenarios across the submit boundary.

use chrono::NaiveDate;
use trip_core::{
    errors::TripError,
    host::MemoryHost,
    services::TripService,
    trip::{
        Allowance, BusinessTrip, Journey, ModeDefaults, ModeOfTransport, TripRegion, TripSettings,
    },
};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

fn configured_host() -> MemoryHost {
    let mut settings = TripSettings::default();
    settings.mileage_allowance = 0.3;
    settings.expense_claim_type = "Travel Allowance".into();
    settings.expense_claim_type_car = "Mileage".into();
    settings.set_mode_defaults(
        ModeOfTransport::Taxi,
        ModeDefaults::new("City Cabs", "Taxi Ride", "6800 - Travel"),
    );
    settings.accommodation_defaults =
        ModeDefaults::new("Hotels Ltd", "Hotel Night", "6810 - Lodging");

    let mut host = MemoryHost::new(settings);
    host.insert_region(TripRegion::new("Germany", 30.0, 15.0).with_accommodation(20.0));
    host.set_today(date(10));
    host
}

fn trip_with_allowance() -> BusinessTrip {
    let mut trip = BusinessTrip::new("EMP-0001", "Example GmbH", date(4), date(6));
    trip.region = Some("Germany".into());
    let mut allowance = Allowance::whole_day(date(4));
    allowance.breakfast_was_provided = true;
    trip.add_allowance(allowance);
    trip
}

#[test]
fn mileage_and_rental_journeys_split_correctly() {
    let mut host = configured_host();
    let mut trip = trip_with_allowance();
    trip.add_journey(
        Journey::new(date(4), ModeOfTransport::CarPrivate, "Hamburg", "Berlin")
            .with_distance(100.0),
    );
    trip.add_journey(
        Journey::new(date(5), ModeOfTransport::CarRental, "Berlin", "Leipzig")
            .with_distance(190.0),
    );

    let outcome = TripService::submit(&mut trip, &mut host, true)
        .expect("submit succeeds")
        .expect("documents derived");

    assert_eq!(trip.total_mileage_allowance, 30.0);
    let claim = &host.expense_claims[0];
    assert_eq!(claim.expenses[0].amount, 30.0);
    assert_eq!(claim.expenses[0].sanctioned_amount, 30.0);

    // the rental journey keeps no kilometres once documents exist
    assert_eq!(trip.journeys[1].distance, 0.0);
    // no defaults configured for rental cars: reported, not fatal
    assert!(outcome.purchase_invoices.is_empty());
    assert_eq!(outcome.skipped_invoices, 1);
}

#[test]
fn allowance_description_lists_hotel_before_meals() {
    let mut host = configured_host();
    let mut trip = trip_with_allowance();
    trip.allowances[0].dinner_was_provided = true;

    TripService::submit(&mut trip, &mut host, true).expect("submit succeeds");

    let claim = &host.expense_claims[0];
    assert_eq!(
        claim.expenses[0].description,
        "Full Day, plus hotel, minus breakfast, minus dinner"
    );
    // 30 - 6 - 12 + 20
    assert_eq!(claim.expenses[0].amount, 32.0);
}

#[test]
fn claim_without_private_car_journeys_still_exists() {
    let mut host = configured_host();
    let mut trip = trip_with_allowance();

    let outcome = TripService::submit(&mut trip, &mut host, true)
        .expect("submit succeeds")
        .expect("documents derived");

    assert!(outcome.expense_claim.is_some());
    assert_eq!(host.expense_claims[0].expenses.len(), 1);
}

#[test]
fn taxi_with_and_without_receipt() {
    let mut host = configured_host();
    let mut trip = trip_with_allowance();
    trip.add_journey(
        Journey::new(date(5), ModeOfTransport::Taxi, "Airport", "Hotel")
            .with_receipt("/files/taxi.pdf"),
    );
    trip.add_journey(Journey::new(date(6), ModeOfTransport::Taxi, "Hotel", "Airport"));
    host.attach_file("/files/taxi.pdf", "taxi.pdf", trip.id.to_string());

    let outcome = TripService::submit(&mut trip, &mut host, true)
        .expect("submit succeeds")
        .expect("documents derived");

    assert_eq!(outcome.purchase_invoices.len(), 1);
    assert_eq!(outcome.skipped_invoices, 1);
    assert_eq!(host.purchase_invoices.len(), 1);
    assert_eq!(host.messages.len(), 2);
    assert_eq!(host.messages[0], "<b>Missing receipt:</b>");

    let invoice = &host.purchase_invoices[0];
    let copies: Vec<_> = host
        .files
        .iter()
        .filter(|file| file.attached_to_name == invoice.id.to_string())
        .collect();
    assert_eq!(copies.len(), 1);
}

#[test]
fn missing_stored_file_fails_the_submit() {
    let mut host = configured_host();
    let mut trip = trip_with_allowance();
    trip.add_journey(
        Journey::new(date(5), ModeOfTransport::Taxi, "Airport", "Hotel")
            .with_receipt("/files/ghost.pdf"),
    );
    // no matching file record registered with the host

    let err = TripService::submit(&mut trip, &mut host, true).expect_err("must fail");
    assert!(
        matches!(err, TripError::AttachmentNotFound(ref url) if url == "/files/ghost.pdf"),
        "unexpected error: {err:?}"
    );
}

#[test]
fn submission_side_effects_fire_once() {
    let mut host = configured_host();
    let mut trip = trip_with_allowance();

    TripService::submit(&mut trip, &mut host, true).expect("first submit succeeds");
    TripService::submit(&mut trip, &mut host, true).expect_err("second submit rejected");

    assert_eq!(host.expense_claims.len(), 1);
}
