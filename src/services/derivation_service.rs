//! Derivation of the financial documents for a submitted trip: one
//! expense claim plus purchase invoice drafts for receipts of journeys
//! and accommodations.

use tracing::warn;
use uuid::Uuid;

use crate::{
    documents::{ExpenseClaim, ExpenseLine, PurchaseInvoice, PurchaseInvoiceItem},
    errors::TripError,
    host::{DocumentRef, TripHost},
    trip::{Accommodation, BusinessTrip, Journey, ModeDefaults, ModeOfTransport},
};

/// Ids of the documents created by one derivation run.
#[derive(Debug, Clone, Default)]
pub struct DerivationOutcome {
    pub expense_claim: Option<Uuid>,
    pub purchase_invoices: Vec<Uuid>,
    pub skipped_invoices: usize,
}

/// Translates a submitted trip into expense claim lines and purchase
/// invoice drafts.
pub struct DerivationService;

impl DerivationService {
    /// Runs the full derivation for a trip with at least one allowance.
    ///
    /// Per-entry gaps (missing receipt, incomplete supplier/item/account
    /// triple) are reported through the host's messaging and never abort
    /// the run; failures to persist a document or copy an attachment do.
    pub fn derive<H: TripHost>(
        trip: &mut BusinessTrip,
        host: &mut H,
    ) -> Result<DerivationOutcome, TripError> {
        let mut outcome = DerivationOutcome::default();

        let claim = Self::build_expense_claim(trip, &*host);
        outcome.expense_claim = Some(host.insert_expense_claim(claim)?);

        for journey in &trip.journeys {
            if journey.mode_of_transport == ModeOfTransport::CarPrivate {
                continue;
            }
            let defaults = host.settings().defaults_for_mode(&journey.mode_of_transport);
            Self::create_invoice(
                &*trip,
                InvoiceSource::Journey(journey),
                defaults,
                host,
                &mut outcome,
            )?;
        }

        for accommodation in &trip.accommodations {
            let defaults = host.settings().accommodation_defaults;
            Self::create_invoice(
                &*trip,
                InvoiceSource::Accommodation(accommodation),
                defaults,
                host,
                &mut outcome,
            )?;
        }

        Ok(outcome)
    }

    /// Builds the expense claim: one line per private-car journey, one
    /// line per allowance. Every other journey has its distance zeroed
    /// here so its kilometres cannot enter the mileage total again.
    fn build_expense_claim<H: TripHost>(trip: &mut BusinessTrip, host: &H) -> ExpenseClaim {
        let mut claim = ExpenseClaim::new(
            trip.employee.clone(),
            trip.company.clone(),
            host.today(),
            trip.id,
        );
        claim.project = trip.project.clone();
        claim.cost_center = trip.cost_center.clone();

        let project = trip.project.clone();
        let cost_center = trip.cost_center.clone();
        let region_name = trip.region.clone();

        for journey in &mut trip.journeys {
            if journey.mode_of_transport != ModeOfTransport::CarPrivate {
                journey.distance = 0.0;
                continue;
            }

            let settings = host.settings();
            let amount = journey.distance * settings.mileage_allowance;
            let by_private_car = host.translate("by private car");
            let description = format!(
                "{}km * {}€/km from {} to {} ({})",
                journey.distance,
                settings.mileage_allowance,
                journey.from_location,
                journey.to_location,
                by_private_car
            );
            claim.append(ExpenseLine {
                expense_date: journey.date,
                expense_type: settings.expense_claim_type_car,
                description,
                amount,
                sanctioned_amount: amount,
                project: project.clone(),
                cost_center: cost_center.clone(),
            });
        }

        for allowance in &trip.allowances {
            let base = if allowance.whole_day {
                "Full Day"
            } else {
                "Arrival/Departure"
            };
            let mut fragments = vec![host.translate(base)];

            let lists_accommodation = region_name
                .as_deref()
                .and_then(|name| host.region(name))
                .map(|region| region.lists_accommodation)
                .unwrap_or(false);
            if !allowance.accommodation_was_provided && lists_accommodation {
                fragments.push(host.translate("plus hotel"));
            }
            if allowance.breakfast_was_provided {
                fragments.push(host.translate("minus breakfast"));
            }
            if allowance.lunch_was_provided {
                fragments.push(host.translate("minus lunch"));
            }
            if allowance.dinner_was_provided {
                fragments.push(host.translate("minus dinner"));
            }

            claim.append(ExpenseLine {
                expense_date: allowance.date,
                expense_type: host.settings().expense_claim_type,
                description: fragments.join(", "),
                amount: allowance.amount,
                sanctioned_amount: allowance.amount,
                project: project.clone(),
                cost_center: cost_center.clone(),
            });
        }

        claim
    }

    fn create_invoice<H: TripHost>(
        trip: &BusinessTrip,
        source: InvoiceSource<'_>,
        defaults: ModeDefaults,
        host: &mut H,
        outcome: &mut DerivationOutcome,
    ) -> Result<(), TripError> {
        if defaults.is_complete() {
            if let Some(file_url) = source.receipt() {
                let mut invoice = PurchaseInvoice::new(
                    defaults.supplier,
                    trip.company.clone(),
                    host.today(),
                    trip.id,
                );
                invoice.project = trip.project.clone();
                invoice.cost_center = trip.cost_center.clone();
                invoice.append(PurchaseInvoiceItem {
                    item_name: defaults.item,
                    qty: 1,
                    rate: 0.0,
                    project: trip.project.clone(),
                    cost_center: trip.cost_center.clone(),
                    expense_account: defaults.account,
                });

                let invoice_id = host.insert_purchase_invoice(invoice)?;
                host.copy_attachment(
                    file_url,
                    &trip.id.to_string(),
                    DocumentRef::new("Purchase Invoice", invoice_id.to_string()),
                )?;
                outcome.purchase_invoices.push(invoice_id);
                return Ok(());
            }
        }

        let header = if source.receipt().is_none() {
            host.translate("Missing receipt:")
        } else {
            host.translate("Standard supplier, item or expense account not set:")
        };
        host.notify(format!("<b>{header}</b>"));

        let context = match source {
            InvoiceSource::Journey(journey) => {
                let mode = host.translate(&journey.mode_of_transport.to_string());
                format!(
                    "- Purchase Invoice for {} / {} from {} to {} not created!",
                    host.format_date(journey.date),
                    mode,
                    journey.from_location,
                    journey.to_location
                )
            }
            InvoiceSource::Accommodation(accommodation) => format!(
                "- Purchase Invoice for accommodation in {} from {} to {} not created!",
                accommodation.city,
                host.format_date(accommodation.from_date),
                host.format_date(accommodation.to_date)
            ),
        };
        host.notify(context);
        outcome.skipped_invoices += 1;
        warn!(trip = %trip.id, "purchase invoice skipped");
        Ok(())
    }
}

#[derive(Clone, Copy)]
enum InvoiceSource<'a> {
    Journey(&'a Journey),
    Accommodation(&'a Accommodation),
}

impl InvoiceSource<'_> {
    fn receipt(&self) -> Option<&str> {
        match self {
            InvoiceSource::Journey(journey) => journey.receipt.as_deref(),
            InvoiceSource::Accommodation(accommodation) => accommodation.receipt.as_deref(),
        }
    }
}
