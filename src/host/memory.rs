use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    documents::{ExpenseClaim, PurchaseInvoice},
    errors::TripError,
    trip::{TripRegion, TripSettings},
};

use super::{DocumentRef, FileRecord, TripHost};

/// Collection-backed host used by tests and embedders without a platform.
///
/// The whole state is serializable, so a host snapshot can be written to
/// disk and reloaded (see [`crate::utils::persistence`]). `today` can be
/// pinned for deterministic posting dates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryHost {
    pub settings: TripSettings,
    #[serde(default)]
    pub regions: BTreeMap<String, TripRegion>,
    #[serde(default)]
    pub expense_claims: Vec<ExpenseClaim>,
    #[serde(default)]
    pub purchase_invoices: Vec<PurchaseInvoice>,
    #[serde(default)]
    pub files: Vec<FileRecord>,
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<NaiveDate>,
}

impl MemoryHost {
    pub fn new(settings: TripSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn insert_region(&mut self, region: TripRegion) {
        self.regions.insert(region.name.clone(), region);
    }

    /// Pins the posting date returned by [`TripHost::today`].
    pub fn set_today(&mut self, date: NaiveDate) {
        self.today = Some(date);
    }

    /// Registers a stored file as attached to the given document name.
    pub fn attach_file(
        &mut self,
        file_url: impl Into<String>,
        file_name: impl Into<String>,
        attached_to: impl Into<String>,
    ) {
        self.files.push(FileRecord {
            file_url: file_url.into(),
            file_name: file_name.into(),
            attached_to_doctype: "Business Trip".into(),
            attached_to_name: attached_to.into(),
        });
    }
}

impl TripHost for MemoryHost {
    fn settings(&self) -> TripSettings {
        self.settings.clone()
    }

    fn region(&self, name: &str) -> Option<TripRegion> {
        self.regions.get(name).cloned()
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }

    fn translate(&self, text: &str) -> String {
        text.to_string()
    }

    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%d.%m.%Y").to_string()
    }

    fn notify(&mut self, html: String) {
        self.messages.push(html);
    }

    fn insert_expense_claim(&mut self, claim: ExpenseClaim) -> Result<Uuid, TripError> {
        let id = claim.id;
        self.expense_claims.push(claim);
        Ok(id)
    }

    fn insert_purchase_invoice(&mut self, invoice: PurchaseInvoice) -> Result<Uuid, TripError> {
        let id = invoice.id;
        self.purchase_invoices.push(invoice);
        Ok(id)
    }

    fn copy_attachment(
        &mut self,
        file_url: &str,
        attached_to: &str,
        target: DocumentRef,
    ) -> Result<FileRecord, TripError> {
        let original = self
            .files
            .iter()
            .find(|file| file.file_url == file_url && file.attached_to_name == attached_to)
            .cloned()
            .ok_or_else(|| TripError::AttachmentNotFound(file_url.to_string()))?;

        let copy = FileRecord {
            file_url: original.file_url,
            file_name: original.file_name,
            attached_to_doctype: target.doctype,
            attached_to_name: target.name,
        };
        self.files.push(copy.clone());
        Ok(copy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_attachment_duplicates_first_match() {
        let mut host = MemoryHost::default();
        host.attach_file("/files/receipt.pdf", "receipt.pdf", "TRIP-1");

        let copy = host
            .copy_attachment(
                "/files/receipt.pdf",
                "TRIP-1",
                DocumentRef::new("Purchase Invoice", "PINV-1"),
            )
            .expect("copy succeeds");

        assert_eq!(copy.file_url, "/files/receipt.pdf");
        assert_eq!(copy.attached_to_doctype, "Purchase Invoice");
        assert_eq!(copy.attached_to_name, "PINV-1");
        assert_eq!(host.files.len(), 2);
    }

    #[test]
    fn copy_attachment_fails_without_a_match() {
        let mut host = MemoryHost::default();

        let err = host
            .copy_attachment(
                "/files/missing.pdf",
                "TRIP-1",
                DocumentRef::new("Purchase Invoice", "PINV-1"),
            )
            .expect_err("no stored file");

        assert!(
            matches!(err, TripError::AttachmentNotFound(ref url) if url == "/files/missing.pdf"),
            "unexpected error: {err:?}"
        );
    }
}
