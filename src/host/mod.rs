//! Collaborator seam towards the document-management platform the engine
//! runs inside. The platform owns record persistence, attachment storage,
//! user messaging, and translation; the engine only talks to this trait.

pub mod memory;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    documents::{ExpenseClaim, PurchaseInvoice},
    errors::TripError,
    trip::{TripRegion, TripSettings},
};

pub use memory::MemoryHost;

/// Abstraction over the host platform consumed by the trip services.
///
/// Implementations must return settings fresh on every call; the services
/// deliberately re-read them per entry instead of caching.
pub trait TripHost {
    /// Current process-wide trip settings.
    fn settings(&self) -> TripSettings;

    /// Resolves a reimbursement-rate region by name.
    fn region(&self, name: &str) -> Option<TripRegion>;

    /// Posting date used for derived documents.
    fn today(&self) -> NaiveDate;

    /// Translates a display string; identity for untranslated locales.
    fn translate(&self, text: &str) -> String;

    /// Formats a date for user-facing messages.
    fn format_date(&self, date: NaiveDate) -> String;

    /// Shows an HTML message to the submitting user.
    fn notify(&mut self, html: String);

    /// Persists a derived expense claim, returning its id.
    fn insert_expense_claim(&mut self, claim: ExpenseClaim) -> Result<Uuid, TripError>;

    /// Persists a derived purchase invoice draft, returning its id.
    fn insert_purchase_invoice(&mut self, invoice: PurchaseInvoice) -> Result<Uuid, TripError>;

    /// Copies a stored file onto another document.
    ///
    /// Looks up file records matching `file_url` attached to
    /// `attached_to`; the first match is duplicated as a new record
    /// attached to `target`. Zero matches is a hard failure
    /// ([`TripError::AttachmentNotFound`]).
    fn copy_attachment(
        &mut self,
        file_url: &str,
        attached_to: &str,
        target: DocumentRef,
    ) -> Result<FileRecord, TripError>;
}

/// Points at a document record in the host's store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentRef {
    pub doctype: String,
    pub name: String,
}

impl DocumentRef {
    pub fn new(doctype: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            doctype: doctype.into(),
            name: name.into(),
        }
    }
}

/// A stored file and the document it is attached to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileRecord {
    pub file_url: String,
    pub file_name: String,
    pub attached_to_doctype: String,
    pub attached_to_name: String,
}
