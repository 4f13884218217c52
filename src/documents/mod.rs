//! Financial documents derived from a submitted business trip.

pub mod expense_claim;
pub mod purchase_invoice;

pub use expense_claim::{ExpenseClaim, ExpenseLine};
pub use purchase_invoice::{PurchaseInvoice, PurchaseInvoiceItem};
