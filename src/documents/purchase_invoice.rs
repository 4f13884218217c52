use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Supplier-facing invoice draft for a journey or accommodation receipt.
///
/// The single item carries a zero rate; the draft exists as a receipt
/// carrier and accounting enters the billed amount manually downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseInvoice {
    pub id: Uuid,
    pub supplier: String,
    pub company: String,
    pub posting_date: NaiveDate,
    pub business_trip: Uuid,
    pub project: Option<String>,
    pub cost_center: Option<String>,
    #[serde(default)]
    pub items: Vec<PurchaseInvoiceItem>,
}

impl PurchaseInvoice {
    pub fn new(
        supplier: impl Into<String>,
        company: impl Into<String>,
        posting_date: NaiveDate,
        business_trip: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            supplier: supplier.into(),
            company: company.into(),
            posting_date,
            business_trip,
            project: None,
            cost_center: None,
            items: Vec::new(),
        }
    }

    pub fn append(&mut self, item: PurchaseInvoiceItem) {
        self.items.push(item);
    }
}

/// One line item of a purchase invoice draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseInvoiceItem {
    pub item_name: String,
    pub qty: u32,
    pub rate: f64,
    pub project: Option<String>,
    pub cost_center: Option<String>,
    pub expense_account: String,
}
