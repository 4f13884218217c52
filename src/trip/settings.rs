use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::journey::ModeOfTransport;

/// Process-wide configuration for allowance rates and document defaults.
///
/// `mode_defaults` is keyed by the transport mode's display label so the
/// serialized form stays a plain string map an administrator can edit.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TripSettings {
    #[serde(default)]
    pub mileage_allowance: f64,
    #[serde(default)]
    pub expense_claim_type: String,
    #[serde(default)]
    pub expense_claim_type_car: String,
    #[serde(default)]
    pub mode_defaults: BTreeMap<String, ModeDefaults>,
    #[serde(default)]
    pub accommodation_defaults: ModeDefaults,
}

impl TripSettings {
    /// Resolves the supplier/item/account triple for a transport mode.
    /// Modes without configured defaults resolve to the empty triple.
    pub fn defaults_for_mode(&self, mode: &ModeOfTransport) -> ModeDefaults {
        self.mode_defaults
            .get(&mode.to_string())
            .cloned()
            .unwrap_or_default()
    }

    pub fn set_mode_defaults(&mut self, mode: ModeOfTransport, defaults: ModeDefaults) {
        self.mode_defaults.insert(mode.to_string(), defaults);
    }
}

/// Standard supplier, item, and expense account for one invoice source.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ModeDefaults {
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub item: String,
    #[serde(default)]
    pub account: String,
}

impl ModeDefaults {
    pub fn new(
        supplier: impl Into<String>,
        item: impl Into<String>,
        account: impl Into<String>,
    ) -> Self {
        Self {
            supplier: supplier.into(),
            item: item.into(),
            account: account.into(),
        }
    }

    /// A purchase invoice can only be drafted when all three are set.
    pub fn is_complete(&self) -> bool {
        !self.supplier.is_empty() && !self.item.is_empty() && !self.account.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_mode_resolves_to_empty_triple() {
        let mut settings = TripSettings::default();
        settings.set_mode_defaults(
            ModeOfTransport::Taxi,
            ModeDefaults::new("City Cabs", "Taxi Ride", "6800 - Travel"),
        );

        let taxi = settings.defaults_for_mode(&ModeOfTransport::Taxi);
        assert!(taxi.is_complete());

        let other = settings.defaults_for_mode(&ModeOfTransport::Other("Ferry".into()));
        assert_eq!(other, ModeDefaults::default());
        assert!(!other.is_complete());
    }
}
