use crate::orders::Affiliation;
use serde::{Deserialize, Serialize};

/// Postal address attached to a duty location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub street_address1: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: Option<String>,
    /// Missing in older payloads; treated as CONUS.
    pub is_oconus: bool,
}

/// A duty location as returned by the location search/lookup service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutyLocationRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub provides_services_counseling: bool,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub affiliation: Option<Affiliation>,
}

impl DutyLocationRef {
    pub const fn is_oconus(&self) -> bool {
        self.address.is_oconus
    }

    /// Two references point at the same duty location.
    pub fn same_location(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
