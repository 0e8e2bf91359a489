//! Location classifier.

use mymove_domain::location::DutyLocationRef;
use serde::Serialize;

pub const DUPLICATE_LOCATION_MESSAGE: &str =
    "You entered the same duty location for your origin and destination. Please change one of them.";

/// Classification of the selected origin/destination pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationClass {
    pub is_oconus_move: bool,
    pub origin_provides_counseling: bool,
    pub duplicate: bool,
}

/// Classifies a move. Missing locations are CONUS and never an error.
pub fn classify(origin: Option<&DutyLocationRef>, destination: Option<&DutyLocationRef>) -> LocationClass {
    LocationClass {
        is_oconus_move: origin.is_some_and(DutyLocationRef::is_oconus)
            || destination.is_some_and(DutyLocationRef::is_oconus),
        origin_provides_counseling: origin.is_some_and(|o| o.provides_services_counseling),
        duplicate: is_duplicate(origin, destination),
    }
}

/// Both locations are selected and refer to the same duty location.
pub fn is_duplicate(origin: Option<&DutyLocationRef>, destination: Option<&DutyLocationRef>) -> bool {
    match (origin, destination) {
        (Some(origin), Some(destination)) => origin.same_location(destination),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mymove_domain::location::Address;

    fn location(id: &str, is_oconus: bool, counseling: bool) -> DutyLocationRef {
        DutyLocationRef {
            id: id.into(),
            name: format!("Duty location {id}"),
            provides_services_counseling: counseling,
            address: Address { is_oconus, ..Address::default() },
            affiliation: None,
        }
    }

    #[test]
    fn oconus_when_either_side_is_oconus() {
        let conus = location("a", false, false);
        let oconus = location("b", true, false);

        assert!(!classify(Some(&conus), Some(&conus)).is_oconus_move);
        assert!(classify(Some(&conus), Some(&oconus)).is_oconus_move);
        assert!(classify(Some(&oconus), None).is_oconus_move);
        assert!(!classify(None, None).is_oconus_move);
    }

    #[test]
    fn counseling_follows_origin_only() {
        let counseling = location("a", false, true);
        let plain = location("b", false, false);

        assert!(classify(Some(&counseling), Some(&plain)).origin_provides_counseling);
        assert!(!classify(Some(&plain), Some(&counseling)).origin_provides_counseling);
        assert!(!classify(None, Some(&counseling)).origin_provides_counseling);
    }

    #[test]
    fn duplicate_compares_ids() {
        let a = location("a", false, false);
        let mut renamed = a.clone();
        renamed.name = "Renamed".into();

        assert!(is_duplicate(Some(&a), Some(&renamed)));
        assert!(!is_duplicate(Some(&a), Some(&location("b", false, false))));
        assert!(!is_duplicate(Some(&a), None));
    }
}
