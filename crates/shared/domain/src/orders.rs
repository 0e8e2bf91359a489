//! Orders vocabulary: orders types, pay grades, branches, and the dependents answer.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Kind of orders issued to the traveler.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OrdersType {
    PermanentChangeOfStation,
    LocalMove,
    Retirement,
    Separation,
    TemporaryDuty,
    EarlyReturnOfDependents,
    StudentTravel,
}

impl OrdersType {
    /// Human-readable option label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::PermanentChangeOfStation => "Permanent Change Of Station (PCS)",
            Self::LocalMove => "Local Move",
            Self::Retirement => "Retirement",
            Self::Separation => "Separation",
            Self::TemporaryDuty => "Temporary Duty (TDY)",
            Self::EarlyReturnOfDependents => "Early Return of Dependents",
            Self::StudentTravel => "Student Travel",
        }
    }

    /// Orders types that imply dependents and lock the dependents answer to "yes".
    pub const fn locks_dependents(self) -> bool {
        matches!(self, Self::StudentTravel | Self::EarlyReturnOfDependents)
    }

    /// Orders types only offered when Alaska moves are enabled.
    pub const fn requires_alaska(self) -> bool {
        matches!(self, Self::StudentTravel | Self::EarlyReturnOfDependents)
    }
}

/// Pay grade recorded on the orders.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    AsRefStr,
)]
pub enum PayGrade {
    #[serde(rename = "E_1")]
    #[strum(serialize = "E_1")]
    E1,
    #[serde(rename = "E_2")]
    #[strum(serialize = "E_2")]
    E2,
    #[serde(rename = "E_3")]
    #[strum(serialize = "E_3")]
    E3,
    #[serde(rename = "E_4")]
    #[strum(serialize = "E_4")]
    E4,
    #[serde(rename = "E_5")]
    #[strum(serialize = "E_5")]
    E5,
    #[serde(rename = "E_6")]
    #[strum(serialize = "E_6")]
    E6,
    #[serde(rename = "E_7")]
    #[strum(serialize = "E_7")]
    E7,
    #[serde(rename = "E_8")]
    #[strum(serialize = "E_8")]
    E8,
    #[serde(rename = "E_9")]
    #[strum(serialize = "E_9")]
    E9,
    #[serde(rename = "E_9_SPECIAL_SENIOR_ENLISTED")]
    #[strum(serialize = "E_9_SPECIAL_SENIOR_ENLISTED")]
    E9SpecialSeniorEnlisted,
    #[serde(rename = "O_1_ACADEMY_GRADUATE")]
    #[strum(serialize = "O_1_ACADEMY_GRADUATE")]
    O1AcademyGraduate,
    #[serde(rename = "O_2")]
    #[strum(serialize = "O_2")]
    O2,
    #[serde(rename = "O_3")]
    #[strum(serialize = "O_3")]
    O3,
    #[serde(rename = "O_4")]
    #[strum(serialize = "O_4")]
    O4,
    #[serde(rename = "O_5")]
    #[strum(serialize = "O_5")]
    O5,
    #[serde(rename = "O_6")]
    #[strum(serialize = "O_6")]
    O6,
    #[serde(rename = "O_7")]
    #[strum(serialize = "O_7")]
    O7,
    #[serde(rename = "O_8")]
    #[strum(serialize = "O_8")]
    O8,
    #[serde(rename = "O_9")]
    #[strum(serialize = "O_9")]
    O9,
    #[serde(rename = "O_10")]
    #[strum(serialize = "O_10")]
    O10,
    #[serde(rename = "W_1")]
    #[strum(serialize = "W_1")]
    W1,
    #[serde(rename = "W_2")]
    #[strum(serialize = "W_2")]
    W2,
    #[serde(rename = "W_3")]
    #[strum(serialize = "W_3")]
    W3,
    #[serde(rename = "W_4")]
    #[strum(serialize = "W_4")]
    W4,
    #[serde(rename = "W_5")]
    #[strum(serialize = "W_5")]
    W5,
    #[serde(rename = "AVIATION_CADET")]
    #[strum(serialize = "AVIATION_CADET")]
    AviationCadet,
    #[serde(rename = "CIVILIAN_EMPLOYEE")]
    #[strum(serialize = "CIVILIAN_EMPLOYEE")]
    CivilianEmployee,
    #[serde(rename = "ACADEMY_CADET")]
    #[strum(serialize = "ACADEMY_CADET")]
    AcademyCadet,
    #[serde(rename = "MIDSHIPMAN")]
    #[strum(serialize = "MIDSHIPMAN")]
    Midshipman,
}

impl PayGrade {
    pub const fn label(self) -> &'static str {
        match self {
            Self::E1 => "E-1",
            Self::E2 => "E-2",
            Self::E3 => "E-3",
            Self::E4 => "E-4",
            Self::E5 => "E-5",
            Self::E6 => "E-6",
            Self::E7 => "E-7",
            Self::E8 => "E-8",
            Self::E9 => "E-9",
            Self::E9SpecialSeniorEnlisted => "E-9 (Special Senior Enlisted)",
            Self::O1AcademyGraduate => "O-1 or Service Academy Graduate",
            Self::O2 => "O-2",
            Self::O3 => "O-3",
            Self::O4 => "O-4",
            Self::O5 => "O-5",
            Self::O6 => "O-6",
            Self::O7 => "O-7",
            Self::O8 => "O-8",
            Self::O9 => "O-9",
            Self::O10 => "O-10",
            Self::W1 => "W-1",
            Self::W2 => "W-2",
            Self::W3 => "W-3",
            Self::W4 => "W-4",
            Self::W5 => "W-5",
            Self::AviationCadet => "Aviation Cadet",
            Self::CivilianEmployee => "Civilian Employee",
            Self::AcademyCadet => "Service Academy Cadet",
            Self::Midshipman => "Midshipman",
        }
    }

    pub const fn is_civilian(self) -> bool {
        matches!(self, Self::CivilianEmployee)
    }
}

/// Branch of service the traveler belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Affiliation {
    Army,
    Navy,
    Marines,
    AirForce,
    CoastGuard,
    SpaceForce,
    Other,
}

impl Affiliation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Army => "Army",
            Self::Navy => "Navy",
            Self::Marines => "Marine Corps",
            Self::AirForce => "Air Force",
            Self::CoastGuard => "Coast Guard",
            Self::SpaceForce => "Space Force",
            Self::Other => "Other",
        }
    }
}

/// Tri-state answer to "Are dependents included in your orders?".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependentsAnswer {
    Yes,
    No,
    #[default]
    Unset,
}

impl DependentsAnswer {
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }

    pub const fn is_set(self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// `None` while the radio group has no selection.
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Self::Yes => Some(true),
            Self::No => Some(false),
            Self::Unset => None,
        }
    }
}

impl From<Option<bool>> for DependentsAnswer {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Yes,
            Some(false) => Self::No,
            None => Self::Unset,
        }
    }
}
