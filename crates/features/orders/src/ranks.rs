//! Static rank catalog per branch of service.
//!
//! Each option is keyed by the rank abbreviation and displayed as `"{ABBV} / {grade label}"`.

use crate::error::OrdersError;
use crate::ports::RankOptionsService;
use mymove_domain::options::SelectOption;
use mymove_domain::orders::{Affiliation, PayGrade};
use std::collections::BTreeSet;
use std::future::{Future, ready};
use std::str::FromStr;

use PayGrade::{
    CivilianEmployee, E1, E2, E3, E4, E5, E6, E7, E8, E9, E9SpecialSeniorEnlisted, O1AcademyGraduate, O2, O3,
    O4, O5, O6, O7, O8, O9, O10, W1, W2, W3, W4, W5,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankEntry {
    pub abbreviation: &'static str,
    pub title: &'static str,
    pub grade: PayGrade,
}

impl RankEntry {
    pub fn option(&self) -> SelectOption {
        SelectOption::new(self.abbreviation, format!("{} / {}", self.abbreviation, self.grade.label()))
    }
}

const fn rank(abbreviation: &'static str, title: &'static str, grade: PayGrade) -> RankEntry {
    RankEntry { abbreviation, title, grade }
}

const ARMY: &[RankEntry] = &[
    rank("GEN", "General", O10),
    rank("LTG", "Lieutenant General", O9),
    rank("MG", "Major General", O8),
    rank("BG", "Brigadier General", O7),
    rank("COL", "Colonel", O6),
    rank("LTC", "Lieutenant Colonel", O5),
    rank("MAJ", "Major", O4),
    rank("CPT", "Captain", O3),
    rank("1LT", "First Lieutenant", O2),
    rank("2LT", "Second Lieutenant", O1AcademyGraduate),
    rank("OC", "Officer Candidate", O1AcademyGraduate),
    rank("CDT", "Cadet", O1AcademyGraduate),
    rank("CW5", "Chief Warrant Officer 5", W5),
    rank("CW4", "Chief Warrant Officer 4", W4),
    rank("CW3", "Chief Warrant Officer 3", W3),
    rank("CW2", "Chief Warrant Officer 2", W2),
    rank("WO1", "Warrant Officer 1", W1),
    rank("SMA", "Sergeant Major of the Army", E9SpecialSeniorEnlisted),
    rank("SGM", "Sergeant Major", E9),
    rank("CSM", "Command Sergeant Major", E9),
    rank("MSG", "Master Sergeant", E8),
    rank("1ST", "1st Sergeant", E8),
    rank("PSG", "Platoon Sergeant", E7),
    rank("SFC", "Sergeant First Class", E7),
    rank("SSG", "Staff Sergeant", E6),
    rank("SGT", "Sergeant", E5),
    rank("CPL", "Corporal", E4),
    rank("SPC", "Specialist", E4),
    rank("PFC", "Private First Class", E3),
    rank("PV2", "Private", E2),
    rank("PV1", "Private", E1),
    rank("PVT", "Private", E1),
    rank("CIV", "Civilian", CivilianEmployee),
];

const NAVY: &[RankEntry] = &[
    rank("ADM", "Admiral", O10),
    rank("VAD", "Vice Admiral", O9),
    rank("RADU", "Rear Admiral (Upper Half)", O8),
    rank("RADL", "Rear Admiral (Lower Half)", O7),
    rank("CPN", "Captain", O6),
    rank("CDR", "Commander", O5),
    rank("LCD", "Lieutenant Commander", O4),
    rank("LT", "Lieutenant", O3),
    rank("LTJG", "Lieutenant JG", O2),
    rank("ENS", "Ensign", O1AcademyGraduate),
    rank("MID", "Midshipman", O1AcademyGraduate),
    rank("WO5", "Chief Warrant Officer 5", W5),
    rank("WO4", "Chief Warrant Officer 4", W4),
    rank("WO3", "Chief Warrant Officer 3", W3),
    rank("WO2", "Chief Warrant Officer 2", W2),
    rank("WO1", "Warrant Officer 1", W1),
    rank("CPM", "Master Chief Petty Officer", E9),
    rank("MCPN", "Master Chief Petty Officer of the Navy", E9SpecialSeniorEnlisted),
    rank("CPS", "Senior Chief Petty Officer", E8),
    rank("CPO", "Chief Petty Officer", E7),
    rank("PO1", "Petty Officer First Class", E6),
    rank("PO2", "Petty Officer Second Class", E5),
    rank("PO3", "Petty Officer Third Class", E4),
    rank("SN", "Seaman", E3),
    rank("SA", "Seaman Apprentice", E2),
    rank("SR", "Seaman Recruit", E1),
    rank("CIV", "Civilian", CivilianEmployee),
];

const MARINES: &[RankEntry] = &[
    rank("GEN", "General", O10),
    rank("LTG", "Lieutenant General", O9),
    rank("MG", "Major General", O8),
    rank("BG", "Brigadier General", O7),
    rank("COL", "Colonel", O6),
    rank("LTC", "Lieutenant Colonel", O5),
    rank("MAJ", "Major", O4),
    rank("CPT", "Captain", O3),
    rank("1LT", "First Lieutenant", O2),
    rank("2LT", "Second Lieutenant", O1AcademyGraduate),
    rank("CW5", "Chief Warrant Officer 5", W5),
    rank("CW4", "Chief Warrant Officer 4", W4),
    rank("CW3", "Chief Warrant Officer 3", W3),
    rank("CW2", "Chief Warrant Officer 2", W2),
    rank("WO1", "Warrant Officer 1", W1),
    rank("SMG", "Sergeant Major", E9),
    rank("SMM", "Sergeant Major of the Marine Corps", E9SpecialSeniorEnlisted),
    rank("MGS", "Master Gunnery Sergeant", E9),
    rank("MSG", "Master Sergeant", E8),
    rank("1ST", "1st Sergeant", E8),
    rank("GYS", "Gunnery Sergeant", E7),
    rank("SSG", "Staff Sergeant", E6),
    rank("SGT", "Sergeant", E5),
    rank("CPL", "Corporal", E4),
    rank("LCP", "Lance Corporal", E3),
    rank("PFC", "Private First Class", E2),
    rank("PVT", "Private", E1),
    rank("CIV", "Civilian", CivilianEmployee),
];

const AIR_FORCE: &[RankEntry] = &[
    rank("GEN", "General", O10),
    rank("LTG", "Lieutenant General", O9),
    rank("MG", "Major General", O8),
    rank("BG", "Brigadier General", O7),
    rank("COL", "Colonel", O6),
    rank("LTC", "Lieutenant Colonel", O5),
    rank("MAJ", "Major", O4),
    rank("CPT", "Captain", O3),
    rank("1LT", "First Lieutenant", O2),
    rank("AVC", "Aviation Cadet", O1AcademyGraduate),
    rank("2LT", "Second Lieutenant", O1AcademyGraduate),
    rank("AFC", "Air Force Academy Cadet", O1AcademyGraduate),
    rank("CMS", "Chief Master Sergeant", E9),
    rank("SMS", "Senior Master Sergeant", E8),
    rank("MSG", "Master Sergeant", E7),
    rank("TSG", "Technical Sergeant", E6),
    rank("SSG", "Staff Sergeant", E5),
    rank("SRA", "Senior Airman", E4),
    rank("A1C", "Airman First Class", E3),
    rank("AMN", "Airman", E2),
    rank("AB", "Airman Basic", E1),
    rank("CIV", "Civilian", CivilianEmployee),
];

const COAST_GUARD: &[RankEntry] = &[
    rank("ADM", "Admiral", O10),
    rank("VAD", "Vice Admiral", O9),
    rank("RADU", "Rear Admiral (Upper Half)", O8),
    rank("RADL", "Rear Admiral (Lower Half)", O7),
    rank("CAPT", "Captain", O6),
    rank("CDR", "Commander", O5),
    rank("LCD", "Lieutenant Commander", O4),
    rank("LT", "Lieutenant", O3),
    rank("LTJG", "Lieutenant JG", O2),
    rank("MID", "Midshipman", O1AcademyGraduate),
    rank("ENS", "Ensign", O1AcademyGraduate),
    rank("CWO4", "Chief Warrant Officer 4", W4),
    rank("CWO3", "Chief Warrant Officer 3", W3),
    rank("CWO2", "Chief Warrant Officer 2", W2),
    rank("CPM", "Master Chief Petty Officer", E9),
    rank("MCPG", "Master Chief Petty Officer of the Coast Guard", E9SpecialSeniorEnlisted),
    rank("CPS", "Senior Chief Petty Officer", E8),
    rank("CPO", "Chief Petty Officer", E7),
    rank("PO1", "Petty Officer First Class", E6),
    rank("PO2", "Petty Officer Second Class", E5),
    rank("PO3", "Petty Officer Third Class", E4),
    rank("SN", "Seaman", E3),
    rank("SA", "Seaman Apprentice", E2),
    rank("SR", "Seaman Recruit", E1),
    rank("CIV", "Civilian", CivilianEmployee),
];

const SPACE_FORCE: &[RankEntry] = &[
    rank("GEN", "General", O10),
    rank("LTG", "Lieutenant General", O9),
    rank("MG", "Major General", O8),
    rank("BG", "Brigadier General", O7),
    rank("COL", "Colonel", O6),
    rank("LTC", "Lieutenant Colonel", O5),
    rank("MAJ", "Major", O4),
    rank("CPT", "Captain", O3),
    rank("1LT", "First Lieutenant", O2),
    rank("2LT", "Second Lieutenant", O1AcademyGraduate),
    rank("CMA", "Chief Master Sergeant of the Space Force", E9SpecialSeniorEnlisted),
    rank("CMS", "Chief Master Sergeant", E9),
    rank("SMS", "Senior Master Sergeant", E8),
    rank("MSG", "Master Sergeant", E7),
    rank("TSG", "Technical Sergeant", E6),
    rank("SGT", "Sergeant", E5),
    rank("SP4", "Specialist 4", E4),
    rank("SP3", "Specialist 3", E3),
    rank("SP2", "Specialist 2", E2),
    rank("SP1", "Specialist 1", E1),
    rank("CIV", "Civilian", CivilianEmployee),
];

const OTHER: &[RankEntry] = &[
    rank("CIV", "Civilian", CivilianEmployee),
];

pub const fn ranks_for(affiliation: Affiliation) -> &'static [RankEntry] {
    match affiliation {
        Affiliation::Army => ARMY,
        Affiliation::Navy => NAVY,
        Affiliation::Marines => MARINES,
        Affiliation::AirForce => AIR_FORCE,
        Affiliation::CoastGuard => COAST_GUARD,
        Affiliation::SpaceForce => SPACE_FORCE,
        Affiliation::Other => OTHER,
    }
}

/// Options for `affiliation`, one per abbreviation, in table order.
pub fn rank_options(affiliation: Affiliation) -> Vec<SelectOption> {
    let mut seen = BTreeSet::new();
    ranks_for(affiliation)
        .iter()
        .filter(|entry| seen.insert(entry.abbreviation))
        .map(RankEntry::option)
        .collect()
}

/// Like [`rank_options`] for a raw branch name; unknown or empty names yield no options.
pub fn rank_options_by_name(affiliation: &str) -> Vec<SelectOption> {
    Affiliation::from_str(affiliation.trim()).map(rank_options).unwrap_or_default()
}

/// Pay grade implied by a rank abbreviation.
pub fn grade_for_rank(affiliation: Affiliation, abbreviation: &str) -> Option<PayGrade> {
    ranks_for(affiliation).iter().find(|entry| entry.abbreviation == abbreviation).map(|entry| entry.grade)
}

/// In-memory rank options service.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRankCatalog;

impl RankOptionsService for StaticRankCatalog {
    fn list(&self, affiliation: Affiliation) -> impl Future<Output = Result<Vec<SelectOption>, OrdersError>> + Send {
        ready(Ok(rank_options(affiliation)))
    }
}
