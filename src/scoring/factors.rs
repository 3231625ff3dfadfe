use std::fmt;

use super::types::{EducationLevel, FrenchLevel, JobOfferLocation, LabourMarketDiagnosis};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOp {
    Equal(u32),
    Between(u32, u32), // Inclusive range: N-M
    GreaterEqual(u32),
}

impl RangeOp {
    pub fn matches(&self, value: u32) -> bool {
        match self {
            RangeOp::Equal(n) => value == *n,
            RangeOp::Between(low, high) => value >= *low && value <= *high,
            RangeOp::GreaterEqual(n) => value >= *n,
        }
    }
}

impl fmt::Display for RangeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeOp::Equal(n) => write!(f, "{}", n),
            RangeOp::Between(low, high) => write!(f, "{}-{}", low, high),
            RangeOp::GreaterEqual(n) => write!(f, ">={}", n),
        }
    }
}

/// One row of a point table: values matching `range` earn `points`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub range: RangeOp,
    pub points: u32,
}

const fn band(range: RangeOp, points: u32) -> Band {
    Band { range, points }
}

/// First matching band wins; values matching no band score 0.
///
/// Every table ends with an open-ended `>=` band where magnitudes can grow
/// without bound, so oversized inputs land on the top band.
pub fn lookup(bands: &[Band], value: u32) -> u32 {
    bands
        .iter()
        .find(|b| b.range.matches(value))
        .map(|b| b.points)
        .unwrap_or(0)
}

pub fn max_points(bands: &[Band]) -> u32 {
    bands.iter().map(|b| b.points).max().unwrap_or(0)
}

/// Which person a capital-human table is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Applicant,
    Spouse,
}

// French, keyed by ability level

pub const APPLICANT_FRENCH: &[Band] = &[
    band(RangeOp::Between(5, 6), 38),
    band(RangeOp::Between(7, 8), 44),
    band(RangeOp::Between(9, 12), 50),
];

pub const SPOUSE_FRENCH: &[Band] = &[
    band(RangeOp::Between(5, 6), 30),
    band(RangeOp::Between(7, 8), 35),
    band(RangeOp::Between(9, 12), 40),
];

/// Adaptation bonus for the spouse's French. Its edges sit one level lower
/// than the capital-human tables and level 4 has its own row.
pub const SPOUSE_FRENCH_ADAPTATION: &[Band] = &[
    band(RangeOp::Equal(4), 4),
    band(RangeOp::Between(5, 6), 6),
    band(RangeOp::Between(7, 8), 8),
    band(RangeOp::Between(9, 12), 10),
];

// Age, keyed by exact age in years

pub const AGE_WITHOUT_SPOUSE: &[Band] = &[
    band(RangeOp::Between(18, 19), 110),
    band(RangeOp::Between(20, 30), 120),
    band(RangeOp::Equal(31), 110),
    band(RangeOp::Equal(32), 100),
    band(RangeOp::Equal(33), 90),
    band(RangeOp::Equal(34), 80),
    band(RangeOp::Equal(35), 75),
    band(RangeOp::Equal(36), 70),
    band(RangeOp::Equal(37), 65),
    band(RangeOp::Equal(38), 60),
    band(RangeOp::Equal(39), 55),
    band(RangeOp::Equal(40), 50),
    band(RangeOp::Equal(41), 40),
    band(RangeOp::Equal(42), 30),
    band(RangeOp::Equal(43), 20),
    band(RangeOp::Equal(44), 10),
];

pub const AGE_WITH_SPOUSE: &[Band] = &[
    band(RangeOp::Between(18, 19), 90),
    band(RangeOp::Between(20, 30), 100),
    band(RangeOp::Equal(31), 95),
    band(RangeOp::Equal(32), 90),
    band(RangeOp::Equal(33), 81),
    band(RangeOp::Equal(34), 72),
    band(RangeOp::Equal(35), 68),
    band(RangeOp::Equal(36), 63),
    band(RangeOp::Equal(37), 59),
    band(RangeOp::Equal(38), 54),
    band(RangeOp::Equal(39), 50),
    band(RangeOp::Equal(40), 45),
    band(RangeOp::Equal(41), 36),
    band(RangeOp::Equal(42), 27),
    band(RangeOp::Equal(43), 18),
    band(RangeOp::Equal(44), 9),
];

pub const SPOUSE_AGE_ADAPTATION: &[Band] = &[
    band(RangeOp::Between(16, 19), 18),
    band(RangeOp::Between(20, 30), 20),
    band(RangeOp::Equal(31), 18),
    band(RangeOp::Equal(32), 17),
    band(RangeOp::Equal(33), 16),
    band(RangeOp::Equal(34), 15),
    band(RangeOp::Equal(35), 14),
    band(RangeOp::Equal(36), 12),
    band(RangeOp::Equal(37), 10),
    band(RangeOp::Equal(38), 8),
    band(RangeOp::Equal(39), 7),
    band(RangeOp::Equal(40), 6),
    band(RangeOp::Equal(41), 5),
    band(RangeOp::Equal(42), 4),
    band(RangeOp::Equal(43), 3),
    band(RangeOp::Equal(44), 2),
];

// Month-banded tables

pub const WORK_EXPERIENCE_WITHOUT_SPOUSE: &[Band] = &[
    band(RangeOp::Between(12, 23), 20),
    band(RangeOp::Between(24, 35), 40),
    band(RangeOp::Between(36, 47), 50),
    band(RangeOp::GreaterEqual(48), 70),
];

pub const WORK_EXPERIENCE_WITH_SPOUSE: &[Band] = &[
    band(RangeOp::Between(12, 23), 15),
    band(RangeOp::Between(24, 35), 30),
    band(RangeOp::Between(36, 47), 35),
    band(RangeOp::GreaterEqual(48), 50),
];

pub const DIAGNOSIS_BALANCED: &[Band] = &[
    band(RangeOp::Between(12, 23), 5),
    band(RangeOp::Between(24, 35), 10),
    band(RangeOp::Between(36, 47), 15),
    band(RangeOp::GreaterEqual(48), 25),
];

pub const DIAGNOSIS_SLIGHT_SHORTAGE: &[Band] = &[
    band(RangeOp::Between(12, 23), 70),
    band(RangeOp::Between(24, 35), 80),
    band(RangeOp::Between(36, 47), 90),
    band(RangeOp::GreaterEqual(48), 100),
];

pub const DIAGNOSIS_SHORTAGE: &[Band] = &[
    band(RangeOp::Between(12, 23), 90),
    band(RangeOp::Between(24, 35), 100),
    band(RangeOp::Between(36, 47), 110),
    band(RangeOp::GreaterEqual(48), 120),
];

pub const WORK_EXPERIENCE_QUEBEC: &[Band] = &[
    band(RangeOp::Between(12, 23), 40),
    band(RangeOp::Between(24, 35), 80),
    band(RangeOp::Between(36, 47), 120),
    band(RangeOp::GreaterEqual(48), 160),
];

pub const SPOUSE_WORK_EXPERIENCE_QUEBEC: &[Band] = &[
    band(RangeOp::Between(6, 11), 5),
    band(RangeOp::Between(12, 23), 10),
    band(RangeOp::Between(24, 35), 15),
    band(RangeOp::Between(36, 47), 23),
    band(RangeOp::GreaterEqual(48), 30),
];

pub const RESIDENCE_OUTSIDE_MONTREAL: &[Band] = &[
    band(RangeOp::Between(6, 11), 6),
    band(RangeOp::Between(12, 23), 16),
    band(RangeOp::Between(24, 35), 24),
    band(RangeOp::Between(36, 47), 32),
    band(RangeOp::GreaterEqual(48), 40),
];

pub const STUDY_STAY_COMPLETED: &[Band] = &[
    band(RangeOp::Between(6, 11), 1),
    band(RangeOp::Between(12, 23), 3),
    band(RangeOp::Between(24, 35), 5),
    band(RangeOp::Between(36, 47), 8),
    band(RangeOp::GreaterEqual(48), 10),
];

pub const STUDY_STAY_ONGOING: &[Band] = &[
    band(RangeOp::Between(6, 11), 5),
    band(RangeOp::Between(12, 23), 12),
    band(RangeOp::Between(24, 35), 18),
    band(RangeOp::Between(36, 47), 24),
    band(RangeOp::GreaterEqual(48), 30),
];

/// Every month- and age-banded table, for listing the grid.
pub const BAND_TABLES: &[(&str, &[Band])] = &[
    ("French, applicant", APPLICANT_FRENCH),
    ("French, spouse adaptation", SPOUSE_FRENCH_ADAPTATION),
    ("Age, no spouse", AGE_WITHOUT_SPOUSE),
    ("Age, with spouse", AGE_WITH_SPOUSE),
    ("Spouse age", SPOUSE_AGE_ADAPTATION),
    ("Experience, no spouse", WORK_EXPERIENCE_WITHOUT_SPOUSE),
    ("Experience, with spouse", WORK_EXPERIENCE_WITH_SPOUSE),
    ("Diagnosis, balanced", DIAGNOSIS_BALANCED),
    ("Diagnosis, slight shortage", DIAGNOSIS_SLIGHT_SHORTAGE),
    ("Diagnosis, shortage", DIAGNOSIS_SHORTAGE),
    ("Quebec work experience", WORK_EXPERIENCE_QUEBEC),
    ("Spouse Quebec work", SPOUSE_WORK_EXPERIENCE_QUEBEC),
    ("Residence outside Montreal", RESIDENCE_OUTSIDE_MONTREAL),
    ("Study stay, completed", STUDY_STAY_COMPLETED),
    ("Study stay, ongoing", STUDY_STAY_ONGOING),
];

pub const JOB_OFFER_INSIDE_MONTREAL: u32 = 30;
pub const JOB_OFFER_OUTSIDE_MONTREAL: u32 = 50;
pub const AUTHORIZATION_TO_PRACTICE: u32 = 50;
pub const FAMILY_OF_APPLICANT: u32 = 10;
pub const FAMILY_OF_SPOUSE: u32 = 5;

fn french_band_points(bands: &[Band], level: FrenchLevel) -> u32 {
    let raw = level.get();
    assert!(
        (FrenchLevel::MIN..=FrenchLevel::MAX).contains(&raw),
        "French level {} escaped validation",
        raw
    );
    lookup(bands, u32::from(raw))
}

/// Capital-human points for one French ability.
pub fn french_points(level: FrenchLevel, role: Role) -> u32 {
    match role {
        Role::Applicant => french_band_points(APPLICANT_FRENCH, level),
        Role::Spouse => french_band_points(SPOUSE_FRENCH, level),
    }
}

pub fn spouse_french_adaptation_points(level: FrenchLevel) -> u32 {
    french_band_points(SPOUSE_FRENCH_ADAPTATION, level)
}

/// Applicant age table; a spouse lowers every row.
pub fn age_table(has_spouse: bool) -> &'static [Band] {
    if has_spouse {
        AGE_WITH_SPOUSE
    } else {
        AGE_WITHOUT_SPOUSE
    }
}

pub fn age_points(age: u32, has_spouse: bool) -> u32 {
    lookup(age_table(has_spouse), age)
}

pub fn spouse_age_adaptation_points(age: u32) -> u32 {
    lookup(SPOUSE_AGE_ADAPTATION, age)
}

pub fn work_experience_table(has_spouse: bool) -> &'static [Band] {
    if has_spouse {
        WORK_EXPERIENCE_WITH_SPOUSE
    } else {
        WORK_EXPERIENCE_WITHOUT_SPOUSE
    }
}

pub fn work_experience_points(months: u32, has_spouse: bool) -> u32 {
    lookup(work_experience_table(has_spouse), months)
}

/// Capital-human points for an education level.
pub fn education_points(level: EducationLevel, role: Role) -> u32 {
    use EducationLevel::*;

    let (applicant, spouse) = match level {
        None => (0, 0),
        GeneralSecondary => (13, 11),
        ProfessionalSecondary600To899 => (13, 11),
        ProfessionalSecondary900Plus => (26, 22),
        ProfessionalSecondaryOneYearNonQc => (26, 22),
        PostsecondaryGeneralTwoYears => (39, 33),
        PostsecondaryTechnical900Plus => (52, 44),
        PostsecondaryTechnicalOneToTwoYearsNonQc => (52, 44),
        PostsecondaryTechnicalThreeYears => (78, 66),
        UniversityFirstCycleOneYear => (78, 66),
        UniversityFirstCycleTwoYears => (91, 77),
        UniversityFirstCycleThreeToFourYears => (104, 88),
        UniversityFirstCycleFivePlusYears => (110, 93),
        UniversitySecondCycleOneYear => (110, 93),
        UniversitySecondCycleTwoPlusYears => (117, 99),
        MedicalSpecializationTwoPlusYears => (130, 110),
        UniversityThirdCycle => (130, 110),
    };

    match role {
        Role::Applicant => applicant,
        Role::Spouse => spouse,
    }
}

pub fn spouse_education_adaptation_points(level: EducationLevel) -> u32 {
    use EducationLevel::*;

    match level {
        None => 0,
        GeneralSecondary | ProfessionalSecondary600To899 => 2,
        ProfessionalSecondary900Plus | ProfessionalSecondaryOneYearNonQc => 4,
        PostsecondaryGeneralTwoYears => 6,
        PostsecondaryTechnical900Plus | PostsecondaryTechnicalOneToTwoYearsNonQc => 8,
        PostsecondaryTechnicalThreeYears | UniversityFirstCycleOneYear => 12,
        UniversityFirstCycleTwoYears => 14,
        UniversityFirstCycleThreeToFourYears => 16,
        UniversityFirstCycleFivePlusYears | UniversitySecondCycleOneYear => 17,
        UniversitySecondCycleTwoPlusYears => 18,
        MedicalSpecializationTwoPlusYears | UniversityThirdCycle => 20,
    }
}

/// The two non-Quebec categories earn nothing as a Quebec diploma.
pub fn quebec_diploma_points(level: EducationLevel) -> u32 {
    use EducationLevel::*;

    match level {
        None => 0,
        GeneralSecondary | ProfessionalSecondary600To899 => 20,
        ProfessionalSecondary900Plus => 40,
        ProfessionalSecondaryOneYearNonQc => 0,
        PostsecondaryGeneralTwoYears => 60,
        PostsecondaryTechnical900Plus => 80,
        PostsecondaryTechnicalOneToTwoYearsNonQc => 0,
        PostsecondaryTechnicalThreeYears | UniversityFirstCycleOneYear => 120,
        UniversityFirstCycleTwoYears => 140,
        UniversityFirstCycleThreeToFourYears => 160,
        UniversityFirstCycleFivePlusYears | UniversitySecondCycleOneYear => 170,
        UniversitySecondCycleTwoPlusYears => 180,
        MedicalSpecializationTwoPlusYears | UniversityThirdCycle => 200,
    }
}

pub fn spouse_quebec_diploma_points(level: EducationLevel) -> u32 {
    use EducationLevel::*;

    match level {
        None => 0,
        GeneralSecondary | ProfessionalSecondary600To899 => 3,
        ProfessionalSecondary900Plus => 6,
        ProfessionalSecondaryOneYearNonQc => 0,
        PostsecondaryGeneralTwoYears => 9,
        PostsecondaryTechnical900Plus => 12,
        PostsecondaryTechnicalOneToTwoYearsNonQc => 0,
        PostsecondaryTechnicalThreeYears | UniversityFirstCycleOneYear => 18,
        UniversityFirstCycleTwoYears => 21,
        UniversityFirstCycleThreeToFourYears => 24,
        UniversityFirstCycleFivePlusYears | UniversitySecondCycleOneYear => 25,
        UniversitySecondCycleTwoPlusYears => 27,
        MedicalSpecializationTwoPlusYears | UniversityThirdCycle => 30,
    }
}

pub fn diagnosis_table(diagnosis: LabourMarketDiagnosis) -> &'static [Band] {
    match diagnosis {
        LabourMarketDiagnosis::Balanced => DIAGNOSIS_BALANCED,
        LabourMarketDiagnosis::SlightShortage => DIAGNOSIS_SLIGHT_SHORTAGE,
        LabourMarketDiagnosis::Shortage => DIAGNOSIS_SHORTAGE,
    }
}

/// Requires at least 12 months in the principal profession.
pub fn labour_market_points(diagnosis: LabourMarketDiagnosis, months: u32) -> u32 {
    lookup(diagnosis_table(diagnosis), months)
}

pub fn work_experience_quebec_points(months: u32) -> u32 {
    lookup(WORK_EXPERIENCE_QUEBEC, months)
}

pub fn spouse_work_experience_quebec_points(months: u32) -> u32 {
    lookup(SPOUSE_WORK_EXPERIENCE_QUEBEC, months)
}

pub fn residence_outside_montreal_points(months: u32) -> u32 {
    lookup(RESIDENCE_OUTSIDE_MONTREAL, months)
}

pub fn job_offer_points(offer: Option<JobOfferLocation>) -> u32 {
    match offer {
        Some(JobOfferLocation::InsideMontreal) => JOB_OFFER_INSIDE_MONTREAL,
        Some(JobOfferLocation::OutsideMontreal) => JOB_OFFER_OUTSIDE_MONTREAL,
        None => 0,
    }
}

pub fn authorization_points(authorized: bool) -> u32 {
    if authorized {
        AUTHORIZATION_TO_PRACTICE
    } else {
        0
    }
}

pub fn study_stay_completed_points(months: u32) -> u32 {
    lookup(STUDY_STAY_COMPLETED, months)
}

pub fn study_stay_ongoing_points(months: u32) -> u32 {
    lookup(STUDY_STAY_ONGOING, months)
}

/// Family bonus. Both conditions gate on the applicant's own residence
/// intent, and the spouse's family never stacks with the applicant's.
pub fn family_member_points(
    applicant_has_family: bool,
    spouse_has_family: bool,
    intends_outside_montreal: bool,
) -> u32 {
    if !intends_outside_montreal {
        return 0;
    }
    let mut points = 0;
    if applicant_has_family {
        points = FAMILY_OF_APPLICANT;
    }
    if spouse_has_family {
        points = points.max(FAMILY_OF_SPOUSE);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(n: u8) -> FrenchLevel {
        FrenchLevel::new(n).unwrap()
    }

    fn applicant_education(level: EducationLevel) -> u32 {
        education_points(level, Role::Applicant)
    }

    fn spouse_education(level: EducationLevel) -> u32 {
        education_points(level, Role::Spouse)
    }

    fn highest(points: fn(EducationLevel) -> u32) -> u32 {
        EducationLevel::ALL.into_iter().map(points).max().unwrap()
    }

    #[test]
    fn test_range_between_is_inclusive() {
        let range = RangeOp::Between(12, 23);
        assert!(!range.matches(11));
        assert!(range.matches(12));
        assert!(range.matches(23));
        assert!(!range.matches(24));
    }

    #[test]
    fn test_range_display() {
        assert_eq!(RangeOp::Equal(31).to_string(), "31");
        assert_eq!(RangeOp::Between(6, 11).to_string(), "6-11");
        assert_eq!(RangeOp::GreaterEqual(48).to_string(), ">=48");
    }

    #[test]
    fn test_lookup_falls_through_to_zero() {
        assert_eq!(lookup(WORK_EXPERIENCE_QUEBEC, 11), 0);
        assert_eq!(lookup(AGE_WITHOUT_SPOUSE, 17), 0);
        assert_eq!(lookup(AGE_WITHOUT_SPOUSE, 45), 0);
    }

    #[test]
    fn test_lookup_clamps_to_top_band() {
        assert_eq!(work_experience_quebec_points(60), 160);
        assert_eq!(work_experience_quebec_points(1000), 160);
        assert_eq!(work_experience_points(u32::MAX, false), 70);
    }

    #[test]
    fn test_applicant_french_bands() {
        let expected = [0, 0, 0, 0, 38, 38, 44, 44, 50, 50, 50, 50];
        for (lvl, points) in FrenchLevel::all().zip(expected) {
            assert_eq!(french_points(lvl, Role::Applicant), points, "level {lvl}");
        }
    }

    #[test]
    fn test_spouse_capital_human_french_bands() {
        assert_eq!(french_points(level(4), Role::Spouse), 0);
        assert_eq!(french_points(level(5), Role::Spouse), 30);
        assert_eq!(french_points(level(8), Role::Spouse), 35);
        assert_eq!(french_points(level(12), Role::Spouse), 40);
    }

    #[test]
    fn test_spouse_french_adaptation_bands() {
        let expected = [0, 0, 0, 4, 6, 6, 8, 8, 10, 10, 10, 10];
        for (lvl, points) in FrenchLevel::all().zip(expected) {
            assert_eq!(spouse_french_adaptation_points(lvl), points, "level {lvl}");
        }
    }

    #[test]
    fn test_age_tables() {
        assert_eq!(age_points(17, false), 0);
        assert_eq!(age_points(18, false), 110);
        assert_eq!(age_points(25, false), 120);
        assert_eq!(age_points(36, false), 70);
        assert_eq!(age_points(44, false), 10);
        assert_eq!(age_points(19, true), 90);
        assert_eq!(age_points(35, true), 68);
        assert_eq!(age_points(36, true), 63);
        assert_eq!(age_points(44, true), 9);
        assert_eq!(age_points(45, true), 0);
    }

    #[test]
    fn test_table_selectors_follow_spouse_presence() {
        assert_eq!(max_points(age_table(false)), 120);
        assert_eq!(max_points(age_table(true)), 100);
        assert_eq!(max_points(work_experience_table(false)), 70);
        assert_eq!(max_points(work_experience_table(true)), 50);
    }

    #[test]
    fn test_spouse_age_adaptation() {
        assert_eq!(spouse_age_adaptation_points(15), 0);
        assert_eq!(spouse_age_adaptation_points(16), 18);
        assert_eq!(spouse_age_adaptation_points(30), 20);
        assert_eq!(spouse_age_adaptation_points(32), 17);
        assert_eq!(spouse_age_adaptation_points(36), 12);
        assert_eq!(spouse_age_adaptation_points(44), 2);
        assert_eq!(spouse_age_adaptation_points(45), 0);
    }

    #[test]
    fn test_work_experience_bands() {
        let months = [0, 11, 12, 23, 24, 36, 47, 48, 60];
        let alone = [0, 0, 20, 20, 40, 50, 50, 70, 70];
        let paired = [0, 0, 15, 15, 30, 35, 35, 50, 50];
        for (i, m) in months.into_iter().enumerate() {
            assert_eq!(work_experience_points(m, false), alone[i], "{m} months");
            assert_eq!(work_experience_points(m, true), paired[i], "{m} months");
        }
    }

    #[test]
    fn test_education_tables() {
        let applicant = [
            0, 13, 13, 26, 26, 39, 52, 52, 78, 78, 91, 104, 110, 110, 117, 130, 130,
        ];
        let spouse = [
            0, 11, 11, 22, 22, 33, 44, 44, 66, 66, 77, 88, 93, 93, 99, 110, 110,
        ];
        for (i, level) in EducationLevel::ALL.into_iter().enumerate() {
            assert_eq!(applicant_education(level), applicant[i], "{level}");
            assert_eq!(spouse_education(level), spouse[i], "{level}");
        }
    }

    #[test]
    fn test_diploma_and_spouse_adaptation_tables() {
        let diploma = [
            0, 20, 20, 40, 0, 60, 80, 0, 120, 120, 140, 160, 170, 170, 180, 200, 200,
        ];
        let spouse_diploma = [0, 3, 3, 6, 0, 9, 12, 0, 18, 18, 21, 24, 25, 25, 27, 30, 30];
        let spouse_adaptation = [0, 2, 2, 4, 4, 6, 8, 8, 12, 12, 14, 16, 17, 17, 18, 20, 20];
        for (i, level) in EducationLevel::ALL.into_iter().enumerate() {
            assert_eq!(quebec_diploma_points(level), diploma[i], "{level}");
            assert_eq!(spouse_quebec_diploma_points(level), spouse_diploma[i]);
            assert_eq!(
                spouse_education_adaptation_points(level),
                spouse_adaptation[i]
            );
        }
        assert_eq!(highest(quebec_diploma_points), 200);
        assert_eq!(highest(spouse_quebec_diploma_points), 30);
        assert_eq!(highest(spouse_education_adaptation_points), 20);
    }

    #[test]
    fn test_non_quebec_diplomas_score_zero() {
        for level in [
            EducationLevel::ProfessionalSecondaryOneYearNonQc,
            EducationLevel::PostsecondaryTechnicalOneToTwoYearsNonQc,
        ] {
            assert_eq!(quebec_diploma_points(level), 0);
            assert_eq!(spouse_quebec_diploma_points(level), 0);
            // The same categories still count as general education.
            assert!(applicant_education(level) > 0);
            assert!(spouse_education_adaptation_points(level) > 0);
        }
    }

    #[test]
    fn test_labour_market_tiers() {
        use LabourMarketDiagnosis::*;
        assert_eq!(labour_market_points(Shortage, 11), 0);
        assert_eq!(labour_market_points(Balanced, 12), 5);
        assert_eq!(labour_market_points(Balanced, 24), 10);
        assert_eq!(labour_market_points(Balanced, 36), 15);
        assert_eq!(labour_market_points(Balanced, 48), 25);
        assert_eq!(labour_market_points(SlightShortage, 18), 70);
        assert_eq!(labour_market_points(SlightShortage, 60), 100);
        assert_eq!(labour_market_points(Shortage, 12), 90);
        assert_eq!(labour_market_points(Shortage, 61), 120);
        assert_eq!(labour_market_points(Shortage, 1000), 120);
    }

    #[test]
    fn test_residence_and_spouse_quebec_work() {
        let months = [5, 6, 12, 24, 36, 48, 200];
        let residence = [0, 6, 16, 24, 32, 40, 40];
        let spouse = [0, 5, 10, 15, 23, 30, 30];
        for (i, m) in months.into_iter().enumerate() {
            assert_eq!(residence_outside_montreal_points(m), residence[i]);
            assert_eq!(spouse_work_experience_quebec_points(m), spouse[i]);
        }
    }

    #[test]
    fn test_study_stay_sequences() {
        let months = [0, 5, 6, 12, 24, 36, 48, 60, 1000];
        let completed = months.map(study_stay_completed_points);
        let ongoing = months.map(study_stay_ongoing_points);
        assert_eq!(completed, [0, 0, 1, 3, 5, 8, 10, 10, 10]);
        assert_eq!(ongoing, [0, 0, 5, 12, 18, 24, 30, 30, 30]);
    }

    #[test]
    fn test_job_offer_and_authorization() {
        let inside = Some(JobOfferLocation::InsideMontreal);
        let outside = Some(JobOfferLocation::OutsideMontreal);
        assert_eq!(job_offer_points(None), 0);
        assert_eq!(job_offer_points(inside), 30);
        assert_eq!(job_offer_points(outside), 50);
        assert_eq!(authorization_points(true), 50);
        assert_eq!(authorization_points(false), 0);
    }

    #[test]
    fn test_family_member_never_stacks() {
        assert_eq!(family_member_points(true, false, true), 10);
        assert_eq!(family_member_points(false, true, true), 5);
        assert_eq!(family_member_points(true, true, true), 10);
        assert_eq!(family_member_points(true, true, false), 0);
        assert_eq!(family_member_points(false, false, true), 0);
    }

    #[test]
    fn test_max_points() {
        assert_eq!(max_points(AGE_WITHOUT_SPOUSE), 120);
        assert_eq!(max_points(SPOUSE_FRENCH_ADAPTATION), 10);
        assert_eq!(max_points(&[]), 0);
    }
}
