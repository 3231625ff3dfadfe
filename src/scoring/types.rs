use std::fmt;

/// A French ability level on the 12-level Quebec scale.
///
/// Only constructible through [`FrenchLevel::new`], so any value held by an
/// input record is already within `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrenchLevel(u8);

impl FrenchLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 12;

    pub fn new(level: u8) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Some(FrenchLevel(level))
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every legal level, lowest first.
    pub fn all() -> impl Iterator<Item = FrenchLevel> {
        (Self::MIN..=Self::MAX).map(FrenchLevel)
    }
}

impl fmt::Display for FrenchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrenchAbilities {
    pub oral_comprehension: FrenchLevel,
    pub oral_production: FrenchLevel,
    pub written_comprehension: FrenchLevel,
    pub written_production: FrenchLevel,
}

impl FrenchAbilities {
    /// Same level for all four abilities.
    pub fn uniform(level: FrenchLevel) -> Self {
        Self {
            oral_comprehension: level,
            oral_production: level,
            written_comprehension: level,
            written_production: level,
        }
    }

    pub fn levels(&self) -> [FrenchLevel; 4] {
        [
            self.oral_comprehension,
            self.oral_production,
            self.written_comprehension,
            self.written_production,
        ]
    }
}

/// Education categories, ordered by attainment.
///
/// The same domain is used for the general education level and for the
/// optional Quebec diploma. Two members describe credentials obtained outside
/// Quebec and never earn Quebec-diploma points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EducationLevel {
    None,
    GeneralSecondary,
    ProfessionalSecondary600To899,
    ProfessionalSecondary900Plus,
    ProfessionalSecondaryOneYearNonQc,
    PostsecondaryGeneralTwoYears,
    PostsecondaryTechnical900Plus,
    PostsecondaryTechnicalOneToTwoYearsNonQc,
    PostsecondaryTechnicalThreeYears,
    UniversityFirstCycleOneYear,
    UniversityFirstCycleTwoYears,
    UniversityFirstCycleThreeToFourYears,
    UniversityFirstCycleFivePlusYears,
    UniversitySecondCycleOneYear,
    UniversitySecondCycleTwoPlusYears,
    MedicalSpecializationTwoPlusYears,
    UniversityThirdCycle,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 17] = [
        EducationLevel::None,
        EducationLevel::GeneralSecondary,
        EducationLevel::ProfessionalSecondary600To899,
        EducationLevel::ProfessionalSecondary900Plus,
        EducationLevel::ProfessionalSecondaryOneYearNonQc,
        EducationLevel::PostsecondaryGeneralTwoYears,
        EducationLevel::PostsecondaryTechnical900Plus,
        EducationLevel::PostsecondaryTechnicalOneToTwoYearsNonQc,
        EducationLevel::PostsecondaryTechnicalThreeYears,
        EducationLevel::UniversityFirstCycleOneYear,
        EducationLevel::UniversityFirstCycleTwoYears,
        EducationLevel::UniversityFirstCycleThreeToFourYears,
        EducationLevel::UniversityFirstCycleFivePlusYears,
        EducationLevel::UniversitySecondCycleOneYear,
        EducationLevel::UniversitySecondCycleTwoPlusYears,
        EducationLevel::MedicalSpecializationTwoPlusYears,
        EducationLevel::UniversityThirdCycle,
    ];

    /// Wire tags in the same order as [`EducationLevel::ALL`].
    pub const TAGS: [&'static str; 17] = [
        "none",
        "general_secondary",
        "professional_secondary_600_899",
        "professional_secondary_900_plus",
        "professional_secondary_1_year_non_qc",
        "postsecondary_general_2_years",
        "postsecondary_technical_900_plus",
        "postsecondary_technical_1_2_years_non_qc",
        "postsecondary_technical_3_years",
        "university_1st_cycle_1_year",
        "university_1st_cycle_2_years",
        "university_1st_cycle_3_4_years",
        "university_1st_cycle_5_plus_years",
        "university_2nd_cycle_1_year",
        "university_2nd_cycle_2_plus_years",
        "medical_specialization_2_plus_years",
        "university_3rd_cycle",
    ];

    pub fn as_str(self) -> &'static str {
        Self::TAGS[self as usize]
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::TAGS
            .iter()
            .position(|t| *t == tag)
            .map(|i| Self::ALL[i])
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Labour-market diagnosis published for the applicant's occupation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabourMarketDiagnosis {
    Balanced,
    SlightShortage,
    Shortage,
}

impl LabourMarketDiagnosis {
    pub const ALL: [LabourMarketDiagnosis; 3] = [
        LabourMarketDiagnosis::Balanced,
        LabourMarketDiagnosis::SlightShortage,
        LabourMarketDiagnosis::Shortage,
    ];

    pub const TAGS: [&'static str; 3] = ["balanced", "slight_shortage", "shortage"];

    pub fn as_str(self) -> &'static str {
        Self::TAGS[self as usize]
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::TAGS
            .iter()
            .position(|t| *t == tag)
            .map(|i| Self::ALL[i])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobOfferLocation {
    InsideMontreal,
    OutsideMontreal,
}

impl JobOfferLocation {
    pub const TAGS: [&'static str; 2] = ["inside_montreal", "outside_montreal"];

    pub fn as_str(self) -> &'static str {
        Self::TAGS[self as usize]
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "inside_montreal" => Some(JobOfferLocation::InsideMontreal),
            "outside_montreal" => Some(JobOfferLocation::OutsideMontreal),
            _ => None,
        }
    }
}

/// The principal applicant. All month counts are raw; scoring clamps them to
/// the top band of each table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantInput {
    pub age: u32,
    pub education_level: EducationLevel,
    pub work_experience_months: u32,
    pub french_abilities: FrenchAbilities,
    pub labour_market_diagnosis: LabourMarketDiagnosis,
    pub work_experience_principal_profession_months: u32,
    pub quebec_diploma: Option<EducationLevel>,
    pub work_experience_quebec_months: u32,
    pub residence_outside_montreal_months: u32,
    pub validated_job_offer: Option<JobOfferLocation>,
    pub authorization_to_practice: bool,
    pub study_stay_quebec_completed_months: u32,
    pub study_stay_quebec_ongoing_months: u32,
    pub has_family_in_quebec: bool,
    pub intends_to_reside_outside_montreal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpouseInput {
    pub french_abilities: FrenchAbilities,
    pub age: u32,
    pub work_experience_quebec_months: u32,
    pub education_level: EducationLevel,
    pub quebec_diploma: Option<EducationLevel>,
    pub has_family_in_quebec: bool,
}

/// A fully validated application, as produced by [`crate::scoring::decode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorInput {
    pub applicant: ApplicantInput,
    pub spouse: Option<SpouseInput>,
}

impl CalculatorInput {
    pub fn has_spouse(&self) -> bool {
        self.spouse.is_some()
    }
}
