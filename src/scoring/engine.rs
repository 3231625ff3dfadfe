use serde::Serialize;

use super::factors::{self, Role};
use super::types::{CalculatorInput, EducationLevel, FrenchAbilities, FrenchLevel, SpouseInput};

pub const CAPITAL_HUMAN_MAX: u32 = 520;
pub const LABOUR_MARKET_NEEDS_MAX: u32 = 700;
pub const ADAPTATION_FACTORS_MAX: u32 = 180;
pub const TOTAL_MAX: u32 = 1400;

/// One line of a category breakdown, used for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorContribution {
    pub label: &'static str,
    pub points: u32,
    pub max: u32,
    /// Only meaningful when the application includes a spouse
    pub spouse_only: bool,
}

impl FactorContribution {
    fn new(label: &'static str, points: u32, max: u32) -> Self {
        Self {
            label,
            points,
            max,
            spouse_only: false,
        }
    }

    fn spouse(label: &'static str, points: u32, max: u32) -> Self {
        Self {
            label,
            points,
            max,
            spouse_only: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapitalHumanPoints {
    pub french_knowledge: u32,
    pub age: u32,
    pub work_experience: u32,
    pub education_level: u32,
    pub total: u32,
}

impl CapitalHumanPoints {
    /// Age and experience maxima come from the tables in force, which
    /// depend on whether the application has a spouse.
    pub fn contributions(&self, has_spouse: bool) -> Vec<FactorContribution> {
        let french_max = 4 * factors::max_points(factors::APPLICANT_FRENCH);
        let age_max = factors::max_points(factors::age_table(has_spouse));
        let experience_max = factors::max_points(factors::work_experience_table(has_spouse));
        let education_max = max_over_education(applicant_education);
        vec![
            FactorContribution::new("French Knowledge", self.french_knowledge, french_max),
            FactorContribution::new("Age", self.age, age_max),
            FactorContribution::new("Work Experience", self.work_experience, experience_max),
            FactorContribution::new("Education Level", self.education_level, education_max),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabourMarketNeedsPoints {
    pub labour_market_diagnosis: u32,
    pub quebec_diploma: u32,
    pub work_experience_quebec: u32,
    pub residence_outside_montreal: u32,
    pub validated_job_offer: u32,
    pub authorization_to_practice: u32,
    pub total: u32,
}

impl LabourMarketNeedsPoints {
    pub fn contributions(&self) -> Vec<FactorContribution> {
        let diagnosis_max = factors::max_points(factors::DIAGNOSIS_SHORTAGE);
        let diploma_max = max_over_education(factors::quebec_diploma_points);
        let quebec_max = factors::max_points(factors::WORK_EXPERIENCE_QUEBEC);
        let residence_max = factors::max_points(factors::RESIDENCE_OUTSIDE_MONTREAL);
        vec![
            FactorContribution::new(
                "Labour Market Diagnosis",
                self.labour_market_diagnosis,
                diagnosis_max,
            ),
            FactorContribution::new("Quebec Diploma", self.quebec_diploma, diploma_max),
            FactorContribution::new(
                "Work Experience in Quebec",
                self.work_experience_quebec,
                quebec_max,
            ),
            FactorContribution::new(
                "Residence Outside Montreal",
                self.residence_outside_montreal,
                residence_max,
            ),
            FactorContribution::new(
                "Validated Job Offer",
                self.validated_job_offer,
                factors::JOB_OFFER_OUTSIDE_MONTREAL,
            ),
            FactorContribution::new(
                "Authorization to Practice",
                self.authorization_to_practice,
                factors::AUTHORIZATION_TO_PRACTICE,
            ),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptationFactorsPoints {
    pub study_stay_completed: u32,
    pub study_stay_ongoing: u32,
    pub family_member: u32,
    pub spouse_french: u32,
    pub spouse_age: u32,
    pub spouse_work_experience_quebec: u32,
    pub spouse_education: u32,
    pub spouse_quebec_diploma: u32,
    pub total: u32,
}

impl AdaptationFactorsPoints {
    /// Item maxima are the table maxima. With a spouse they add up to more
    /// than the category ceiling, which [`calculate_points`] enforces.
    pub fn contributions(&self) -> Vec<FactorContribution> {
        let completed_max = factors::max_points(factors::STUDY_STAY_COMPLETED);
        let in_progress_max = factors::max_points(factors::STUDY_STAY_ONGOING);
        let french_max = 4 * factors::max_points(factors::SPOUSE_FRENCH_ADAPTATION);
        let age_max = factors::max_points(factors::SPOUSE_AGE_ADAPTATION);
        let quebec_max = factors::max_points(factors::SPOUSE_WORK_EXPERIENCE_QUEBEC);
        let education_max = max_over_education(factors::spouse_education_adaptation_points);
        let diploma_max = max_over_education(factors::spouse_quebec_diploma_points);
        vec![
            FactorContribution::new(
                "Study Stay (Completed)",
                self.study_stay_completed,
                completed_max,
            ),
            FactorContribution::new(
                "Study Stay (Ongoing)",
                self.study_stay_ongoing,
                in_progress_max,
            ),
            FactorContribution::new(
                "Family Member in Quebec",
                self.family_member,
                factors::FAMILY_OF_APPLICANT,
            ),
            FactorContribution::spouse("Spouse French Knowledge", self.spouse_french, french_max),
            FactorContribution::spouse("Spouse Age", self.spouse_age, age_max),
            FactorContribution::spouse(
                "Spouse Work Experience in Quebec",
                self.spouse_work_experience_quebec,
                quebec_max,
            ),
            FactorContribution::spouse("Spouse Education", self.spouse_education, education_max),
            FactorContribution::spouse(
                "Spouse Quebec Diploma",
                self.spouse_quebec_diploma,
                diploma_max,
            ),
        ]
    }

    fn item_sum(&self) -> u32 {
        self.study_stay_completed
            + self.study_stay_ongoing
            + self.family_member
            + self.spouse_french
            + self.spouse_age
            + self.spouse_work_experience_quebec
            + self.spouse_education
            + self.spouse_quebec_diploma
    }

    /// Settle `total`, trimming the ongoing study stay by whatever the items
    /// exceed the category ceiling by. Only spouse bonuses reach that far, and
    /// the excess (at most 10) is always covered by an ongoing stay of 24+.
    fn fit_ceiling(&mut self) {
        let excess = self.item_sum().saturating_sub(ADAPTATION_FACTORS_MAX);
        self.study_stay_ongoing = self.study_stay_ongoing.saturating_sub(excess);
        self.total = self.item_sum();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPoints {
    pub capital_human: u32,
    pub labour_market_needs: u32,
    pub adaptation_factors: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedPoints {
    pub capital_human: CapitalHumanPoints,
    pub labour_market_needs: LabourMarketNeedsPoints,
    pub adaptation_factors: AdaptationFactorsPoints,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub total_points: u32,
    pub category_points: CategoryPoints,
    pub detailed_points: DetailedPoints,
    pub has_spouse: bool,
}

fn max_over_education(points: impl Fn(EducationLevel) -> u32) -> u32 {
    EducationLevel::ALL
        .into_iter()
        .map(points)
        .max()
        .unwrap_or(0)
}

fn applicant_education(level: EducationLevel) -> u32 {
    factors::education_points(level, Role::Applicant)
}

fn applicant_french(level: FrenchLevel) -> u32 {
    factors::french_points(level, Role::Applicant)
}

fn sum_french(abilities: &FrenchAbilities, per_ability: impl Fn(FrenchLevel) -> u32) -> u32 {
    abilities.levels().into_iter().map(per_ability).sum()
}

fn spouse_bonuses(spouse: &SpouseInput, points: &mut AdaptationFactorsPoints) {
    points.spouse_french = sum_french(
        &spouse.french_abilities,
        factors::spouse_french_adaptation_points,
    );
    points.spouse_age = factors::spouse_age_adaptation_points(spouse.age);
    points.spouse_work_experience_quebec =
        factors::spouse_work_experience_quebec_points(spouse.work_experience_quebec_months);
    points.spouse_education = factors::spouse_education_adaptation_points(spouse.education_level);
    points.spouse_quebec_diploma = match spouse.quebec_diploma {
        Some(level) => factors::spouse_quebec_diploma_points(level),
        None => 0,
    };
}

/// Score a validated application against the point grid.
///
/// Pure and deterministic: the same input always yields the same result.
/// Month counts beyond a table's last band score the top band. Every factor
/// is looked up on its own; the adaptation ceiling is applied afterwards.
pub fn calculate_points(input: &CalculatorInput) -> CalculationResult {
    let applicant = &input.applicant;
    let spouse = input.spouse.as_ref();
    let has_spouse = spouse.is_some();

    let french_knowledge = sum_french(&applicant.french_abilities, applicant_french);
    let age = factors::age_points(applicant.age, has_spouse);
    let work_experience =
        factors::work_experience_points(applicant.work_experience_months, has_spouse);
    let education_level = applicant_education(applicant.education_level);
    let capital_human = CapitalHumanPoints {
        french_knowledge,
        age,
        work_experience,
        education_level,
        total: french_knowledge + age + work_experience + education_level,
    };

    let labour_market_diagnosis = factors::labour_market_points(
        applicant.labour_market_diagnosis,
        applicant.work_experience_principal_profession_months,
    );
    let quebec_diploma = match applicant.quebec_diploma {
        Some(level) => factors::quebec_diploma_points(level),
        None => 0,
    };
    let work_experience_quebec =
        factors::work_experience_quebec_points(applicant.work_experience_quebec_months);
    let residence_outside_montreal =
        factors::residence_outside_montreal_points(applicant.residence_outside_montreal_months);
    let validated_job_offer = factors::job_offer_points(applicant.validated_job_offer);
    let authorization_to_practice =
        factors::authorization_points(applicant.authorization_to_practice);
    let labour_market_needs = LabourMarketNeedsPoints {
        labour_market_diagnosis,
        quebec_diploma,
        work_experience_quebec,
        residence_outside_montreal,
        validated_job_offer,
        authorization_to_practice,
        total: labour_market_diagnosis
            + quebec_diploma
            + work_experience_quebec
            + residence_outside_montreal
            + validated_job_offer
            + authorization_to_practice,
    };

    let study_stay_completed =
        factors::study_stay_completed_points(applicant.study_stay_quebec_completed_months);
    let study_stay_ongoing =
        factors::study_stay_ongoing_points(applicant.study_stay_quebec_ongoing_months);
    let family_member = factors::family_member_points(
        applicant.has_family_in_quebec,
        spouse.is_some_and(|s| s.has_family_in_quebec),
        applicant.intends_to_reside_outside_montreal,
    );
    let mut adaptation_factors = AdaptationFactorsPoints {
        study_stay_completed,
        study_stay_ongoing,
        family_member,
        ..AdaptationFactorsPoints::default()
    };
    if let Some(spouse) = spouse {
        spouse_bonuses(spouse, &mut adaptation_factors);
    }
    adaptation_factors.fit_ceiling();

    let category_points = CategoryPoints {
        capital_human: capital_human.total,
        labour_market_needs: labour_market_needs.total,
        adaptation_factors: adaptation_factors.total,
    };

    CalculationResult {
        total_points: category_points.capital_human
            + category_points.labour_market_needs
            + category_points.adaptation_factors,
        category_points,
        detailed_points: DetailedPoints {
            capital_human,
            labour_market_needs,
            adaptation_factors,
        },
        has_spouse,
    }
}
