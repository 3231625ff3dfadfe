use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use super::types::{
    ApplicantInput, CalculatorInput, EducationLevel, FrenchAbilities, FrenchLevel, JobOfferLocation,
    LabourMarketDiagnosis, SpouseInput,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldErrorKind {
    #[error("required field is missing")]
    Missing,
    #[error("expected {expected}, found {found}")]
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
    #[error("unknown value '{found}', expected one of: {}", .expected.join(", "))]
    UnknownVariant {
        found: String,
        expected: &'static [&'static str],
    },
    #[error("{found} is outside {min}..={max}")]
    OutOfRange { found: String, min: u64, max: u64 },
    #[error("{found} is not a whole number")]
    NotInteger { found: String },
    #[error("unknown field")]
    UnknownField,
}

/// One offending field, addressed by its dotted path in the raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {kind}")]
pub struct FieldError {
    pub path: String,
    pub kind: FieldErrorKind,
}

/// Every field of a raw input that violates its domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("input failed validation ({} error(s)): {}", .errors.len(), render(.errors))]
pub struct ValidationFailure {
    pub errors: Vec<FieldError>,
}

fn render(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationFailure {
    /// Dotted paths of the offending fields, in report order.
    pub fn paths(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.path.as_str()).collect()
    }
}

const ROOT_FIELDS: &[&str] = &["applicant", "spouse"];

const FRENCH_FIELDS: &[&str] = &[
    "oralComprehension",
    "oralProduction",
    "writtenComprehension",
    "writtenProduction",
];

const APPLICANT_FIELDS: &[&str] = &[
    "age",
    "educationLevel",
    "workExperienceMonths",
    "frenchAbilities",
    "labourMarketDiagnosis",
    "workExperiencePrincipalProfessionMonths",
    "quebecDiploma",
    "workExperienceQuebecMonths",
    "residenceOutsideMontrealMonths",
    "validatedJobOffer",
    "authorizationToPractice",
    "studyStayQuebecCompletedMonths",
    "studyStayQuebecOngoingMonths",
    "hasFamilyInQuebec",
    "intendsToResideOutsideMontreal",
];

const SPOUSE_FIELDS: &[&str] = &[
    "frenchAbilities",
    "age",
    "workExperienceQuebecMonths",
    "educationLevel",
    "quebecDiploma",
    "hasFamilyInQuebec",
];

/// Decode an untyped input tree into a [`CalculatorInput`].
///
/// Reports all violations at once, never a partially decoded value.
/// `quebecDiploma`, `validatedJobOffer` and `spouse` may be absent or null.
pub fn decode(raw: &Value) -> Result<CalculatorInput, ValidationFailure> {
    let mut decoder = Decoder::default();
    let decoded = decoder.calculator_input(raw);

    match decoded {
        Some(input) if decoder.errors.is_empty() => Ok(input),
        _ => {
            let failure = ValidationFailure {
                errors: decoder.errors,
            };
            debug!(paths = ?failure.paths(), "rejected calculator input");
            Err(failure)
        }
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// An object being decoded, with the dotted path that reached it.
#[derive(Clone, Copy)]
struct Object<'a> {
    map: &'a Map<String, Value>,
    path: &'a str,
}

#[derive(Default)]
struct Decoder {
    errors: Vec<FieldError>,
}

impl Decoder {
    fn fail(&mut self, path: &str, kind: FieldErrorKind) {
        self.errors.push(FieldError {
            path: path.to_string(),
            kind,
        });
    }

    fn wrong_type(&mut self, path: &str, expected: &'static str, found: &Value) {
        let kind = FieldErrorKind::WrongType {
            expected,
            found: type_name(found),
        };
        self.fail(path, kind);
    }

    /// Keys outside `allowed` are reported but do not stop decoding.
    fn object<'a>(
        &mut self,
        value: &'a Value,
        path: &'a str,
        allowed: &[&str],
    ) -> Option<Object<'a>> {
        let Value::Object(map) = value else {
            self.wrong_type(path, "object", value);
            return None;
        };
        for key in map.keys() {
            if !allowed.contains(&key.as_str()) {
                self.fail(&join(path, key), FieldErrorKind::UnknownField);
            }
        }
        Some(Object { map, path })
    }

    fn required<T>(
        &mut self,
        obj: Object<'_>,
        key: &str,
        decode: impl FnOnce(&mut Self, &Value, &str) -> Option<T>,
    ) -> Option<T> {
        let field_path = join(obj.path, key);
        match obj.map.get(key) {
            Some(value) => decode(self, value, &field_path),
            None => {
                self.fail(&field_path, FieldErrorKind::Missing);
                None
            }
        }
    }

    /// `Some(None)` for an absent or null field, `None` when present but invalid.
    fn optional<T>(
        &mut self,
        obj: Object<'_>,
        key: &str,
        decode: impl FnOnce(&mut Self, &Value, &str) -> Option<T>,
    ) -> Option<Option<T>> {
        match obj.map.get(key) {
            None | Some(Value::Null) => Some(None),
            Some(value) => decode(self, value, &join(obj.path, key)).map(Some),
        }
    }

    fn count(&mut self, obj: Object<'_>, key: &str) -> Option<u32> {
        self.required(obj, key, Self::non_negative)
    }

    fn flag(&mut self, obj: Object<'_>, key: &str) -> Option<bool> {
        self.required(obj, key, Self::boolean)
    }

    fn boolean(&mut self, value: &Value, path: &str) -> Option<bool> {
        match value {
            Value::Bool(b) => Some(*b),
            other => {
                self.wrong_type(path, "boolean", other);
                None
            }
        }
    }

    fn bounded(&mut self, value: &Value, path: &str, min: u64, max: u64) -> Option<u64> {
        let Value::Number(n) = value else {
            self.wrong_type(path, "integer", value);
            return None;
        };

        let whole = if let Some(u) = n.as_u64() {
            Some(u)
        } else if n.as_i64().is_some() {
            // Negative integer.
            None
        } else {
            match n.as_f64() {
                Some(f) if f.fract() != 0.0 => {
                    let found = n.to_string();
                    self.fail(path, FieldErrorKind::NotInteger { found });
                    return None;
                }
                Some(f) if f >= 0.0 && f <= max as f64 => Some(f as u64),
                _ => None,
            }
        };

        match whole {
            Some(v) if (min..=max).contains(&v) => Some(v),
            _ => {
                let found = n.to_string();
                self.fail(path, FieldErrorKind::OutOfRange { found, min, max });
                None
            }
        }
    }

    fn non_negative(&mut self, value: &Value, path: &str) -> Option<u32> {
        let max = u64::from(u32::MAX);
        self.bounded(value, path, 0, max).map(|v| v as u32)
    }

    fn french_level(&mut self, value: &Value, path: &str) -> Option<FrenchLevel> {
        let min = u64::from(FrenchLevel::MIN);
        let max = u64::from(FrenchLevel::MAX);
        self.bounded(value, path, min, max)
            .and_then(|v| FrenchLevel::new(v as u8))
    }

    fn tag<T>(
        &mut self,
        value: &Value,
        path: &str,
        tags: &'static [&'static str],
        parse: fn(&str) -> Option<T>,
    ) -> Option<T> {
        let Value::String(s) = value else {
            self.wrong_type(path, "string", value);
            return None;
        };
        let parsed = parse(s);
        if parsed.is_none() {
            let kind = FieldErrorKind::UnknownVariant {
                found: s.clone(),
                expected: tags,
            };
            self.fail(path, kind);
        }
        parsed
    }

    fn education(&mut self, value: &Value, path: &str) -> Option<EducationLevel> {
        self.tag(value, path, &EducationLevel::TAGS, EducationLevel::from_tag)
    }

    fn diagnosis(&mut self, value: &Value, path: &str) -> Option<LabourMarketDiagnosis> {
        self.tag(
            value,
            path,
            &LabourMarketDiagnosis::TAGS,
            LabourMarketDiagnosis::from_tag,
        )
    }

    fn job_offer(&mut self, value: &Value, path: &str) -> Option<JobOfferLocation> {
        self.tag(
            value,
            path,
            &JobOfferLocation::TAGS,
            JobOfferLocation::from_tag,
        )
    }

    fn french_abilities(&mut self, value: &Value, path: &str) -> Option<FrenchAbilities> {
        let obj = self.object(value, path, FRENCH_FIELDS)?;
        let oral_comprehension = self.required(obj, "oralComprehension", Self::french_level);
        let oral_production = self.required(obj, "oralProduction", Self::french_level);
        let written_comprehension = self.required(obj, "writtenComprehension", Self::french_level);
        let written_production = self.required(obj, "writtenProduction", Self::french_level);

        Some(FrenchAbilities {
            oral_comprehension: oral_comprehension?,
            oral_production: oral_production?,
            written_comprehension: written_comprehension?,
            written_production: written_production?,
        })
    }

    fn applicant(&mut self, value: &Value, path: &str) -> Option<ApplicantInput> {
        let obj = self.object(value, path, APPLICANT_FIELDS)?;
        let age = self.count(obj, "age");
        let education_level = self.required(obj, "educationLevel", Self::education);
        let work_experience_months = self.count(obj, "workExperienceMonths");
        let french_abilities = self.required(obj, "frenchAbilities", Self::french_abilities);
        let labour_market_diagnosis = self.required(obj, "labourMarketDiagnosis", Self::diagnosis);
        let principal_months = self.count(obj, "workExperiencePrincipalProfessionMonths");
        let quebec_diploma = self.optional(obj, "quebecDiploma", Self::education);
        let quebec_months = self.count(obj, "workExperienceQuebecMonths");
        let residence_months = self.count(obj, "residenceOutsideMontrealMonths");
        let validated_job_offer = self.optional(obj, "validatedJobOffer", Self::job_offer);
        let authorization_to_practice = self.flag(obj, "authorizationToPractice");
        let study_completed = self.count(obj, "studyStayQuebecCompletedMonths");
        let study_ongoing = self.count(obj, "studyStayQuebecOngoingMonths");
        let has_family_in_quebec = self.flag(obj, "hasFamilyInQuebec");
        let intends_outside = self.flag(obj, "intendsToResideOutsideMontreal");

        Some(ApplicantInput {
            age: age?,
            education_level: education_level?,
            work_experience_months: work_experience_months?,
            french_abilities: french_abilities?,
            labour_market_diagnosis: labour_market_diagnosis?,
            work_experience_principal_profession_months: principal_months?,
            quebec_diploma: quebec_diploma?,
            work_experience_quebec_months: quebec_months?,
            residence_outside_montreal_months: residence_months?,
            validated_job_offer: validated_job_offer?,
            authorization_to_practice: authorization_to_practice?,
            study_stay_quebec_completed_months: study_completed?,
            study_stay_quebec_ongoing_months: study_ongoing?,
            has_family_in_quebec: has_family_in_quebec?,
            intends_to_reside_outside_montreal: intends_outside?,
        })
    }

    fn spouse(&mut self, value: &Value, path: &str) -> Option<SpouseInput> {
        let obj = self.object(value, path, SPOUSE_FIELDS)?;
        let french_abilities = self.required(obj, "frenchAbilities", Self::french_abilities);
        let age = self.count(obj, "age");
        let quebec_months = self.count(obj, "workExperienceQuebecMonths");
        let education_level = self.required(obj, "educationLevel", Self::education);
        let quebec_diploma = self.optional(obj, "quebecDiploma", Self::education);
        let has_family_in_quebec = self.flag(obj, "hasFamilyInQuebec");

        Some(SpouseInput {
            french_abilities: french_abilities?,
            age: age?,
            work_experience_quebec_months: quebec_months?,
            education_level: education_level?,
            quebec_diploma: quebec_diploma?,
            has_family_in_quebec: has_family_in_quebec?,
        })
    }

    fn calculator_input(&mut self, value: &Value) -> Option<CalculatorInput> {
        let obj = self.object(value, "", ROOT_FIELDS)?;
        let applicant = self.required(obj, "applicant", Self::applicant);
        let spouse = self.optional(obj, "spouse", Self::spouse);

        Some(CalculatorInput {
            applicant: applicant?,
            spouse: spouse?,
        })
    }
}
