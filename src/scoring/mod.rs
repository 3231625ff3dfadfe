pub mod engine;
pub mod factors;
pub mod types;
pub mod validation;

pub use engine::{
    calculate_points, CalculationResult, CategoryPoints, DetailedPoints, FactorContribution,
    ADAPTATION_FACTORS_MAX, CAPITAL_HUMAN_MAX, LABOUR_MARKET_NEEDS_MAX, TOTAL_MAX,
};
pub use factors::{Band, RangeOp, Role};
pub use types::*;
pub use validation::{decode, FieldError, FieldErrorKind, ValidationFailure};
