use thiserror::Error;

/// Input the bot was waiting for when parsing failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Weight,
    Height,
    Age,
    Activity,
    City,
    WaterAmount,
    FoodName,
    FoodAmount,
    FoodQuery,
}

impl Field {
    /// Message asking the user to try again, with an example of a valid value.
    pub fn reprompt(self) -> &'static str {
        match self {
            Field::Weight => "Please enter a valid weight in kg (e.g., 70).",
            Field::Height => "Please enter a valid height in cm (e.g., 170).",
            Field::Age => "Please enter a valid age (e.g., 30).",
            Field::Activity => "Please enter a valid number for activity minutes (e.g., 45).",
            Field::City => "Please enter the name of your city (e.g., London).",
            Field::WaterAmount => "Please enter a valid number (e.g., 250).",
            Field::FoodAmount => "Please enter a valid number (e.g., 150).",
            Field::FoodName | Field::FoodQuery => "Please enter the name of a food (e.g., banana).",
        }
    }
}

/// Recoverable failure of a single conversation turn. None of these outlive the turn.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowError {
    #[error("invalid {field:?} input: {input:?}")]
    InvalidInput { field: Field, input: String },

    #[error("no nutrition data for {query:?}")]
    LookupNotFound { query: String },

    #[error("user has no profile yet")]
    PrerequisiteMissing,

    #[error("conversation data missing: {0}")]
    InternalInconsistency(&'static str),
}

impl FlowError {
    pub fn invalid(field: Field, input: &str) -> Self {
        FlowError::InvalidInput {
            field,
            input: input.to_string(),
        }
    }
}

/// Parses a finite decimal greater than zero.
pub fn parse_positive_decimal(text: &str, field: Field) -> Result<f64, FlowError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or_else(|| FlowError::invalid(field, text))
}

/// Parses a non-negative whole number.
pub fn parse_count(text: &str, field: Field) -> Result<u32, FlowError> {
    text.trim()
        .parse::<u32>()
        .map_err(|_| FlowError::invalid(field, text))
}

/// Parses a whole number greater than zero.
pub fn parse_positive_count(text: &str, field: Field) -> Result<u32, FlowError> {
    parse_count(text, field).and_then(|v| {
        if v > 0 {
            Ok(v)
        } else {
            Err(FlowError::invalid(field, text))
        }
    })
}

/// Trims the text and rejects it when nothing is left.
pub fn non_empty(text: &str, field: Field) -> Result<&str, FlowError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(FlowError::invalid(field, text))
    } else {
        Ok(trimmed)
    }
}
