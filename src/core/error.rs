use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while converting an invoice to TEIF.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TeifError {
    /// The input mapping does not match the TEIF schema.
    #[error("validation failed: {0}")]
    Validation(#[from] SchemaValidationError),

    /// XML generation error.
    #[error("XML error: {0}")]
    Xml(String),

    /// The source PDF could not be read.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// A date text does not match its format code.
    #[error("date error: {0}")]
    Date(String),
}

/// What went wrong with a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViolationKind {
    /// Required key is absent.
    Missing,
    /// Required key is present but null.
    Null,
    /// Value has the wrong JSON type.
    WrongType { expected: &'static str },
    /// Sequence that needs at least one entry is empty.
    Empty,
    /// Numeric value rejected (unrepresentable, or by a numeric policy).
    OutOfRange,
    /// Text contains a character XML 1.0 cannot carry.
    InvalidCharacter,
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Path to the invalid field in wire keys (e.g. "LinSection[0].Lin[1].Quantity").
    pub field: String,
    /// Category of the violation.
    pub kind: ViolationKind,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, ViolationKind::Missing, "field required")
    }

    pub fn null(field: impl Into<String>) -> Self {
        Self::new(field, ViolationKind::Null, "field must not be null")
    }

    pub fn wrong_type(field: impl Into<String>, expected: &'static str) -> Self {
        Self::new(
            field,
            ViolationKind::WrongType { expected },
            format!("expected {expected}"),
        )
    }

    pub fn invalid_character(field: impl Into<String>, c: char) -> Self {
        Self::new(
            field,
            ViolationKind::InvalidCharacter,
            format!("character U+{:04X} is not allowed in XML text", c as u32),
        )
    }
}

/// Every violation found while validating one input mapping.
///
/// Never empty: validation only produces this when at least one field failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SchemaValidationError {
    errors: Vec<ValidationError>,
}

impl SchemaValidationError {
    /// Returns `None` when `errors` is empty.
    pub fn from_errors(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    pub fn single(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// The violations in input order; always at least one.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Whether any violation was reported for exactly this path.
    pub fn contains_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// JSON report (array of `{field, kind, message}`).
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.to_string())
    }
}

impl std::fmt::Display for SchemaValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} validation error(s): ", self.errors.len())?;
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaValidationError {}
