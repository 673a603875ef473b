//! Errors surfaced while turning gateway documents into typed models.

/// Type alias for `Result` with an [`error_stack::Report`] error variant.
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Structural failures raised at the deserialization boundary. Unrecognized
/// enum codes are deliberately not part of this taxonomy; they degrade to
/// the `Unknown` arm of the corresponding code table instead.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParsingError {
    #[error("Failed to parse struct: {0}")]
    StructParseFailure(&'static str),
    #[error("Failed to parse datetime value")]
    DateTimeParsingError,
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),
    #[error("Failed to parse float value to decimal")]
    FloatToDecimalConversionFailure,
    #[error("Integer overflow while converting an amount")]
    IntegerOverflow,
}
