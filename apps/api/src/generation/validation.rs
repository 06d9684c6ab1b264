use crate::errors::AppError;
use crate::models::options::{MAX_INPUT_CHARS, MAX_RESPONSE_INSTRUCTIONS_CHARS};
use crate::models::GenerationOptions;

/// Checks the text-field invariants before anything leaves the process.
///
/// Enum fields need no check: deserialization already rejected unknown values.
/// Lengths are counted in characters, not bytes.
pub fn validate_options(options: &GenerationOptions) -> Result<(), AppError> {
    if options.input.trim().is_empty() {
        return Err(AppError::EmptyInput);
    }

    let input_chars = options.input.chars().count();
    if input_chars > MAX_INPUT_CHARS {
        return Err(AppError::Validation(format!(
            "input is {input_chars} characters; the maximum is {MAX_INPUT_CHARS}"
        )));
    }

    let instructions_chars = options.response_instructions.chars().count();
    if instructions_chars > MAX_RESPONSE_INSTRUCTIONS_CHARS {
        return Err(AppError::Validation(format!(
            "responseInstructions is {instructions_chars} characters; the maximum is {MAX_RESPONSE_INSTRUCTIONS_CHARS}"
        )));
    }

    Ok(())
}
