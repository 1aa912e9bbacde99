use crate::models::{CreatePlaceRequest, UpdatePlaceRequest};

pub const MAX_TITLE_LENGTH: usize = 100;
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;
pub const MAX_ADDRESS_LENGTH: usize = 300;
pub const MIN_DESCRIPTION_LENGTH: usize = 5;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title must not be empty")]
    EmptyTitle,
    #[error("Title exceeds maximum length of {MAX_TITLE_LENGTH}")]
    TitleTooLong,
    #[error("Description must be at least {MIN_DESCRIPTION_LENGTH} characters")]
    DescriptionTooShort,
    #[error("Description exceeds maximum length of {MAX_DESCRIPTION_LENGTH}")]
    DescriptionTooLong,
    #[error("Address must not be empty")]
    EmptyAddress,
    #[error("Address exceeds maximum length of {MAX_ADDRESS_LENGTH}")]
    AddressTooLong,
    #[error("Creator must not be empty")]
    EmptyCreator,
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() { return Err(ValidationError::EmptyTitle); }
    if title.chars().count() > MAX_TITLE_LENGTH { return Err(ValidationError::TitleTooLong); }
    Ok(())
}

/// The minimum counts non-whitespace content, the maximum counts the text as stored.
fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.trim().chars().count() < MIN_DESCRIPTION_LENGTH { return Err(ValidationError::DescriptionTooShort); }
    if description.chars().count() > MAX_DESCRIPTION_LENGTH { return Err(ValidationError::DescriptionTooLong); }
    Ok(())
}

pub fn validate_create_place(request: &CreatePlaceRequest) -> Result<(), ValidationError> {
    validate_title(&request.title)?;
    validate_description(&request.description)?;

    if request.address.trim().is_empty() { return Err(ValidationError::EmptyAddress); }
    if request.address.chars().count() > MAX_ADDRESS_LENGTH { return Err(ValidationError::AddressTooLong); }
    if request.creator.trim().is_empty() { return Err(ValidationError::EmptyCreator); }

    Ok(())
}

pub fn validate_update_place(request: &UpdatePlaceRequest) -> Result<(), ValidationError> {
    validate_title(&request.title)?;
    validate_description(&request.description)
}
