//! File upload constraints for the quote floor-plan attachment.

use crate::validation::FieldError;

/// MIME types accepted for floor-plan uploads.
pub const ACCEPTED_MIME_TYPES: &[&str] =
    &["image/jpeg", "image/png", "image/jpg", "application/pdf"];

/// Maximum accepted upload size: 10 MiB.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// An uploaded file as parsed from the multipart body, before validation.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl FileUpload {
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Check an upload against the MIME whitelist and size cap, reporting
/// problems under the `floorPlan` wire field.
pub fn validate_upload(file: &FileUpload) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if !ACCEPTED_MIME_TYPES.contains(&file.mime_type.as_str()) {
        errors.push(FieldError::new(
            "floorPlan",
            "File must be a JPEG, PNG, or PDF",
        ));
    }

    if file.size() > MAX_UPLOAD_BYTES {
        errors.push(FieldError::new(
            "floorPlan",
            "File must be 10MB or smaller",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
