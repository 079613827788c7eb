use crate::{ApiError, ApiErrorCode};

#[must_use]
pub fn map_error(error: &ApiError) -> u16 {
    match error.code {
        ApiErrorCode::InvalidRequestBody => 400,
        ApiErrorCode::ProjectNotFound | ApiErrorCode::NotFound => 404,
        _ => 500,
    }
}
