use actix_web::{
    error,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use derive_more::Display;
use serde_json::json;
use sort_engine::SortError;

#[derive(Debug, Display)]
pub enum ApiError {
    #[display(fmt = "internal error")]
    InternalError(anyhow::Error),

    #[display(fmt = "{}", _0)]
    InvalidAlgorithm(String),

    #[display(fmt = "no students in the database")]
    NotFound,
}

impl From<SortError> for ApiError {
    fn from(err: SortError) -> Self {
        match err {
            SortError::InvalidAlgorithm(_) => ApiError::InvalidAlgorithm(err.to_string()),
            SortError::MalformedField { .. } => ApiError::InternalError(err.into()),
        }
    }
}

impl error::ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        if let ApiError::InternalError(err) = self {
            log::error!("{err:?}");
        }
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(json!({
                "success": false,
                "error": self.to_string()
            }))
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidAlgorithm(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, ResponseError};
    use sort_engine::SortError;

    use super::ApiError;

    #[test]
    fn test_sort_errors_map_to_status_codes() {
        let err = ApiError::from(SortError::InvalidAlgorithm("frobnicate".to_owned()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("frobnicate"));

        let err = ApiError::from(SortError::MalformedField {
            field: "birth_date",
            value: "soon".to_owned(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "internal error");
    }
}
