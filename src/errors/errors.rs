//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 응답 형식
//!
//! 검증 실패 (400):
//! ```json
//! {
//!   "error": "validation_error",
//!   "message": "Dados de cadastro inválidos",
//!   "violations": [
//!     { "field": "name", "code": "required", "message": "Nome é obrigatório" },
//!     { "field": "address.zipCode", "code": "pattern", "message": "Formato do CEP é inválido" }
//!   ]
//! }
//! ```
//!
//! 그 외:
//! ```json
//! { "error": "not_found", "message": "Not found: ..." }
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! let validated = input
//!     .into_validated()
//!     .map_err(AppError::ValidationFailed)?;
//! ```

use actix_web::http::StatusCode;
use serde_json::json;
use thiserror::Error;

use crate::domain::validation::Violations;

/// 검증 실패 응답의 사용자 메시지
pub const VALIDATION_FAILED_MESSAGE: &str = "Dados de cadastro inválidos";

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 실패, 위반 전체 포함 (400 Bad Request)
    #[error("Validation failed: {0}")]
    ValidationFailed(Violations),

    /// 요청 본문을 해석할 수 없음 (400 Bad Request)
    #[error("Malformed request: {0}")]
    BadRequest(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문의 `error` 필드에 쓰이는 기계 판독용 코드
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationFailed(_) => "validation_error",
            AppError::BadRequest(_) => "bad_request",
            AppError::NotFound(_) => "not_found",
            AppError::InternalError(_) => "internal_error",
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationFailed(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 검증 실패는 위반 목록 전체를 `violations`로 내려보냅니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::ValidationFailed(violations) => json!({
                "error": self.error_code(),
                "message": VALIDATION_FAILED_MESSAGE,
                "violations": violations,
            }),
            _ => json!({
                "error": self.error_code(),
                "message": self.to_string(),
            }),
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<Violations> for AppError {
    fn from(violations: Violations) -> Self {
        AppError::ValidationFailed(violations)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
