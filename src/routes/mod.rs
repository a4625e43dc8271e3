//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//!
//! # Routes
//!
//! - `GET /health` - 헬스체크
//! - `POST /api/v1/patients` - 환자 등록
//! - `GET /api/v1/patients/{id}` - 환자 조회
//!
//! 핸들러가 사용하는 `web::Data<dyn PatientRegistrar>`는 `App` 쪽에서 등록해야 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(registrar.clone())
//!     .configure(configure_all_routes);
//! ```

use actix_web::{HttpResponse, web};
use log::debug;
use serde_json::json;

use crate::errors::AppError;
use crate::handlers;

/// 요청 본문 최대 크기 (바이트)
const JSON_PAYLOAD_LIMIT: usize = 16 * 1024;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_patient_routes(cfg);
}

/// 환자 관련 라우트를 설정합니다
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/patients \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Maria Silva", ...}'
///
/// curl http://localhost:8080/api/v1/patients/6f1c0f9e-0d4b-4b47-9a55-0c7d7b6f0a11
/// ```
fn configure_patient_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/patients")
            .app_data(json_config())
            .service(handlers::patients::register_patient)
            .service(handlers::patients::get_patient),
    );
}

/// JSON 본문 추출 설정
///
/// 역직렬화 실패를 `AppError::BadRequest`로 바꿔 다른 에러와 같은 형식으로 응답합니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_PAYLOAD_LIMIT)
        .error_handler(|err, _req| {
            debug!("JSON 본문 해석 실패: {}", err);
            AppError::BadRequest(err.to_string()).into()
        })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "patient_registration_api",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
