//! # Patient Registration HTTP Handlers
//!
//! 환자 등록과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/patients` | 새 환자 등록 | 201 Created / 400 |
//! | `GET` | `/api/v1/patients/{id}` | 환자 조회 | 200 OK / 404 |
//!
//! ## 검증 흐름
//!
//! 1. `web::Json`이 본문을 [`PatientRegistrationInput`]으로 역직렬화
//!    (실패 시 `JsonConfig` 에러 핸들러가 400 `bad_request` 응답)
//! 2. 모든 규칙을 평가해 위반 전체를 수집
//! 3. 위반이 있으면 서비스 호출 없이 400 `validation_error` 응답
//! 4. 검증된 입력만 [`PatientRegistrar`]에 전달

use actix_web::http::header;
use actix_web::{HttpResponse, get, post, web};
use log::warn;
use uuid::Uuid;

use crate::domain::dto::patients::request::PatientRegistrationInput;
use crate::domain::validation::Validatable;
use crate::errors::AppError;
use crate::services::patients::PatientRegistrar;

/// 환자 등록 핸들러
///
/// # 엔드포인트
///
/// `POST /api/v1/patients`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "Maria Silva",
///   "email": "maria@example.com",
///   "phone": "11999990000",
///   "nationalId": "123.456.789-01",
///   "address": {
///     "street": "Rua das Flores",
///     "neighborhood": "Centro",
///     "zipCode": "01310100",
///     "city": "São Paulo",
///     "state": "SP"
///   }
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
///
/// `Location: /api/v1/patients/{id}` 헤더와 함께 등록된 환자를 반환합니다.
///
/// ## 검증 실패 (400 Bad Request)
/// ```json
/// {
///   "error": "validation_error",
///   "message": "Dados de cadastro inválidos",
///   "violations": [
///     { "field": "name", "code": "required", "message": "Nome é obrigatório" },
///     { "field": "address", "code": "required", "message": "Endereço é obrigatório" }
///   ]
/// }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/patients \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Maria Silva","email":"maria@example.com","phone":"11999990000",
///        "nationalId":"123.456.789-01","address":{"street":"Rua das Flores",
///        "neighborhood":"Centro","zipCode":"01310100","city":"São Paulo","state":"SP"}}'
/// ```
#[post("")]
pub async fn register_patient(
    payload: web::Json<PatientRegistrationInput>,
    registrar: web::Data<dyn PatientRegistrar>,
) -> Result<HttpResponse, AppError> {
    // 개인정보는 남기지 않고 위반 필드만 기록
    let validated = payload.into_inner().into_validated().map_err(|violations| {
        warn!(
            "환자 등록 거부: 위반 {}건 {:?}",
            violations.len(),
            violations.fields()
        );
        AppError::ValidationFailed(violations)
    })?;

    let response = registrar.register(validated).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/v1/patients/{}", response.id)))
        .json(response))
}

/// 환자 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /api/v1/patients/{patient_id}`
///
/// # 응답
///
/// * `200 OK` - 등록된 환자 정보
/// * `404 Not Found` - 해당 ID의 환자가 없는 경우
#[get("/{patient_id}")]
pub async fn get_patient(
    patient_id: web::Path<Uuid>,
    registrar: web::Data<dyn PatientRegistrar>,
) -> Result<HttpResponse, AppError> {
    let response = registrar.find_by_id(patient_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::{Value, json};

    use crate::routes::configure_all_routes;
    use crate::services::patients::{PatientRegistrar, PatientService};

    fn registrar() -> web::Data<dyn PatientRegistrar> {
        let registrar: Arc<dyn PatientRegistrar> = Arc::new(PatientService::new());
        web::Data::from(registrar)
    }

    fn maria_body() -> Value {
        json!({
            "name": "Maria Silva",
            "email": "maria@example.com",
            "phone": "11999990000",
            "nationalId": "123.456.789-01",
            "address": {
                "street": "Rua das Flores",
                "neighborhood": "Centro",
                "zipCode": "01310100",
                "city": "São Paulo",
                "state": "SP"
            }
        })
    }

    #[actix_web::test]
    async fn test_register_valid_patient_returns_created() {
        let app = test::init_service(
            App::new().app_data(registrar()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/patients")
            .set_json(maria_body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let location = resp
            .headers()
            .get(actix_web::http::header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .unwrap();

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["name"], "Maria Silva");
        assert_eq!(body["nationalId"], "123.456.789-01");
        assert_eq!(body["address"]["zipCode"], "01310100");
        assert_eq!(body["isActive"], true);
        assert_eq!(location, format!("/api/v1/patients/{}", body["id"].as_str().unwrap()));
    }

    #[actix_web::test]
    async fn test_register_reports_every_violation() {
        let app = test::init_service(
            App::new().app_data(registrar()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/patients")
            .set_json(json!({
                "name": "",
                "email": "not-an-email",
                "phone": "11999990000",
                "nationalId": "12345",
                "address": null
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "validation_error");
        assert_eq!(
            body["violations"],
            json!([
                { "field": "name", "code": "required", "message": "Nome é obrigatório" },
                { "field": "email", "code": "email", "message": "Formato do email é inválido" },
                { "field": "nationalId", "code": "pattern", "message": "Formato do CPF é inválido" },
                { "field": "address", "code": "required", "message": "Endereço é obrigatório" }
            ])
        );
    }

    #[actix_web::test]
    async fn test_register_reports_nested_address_violations() {
        let app = test::init_service(
            App::new().app_data(registrar()).configure(configure_all_routes),
        )
        .await;

        let mut body = maria_body();
        body["address"]["street"] = json!("  ");
        body["address"]["zipCode"] = json!("01310-100");

        let req = test::TestRequest::post()
            .uri("/api/v1/patients")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        let fields: Vec<&str> = body["violations"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|violation| violation["field"].as_str())
            .collect();
        assert_eq!(fields, vec!["address.street", "address.zipCode"]);
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test::init_service(
            App::new().app_data(registrar()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/patients")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{\"name\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "bad_request");
    }

    #[actix_web::test]
    async fn test_get_registered_patient() {
        let app = test::init_service(
            App::new().app_data(registrar()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/patients")
            .set_json(maria_body())
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_str().unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/patients/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let found: Value = test::read_body_json(resp).await;
        assert_eq!(found, created);
    }

    #[actix_web::test]
    async fn test_get_unknown_patient_is_not_found() {
        let app = test::init_service(
            App::new().app_data(registrar()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/patients/{}", uuid::Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "not_found");
    }
}
