//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 역직렬화, 검증, 응답         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 환자 등록 유스케이스                  ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Domain - DTO, 검증 규칙, 엔티티                 ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! `AppError`가 `ResponseError`로 상태 코드와 JSON 본문을 결정합니다.
//!
//! ## 모듈 구성
//!
//! - **`patients`**: 환자 등록 (`POST /api/v1/patients`), 조회 (`GET /api/v1/patients/{id}`)

pub mod patients;
