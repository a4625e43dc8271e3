//! 환자 등록 API 백엔드
//!
//! 환자 등록 요청을 받아 모든 입력 규칙을 한 번에 검증하고,
//! 검증을 통과한 입력만 등록 유스케이스에 전달하는 Actix-web 서비스입니다.
//!
//! # Features
//!
//! - **명시적 검증 규칙**: 필드별 규칙 목록을 빠짐없이 평가해 위반 전체 보고
//! - **연쇄 검증**: 중첩된 주소의 위반을 `address.<필드>` 경로로 병합
//! - **타입 수준 보장**: `Validated<T>`만 서비스 계층에 전달
//! - **포르투갈어 메시지**: 클라이언트에 그대로 보여줄 수 있는 위반 메시지
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 역직렬화 + 검증 + 응답
//! └─────────────────┘
//!          │ Validated<PatientRegistrationInput>
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 환자 등록 유스케이스
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use patient_registration_api::domain::dto::patients::request::PatientRegistrationInput;
//! use patient_registration_api::domain::validation::Validatable;
//!
//! let input: PatientRegistrationInput = serde_json::from_str(body)?;
//! if let Err(violations) = input.validate() {
//!     for violation in &violations {
//!         println!("{}: {}", violation.field, violation.message);
//!     }
//! }
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod utils;
