//! # 환자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 요청 데이터 전송 객체(DTO)들을 정의합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (실패 시 400 `bad_request`)
//! 2. **필드 검증**: 필수 값, 이메일, CPF 형식 (실패 시 400 `validation_error`)
//! 3. **연쇄 검증**: 중첩된 주소의 자체 규칙
//!
//! 검증 실패 시 [`Violations`](crate::domain::validation::Violations)가 반환되며,
//! 핸들러에서 `AppError::ValidationFailed`로 변환됩니다.

pub mod register_patient;

pub use register_patient::PatientRegistrationInput;
