//! # Domain Layer
//!
//! 환자 등록 도메인의 데이터 구조와 검증 규칙을 정의합니다.
//!
//! ## 모듈 구성
//!
//! - [`dto`] - 요청/응답 데이터 전송 객체
//! - [`entities`] - 등록된 환자 엔티티
//! - [`validation`] - 명시적 규칙 기반 입력 검증

pub mod dto;
pub mod entities;
pub mod validation;
