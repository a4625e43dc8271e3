//! # Domain Entities
//!
//! 검증된 입력으로부터 만들어지는 도메인 엔티티들입니다.
//! 엔티티는 HTTP 계약과 분리되어 있으며, 응답 DTO로 변환되어 외부에 노출됩니다.

pub mod patients;

pub use patients::{Address, Patient};
