//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 공백 판별, 선택 문자열 정리, serde 역직렬화 헬퍼

pub mod string_utils;
