//! 환자 관련 응답 DTO 모듈

pub mod patient_response;

pub use patient_response::PatientResponse;
