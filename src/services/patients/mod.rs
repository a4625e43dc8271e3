//! 환자 등록 서비스 모듈
//!
//! 검증된 등록 입력을 받아 환자를 등록하고 조회하는 유스케이스를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::patients::{PatientRegistrar, PatientService};
//!
//! let registrar: Arc<dyn PatientRegistrar> = Arc::new(PatientService::new());
//! let patient = registrar.register(validated_input).await?;
//! ```

pub mod patient_service;

pub use patient_service::{PatientRegistrar, PatientService};
