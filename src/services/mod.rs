//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 핸들러는 서비스 트레이트에만 의존하며, 구현체는 `main`에서
//! `web::Data`로 애플리케이션에 등록됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::patients::PatientService;
//!
//! let registrar = web::Data::from(Arc::new(PatientService::new()) as Arc<dyn PatientRegistrar>);
//! ```

pub mod patients;
