//! # 환자 등록 서비스 구현
//!
//! 검증을 통과한 등록 입력을 받아 환자를 등록하는 유스케이스입니다.
//! 핸들러는 [`PatientRegistrar`] 트레이트에만 의존하므로, 저장소를 갖춘
//! 구현으로 교체해도 HTTP 계층은 바뀌지 않습니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! Handler ── Validated<PatientRegistrationInput> ──▶ PatientRegistrar::register
//!                                                     ├─ id 발급 (UUID v4)
//!                                                     ├─ Patient 엔티티 생성
//!                                                     └─ PatientResponse 반환
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use uuid::Uuid;

use crate::domain::dto::patients::request::PatientRegistrationInput;
use crate::domain::dto::patients::response::PatientResponse;
use crate::domain::entities::patients::Patient;
use crate::domain::validation::Validated;
use crate::errors::{AppError, AppResult, ErrorContext};

/// 환자 등록 유스케이스
///
/// 검증된 입력만 받으므로 구현체는 입력 검증을 다시 수행하지 않습니다.
#[async_trait]
pub trait PatientRegistrar: Send + Sync {
    /// 새 환자를 등록하고 등록 결과를 반환합니다.
    async fn register(&self, input: Validated<PatientRegistrationInput>) -> AppResult<PatientResponse>;

    /// 등록된 환자를 ID로 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 환자가 없는 경우
    async fn find_by_id(&self, id: Uuid) -> AppResult<PatientResponse>;
}

/// 프로세스 메모리에 등록 결과를 보관하는 기본 구현
///
/// 워커 간에 `Arc`로 공유되며, 내부 맵은 `RwLock`으로 보호됩니다.
/// 프로세스가 종료되면 등록 정보도 사라집니다.
///
/// 저장소에는 크기 제한이나 만료가 없어 등록할 때마다 메모리 사용량이 늘어납니다.
/// 장기 실행 배포에서는 저장소를 갖춘 [`PatientRegistrar`] 구현으로 교체해야 합니다.
#[derive(Debug, Default)]
pub struct PatientService {
    patients: RwLock<HashMap<Uuid, Patient>>,
}

impl PatientService {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 등록된 환자 수
    pub fn count(&self) -> AppResult<usize> {
        let patients = self.patients.read().context("환자 저장소 읽기 실패")?;
        Ok(patients.len())
    }
}

#[async_trait]
impl PatientRegistrar for PatientService {
    async fn register(&self, input: Validated<PatientRegistrationInput>) -> AppResult<PatientResponse> {
        let patient = Patient::register(input, Uuid::new_v4(), Utc::now())?;
        let id = patient.id;

        {
            let mut patients = self.patients.write().context("환자 저장소 쓰기 실패")?;
            patients.insert(id, patient.clone());
        }

        info!("환자 등록 완료: id={}", id);
        Ok(PatientResponse::from(patient))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<PatientResponse> {
        let patients = self.patients.read().context("환자 저장소 읽기 실패")?;

        match patients.get(&id) {
            Some(patient) => Ok(PatientResponse::from(patient.clone())),
            None => {
                debug!("환자 조회 실패: id={}", id);
                Err(AppError::NotFound(format!("Patient {} not found", id)))
            }
        }
    }
}
