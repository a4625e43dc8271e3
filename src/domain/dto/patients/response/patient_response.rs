use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::dto::addresses::AddressResponse;
use crate::domain::entities::patients::Patient;

/// 환자 응답 DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub national_id: String,
    pub address: AddressResponse,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Patient> for PatientResponse {
    fn from(patient: Patient) -> Self {
        let Patient {
            id,
            name,
            email,
            phone,
            national_id,
            address,
            is_active,
            created_at,
        } = patient;

        Self {
            id,
            name,
            email,
            phone,
            national_id,
            address: address.into(),
            is_active,
            created_at,
        }
    }
}
