//! 환자 엔티티
//!
//! 검증을 통과한 등록 입력으로부터만 만들어지는 도메인 엔티티입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::dto::addresses::AddressInput;
use crate::domain::dto::patients::request::PatientRegistrationInput;
use crate::domain::validation::Validated;
use crate::errors::{AppError, AppResult};

/// 환자 주소
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub neighborhood: String,
    pub zip_code: String,
    pub city: String,
    pub state: String,
    pub number: Option<String>,
    pub complement: Option<String>,
}

impl From<&AddressInput> for Address {
    fn from(input: &AddressInput) -> Self {
        Self {
            street: input.street().trim().to_string(),
            neighborhood: input.neighborhood().trim().to_string(),
            zip_code: input.zip_code().to_string(),
            city: input.city().trim().to_string(),
            state: input.state().trim().to_string(),
            number: input.number().map(str::to_string),
            complement: input.complement().map(str::to_string),
        }
    }
}

/// 등록된 환자
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// CPF (`000.000.000-00`)
    pub national_id: String,
    pub address: Address,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Patient {
    /// 검증된 등록 입력으로 새 환자를 만듭니다.
    ///
    /// 텍스트 값은 앞뒤 공백을 제거해 저장하고, 새 환자는 활성 상태로 시작합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 검증된 입력에 주소가 없는 경우 (도달 불가)
    pub fn register(
        input: Validated<PatientRegistrationInput>,
        id: Uuid,
        created_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        let address = input
            .address()
            .map(Address::from)
            .ok_or_else(|| AppError::InternalError("검증된 입력에 주소가 없습니다".to_string()))?;

        Ok(Self {
            id,
            name: input.name().trim().to_string(),
            email: input.email().trim().to_string(),
            phone: input.phone().trim().to_string(),
            national_id: input.national_id().to_string(),
            address,
            is_active: true,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::Validatable;

    #[test]
    fn test_register_trims_and_activates() {
        let input = PatientRegistrationInput::new(
            "  Maria Silva ",
            "maria@example.com",
            " 11999990000",
            "123.456.789-01",
            Some(AddressInput::new(
                "Rua das Flores ",
                "Centro",
                "01310100",
                "São Paulo",
                "SP",
                None,
                Some("apto 12".to_string()),
            )),
        );
        let id = Uuid::new_v4();
        let now = Utc::now();

        let patient = Patient::register(input.into_validated().unwrap(), id, now).unwrap();

        assert_eq!(patient.id, id);
        assert_eq!(patient.name, "Maria Silva");
        assert_eq!(patient.phone, "11999990000");
        assert_eq!(patient.address.street, "Rua das Flores");
        assert_eq!(patient.address.complement.as_deref(), Some("apto 12"));
        assert!(patient.is_active);
        assert_eq!(patient.created_at, now);
    }
}
