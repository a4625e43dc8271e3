//! # 주소 입력 DTO
//!
//! 환자 등록 요청에 포함되는 주소 데이터 구조와 검증 규칙을 정의합니다.
//! 레거시 API의 포르투갈어 키(`logradouro`, `bairro`, `cep`, `cidade`, `uf`,
//! `numero`, `complemento`)도 별칭으로 받아들입니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 | 메시지 |
//! |------|------|--------|
//! | `street` | 필수 | Logradouro é obrigatório |
//! | `neighborhood` | 필수 | Bairro é obrigatório |
//! | `zipCode` | 필수, 숫자 8자리 | CEP é obrigatório / Formato do CEP é inválido |
//! | `city` | 필수 | Cidade é obrigatória |
//! | `state` | 필수 | UF é obrigatória |
//! | `number`, `complement` | 선택 | - |

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::domain::validation::{FieldRule, Validatable, rules};
use crate::utils::string_utils::{
    clean_optional_string, deserialize_nullable_string, deserialize_optional_string,
};

/// CEP: 구분자 없는 숫자 8자리
static ZIP_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{8}$").expect("Failed to compile CEP regex"));

/// 환자 주소 입력값
///
/// 불변 값 객체이며 구조적 동등성을 가집니다.
///
/// # JSON 예제
///
/// ```json
/// {
///   "street": "Rua das Flores",
///   "neighborhood": "Centro",
///   "zipCode": "01310100",
///   "city": "São Paulo",
///   "state": "SP",
///   "number": "100",
///   "complement": "apto 12"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    #[serde(default, alias = "logradouro", deserialize_with = "deserialize_nullable_string")]
    street: String,

    #[serde(default, alias = "bairro", deserialize_with = "deserialize_nullable_string")]
    neighborhood: String,

    #[serde(default, alias = "cep", deserialize_with = "deserialize_nullable_string")]
    zip_code: String,

    #[serde(default, alias = "cidade", deserialize_with = "deserialize_nullable_string")]
    city: String,

    #[serde(default, alias = "uf", deserialize_with = "deserialize_nullable_string")]
    state: String,

    #[serde(
        default,
        alias = "numero",
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    number: Option<String>,

    #[serde(
        default,
        alias = "complemento",
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    complement: Option<String>,
}

impl AddressInput {
    pub fn new(
        street: impl Into<String>,
        neighborhood: impl Into<String>,
        zip_code: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        number: Option<String>,
        complement: Option<String>,
    ) -> Self {
        Self {
            street: street.into(),
            neighborhood: neighborhood.into(),
            zip_code: zip_code.into(),
            city: city.into(),
            state: state.into(),
            number: clean_optional_string(number),
            complement: clean_optional_string(complement),
        }
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn neighborhood(&self) -> &str {
        &self.neighborhood
    }

    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }

    pub fn complement(&self) -> Option<&str> {
        self.complement.as_deref()
    }
}

fn street_present(address: &AddressInput) -> Result<(), ValidationError> {
    rules::not_blank(&address.street, "Logradouro é obrigatório")
}

fn neighborhood_present(address: &AddressInput) -> Result<(), ValidationError> {
    rules::not_blank(&address.neighborhood, "Bairro é obrigatório")
}

fn zip_code_present(address: &AddressInput) -> Result<(), ValidationError> {
    rules::not_blank(&address.zip_code, "CEP é obrigatório")
}

fn zip_code_format(address: &AddressInput) -> Result<(), ValidationError> {
    rules::matches_pattern(&address.zip_code, &ZIP_CODE_PATTERN, "Formato do CEP é inválido")
}

fn city_present(address: &AddressInput) -> Result<(), ValidationError> {
    rules::not_blank(&address.city, "Cidade é obrigatória")
}

fn state_present(address: &AddressInput) -> Result<(), ValidationError> {
    rules::not_blank(&address.state, "UF é obrigatória")
}

const ADDRESS_RULES: &[FieldRule<AddressInput>] = &[
    FieldRule { field: "street", check: street_present },
    FieldRule { field: "neighborhood", check: neighborhood_present },
    FieldRule { field: "zipCode", check: zip_code_present },
    FieldRule { field: "zipCode", check: zip_code_format },
    FieldRule { field: "city", check: city_present },
    FieldRule { field: "state", check: state_present },
];

impl Validatable for AddressInput {
    fn rules() -> &'static [FieldRule<Self>] {
        ADDRESS_RULES
    }
}
