//! # 환자 등록 요청 DTO
//!
//! 새로운 환자 등록을 위한 HTTP 요청 데이터 구조와 검증 규칙을 정의합니다.
//! 요청 본문의 역직렬화 대상이며, 검증을 통과한 뒤에만
//! [`Validated`](crate::domain::validation::Validated)로 감싸져 서비스 계층에 전달됩니다.
//!
//! ## 검증 규칙
//!
//! ### 이름 (`name`)
//! - 필수: 빈 문자열/공백만 있는 값 거부
//!
//! ### 이메일 (`email`)
//! - 필수
//! - `local-part@domain` 형식
//!
//! ### 전화번호 (`phone`)
//! - 필수 (형식 제한 없음)
//!
//! ### CPF (`nationalId`)
//! - 필수
//! - `000.000.000-00` 형식 (숫자 3-3-3-2, 점과 하이픈 고정)
//!
//! ### 주소 (`address`)
//! - 필수
//! - [`AddressInput`] 자체 규칙을 연쇄 검증하며, 위반은 `address.street`처럼
//!   주소의 하위 필드에 귀속됩니다.
//!
//! 형식 규칙은 필수 규칙과 별개로 평가됩니다. 비어 있는 CPF는 필수 위반과
//! 형식 위반을 모두 보고하고, 공백만 있는 이메일도 형식 위반이 됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::dto::patients::request::PatientRegistrationInput;
//! use crate::domain::validation::Validatable;
//!
//! let input: PatientRegistrationInput = serde_json::from_str(body)?;
//! match input.into_validated() {
//!     Ok(validated) => registrar.register(validated).await?,
//!     Err(violations) => return Err(AppError::ValidationFailed(violations)),
//! };
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::domain::dto::addresses::AddressInput;
use crate::domain::validation::{FieldRule, Validatable, Violations, cascade_into, rules};
use crate::utils::string_utils::deserialize_nullable_string;

/// CPF: `000.000.000-00`
static CPF_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{3}\.[0-9]{3}\.[0-9]{3}-[0-9]{2}$").expect("Failed to compile CPF regex")
});

/// 환자 등록 요청 DTO
///
/// 요청 하나당 한 번 만들어지고 등록 처리 후 버려지는 불변 값 객체입니다.
/// 필드는 접근자로만 읽을 수 있습니다.
///
/// # JSON 예제
///
/// ```json
/// {
///   "name": "Maria Silva",
///   "email": "maria@example.com",
///   "phone": "11999990000",
///   "nationalId": "123.456.789-01",
///   "address": {
///     "street": "Rua das Flores",
///     "neighborhood": "Centro",
///     "zipCode": "01310100",
///     "city": "São Paulo",
///     "state": "SP"
///   }
/// }
/// ```
///
/// 레거시 키(`nome`, `telefone`, `cpf`, `endereco`)도 받아들입니다.
/// 누락되거나 `null`인 텍스트 필드는 빈 문자열이 되어 필수 위반으로 보고됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRegistrationInput {
    #[serde(default, alias = "nome", deserialize_with = "deserialize_nullable_string")]
    name: String,

    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    email: String,

    #[serde(default, alias = "telefone", deserialize_with = "deserialize_nullable_string")]
    phone: String,

    #[serde(default, alias = "cpf", deserialize_with = "deserialize_nullable_string")]
    national_id: String,

    #[serde(default, alias = "endereco")]
    address: Option<AddressInput>,
}

impl PatientRegistrationInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        national_id: impl Into<String>,
        address: Option<AddressInput>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            national_id: national_id.into(),
            address,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// CPF
    pub fn national_id(&self) -> &str {
        &self.national_id
    }

    pub fn address(&self) -> Option<&AddressInput> {
        self.address.as_ref()
    }
}

fn name_present(input: &PatientRegistrationInput) -> Result<(), ValidationError> {
    rules::not_blank(&input.name, "Nome é obrigatório")
}

fn email_present(input: &PatientRegistrationInput) -> Result<(), ValidationError> {
    rules::not_blank(&input.email, "E-mail é obrigatório")
}

fn email_format(input: &PatientRegistrationInput) -> Result<(), ValidationError> {
    rules::email_format(&input.email, "Formato do email é inválido")
}

fn phone_present(input: &PatientRegistrationInput) -> Result<(), ValidationError> {
    rules::not_blank(&input.phone, "Telefone é obrigatório")
}

fn national_id_present(input: &PatientRegistrationInput) -> Result<(), ValidationError> {
    rules::not_blank(&input.national_id, "CPF é obrigatório")
}

fn national_id_format(input: &PatientRegistrationInput) -> Result<(), ValidationError> {
    rules::matches_pattern(&input.national_id, &CPF_PATTERN, "Formato do CPF é inválido")
}

fn address_present(input: &PatientRegistrationInput) -> Result<(), ValidationError> {
    rules::present(input.address.as_ref(), "Endereço é obrigatório")
}

const PATIENT_REGISTRATION_RULES: &[FieldRule<PatientRegistrationInput>] = &[
    FieldRule { field: "name", check: name_present },
    FieldRule { field: "email", check: email_present },
    FieldRule { field: "email", check: email_format },
    FieldRule { field: "phone", check: phone_present },
    FieldRule { field: "nationalId", check: national_id_present },
    FieldRule { field: "nationalId", check: national_id_format },
    FieldRule { field: "address", check: address_present },
];

impl Validatable for PatientRegistrationInput {
    fn rules() -> &'static [FieldRule<Self>] {
        PATIENT_REGISTRATION_RULES
    }

    fn cascade(&self, violations: &mut Violations) {
        cascade_into(violations, "address", self.address.as_ref());
    }
}
