//! 검증 위반 모델
//!
//! 단일 필드 위반([`Violation`])과 이를 모은 집계 에러([`Violations`])를 정의합니다.

use std::fmt;

use serde::Serialize;
use validator::ValidationError;

/// 하나의 필드에 대한 단일 검증 실패
///
/// 중첩 객체의 위반은 `address.street`처럼 점으로 구분된 경로를 필드명으로 가집니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// 위반이 발생한 필드 경로 (JSON 키 기준)
    pub field: String,
    /// 기계 판독용 규칙 코드 (`required`, `email`, `pattern`)
    pub code: String,
    /// 사용자에게 보여줄 메시지
    pub message: String,
}

impl Violation {
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    /// 규칙 함수가 반환한 `ValidationError`를 필드에 귀속시킵니다.
    ///
    /// 메시지가 없는 에러는 규칙 코드를 메시지로 사용합니다.
    pub fn from_error(field: impl Into<String>, error: ValidationError) -> Self {
        let code = error.code.to_string();
        let message = error
            .message
            .map(|message| message.into_owned())
            .unwrap_or_else(|| code.clone());

        Self {
            field: field.into(),
            code,
            message,
        }
    }

    /// 필드 경로 앞에 부모 필드명을 붙입니다.
    fn prefixed(self, prefix: &str) -> Self {
        Self {
            field: format!("{}.{}", prefix, self.field),
            ..self
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// 한 번의 검증에서 수집된 모든 위반
///
/// 규칙 평가 순서를 그대로 보존하므로 같은 입력은 항상 같은 목록을 만듭니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    /// 중첩 객체의 위반을 `prefix.` 경로로 흡수합니다.
    pub fn absorb(&mut self, prefix: &str, nested: Violations) {
        self.0
            .extend(nested.0.into_iter().map(|violation| violation.prefixed(prefix)));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    /// 위반이 발생한 필드 경로 목록 (중복 포함, 평가 순서)
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|violation| violation.field.as_str()).collect()
    }

    /// 특정 필드에 대한 위반만 골라냅니다.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.0.iter().filter(move |violation| violation.field == field)
    }

    /// 위반이 없으면 `Ok(())`, 있으면 자기 자신을 에러로 반환합니다.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(Violation::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

impl std::error::Error for Violations {}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_error_uses_message() {
        let error = ValidationError::new("required").with_message("Nome é obrigatório".into());
        let violation = Violation::from_error("name", error);

        assert_eq!(violation.field, "name");
        assert_eq!(violation.code, "required");
        assert_eq!(violation.message, "Nome é obrigatório");
    }

    #[test]
    fn test_from_error_without_message_falls_back_to_code() {
        let violation = Violation::from_error("email", ValidationError::new("email"));

        assert_eq!(violation.message, "email");
    }

    #[test]
    fn test_absorb_prefixes_nested_fields() {
        let mut nested = Violations::new();
        nested.push(Violation::new("street", "required", "Logradouro é obrigatório"));
        nested.push(Violation::new("zipCode", "pattern", "Formato do CEP é inválido"));

        let mut parent = Violations::new();
        parent.push(Violation::new("name", "required", "Nome é obrigatório"));
        parent.absorb("address", nested);

        assert_eq!(parent.fields(), vec!["name", "address.street", "address.zipCode"]);
    }

    #[test]
    fn test_into_result() {
        assert!(Violations::new().into_result().is_ok());

        let mut violations = Violations::new();
        violations.push(Violation::new("phone", "required", "Telefone é obrigatório"));
        let err = violations.into_result().unwrap_err();

        assert_eq!(err.len(), 1);
        assert_eq!(err.to_string(), "phone: Telefone é obrigatório");
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let mut violations = Violations::new();
        violations.push(Violation::new("cpf", "pattern", "Formato do CPF é inválido"));

        let json = serde_json::to_value(&violations).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "field": "cpf", "code": "pattern", "message": "Formato do CPF é inválido" }
            ])
        );
    }
}
