//! 재사용 가능한 필드 규칙
//!
//! 각 함수는 `validator`의 커스텀 검증 함수와 같은 형태로
//! `Result<(), ValidationError>`를 반환하며, 실패 시 규칙 코드와 메시지를 채웁니다.
//! 형식 규칙은 필수 규칙과 독립적으로 평가되므로, 비어 있는 CPF처럼
//! 한 필드가 필수 위반과 형식 위반을 함께 보고할 수 있습니다.

use regex::Regex;
use validator::{ValidateEmail, ValidationError};

use crate::utils::string_utils::is_blank;

/// 필수 규칙 코드
pub const REQUIRED: &str = "required";
/// 이메일 형식 규칙 코드
pub const EMAIL: &str = "email";
/// 정규식 형식 규칙 코드
pub const PATTERN: &str = "pattern";

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// 빈 문자열이거나 공백만으로 이루어진 값을 거부합니다.
pub fn not_blank(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(violation(REQUIRED, message));
    }
    Ok(())
}

/// 값이 존재하지 않으면(`None`) 거부합니다.
pub fn present<T>(value: Option<&T>, message: &'static str) -> Result<(), ValidationError> {
    match value {
        Some(_) => Ok(()),
        None => Err(violation(REQUIRED, message)),
    }
}

/// `local-part@domain` 형식이 아닌 이메일을 거부합니다.
///
/// 구문 검사는 `validator` 크레이트의 HTML5 이메일 규칙을 그대로 사용합니다.
/// 빈 문자열만 통과시키며, 공백만 있는 값은 형식 위반입니다.
pub fn email_format<T>(value: &T, message: &'static str) -> Result<(), ValidationError>
where
    T: ValidateEmail + AsRef<str>,
{
    if value.as_ref().is_empty() {
        return Ok(());
    }
    if !value.validate_email() {
        return Err(violation(EMAIL, message));
    }
    Ok(())
}

/// 값 전체가 `pattern`과 일치하지 않으면 거부합니다.
///
/// 전체 일치를 위해 `pattern`은 `^...$`로 고정되어 있어야 합니다.
/// 빈 값도 예외 없이 검사합니다.
pub fn matches_pattern(
    value: &str,
    pattern: &Regex,
    message: &'static str,
) -> Result<(), ValidationError> {
    if !pattern.is_match(value) {
        return Err(violation(PATTERN, message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Maria", "obrigatório").is_ok());

        for blank in ["", " ", "\t\n", "   "] {
            let err = not_blank(blank, "obrigatório").unwrap_err();
            assert_eq!(err.code, REQUIRED);
            assert_eq!(err.message.as_deref(), Some("obrigatório"));
        }
    }

    #[test]
    fn test_present() {
        assert!(present(Some(&1), "obrigatório").is_ok());
        assert!(present::<i32>(None, "obrigatório").is_err());
    }

    #[test]
    fn test_email_format() {
        let valid = "user@example.com".to_string();
        let invalid = "not-an-email".to_string();
        let missing_domain = "user@".to_string();

        assert!(email_format(&valid, "inválido").is_ok());
        assert_eq!(email_format(&invalid, "inválido").unwrap_err().code, EMAIL);
        assert!(email_format(&missing_domain, "inválido").is_err());
    }

    #[test]
    fn test_email_format_skips_only_empty_value() {
        assert!(email_format(&String::new(), "inválido").is_ok());
        assert_eq!(email_format(&"  ".to_string(), "inválido").unwrap_err().code, EMAIL);
    }

    #[test]
    fn test_matches_pattern_rejects_blank_values() {
        let pattern = Regex::new(r"^[0-9]{8}$").unwrap();

        assert_eq!(matches_pattern("", &pattern, "inválido").unwrap_err().code, PATTERN);
        assert_eq!(matches_pattern("   ", &pattern, "inválido").unwrap_err().code, PATTERN);
    }

    #[test]
    fn test_matches_pattern() {
        let pattern = Regex::new(r"^[0-9]{8}$").unwrap();

        assert!(matches_pattern("01310100", &pattern, "inválido").is_ok());
        assert_eq!(
            matches_pattern("01310-100", &pattern, "inválido").unwrap_err().code,
            PATTERN
        );
    }
}
