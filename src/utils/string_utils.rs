//! # 문자열 유틸리티
//!
//! 요청 DTO의 문자열 필드 처리에 쓰이는 공통 함수들입니다.

use serde::Deserialize;

/// 빈 문자열이거나 공백만으로 이루어졌는지 확인
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank(" \t\n"));
/// assert!(!is_blank("Maria"));
/// ```
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  apto 12  ".to_string())), Some("apto 12".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// JSON 역직렬화 시 빈 문자열이나 공백만 있는 문자열을 자동으로 None으로 변환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 후 Some으로 반환합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Address {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     complement: Option<String>,
/// }
///
/// // JSON: {"complement": "  apto 12  "} → Some("apto 12")
/// // JSON: {"complement": ""} → None
/// // JSON: {"complement": null} → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 필수 문자열 필드를 위한 serde deserializer
///
/// `null`을 빈 문자열로 받아들입니다. 값은 가공하지 않고 그대로 두어,
/// 누락된 필수 값이 파싱 에러가 아닌 검증 위반으로 보고되도록 합니다.
/// 필드가 아예 없는 경우는 `#[serde(default)]`와 함께 사용합니다.
pub fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
