//! # 입력 검증 모듈
//!
//! 요청 DTO의 검증 규칙을 애노테이션 대신 명시적인 규칙 목록으로 선언하고,
//! 모든 규칙을 빠짐없이 평가하여 위반 전체를 한 번에 보고합니다.
//!
//! ## 구성
//!
//! - [`FieldRule`] - 필드명과 순수 검사 함수의 쌍
//! - [`Validatable`] - 규칙 목록 + 중첩 객체 연쇄 검증 훅
//! - [`Validated`] - 검증을 통과한 값만 담을 수 있는 래퍼
//! - [`rules`] - 필수/이메일/패턴 등 공용 규칙 함수
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::validation::{FieldRule, Validatable};
//!
//! impl Validatable for AddressInput {
//!     fn rules() -> &'static [FieldRule<Self>] {
//!         ADDRESS_RULES
//!     }
//! }
//!
//! let validated = input.into_validated()?; // Err(Violations) 시 위반 전체 반환
//! ```
//!
//! ## 평가 순서
//!
//! 1. 자기 규칙을 선언 순서대로 모두 평가 (첫 실패에서 멈추지 않음)
//! 2. [`Validatable::cascade`]로 중첩 객체를 검증하고 `부모.자식` 경로로 병합

pub mod rules;
pub mod violation;

use std::ops::Deref;

use validator::ValidationError;

pub use violation::{Violation, Violations};

/// 단일 필드에 대한 검증 규칙
///
/// `check`는 부수 효과가 없는 함수여야 하며, 실패 시 코드와 메시지를 담은
/// `ValidationError`를 반환합니다.
pub struct FieldRule<T> {
    /// 위반 시 보고할 필드명 (JSON 키)
    pub field: &'static str,
    pub check: fn(&T) -> Result<(), ValidationError>,
}

/// 명시적 규칙 목록으로 검증되는 값 객체
pub trait Validatable: Sized + 'static {
    /// 이 타입에 선언된 규칙 목록 (평가 순서 = 선언 순서)
    fn rules() -> &'static [FieldRule<Self>];

    /// 중첩 객체의 규칙을 평가해 `violations`에 병합합니다.
    ///
    /// 기본 구현은 아무 것도 하지 않습니다.
    fn cascade(&self, _violations: &mut Violations) {}

    /// 모든 규칙을 평가하고 위반 전체를 반환합니다.
    ///
    /// 같은 값을 여러 번 검증해도 항상 같은 결과를 돌려줍니다.
    fn validate(&self) -> Result<(), Violations> {
        let mut violations = Violations::new();

        for rule in Self::rules() {
            if let Err(error) = (rule.check)(self) {
                violations.push(Violation::from_error(rule.field, error));
            }
        }

        self.cascade(&mut violations);
        violations.into_result()
    }

    /// 검증에 성공하면 값을 [`Validated`]로 감싸 반환합니다.
    fn into_validated(self) -> Result<Validated<Self>, Violations> {
        self.validate()?;
        Ok(Validated(self))
    }
}

/// 검증을 통과한 값
///
/// [`Validatable::into_validated`]로만 만들 수 있으므로, 이 타입을 받는
/// 서비스 계층은 입력이 완전히 유효하다고 가정할 수 있습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated<T>(T);

impl<T> Validated<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// 중첩 객체를 검증하고 위반을 `field.` 경로로 병합합니다.
///
/// [`Validatable::cascade`] 구현에서 사용합니다.
pub fn cascade_into<N: Validatable>(violations: &mut Violations, field: &str, nested: Option<&N>) {
    if let Some(Err(nested_violations)) = nested.map(Validatable::validate) {
        violations.absorb(field, nested_violations);
    }
}
