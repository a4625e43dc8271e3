//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 설계 원칙
//!
//! ### 1. API 계약 우선
//! - **명시적 인터페이스**: camelCase JSON 키
//! - **하위 호환성**: 레거시 포르투갈어 키를 serde 별칭으로 수용
//!
//! ### 2. 유효성 검증 내장
//! - **명시적 규칙 목록**: [`crate::domain::validation`]의 `Validatable` 구현
//! - **전체 위반 보고**: 첫 실패에서 멈추지 않고 모든 위반 수집
//! - **에러 메시지**: 포르투갈어 사용자 메시지
//!
//! ### 3. 도메인 분리
//! - 요청 DTO는 검증 후 엔티티로 변환되고, 응답 DTO는 엔티티에서 만들어집니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── patients/
//! │   ├── request/        # PatientRegistrationInput
//! │   └── response/       # PatientResponse
//! └── addresses/          # AddressInput, AddressResponse
//! ```

pub mod addresses;
pub mod patients;
