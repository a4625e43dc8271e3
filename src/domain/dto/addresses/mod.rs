//! 주소 관련 DTO 모듈

pub mod address_input;
pub mod address_response;

pub use address_input::AddressInput;
pub use address_response::AddressResponse;
