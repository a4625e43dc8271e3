//! 환자 도메인 DTO

pub mod request;
pub mod response;
