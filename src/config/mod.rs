//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`server_config`] - 실행 환경, 서버 바인딩, Rate Limiting, CORS 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! 모든 값은 선택 사항이며, 없거나 파싱에 실패하면 기본값을 사용합니다.
//!
//! ```bash
//! # 실행 환경 (development, test, staging, production)
//! export ENVIRONMENT="development"
//!
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # CORS (쉼표 구분)
//! export CORS_ALLOWED_ORIGINS="https://app.example.com,https://admin.example.com"
//! ```
//!
//! `PROFILE` 환경 변수(`dev`/`prod`)에 따라 `.env.dev` 또는 `.env.prod` 파일을
//! 먼저 로드합니다. 그 외에는 기본 `.env` 파일을 사용합니다.

pub mod server_config;

pub use server_config::*;
