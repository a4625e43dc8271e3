//! 서버 및 실행 환경 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, Rate Limiting, CORS 설정을 환경 변수에서 읽어옵니다.
//! 잘못된 값은 경고 로그를 남기고 기본값으로 대체합니다.

use std::env;
use std::str::FromStr;

use log::warn;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우
    /// `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|name| Self::from_name(&name))
            .unwrap_or(Environment::Production)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// `RUST_LOG`가 없을 때 사용할 기본 로그 필터
    ///
    /// # Environment Defaults
    ///
    /// - Development: `debug,actix_web=debug`
    /// - Test: `warn`
    /// - Staging/Production: `info,actix_web=info`
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development => "debug,actix_web=debug",
            Environment::Test => "warn",
            Environment::Staging | Environment::Production => "info,actix_web=info",
        }
    }
}

/// 환경 변수를 파싱하고, 없거나 잘못된 값이면 기본값을 사용합니다.
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            warn!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트 (`PORT`, 기본값: 8080)
    pub fn port() -> u16 {
        parse_env_or("PORT", 8080)
    }

    /// 서버가 바인딩할 호스트 주소 (`HOST`, 기본값: "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// HTTP 워커 스레드 수 (`WORKERS`, 기본값: 4)
    pub fn workers() -> usize {
        match parse_env_or("WORKERS", 4usize) {
            0 => 1,
            workers => workers,
        }
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// ```bash
    /// # .env.dev (개발 환경)
    /// RATE_LIMIT_PER_SECOND=20
    /// RATE_LIMIT_BURST_SIZE=40
    /// ```
    pub fn from_env() -> Self {
        Self {
            per_second: parse_env_or("RATE_LIMIT_PER_SECOND", 100),
            burst_size: parse_env_or("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    const DEFAULT_ORIGINS: [&'static str; 4] = [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:8080",
        "http://127.0.0.1:8080",
    ];

    /// 허용할 Origin 목록
    ///
    /// `CORS_ALLOWED_ORIGINS`에 쉼표로 구분해 지정합니다.
    /// 설정되지 않았거나 비어 있으면 로컬 개발용 Origin을 사용합니다.
    pub fn allowed_origins() -> Vec<String> {
        env::var("CORS_ALLOWED_ORIGINS")
            .map(|raw| Self::parse_origins(&raw))
            .ok()
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect())
    }

    fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}
