//! 환자 등록 API 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 등록 서비스를 초기화합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use patient_registration_api::config::{
    CorsConfig, Environment, RateLimitConfig, ServerConfig,
};
use patient_registration_api::routes::configure_all_routes;
use patient_registration_api::services::patients::{PatientRegistrar, PatientService};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let profile_loaded = load_env_file();
    let environment = Environment::current();
    init_logging(&environment);

    info!("🚀 환자 등록 서비스 시작중... (environment: {:?})", environment);
    match profile_loaded {
        Ok(source) => info!("{} 로드 됨", source),
        Err(e) => error!("환경 파일 로드 실패: {}", e),
    }

    let registrar: Arc<dyn PatientRegistrar> = Arc::new(PatientService::new());

    start_http_server(web::Data::from(registrar)).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정이 잘못되었거나 포트 바인딩 실패
async fn start_http_server(registrar: web::Data<dyn PatientRegistrar>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 환자 등록: POST http://{}/api/v1/patients", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("잘못된 Rate Limiting 설정: {:?}", rate_limit_config),
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();
    info!("CORS 허용 Origin: {:?}", allowed_origins);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(registrar.clone())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
/// 로거 초기화 전에 호출되므로 결과는 반환값으로 전달하여 이후에 기록합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() -> Result<String, dotenv::Error> {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod".to_string()),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev".to_string()),
        _ => dotenv().map(|path| path.display().to_string()),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 실행 환경별 기본 필터를 사용합니다.
///
/// ```bash
/// # 특정 모듈만 debug
/// RUST_LOG=patient_registration_api::handlers=debug cargo run
/// ```
fn init_logging(environment: &Environment) {
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS` 환경 변수에서 읽습니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ACCESS_CONTROL_REQUEST_METHOD,
        ])
        .expose_headers(vec![header::LOCATION])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
