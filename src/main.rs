//! NabhaCare 의사 포털 CLI
//!
//! 환경 설정을 로드하고 하위 명령(signin, config, logout)을 실행합니다.

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use nabhacare_portal::cli::prompt::Prompter;
use nabhacare_portal::cli::{Cli, Commands, commands};
use nabhacare_portal::client::{ApiClient, HttpDoctorAuthApi};
use nabhacare_portal::config::{ApiConfig, CredentialStoreConfig, DatabaseConfig};
use nabhacare_portal::errors::{AppError, AppResult};
use nabhacare_portal::services::auth::{DoctorAuthService, SignInOutcome};
use nabhacare_portal::storage::FileTokenStore;
use nabhacare_portal::utils::display_terminal::{print_boxed_title, print_sub_task};

#[tokio::main]
async fn main() -> ExitCode {
    // 로깅 먼저 초기화 (.env의 RUST_LOG는 반영되지 않음)
    init_logging();
    load_env_file();

    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> AppResult<()> {
    print_boxed_title("NabhaCare Doctor Portal");

    match command {
        Commands::Signin { credential } => run_signin(credential).await,
        Commands::Config => {
            show_config();
            Ok(())
        }
        Commands::Logout => {
            let store = FileTokenStore::new(CredentialStoreConfig::path());
            let cleared = commands::logout(&store)?;
            println!("Signed out ({} token(s) removed)", cleared);
            Ok(())
        }
    }
}

/// 로그인 흐름을 실행하고 이동할 대시보드를 출력합니다
async fn run_signin(credential: Option<String>) -> AppResult<()> {
    let base_url = ApiConfig::base_url();
    let store = Arc::new(FileTokenStore::new(CredentialStoreConfig::path()));
    let client = ApiClient::new(&base_url, store.clone())
        .map_err(|e| AppError::ConfigError(format!("invalid API base URL: {}", e)))?;

    info!("🌐 API 서버: {}", client.base_url());

    let api = HttpDoctorAuthApi::new(Arc::new(client));
    let service = DoctorAuthService::new(Arc::new(api), store);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    if let SignInOutcome::LoggedIn { category, redirect } =
        commands::signin(&service, credential, &mut prompter).await?
    {
        print_sub_task("Category", category.label());
        print_sub_task("Redirect", redirect);
    }
    Ok(())
}

/// 현재 설정을 출력합니다 (비밀번호는 가림)
fn show_config() {
    let database = DatabaseConfig::from_env();

    print_sub_task("API base URL", &ApiConfig::base_url());
    print_sub_task("Credential store", &CredentialStoreConfig::path().display().to_string());
    print_sub_task("Database", &database.redacted());
    print_sub_task("Database SSL", database.ssl_mode().as_param());
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,reqwest=warn")
///
/// ```bash
/// RUST_LOG=nabhacare_portal=debug cargo run -- signin
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,reqwest=warn"));
}
