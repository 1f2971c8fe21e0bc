//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인 상태 머신 위에 백엔드 호출과 토큰 저장 같은 부수 효과를 조합합니다.
//! 의존성(API 클라이언트, 토큰 저장소)은 생성자로 주입받습니다.
//!
//! # Features
//!
//! - Google 자격 증명 디코딩
//! - 기존 의사 계정 로그인 및 대시보드 경로 계산
//! - 신규 의사 회원가입 (중복 제출 방지)
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::auth::DoctorAuthService;
//!
//! let service = DoctorAuthService::new(Arc::new(api), store.clone());
//! let outcome = service.handle_google_success(&credential).await?;
//! ```

pub mod auth;
