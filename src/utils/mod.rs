//! 공통 유틸리티 함수 모듈
//!
//! 문자열 처리, 터미널 출력 등의 기능을 포함합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 필수 입력 검증, 선택 입력 정리, 로그용 토큰 마스킹
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::mask_secret;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! log::debug!("token: {}", mask_secret(&token));
//! print_boxed_title("NabhaCare Doctor Portal");
//! ```

pub mod display_terminal;
pub mod string_utils;
