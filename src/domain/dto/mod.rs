//! # Data Transfer Objects (DTO) Module
//!
//! 백엔드와 주고받는 JSON 본문을 정의합니다.
//!
//! | 엔드포인트 | 요청 | 응답 |
//! |-----------|------|------|
//! | `POST /api/auth/doctor/google-check` | [`auth::GoogleCheckRequest`] | [`auth::GoogleCheckResponse`] |
//! | `POST /api/auth/doctor/google-register` | [`auth::GoogleRegisterRequest`] | [`auth::GoogleRegisterResponse`] |

pub mod auth;
