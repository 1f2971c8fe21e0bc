//! 인증 흐름 모델

pub mod auth_flow_state;
pub mod identity_assertion;

pub use auth_flow_state::*;
pub use identity_assertion::*;
