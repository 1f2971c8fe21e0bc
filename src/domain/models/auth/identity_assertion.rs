//! Google 로그인에서 얻은 사용자 신원 정보

use serde::Deserialize;
use validator::Validate;

/// Google 자격 증명(JWT) payload에서 꺼낸 신원 정보
///
/// 서명은 로컬에서 검증하지 않습니다. 검증은 백엔드의 책임입니다.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct IdentityAssertion {
    #[validate(email(message = "유효한 이메일 주소가 아닙니다"))]
    pub email: String,

    #[serde(default)]
    pub name: Option<String>,
}

impl IdentityAssertion {
    /// 폼에 미리 채울 이름. 없으면 빈 문자열입니다.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}
