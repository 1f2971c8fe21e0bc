//! Google 자격 증명 디코딩
//!
//! Google 로그인 위젯이 돌려주는 ID 토큰(JWT)에서 payload 세그먼트만 꺼내
//! 이메일과 이름을 읽습니다. 서명과 헤더는 검사하지 않으며, 신뢰 검증은 백엔드가 담당합니다.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use log::warn;
use validator::Validate;

use crate::domain::models::auth::IdentityAssertion;
use crate::errors::{AppError, AppResult};

/// 자격 증명 문자열을 [`IdentityAssertion`]으로 디코딩합니다.
///
/// # Errors
///
/// 다음 경우 모두 [`AppError::IdentityDecodeError`]를 반환합니다.
///
/// - `.`으로 구분된 두 번째 세그먼트가 없음
/// - payload가 base64url(또는 표준 base64)이 아님
/// - payload가 JSON 객체가 아니거나 `email`이 없음
/// - `email` 형식이 올바르지 않음
pub fn decode_identity_assertion(credential: &str) -> AppResult<IdentityAssertion> {
    let payload = credential
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| AppError::IdentityDecodeError("payload segment is missing".to_string()))?;

    let payload = payload.trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| STANDARD_NO_PAD.decode(payload))
        .map_err(|e| AppError::IdentityDecodeError(format!("payload is not base64: {}", e)))?;

    let assertion: IdentityAssertion = serde_json::from_slice(&bytes)
        .map_err(|e| AppError::IdentityDecodeError(format!("payload is not a valid identity: {}", e)))?;

    if let Err(e) = assertion.validate() {
        warn!("⚠️ 자격 증명의 이메일 형식이 올바르지 않습니다: {}", e);
        return Err(AppError::IdentityDecodeError(format!("invalid email: {}", e)));
    }

    Ok(assertion)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::{Value, json};

    /// 테스트용 서명 없는 JWT를 만듭니다.
    pub(crate) fn credential_for(payload: &Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{}.{}.signature", header, body)
    }

    #[test]
    fn test_decode_valid_credential() {
        let credential = credential_for(&json!({
            "email": "asha@example.com",
            "name": "Asha Verma",
            "email_verified": true
        }));

        let assertion = decode_identity_assertion(&credential).unwrap();
        assert_eq!(assertion.email, "asha@example.com");
        assert_eq!(assertion.display_name(), "Asha Verma");
    }

    #[test]
    fn test_decode_without_name() {
        let credential = credential_for(&json!({"email": "ravi@example.com"}));

        let assertion = decode_identity_assertion(&credential).unwrap();
        assert_eq!(assertion.display_name(), "");
    }

    #[test]
    fn test_padded_and_standard_alphabet_payloads() {
        let payload = json!({"email": "a@example.com", "name": "Añjali ~?>"}).to_string();
        let padded = base64::engine::general_purpose::URL_SAFE.encode(&payload);
        let standard = base64::engine::general_purpose::STANDARD.encode(&payload);

        for segment in [padded, standard] {
            let credential = format!("h.{}.s", segment);
            let assertion = decode_identity_assertion(&credential).unwrap();
            assert_eq!(assertion.email, "a@example.com");
        }
    }

    #[test]
    fn test_malformed_credentials_are_rejected() {
        let cases = [
            "".to_string(),
            "no-dots-here".to_string(),
            "header..signature".to_string(),
            "header.%%%.signature".to_string(),
            format!("h.{}.s", URL_SAFE_NO_PAD.encode("not json")),
            credential_for(&json!({"name": "No Email"})),
            credential_for(&json!({"email": "not-an-email"})),
            credential_for(&json!(["array"])),
        ];

        for credential in cases {
            let result = decode_identity_assertion(&credential);
            assert!(
                matches!(result, Err(AppError::IdentityDecodeError(_))),
                "expected decode error for {:?}",
                credential
            );
        }
    }
}
