//! # 문자열 유틸리티
//!
//! 폼 입력 정리와 로그 마스킹에 쓰는 공통 함수들입니다.

use crate::errors::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
/// 에러 메시지는 화면에 그대로 표시됩니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// assert_eq!(validate_required_string("  Asha  ", "Full Name").unwrap(), "Asha");
/// assert!(validate_required_string("   ", "Mobile").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!("{} is required", field_name)));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// 로그 출력용으로 비밀 값을 가립니다.
///
/// 앞 4글자만 남기고 나머지는 `***`로 대체합니다. 8글자 이하는 전부 가립니다.
///
/// ```rust,ignore
/// assert_eq!(mask_secret("eyJhbGciOiJIUzI1NiJ9"), "eyJh***");
/// assert_eq!(mask_secret("short"), "***");
/// ```
pub fn mask_secret(value: &str) -> String {
    if value.chars().count() <= 8 {
        return "***".to_string();
    }
    let visible: String = value.chars().take(4).collect();
    format!("{}***", visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("  Hello  ", "Full Name").unwrap(), "Hello");
        assert_eq!(
            validate_required_string("   ", "Mobile"),
            Err(AppError::ValidationError("Mobile is required".to_string()))
        );
        assert!(validate_required_string("", "Mobile").is_err());
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  /tmp/a.pdf  ".to_string())), Some("/tmp/a.pdf".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("eyJhbGciOiJIUzI1NiJ9"), "eyJh***");
        assert_eq!(mask_secret("t1"), "***");
        assert_eq!(mask_secret(""), "***");
        assert_eq!(mask_secret("토큰토큰토큰토큰토큰"), "토큰토큰***");
    }
}
