//! 의사 분류와 로그인 후 이동 경로

use serde::{Deserialize, Serialize};

/// 일반의 대시보드 경로
pub const GENERAL_ROUTE: &str = "/doctor/general";
/// 동종요법의 대시보드 경로
pub const HOMEOPATHY_ROUTE: &str = "/doctor/homeopathy";
/// 아유르베다의 대시보드 경로
pub const AYURVEDIC_ROUTE: &str = "/doctor/ayurvedic";

/// 의사 분류
///
/// 기존 사용자는 백엔드가, 신규 사용자는 회원가입 폼 선택값이 결정합니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoctorCategory {
    #[default]
    General,
    Homeopathy,
    Ayurvedic,
}

impl DoctorCategory {
    /// 화면에 표시되는 이름
    pub fn label(&self) -> &'static str {
        match self {
            DoctorCategory::General => "General Physician",
            DoctorCategory::Homeopathy => "Homeopathist",
            DoctorCategory::Ayurvedic => "Ayurvedic Doctor",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DoctorCategory::General => "general",
            DoctorCategory::Homeopathy => "homeopathy",
            DoctorCategory::Ayurvedic => "ayurvedic",
        }
    }

    pub fn all() -> [DoctorCategory; 3] {
        [
            DoctorCategory::General,
            DoctorCategory::Homeopathy,
            DoctorCategory::Ayurvedic,
        ]
    }

    /// 백엔드가 돌려준 분류 문자열을 해석합니다.
    ///
    /// 알 수 없는 값이나 누락된 값은 에러가 아니라 `General`로 처리합니다.
    /// 비교는 대소문자를 구분합니다.
    pub fn from_backend(category: Option<&str>) -> Self {
        match category {
            Some("homeopathy") => DoctorCategory::Homeopathy,
            Some("ayurvedic") => DoctorCategory::Ayurvedic,
            _ => DoctorCategory::General,
        }
    }

    /// 이 분류의 대시보드 경로
    pub fn route(&self) -> &'static str {
        match self {
            DoctorCategory::General => GENERAL_ROUTE,
            DoctorCategory::Homeopathy => HOMEOPATHY_ROUTE,
            DoctorCategory::Ayurvedic => AYURVEDIC_ROUTE,
        }
    }
}

/// 백엔드 분류 문자열로 로그인 후 이동 경로를 결정합니다.
///
/// 기존 사용자 로그인과 회원가입 완료 두 곳 모두 이 함수만 사용합니다.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(route_for_category(Some("ayurvedic")), "/doctor/ayurvedic");
/// assert_eq!(route_for_category(Some("surgeon")), "/doctor/general");
/// assert_eq!(route_for_category(None), "/doctor/general");
/// ```
pub fn route_for_category(category: Option<&str>) -> &'static str {
    DoctorCategory::from_backend(category).route()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories() {
        assert_eq!(route_for_category(Some("homeopathy")), HOMEOPATHY_ROUTE);
        assert_eq!(route_for_category(Some("ayurvedic")), AYURVEDIC_ROUTE);
        assert_eq!(route_for_category(Some("general")), GENERAL_ROUTE);
    }

    #[test]
    fn test_everything_else_defaults_to_general() {
        let others = [
            None,
            Some(""),
            Some("surgeon"),
            Some("Homeopathy"),
            Some("AYURVEDIC"),
            Some(" homeopathy"),
            Some("general "),
        ];

        for category in others {
            assert_eq!(route_for_category(category), GENERAL_ROUTE, "{:?}", category);
        }
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&DoctorCategory::Ayurvedic).unwrap();
        assert_eq!(json, "\"ayurvedic\"");

        let parsed: DoctorCategory = serde_json::from_str("\"homeopathy\"").unwrap();
        assert_eq!(parsed, DoctorCategory::Homeopathy);
    }

    #[test]
    fn test_as_str_matches_backend_names() {
        for category in DoctorCategory::all() {
            assert_eq!(DoctorCategory::from_backend(Some(category.as_str())), category);
        }
    }
}
