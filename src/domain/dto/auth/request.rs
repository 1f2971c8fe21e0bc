//! 의사 인증 요청 DTO
//!
//! `/api/auth/doctor/*` 엔드포인트로 전송하는 JSON 본문입니다.

use serde::Serialize;

use crate::domain::models::doctor::doctor_category::DoctorCategory;
use crate::domain::models::doctor::registration_draft::RegistrationDraft;

/// 면허 파일 업로드 참조 (실제 업로드는 하지 않음)
pub const LICENSE_UPLOAD_PLACEHOLDER: &str = "mock-license-url";
/// 신분증 파일 업로드 참조 (실제 업로드는 하지 않음)
pub const GOVT_ID_UPLOAD_PLACEHOLDER: &str = "mock-govt-id-url";

/// `POST /api/auth/doctor/google-check` 요청
/// 이메일은 [`IdentityAssertion`](crate::domain::models::auth::IdentityAssertion) 디코딩 시 검증됩니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoogleCheckRequest {
    pub email: String,
}

/// `POST /api/auth/doctor/google-register` 요청
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleRegisterRequest {
    pub email: String,
    pub name: String,
    pub mobile: String,
    pub category: DoctorCategory,
    pub speciality: String,
    pub reg_no: String,
    pub council: String,
    pub clinic_name: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub license_url: String,
    pub govt_id_url: String,
}

impl GoogleRegisterRequest {
    /// Google 이메일과 폼 입력값으로 요청을 만듭니다.
    ///
    /// 파일 선택 여부와 관계없이 업로드 참조에는 고정된 placeholder가 들어갑니다.
    pub fn from_draft(email: &str, draft: &RegistrationDraft) -> Self {
        Self {
            email: email.to_string(),
            name: draft.name.clone(),
            mobile: draft.mobile.clone(),
            category: draft.category,
            speciality: draft.speciality.clone(),
            reg_no: draft.reg_no.clone(),
            council: draft.council.clone(),
            clinic_name: draft.clinic_name.clone(),
            country: draft.country().to_string(),
            state: draft.state().to_string(),
            city: draft.city().to_string(),
            license_url: LICENSE_UPLOAD_PLACEHOLDER.to_string(),
            govt_id_url: GOVT_ID_UPLOAD_PLACEHOLDER.to_string(),
        }
    }
}
