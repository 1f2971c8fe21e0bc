//! 회원가입 폼 입력값
//!
//! 한 번의 회원가입 시도 동안에만 메모리에 유지되는 값입니다.
//! 국가/주/도시는 연쇄 선택 규칙을 지키도록 선택 메서드로만 변경합니다.

use std::path::PathBuf;

use crate::domain::models::doctor::doctor_category::DoctorCategory;
use crate::domain::models::doctor::locations::{self, DEFAULT_COUNTRY};
use crate::errors::{AppError, AppResult};

/// 회원가입 폼 상태
///
/// # Invariants
///
/// - 국가를 바꾸면 주와 도시가 비워집니다.
/// - 주를 바꾸면 도시가 비워집니다.
/// - 도시는 비어 있거나 선택된 주의 도시 목록에 속합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationDraft {
    pub name: String,
    pub category: DoctorCategory,
    pub mobile: String,
    pub reg_no: String,
    pub council: String,
    pub clinic_name: String,
    pub speciality: String,
    /// 선택된 면허 파일. 전송되지 않고 기록만 됩니다.
    pub license_file: Option<PathBuf>,
    /// 선택된 신분증 파일. 전송되지 않고 기록만 됩니다.
    pub govt_id_file: Option<PathBuf>,
    country: String,
    state: String,
    city: String,
}

impl Default for RegistrationDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: DoctorCategory::General,
            mobile: String::new(),
            reg_no: String::new(),
            council: String::new(),
            clinic_name: String::new(),
            speciality: String::new(),
            license_file: None,
            govt_id_file: None,
            country: DEFAULT_COUNTRY.to_string(),
            state: String::new(),
            city: String::new(),
        }
    }
}

impl RegistrationDraft {
    /// 이름만 채워진 새 폼을 생성합니다.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// 도시 선택이 가능한지 여부 (주가 선택되어 있어야 함)
    pub fn city_selectable(&self) -> bool {
        !self.state.is_empty()
    }

    /// 국가를 선택합니다. 주와 도시는 항상 비워집니다.
    pub fn select_country(&mut self, country: &str) -> AppResult<()> {
        if !locations::is_known_country(country) {
            return Err(AppError::ValidationError(format!(
                "Unknown country: {}",
                country
            )));
        }

        self.country = country.to_string();
        self.state.clear();
        self.city.clear();
        Ok(())
    }

    /// 주를 선택합니다. 빈 문자열은 선택 해제입니다. 도시는 항상 비워집니다.
    pub fn select_state(&mut self, state: &str) -> AppResult<()> {
        if !state.is_empty() && !locations::states_for(&self.country).contains(&state) {
            return Err(AppError::ValidationError(format!(
                "State {} is not available for {}",
                state, self.country
            )));
        }

        self.state = state.to_string();
        self.city.clear();
        Ok(())
    }

    /// 도시를 선택합니다. 빈 문자열은 선택 해제입니다.
    pub fn select_city(&mut self, city: &str) -> AppResult<()> {
        if city.is_empty() {
            self.city.clear();
            return Ok(());
        }

        if !self.city_selectable() {
            return Err(AppError::ValidationError(
                "Select a state before choosing a city".to_string(),
            ));
        }

        if !locations::cities_for(&self.state).contains(&city) {
            return Err(AppError::ValidationError(format!(
                "City {} is not in {}",
                city, self.state
            )));
        }

        self.city = city.to_string();
        Ok(())
    }
}
