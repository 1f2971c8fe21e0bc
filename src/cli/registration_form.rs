//! 터미널 회원가입 폼
//!
//! 국가 → 주 → 도시 연쇄 선택은 번호 메뉴로, 나머지 필드는 한 줄 입력으로 받습니다.
//! 모든 변경은 [`RegistrationDraft`]의 선택 메서드를 거칩니다.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::cli::prompt::Prompter;
use crate::domain::models::doctor::locations;
use crate::domain::models::doctor::{DoctorCategory, RegistrationDraft};
use crate::errors::AppResult;

const NONE_LABEL: &str = "(none)";

/// 폼을 채워 새 입력값을 반환합니다. 빈 입력은 기존 값을 유지합니다.
pub fn fill_draft<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    mut draft: RegistrationDraft,
) -> AppResult<RegistrationDraft> {
    prompter.message("")?;
    prompter.message("Complete your doctor registration")?;

    draft.name = prompter.ask_required("Full Name", &draft.name)?;

    let categories = DoctorCategory::all();
    let labels: Vec<&str> = categories.iter().map(|c| c.label()).collect();
    let current = categories.iter().position(|c| *c == draft.category);
    if let Some(index) = prompter.choose("Category", &labels, current, None)? {
        draft.category = categories[index];
    }

    draft.mobile = prompter.ask_required("Mobile", &draft.mobile)?;
    draft.speciality = prompter.ask_required("Speciality", &draft.speciality)?;
    draft.reg_no = prompter.ask_required("Medical Reg. No", &draft.reg_no)?;
    draft.council = prompter.ask_required("Medical Council", &draft.council)?;
    draft.clinic_name = prompter.ask_required("Clinic/Hospital", &draft.clinic_name)?;

    choose_location(prompter, &mut draft)?;

    if let Some(path) = prompter.ask_optional("License file (optional)")? {
        draft.license_file = Some(PathBuf::from(path));
    }
    if let Some(path) = prompter.ask_optional("Government ID file (optional)")? {
        draft.govt_id_file = Some(PathBuf::from(path));
    }

    Ok(draft)
}

fn choose_location<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    draft: &mut RegistrationDraft,
) -> AppResult<()> {
    let countries = locations::countries();
    let current = countries.iter().position(|c| *c == draft.country());
    if let Some(index) = prompter.choose("Country", countries, current, None)? {
        if countries[index] != draft.country() {
            draft.select_country(countries[index])?;
        }
    }

    let states = locations::states_for(draft.country());
    let current = states.iter().position(|s| *s == draft.state());
    let chosen = prompter
        .choose("State", states, current, Some(NONE_LABEL))?
        .map(|index| states[index])
        .unwrap_or("");
    if chosen != draft.state() {
        draft.select_state(chosen)?;
    }

    if !draft.city_selectable() {
        return Ok(());
    }

    let cities = locations::cities_for(draft.state());
    if cities.is_empty() {
        prompter.message(&format!("  No cities listed for {}", draft.state()))?;
        return Ok(());
    }

    let current = cities.iter().position(|c| *c == draft.city());
    let chosen = prompter
        .choose("City", cities, current, Some(NONE_LABEL))?
        .map(|index| cities[index])
        .unwrap_or("");
    if chosen != draft.city() {
        draft.select_city(chosen)?;
    }

    Ok(())
}
