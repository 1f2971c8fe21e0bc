//! CLI 하위 명령 실행

use std::io::{BufRead, Write};

use log::info;

use crate::cli::prompt::Prompter;
use crate::cli::registration_form::fill_draft;
use crate::domain::models::auth::GOOGLE_PROVIDER_ERROR_MESSAGE;
use crate::errors::{AppError, AppResult};
use crate::services::auth::{DoctorAuthService, SignInOutcome};
use crate::storage::{CredentialKey, TokenStore};
use crate::utils::display_terminal::{print_step_complete, print_step_failed, print_step_start};
use crate::utils::string_utils::clean_optional_string;

/// 로그인부터 (필요하면) 회원가입까지 진행합니다.
///
/// 자격 증명이 없으면 입력을 받고, 그래도 비어 있으면 Google 로그인 실패로 처리합니다.
/// 회원가입이 실패하면 입력값을 유지한 채 수정 후 재제출할지 묻습니다.
pub async fn signin<R: BufRead, W: Write>(
    service: &DoctorAuthService,
    credential: Option<String>,
    prompter: &mut Prompter<R, W>,
) -> AppResult<SignInOutcome> {
    print_step_start(1, "Google sign-in");

    let credential = match clean_optional_string(credential) {
        Some(credential) => Some(credential),
        None => prompter.ask_optional("Google ID token")?,
    };

    let Some(credential) = credential else {
        service.handle_google_error()?;
        print_step_failed(1, &current_error(service, GOOGLE_PROVIDER_ERROR_MESSAGE)?);
        return Err(AppError::IdentityProviderError("no credential was provided".to_string()));
    };

    let outcome = match service.handle_google_success(&credential).await {
        Ok(outcome) => outcome,
        Err(e) => {
            print_step_failed(1, &current_error(service, &e.to_string())?);
            return Err(e);
        }
    };

    let SignInOutcome::RegistrationRequired { mut draft } = outcome else {
        print_step_complete(1, "Signed in");
        return Ok(outcome);
    };

    print_step_complete(1, "No doctor account found");
    print_step_start(2, "Doctor registration");

    loop {
        draft = fill_draft(prompter, draft)?;
        let filled = draft.clone();
        service.edit_draft(move |current| {
            *current = filled;
            Ok(())
        })?;

        match service.submit_registration().await {
            Ok(outcome) => {
                print_step_complete(2, "Registered");
                return Ok(outcome);
            }
            Err(e @ (AppError::RegistrationError(_) | AppError::StorageError(_))) => {
                print_step_failed(2, &current_error(service, &e.to_string())?);
                if !prompter.confirm("Edit and resubmit?", true)? {
                    return Err(e);
                }
            }
            Err(e) => return Err(e),
        }
    }
}

/// 저장된 세션 토큰을 모두 지웁니다. 지운 키의 수를 반환합니다.
pub fn logout(store: &dyn TokenStore) -> AppResult<usize> {
    let mut cleared = 0;
    for key in CredentialKey::all() {
        if store.get(key).is_some() {
            store.clear(key)?;
            info!("🗑️ {} 삭제", key.as_str());
            cleared += 1;
        }
    }
    Ok(cleared)
}

fn current_error(service: &DoctorAuthService, fallback: &str) -> AppResult<String> {
    Ok(service
        .error_message()?
        .unwrap_or_else(|| fallback.to_string()))
}
