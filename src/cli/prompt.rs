//! 터미널 입력 프롬프트
//!
//! 입력/출력 스트림을 주입받아 테스트에서는 메모리 버퍼로 대체합니다.

use std::io::{BufRead, Write};

use crate::errors::{AppError, AppResult, ErrorContext};
use crate::utils::display_terminal::format_numbered_options;
use crate::utils::string_utils::{clean_optional_string, validate_required_string};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// 한 줄을 읽습니다. 입력이 닫히면 에러입니다.
    fn read_line(&mut self) -> AppResult<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("failed to read input")?;
        if read == 0 {
            return Err(AppError::InternalError("input closed".to_string()));
        }
        Ok(line.trim().to_string())
    }

    fn show(&mut self, text: &str) -> AppResult<()> {
        write!(self.output, "{}", text).context("failed to write prompt")?;
        self.output.flush().context("failed to flush prompt")
    }

    pub fn message(&mut self, text: &str) -> AppResult<()> {
        self.show(&format!("{}\n", text))
    }

    /// 자유 입력. 빈 입력은 `None`.
    pub fn ask_optional(&mut self, label: &str) -> AppResult<Option<String>> {
        self.show(&format!("{}: ", label))?;
        let line = self.read_line()?;
        Ok(clean_optional_string(Some(line)))
    }

    /// 필수 입력. 빈 입력이면 현재 값을 유지하고, 현재 값도 없으면 다시 묻습니다.
    pub fn ask_required(&mut self, label: &str, current: &str) -> AppResult<String> {
        loop {
            if current.is_empty() {
                self.show(&format!("{}: ", label))?;
            } else {
                self.show(&format!("{} [{}]: ", label, current))?;
            }

            let line = self.read_line()?;
            let value = if line.is_empty() { current } else { line.as_str() };
            match validate_required_string(value, label) {
                Ok(value) => return Ok(value),
                Err(e) => self.message(&format!("  {}", display_message(&e)))?,
            }
        }
    }

    /// 번호 메뉴에서 하나를 고릅니다.
    ///
    /// 빈 입력은 `current`를 유지합니다. `none_label`이 있으면 `0`은 선택 해제(`None`)입니다.
    pub fn choose(
        &mut self,
        label: &str,
        options: &[&str],
        current: Option<usize>,
        none_label: Option<&str>,
    ) -> AppResult<Option<usize>> {
        self.message(&format!("{}:", label))?;
        self.message(&format_numbered_options(options, none_label))?;

        loop {
            match current.and_then(|index| options.get(index)) {
                Some(selected) => self.show(&format!("Select [{}]: ", selected))?,
                None => self.show("Select: ")?,
            }

            let line = self.read_line()?;
            if line.is_empty() {
                if current.is_some() || none_label.is_some() {
                    return Ok(current);
                }
            } else if let Ok(number) = line.parse::<usize>() {
                if number == 0 && none_label.is_some() {
                    return Ok(None);
                }
                if (1..=options.len()).contains(&number) {
                    return Ok(Some(number - 1));
                }
            }

            let first = if none_label.is_some() { 0 } else { 1 };
            self.message(&format!("  Enter a number between {} and {}", first, options.len()))?;
        }
    }

    /// 예/아니오 확인. 빈 입력은 `default`.
    pub fn confirm(&mut self, question: &str, default: bool) -> AppResult<bool> {
        let hint = if default { "Y/n" } else { "y/N" };
        loop {
            self.show(&format!("{} [{}]: ", question, hint))?;
            match self.read_line()?.to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.message("  Please answer y or n")?,
            }
        }
    }
}

/// 화면 표시용 메시지 (검증 에러는 접두어 없이)
pub fn display_message(error: &AppError) -> String {
    match error {
        AppError::ValidationError(message) => message.clone(),
        other => other.to_string(),
    }
}
