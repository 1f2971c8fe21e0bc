//! 터미널 출력 포맷팅 유틸리티
//!
//! CLI 로그인 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 번호 메뉴 등을 시각적으로 표현합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// 텍스트는 자동으로 중앙 정렬됩니다.
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║               NabhaCare Doctor Portal            ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Google sign-in
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
///
/// ```text
/// ✓ Step 1: Signed in
/// ```
pub fn print_step_complete(step: u8, description: &str) {
    println!("✓ Step {}: {}", step, description);
}

/// 진행 단계 실패를 표시합니다
pub fn print_step_failed(step: u8, message: &str) {
    println!("✗ Step {}: {}", step, message);
}

/// 서브 항목을 표시합니다
///
/// ```text
///    ├─ Redirect: /doctor/general
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 번호가 붙은 선택지 목록을 만듭니다
///
/// `none_label`이 있으면 `0`번 항목으로 앞에 붙습니다.
///
/// ```text
///    0) (none)
///    1) Maharashtra
///    2) Delhi
/// ```
pub fn format_numbered_options(options: &[&str], none_label: Option<&str>) -> String {
    let mut lines = Vec::with_capacity(options.len() + 1);
    if let Some(label) = none_label {
        lines.push(format!("   0) {}", label));
    }
    for (index, option) in options.iter().enumerate() {
        lines.push(format!("   {}) {}", index + 1, option));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_numbered_options() {
        assert_eq!(
            format_numbered_options(&["General", "Homeopathy"], None),
            "   1) General\n   2) Homeopathy"
        );
        assert_eq!(
            format_numbered_options(&["Delhi"], Some("(none)")),
            "   0) (none)\n   1) Delhi"
        );
        assert_eq!(format_numbered_options(&[], None), "");
    }
}
