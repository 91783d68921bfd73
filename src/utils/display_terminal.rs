//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 과정에서 연결 대상, 연결 방식, 바인딩 주소를 눈에 띄게 보여줍니다.
//! 실제 문자열 조립은 `format_*` 함수가 맡고 `print_*` 함수는 출력만 합니다.

const BOX_WIDTH: usize = 50;

/// 박스로 둘러싼 제목 세 줄을 만듭니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                 DOCUMENT GATEWAY                 ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn format_boxed_title(title: &str) -> [String; 3] {
    let border = "═".repeat(BOX_WIDTH);

    [
        format!("╔{}╗", border),
        format!("║{:^width$}║", title, width = BOX_WIDTH),
        format!("╚{}╝", border),
    ]
}

pub fn print_boxed_title(title: &str) {
    for line in format_boxed_title(title) {
        println!("{}", line);
    }
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Connecting to MongoDB
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

pub fn print_step_complete(step: u8, description: &str) {
    println!("✓ Step {}: {}", step, description);
}

/// 들여쓴 트리 형태의 한 줄
pub fn format_sub_task(name: &str, status: &str) -> String {
    format!("   ├─ {}: {}", name, status)
}

/// 시작 요약에 표시할 값들
///
/// 연결 문자열은 반드시 자격 증명을 가린 값이어야 합니다.
#[derive(Debug, Clone)]
pub struct StartupSummary<'a> {
    pub connection: &'a str,
    pub database: &'a str,
    pub mode: &'a str,
    pub bind_address: &'a str,
}

impl StartupSummary<'_> {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = format_boxed_title("📚 DOCUMENT GATEWAY READY").to_vec();
        lines.push(format_sub_task("MongoDB", self.connection));
        lines.push(format_sub_task("Database", self.database));
        lines.push(format_sub_task("Connection mode", self.mode));
        lines.push(format_sub_task("Listening", &format!("http://{}", self.bind_address)));
        lines
    }
}

/// 서버 시작 직전에 요약을 출력합니다
pub fn print_startup_summary(summary: &StartupSummary<'_>) {
    println!();
    for line in summary.lines() {
        println!("{}", line);
    }
    println!();
}
