//! REPL 입력 처리기.
//! TTY에서는 명령 이름 추천과 Tab 완성을 제공하는 줄 편집기를, 그 외에는 일반 라인 입력을 쓴다.

use std::env;
use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute};
use crossterm::terminal::{self, ClearType};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::application::ports::LineReader;

const EXIT_INPUT: &str = "exit";

/// `BufRead`에서 한 줄씩 읽는 일반 입력기. 프롬프트는 `out`에 쓴다.
pub struct BufferedLineReader<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> BufferedLineReader<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }
}

impl<R: BufRead, W: Write> LineReader for BufferedLineReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input line")?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(trim_newline(line)))
    }
}

/// TTY 전용 줄 편집기. 실패하면 일반 라인 입력으로 대체한다.
pub struct TerminalLineReader {
    names: Vec<String>,
}

impl TerminalLineReader {
    /// 추천/완성에 쓸 명령 이름을 받는다.
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }
}

impl LineReader for TerminalLineReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match read_line_interactive(prompt, &self.names) {
            Ok(v) => Ok(v),
            Err(err) => {
                tracing::debug!(error = %err, "interactive input failed, falling back");
                BufferedLineReader::new(io::stdin().lock(), io::stdout()).read_line(prompt)
            }
        }
    }
}

/// stdout이 TTY이고 `TERM=dumb`가 아닐 때만 줄 편집기를 쓴다.
pub fn supports_interactive_input() -> bool {
    if !io::stdout().is_terminal() || !io::stdin().is_terminal() {
        return false;
    }

    // dumb 터미널에서는 제어 시퀀스 기반 UI를 비활성화한다.
    if let Ok(term) = env::var("TERM")
        && term.eq_ignore_ascii_case("dumb")
    {
        return false;
    }

    true
}

fn read_line_interactive(prompt: &str, names: &[String]) -> Result<Option<String>> {
    let mut stdout = io::stdout();
    let _guard = InputGuard::enter(&mut stdout)?;

    let mut input = String::new();
    let mut cursor_chars = 0usize;

    loop {
        render_line(&mut stdout, prompt, &input, cursor_chars, names)?;

        match event::read()? {
            Event::Paste(text) => {
                for ch in text.chars().filter(|c| !c.is_control()) {
                    insert_char_at(&mut input, cursor_chars, ch);
                    cursor_chars += 1;
                }
            }
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Enter => {
                        finish_line(&mut stdout, prompt, &input)?;
                        return Ok(Some(input));
                    }
                    KeyCode::Backspace => {
                        if cursor_chars > 0 {
                            remove_char_at(&mut input, cursor_chars - 1);
                            cursor_chars -= 1;
                        }
                    }
                    KeyCode::Delete => {
                        if cursor_chars < input.chars().count() {
                            remove_char_at(&mut input, cursor_chars);
                        }
                    }
                    KeyCode::Left => {
                        cursor_chars = cursor_chars.saturating_sub(1);
                    }
                    KeyCode::Right => {
                        cursor_chars = (cursor_chars + 1).min(input.chars().count());
                    }
                    KeyCode::Home => {
                        cursor_chars = 0;
                    }
                    KeyCode::End => {
                        cursor_chars = input.chars().count();
                    }
                    KeyCode::Tab => {
                        if let Some(completed) = complete_command(names, &input) {
                            input = completed;
                            cursor_chars = input.chars().count();
                        }
                    }
                    KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        finish_line(&mut stdout, prompt, &input)?;
                        return Ok(None);
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        finish_line(&mut stdout, prompt, EXIT_INPUT)?;
                        return Ok(Some(EXIT_INPUT.to_string()));
                    }
                    KeyCode::Char(ch) => {
                        if !key.modifiers.contains(KeyModifiers::CONTROL)
                            && !key.modifiers.contains(KeyModifiers::ALT)
                        {
                            insert_char_at(&mut input, cursor_chars, ch);
                            cursor_chars += 1;
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}

/// 입력 중인 첫 토큰과 접두어가 맞는 명령 이름 목록.
/// 인자를 입력하기 시작하면(공백 포함) 추천하지 않는다.
fn match_commands<'a>(names: &'a [String], input: &str) -> Vec<&'a str> {
    let query = input.trim_start();
    if query.is_empty() || query.contains(char::is_whitespace) {
        return Vec::new();
    }

    let query = query.to_lowercase();
    names
        .iter()
        .map(String::as_str)
        .filter(|name| name.starts_with(&query))
        .collect()
}

/// Tab 완성. 후보가 하나면 이름 + 공백, 여러 개면 공통 접두어까지 채운다.
fn complete_command(names: &[String], input: &str) -> Option<String> {
    let matches = match_commands(names, input);
    match matches.as_slice() {
        [] => None,
        [only] => Some(format!("{only} ")),
        [first, rest @ ..] => {
            let prefix = rest
                .iter()
                .fold(first.to_string(), |acc, name| common_prefix(&acc, name));
            if prefix.chars().count() > input.trim_start().chars().count() {
                Some(prefix)
            } else {
                None
            }
        }
    }
}

fn common_prefix(a: &str, b: &str) -> String {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x)
        .collect()
}

fn render_line(
    stdout: &mut io::Stdout,
    prompt: &str,
    input: &str,
    cursor_chars: usize,
    names: &[String],
) -> Result<()> {
    let (w, _) = terminal::size().unwrap_or((80, 24));
    let width = (w as usize).max(20);
    let available = width.saturating_sub(display_width(prompt) + 1);
    let shown = tail_with_ellipsis_display(input, available);

    execute!(
        stdout,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::FromCursorDown),
        Print(prompt),
        Print(&shown)
    )?;

    // 추천 목록은 입력줄 아래 한 줄에 흐리게 표시한다.
    let matches = match_commands(names, input);
    if !matches.is_empty() {
        let hint = clip_line_display(&matches.join("  "), width.saturating_sub(1));
        execute!(
            stdout,
            Print("\r\n"),
            SetAttribute(Attribute::Dim),
            Print(hint),
            SetAttribute(Attribute::Reset),
            cursor::MoveUp(1)
        )?;
    }

    let col = cursor_col(prompt, input, &shown, cursor_chars, available);
    execute!(stdout, cursor::MoveToColumn(col as u16))?;
    stdout.flush()?;
    Ok(())
}

fn cursor_col(prompt: &str, input: &str, shown: &str, cursor_chars: usize, available: usize) -> usize {
    let prompt_width = display_width(prompt);
    if display_width(input) > available {
        // 잘린 상태에서는 커서를 표시된 끝으로 정렬한다.
        return prompt_width + display_width(shown);
    }

    let before_cursor: String = input.chars().take(cursor_chars).collect();
    prompt_width + display_width(&before_cursor)
}

/// 추천 줄을 지우고 확정된 입력을 남긴 채 다음 줄로 넘어간다.
fn finish_line(stdout: &mut io::Stdout, prompt: &str, input: &str) -> Result<()> {
    execute!(
        stdout,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::FromCursorDown),
        Print(prompt),
        Print(input),
        Print("\r\n")
    )?;
    stdout.flush()?;
    Ok(())
}

fn tail_with_ellipsis_display(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    if display_width(text) <= max_width {
        return text.to_string();
    }

    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target = max_width - 3;
    let mut tail_rev = String::new();
    let mut used = 0usize;

    for ch in text.chars().rev() {
        let cw = char_display_width(ch);
        if used + cw > target {
            break;
        }
        tail_rev.push(ch);
        used += cw;
    }

    let tail: String = tail_rev.chars().rev().collect();
    format!("...{tail}")
}

fn clip_line_display(line: &str, max_width: usize) -> String {
    if display_width(line) <= max_width {
        return line.to_string();
    }

    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut out = String::new();
    let mut used = 0usize;
    let cap = max_width - 3;

    for ch in line.chars() {
        let cw = char_display_width(ch);
        if used + cw > cap {
            break;
        }
        out.push(ch);
        used += cw;
    }

    out.push_str("...");
    out
}

fn trim_newline(mut s: String) -> String {
    while matches!(s.chars().last(), Some('\n' | '\r')) {
        s.pop();
    }
    s
}

fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn char_display_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

struct InputGuard;

impl InputGuard {
    fn enter(stdout: &mut io::Stdout) -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout, cursor::Show)?;
        Ok(Self)
    }
}

impl Drop for InputGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, ResetColor);
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
    }
}

fn insert_char_at(input: &mut String, char_idx: usize, ch: char) {
    let byte_idx = byte_index_at_char(input, char_idx);
    input.insert(byte_idx, ch);
}

fn remove_char_at(input: &mut String, char_idx: usize) {
    let start = byte_index_at_char(input, char_idx);
    let end = byte_index_at_char(input, char_idx + 1);
    if start < end && end <= input.len() {
        input.replace_range(start..end, "");
    }
}

fn byte_index_at_char(input: &str, char_idx: usize) -> usize {
    input
        .char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(input.len())
}
