//! 이항 연산 피연산자 해석과 결과 식 렌더링 규칙.

use crate::domain::command::CommandError;

/// 이항 연산 명령의 두 인자를 실수로 해석한다.
///
/// 인자 개수를 먼저 검사하고, 그다음 숫자 해석을 시도한다.
pub fn parse_operands(command: &str, args: &[String]) -> Result<(f64, f64), CommandError> {
    let [lhs, rhs] = args else {
        return Err(CommandError::usage(format!(
            "Invalid number of arguments for {command} command. Usage: {command} <num1> <num2>."
        )));
    };

    let invalid = || CommandError::invalid_number(format!("Invalid numeric input for {command} command."));
    let x = parse_number(lhs).ok_or_else(invalid)?;
    let y = parse_number(rhs).ok_or_else(invalid)?;
    Ok((x, y))
}

/// 실수 리터럴을 해석한다. 숫자 사이의 `_` 하나는 자릿수 구분자로 허용한다.
fn parse_number(raw: &str) -> Option<f64> {
    strip_digit_separators(raw)?.parse::<f64>().ok()
}

fn strip_digit_separators(raw: &str) -> Option<String> {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());

    for (idx, &ch) in chars.iter().enumerate() {
        if ch != '_' {
            out.push(ch);
            continue;
        }

        let prev_is_digit = idx > 0 && chars[idx - 1].is_ascii_digit();
        let next_is_digit = chars.get(idx + 1).is_some_and(char::is_ascii_digit);
        if !(prev_is_digit && next_is_digit) {
            return None;
        }
    }

    Some(out)
}

/// 실수를 최단 왕복 표현으로 출력한다.
///
/// 정수값은 `.0`을 붙이고, 지수는 부호와 최소 두 자리(`1e+16`, `3e-06`)로 쓴다.
/// NaN은 `nan`으로 쓴다.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    let repr = format!("{value:?}");
    let Some((mantissa, exponent)) = repr.split_once('e') else {
        return repr;
    };

    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// `x <op> y = result` 형태의 결과 식을 만든다.
pub fn render_equation(x: f64, symbol: char, y: f64, result: f64) -> String {
    format!(
        "{} {symbol} {} = {}",
        format_number(x),
        format_number(y),
        format_number(result)
    )
}
