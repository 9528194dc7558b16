//! `divide` 명령.

use crate::domain::command::{Command, CommandError};
use crate::domain::operand::{parse_operands, render_equation};

/// 첫 번째 수를 두 번째 수로 나눈다. 사용법: `divide <num1> <num2>`
#[derive(Default)]
pub struct DivideCommand;

impl Command for DivideCommand {
    fn name(&self) -> &'static str {
        "divide"
    }

    fn execute(&self, args: &[String]) -> Result<String, CommandError> {
        let (x, y) = parse_operands(self.name(), args)?;
        // -0.0도 0으로 취급된다.
        if y == 0.0 {
            return Err(CommandError::DivideByZero);
        }
        Ok(render_equation(x, '/', y, x / y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn divides_two_numbers() {
        let cmd = DivideCommand;
        assert_eq!(cmd.name(), "divide");
        assert_eq!(cmd.execute(&args(&["20", "4"])).unwrap(), "20.0 / 4.0 = 5.0");
    }

    #[test]
    fn small_quotient_uses_padded_exponent() {
        assert_eq!(
            DivideCommand.execute(&args(&["1", "3e5"])).unwrap(),
            "1.0 / 300000.0 = 3.3333333333333333e-06"
        );
    }

    #[test]
    fn zero_dividend_is_allowed() {
        assert_eq!(
            DivideCommand.execute(&args(&["0", "5"])).unwrap(),
            "0.0 / 5.0 = 0.0"
        );
    }

    #[test]
    fn zero_divisor_fails_in_any_spelling() {
        for zero in ["0", "0.0", "-0", "0e10"] {
            let err = DivideCommand.execute(&args(&["5", zero])).unwrap_err();
            assert!(matches!(err, CommandError::DivideByZero), "divisor {zero}");
        }
    }

    #[test]
    fn numeric_check_precedes_zero_check() {
        let err = DivideCommand.execute(&args(&["abc", "0"])).unwrap_err();
        assert!(matches!(err, CommandError::InvalidNumber(_)));
    }

    #[test]
    fn rejects_wrong_argument_count() {
        let err = DivideCommand.execute(&args(&["20"])).unwrap_err();
        assert!(matches!(err, CommandError::Usage(_)));
    }
}
