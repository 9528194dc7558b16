//! `add` 명령.

use crate::domain::command::{Command, CommandError};
use crate::domain::operand::{parse_operands, render_equation};

/// 두 수를 더한다. 사용법: `add <num1> <num2>`
#[derive(Default)]
pub struct AddCommand;

impl Command for AddCommand {
    fn name(&self) -> &'static str {
        "add"
    }

    fn execute(&self, args: &[String]) -> Result<String, CommandError> {
        let (x, y) = parse_operands(self.name(), args)?;
        Ok(render_equation(x, '+', y, x + y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn adds_two_numbers() {
        let cmd = AddCommand;
        assert_eq!(cmd.name(), "add");
        assert_eq!(cmd.execute(&args(&["3", "4"])).unwrap(), "3.0 + 4.0 = 7.0");
    }

    #[test]
    fn nan_operand_renders_lowercase() {
        assert_eq!(
            AddCommand.execute(&args(&["5", "nan"])).unwrap(),
            "5.0 + nan = nan"
        );
    }

    #[test]
    fn accepts_digit_separators() {
        assert_eq!(
            AddCommand.execute(&args(&["1_000", "1"])).unwrap(),
            "1000.0 + 1.0 = 1001.0"
        );
    }

    #[test]
    fn rejects_wrong_argument_count() {
        for bad in [&[][..], &["5"][..], &["1", "2", "3"][..]] {
            let err = AddCommand.execute(&args(bad)).unwrap_err();
            assert!(matches!(err, CommandError::Usage(_)));
            assert!(err.to_string().contains("Invalid number of arguments"));
        }
    }

    #[test]
    fn rejects_non_numeric_input() {
        let err = AddCommand.execute(&args(&["abc", "2"])).unwrap_err();
        assert!(matches!(err, CommandError::InvalidNumber(_)));
        assert!(err.to_string().contains("Invalid numeric input"));
    }
}
