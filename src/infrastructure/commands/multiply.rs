//! `multiply` 명령.

use crate::domain::command::{Command, CommandError};
use crate::domain::operand::{parse_operands, render_equation};

/// 두 수를 곱한다. 사용법: `multiply <num1> <num2>`
#[derive(Default)]
pub struct MultiplyCommand;

impl Command for MultiplyCommand {
    fn name(&self) -> &'static str {
        "multiply"
    }

    fn execute(&self, args: &[String]) -> Result<String, CommandError> {
        let (x, y) = parse_operands(self.name(), args)?;
        Ok(render_equation(x, '*', y, x * y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn multiplies_two_numbers() {
        let cmd = MultiplyCommand;
        assert_eq!(cmd.name(), "multiply");
        assert_eq!(cmd.execute(&args(&["3", "4"])).unwrap(), "3.0 * 4.0 = 12.0");
    }

    #[test]
    fn large_product_uses_signed_exponent() {
        assert_eq!(
            MultiplyCommand.execute(&args(&["1e8", "1e8"])).unwrap(),
            "100000000.0 * 100000000.0 = 1e+16"
        );
    }

    #[test]
    fn rejects_wrong_argument_count() {
        let err = MultiplyCommand.execute(&args(&["7"])).unwrap_err();
        assert!(matches!(err, CommandError::Usage(_)));
        assert_eq!(
            err.to_string(),
            "Invalid number of arguments for multiply command. Usage: multiply <num1> <num2>."
        );
    }

    #[test]
    fn rejects_non_numeric_input() {
        let err = MultiplyCommand.execute(&args(&["3", "x"])).unwrap_err();
        assert!(matches!(err, CommandError::InvalidNumber(_)));
    }
}
