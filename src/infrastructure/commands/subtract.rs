//! `subtract` 명령.

use crate::domain::command::{Command, CommandError};
use crate::domain::operand::{parse_operands, render_equation};

/// 첫 번째 수에서 두 번째 수를 뺀다. 사용법: `subtract <num1> <num2>`
#[derive(Default)]
pub struct SubtractCommand;

impl Command for SubtractCommand {
    fn name(&self) -> &'static str {
        "subtract"
    }

    fn execute(&self, args: &[String]) -> Result<String, CommandError> {
        let (x, y) = parse_operands(self.name(), args)?;
        Ok(render_equation(x, '-', y, x - y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn subtracts_second_from_first() {
        let cmd = SubtractCommand;
        assert_eq!(cmd.name(), "subtract");
        assert_eq!(cmd.execute(&args(&["9", "4"])).unwrap(), "9.0 - 4.0 = 5.0");
        assert_eq!(cmd.execute(&args(&["1.5", "4"])).unwrap(), "1.5 - 4.0 = -2.5");
    }

    #[test]
    fn rejects_single_argument() {
        let err = SubtractCommand.execute(&args(&["7"])).unwrap_err();
        assert!(matches!(err, CommandError::Usage(_)));
    }

    #[test]
    fn rejects_non_numeric_input() {
        let err = SubtractCommand.execute(&args(&["foo", "bar"])).unwrap_err();
        assert!(matches!(err, CommandError::InvalidNumber(_)));
    }
}
