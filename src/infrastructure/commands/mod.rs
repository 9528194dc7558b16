//! 내장 계산기 명령 구현과 정적 등록 테이블.

mod add;
mod divide;
mod menu;
mod multiply;
mod subtract;

use crate::domain::command::{Command, CommandFactory};

pub use add::AddCommand;
pub use divide::DivideCommand;
pub use menu::MenuCommand;
pub use multiply::MultiplyCommand;
pub use subtract::SubtractCommand;

/// 레지스트리가 탐색하는 내장 명령 목록.
/// 이름이 겹치면 뒤쪽 항목이 앞쪽 항목을 덮어쓴다.
pub const BUILTIN_COMMANDS: &[CommandFactory] = &[
    boxed::<AddCommand>,
    boxed::<SubtractCommand>,
    boxed::<MultiplyCommand>,
    boxed::<DivideCommand>,
    boxed::<MenuCommand>,
];

/// 기본값으로 생성한 명령을 트레이트 객체로 감싼다.
pub(crate) fn boxed<C>() -> Box<dyn Command>
where
    C: Command + Default + 'static,
{
    Box::new(C::default())
}
