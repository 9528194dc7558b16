pub mod dispatch_command;
