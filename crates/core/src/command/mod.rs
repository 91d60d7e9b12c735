mod alire;
mod builder;
mod command_line;

pub use alire::command_prefix;
pub use builder::{diagnostic_args, CommandBuilder, CommandContext};
pub use command_line::{quote, CommandLine};
