//! One module per subcommand. Each returns the process exit code.

mod banner;
mod check_dirs;
mod list;
mod run;
mod run_main;

pub use banner::banner;
pub use check_dirs::check_dirs;
pub use list::list;
pub use run::run;
pub use run_main::{run_ask, run_last};
