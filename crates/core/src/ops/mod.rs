//! User-invocable operations outside the task provider surface.

mod banner;
mod source_dirs;

pub use banner::subprogram_banner;
pub use source_dirs::{check_source_dirs, DONT_SHOW_AGAIN_KEY};
