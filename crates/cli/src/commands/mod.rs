pub mod run;

pub use run::{error_exit_code, run_command};
