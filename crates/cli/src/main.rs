use clap::Parser;
use polyrun::{
    cli::{Action, Run, help_text, version_text},
    commands::{error_exit_code, run_command},
};
use std::process;

fn main() {
    // Initialize tracing based on RUST_LOG env var; stdout belongs to the child programs
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Run::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            process::exit(1);
        }
    };

    let code = match cli.action() {
        Action::Help => {
            print!("{}", help_text());
            0
        }
        Action::Version => {
            print!("{}", version_text());
            0
        }
        Action::Usage => {
            eprint!("{}", help_text());
            1
        }
        Action::Dispatch(args) => match run_command(args) {
            Ok(status) => status,
            Err(err) => {
                eprintln!("Error: {err:#}");
                error_exit_code(&err)
            }
        },
    };

    process::exit(code);
}
