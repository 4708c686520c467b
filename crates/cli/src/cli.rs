use clap::{CommandFactory, Parser};
use polyrun_core::{
    ExtensionRegistry, Flag,
    config::{CONFIG_ENV_VAR, CONFIG_FILE_NAME},
    error::LAUNCH_FAILURE_EXIT_CODE,
};

/// Compile and run a single source file, whatever its language
///
/// The dispatcher's flags are single-dash words (`-nt`, `-comp-args`), so
/// clap only collects the raw tokens; they are validated by the core.
#[derive(Parser, Debug)]
#[command(name = "run")]
#[command(version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Run {
    /// <filename> [flags]  or  -b <shell-command...>
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub args: Vec<String>,
}

/// What the command line asks for before any dispatching happens
#[derive(Debug, PartialEq, Eq)]
pub enum Action<'a> {
    Help,
    Version,
    /// No arguments at all
    Usage,
    Dispatch(&'a [String]),
}

impl Run {
    pub fn action(&self) -> Action<'_> {
        match self.args.first().map(String::as_str) {
            None => Action::Usage,
            Some("-h" | "--help") => Action::Help,
            Some("-V" | "--version") => Action::Version,
            Some(_) => Action::Dispatch(&self.args),
        }
    }
}

/// Full help: clap's usage plus the flag and extension tables
pub fn help_text() -> String {
    Run::command()
        .override_usage("run <filename> [flags]\n       run -b <shell-command...>")
        .after_help(flags_help())
        .render_help()
        .to_string()
}

pub fn version_text() -> String {
    Run::command().render_version()
}

fn flags_help() -> String {
    let mut help = String::from("FLAGS:\n");
    for flag in Flag::ALL {
        let usage = match flag.value_name() {
            Some(value) => format!("{} {}", flag.token(), value),
            None => flag.token().to_string(),
        };
        help.push_str(&format!("    {usage:<32}{}\n", flag.description()));
    }

    help.push_str("\nFILE TYPES:\n    ");
    help.push_str(&ExtensionRegistry::extensions().join(" "));

    help.push_str("\n\nCONFIGURATION:\n");
    help.push_str(&format!(
        "    {CONFIG_FILE_NAME} in the current or a parent directory, \
         or the file named by {CONFIG_ENV_VAR}\n"
    ));

    help.push_str("\nEXIT STATUS:\n");
    help.push_str(&format!(
        "    0 on success, 1 for invalid arguments or configuration,\n    \
         {LAUNCH_FAILURE_EXIT_CODE} when a program cannot be launched, \
         otherwise the status of the last program run\n"
    ));

    help.push_str("\nENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging");
    help
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Run {
        Run::try_parse_from(std::iter::once("run").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_dispatcher_flags_reach_the_core_untouched() {
        let cli = parse(&["foo.c", "-nt", "-comp-args", "-O2 -Wall", "-o", "-weird"]);
        assert_eq!(
            cli.args,
            vec!["foo.c", "-nt", "-comp-args", "-O2 -Wall", "-o", "-weird"]
        );
        assert!(matches!(cli.action(), Action::Dispatch(_)));
    }

    #[test]
    fn test_shell_passthrough_is_collected() {
        let cli = parse(&["-b", "echo", "hi"]);
        assert_eq!(cli.args, vec!["-b", "echo", "hi"]);
    }

    #[test]
    fn test_leading_help_and_version() {
        assert_eq!(parse(&["-h"]).action(), Action::Help);
        assert_eq!(parse(&["--help"]).action(), Action::Help);
        assert_eq!(parse(&["-V"]).action(), Action::Version);
        assert_eq!(parse(&[]).action(), Action::Usage);
    }

    #[test]
    fn test_help_lists_flags_and_extensions() {
        let help = help_text();
        assert!(help.contains("-comp-args"));
        assert!(help.contains("-wasm"));
        assert!(help.contains(".hs"));
        assert!(help.contains(CONFIG_FILE_NAME));
        let exit_line = format!("{LAUNCH_FAILURE_EXIT_CODE} when a program cannot be launched");
        assert!(help.contains(&exit_line));
    }

    #[test]
    fn verify_cli() {
        Run::command().debug_assert();
    }
}
