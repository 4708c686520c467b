use polyrun_core::{
    Config, Dispatcher, Error, ExecutionResult, Executor, Result, ShellCommand, Stage,
    config::LanguageConfig, error::LAUNCH_FAILURE_EXIT_CODE,
};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

#[derive(Default)]
struct Recorder {
    calls: RefCell<Vec<(Stage, String, bool)>>,
}

impl Executor for Recorder {
    fn execute(
        &self,
        command: &ShellCommand,
        stage: Stage,
        timed: bool,
    ) -> Result<ExecutionResult> {
        self.calls
            .borrow_mut()
            .push((stage, command.to_shell_command(), timed));
        Ok(ExecutionResult {
            status: 0,
            elapsed: Duration::ZERO,
        })
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn test_delete_after_removes_the_executable() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("hello.c");
    fs::write(&source, "int main(void) { return 0; }\n").unwrap();
    let executable = temp_dir.path().join(".temphello");
    fs::write(&executable, "").unwrap();

    let dispatcher = Dispatcher::with_executor(Config::default(), Recorder::default());
    let status = dispatcher
        .dispatch_args(&[path_arg(&source), "-d".to_string()])
        .unwrap();

    assert_eq!(status, 0);
    assert!(!executable.exists());
    assert!(source.exists());
    let calls = dispatcher.executor().calls.borrow();
    assert_eq!(calls[1].1, path_arg(&executable));
}

#[test]
fn test_haskell_intermediates_follow_the_flag() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("Main.hs");
    let object = temp_dir.path().join("Main.o");
    let interface = temp_dir.path().join("Main.hi");

    let dispatcher = Dispatcher::with_executor(Config::default(), Recorder::default());

    fs::write(&object, "").unwrap();
    fs::write(&interface, "").unwrap();
    dispatcher
        .dispatch_args(&[path_arg(&source), "-hs".to_string()])
        .unwrap();
    assert!(object.exists() && interface.exists());

    dispatcher.dispatch_args(&[path_arg(&source)]).unwrap();
    assert!(!object.exists());
    assert!(!interface.exists());
}

#[test]
fn test_include_scan_adds_sources_to_the_compile() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("main.c");
    fs::write(&source, "#include \"util.h\"\nint main(void) { return util(); }\n").unwrap();
    fs::write(temp_dir.path().join("util.h"), "int util(void);\n").unwrap();
    fs::write(temp_dir.path().join("util.c"), "int util(void) { return 0; }\n").unwrap();

    let dispatcher = Dispatcher::with_executor(Config::default(), Recorder::default());
    dispatcher
        .dispatch_args(&[path_arg(&source), "-i".to_string()])
        .unwrap();

    let calls = dispatcher.executor().calls.borrow();
    assert_eq!(calls[0].0, Stage::Compile);
    assert!(calls[0].1.contains(&path_arg(&temp_dir.path().join("util.c"))));
}

#[test]
fn test_timing_can_be_disabled_by_flag_or_config() {
    let dispatcher = Dispatcher::with_executor(Config::default(), Recorder::default());
    dispatcher.dispatch_args(&["a.py"]).unwrap();
    dispatcher.dispatch_args(&["a.py", "-nt"]).unwrap();
    let timed: Vec<bool> = dispatcher
        .executor()
        .calls
        .borrow()
        .iter()
        .map(|call| call.2)
        .collect();
    assert_eq!(timed, vec![true, false]);

    let config = Config {
        no_timing: true,
        ..Config::default()
    };
    let dispatcher = Dispatcher::with_executor(config, Recorder::default());
    dispatcher.dispatch_args(&["-b", "true"]).unwrap();
    assert!(!dispatcher.executor().calls.borrow()[0].2);
}

#[cfg(unix)]
#[test]
fn test_shell_passthrough_forwards_the_status() {
    let config = Config {
        no_timing: true,
        ..Config::default()
    };
    let dispatcher = Dispatcher::new(config);
    assert_eq!(dispatcher.dispatch_args(&["-b", "exit", "4"]).unwrap(), 4);
}

#[test]
fn test_unlaunchable_compiler_is_reported() {
    let mut config = Config {
        no_timing: true,
        ..Config::default()
    };
    config.languages.insert(
        polyrun_core::LanguageTag::C,
        LanguageConfig {
            compiler: Some("polyrun-missing-compiler".to_string()),
            ..LanguageConfig::default()
        },
    );

    let dispatcher = Dispatcher::new(config);
    let err = dispatcher.dispatch_args(&["nothing.c"]).unwrap_err();
    assert!(matches!(err, Error::LaunchError { .. }));
    assert_eq!(err.exit_code(), LAUNCH_FAILURE_EXIT_CODE);
}
