//! Shared test utilities for phase tests.

use mpl_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use mpl_eval::{InputHandlerImpl, PrintHandlerImpl};
use mplc::{Checked, Problem, Session};

/// Output and outcome of running a program.
pub struct Outcome {
    pub output: String,
    pub result: Result<(), Problem>,
}

/// Run `source` with scripted input lines, capturing output.
pub fn run_with_input(source: &str, input: &[&str]) -> Outcome {
    let print = PrintHandlerImpl::buffer();
    let input = InputHandlerImpl::buffer(input.iter().copied());
    let result = Session::new().run(source, &print, &input);
    Outcome {
        output: print.get_output(),
        result,
    }
}

/// Run `source` with no input and return its output, panicking on failure.
pub fn run_ok(source: &str) -> String {
    let outcome = run_with_input(source, &[]);
    if let Err(problem) = outcome.result {
        panic!("program failed: {problem}");
    }
    outcome.output
}

/// Run `source` and return the problem that stopped it.
pub fn run_err(source: &str) -> Problem {
    run_with_input(source, &[])
        .result
        .expect_err("program should fail")
}

/// Parse and type check `source`.
pub fn check(source: &str) -> Result<Checked, Problem> {
    Session::new().check(source)
}

/// Render a problem the way `mpl` prints it, without colors.
pub fn render(problem: &Problem, path: &str, source: &str) -> String {
    let mut buf = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut buf, ColorMode::Never, false)
            .with_source(source)
            .with_file_path(path);
        emitter.emit(&problem.to_diagnostic());
        emitter.flush();
    }
    String::from_utf8(buf).unwrap()
}
