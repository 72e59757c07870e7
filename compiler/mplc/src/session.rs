//! Per-program compilation state.

use mpl_env::Environment;
use mpl_eval::{InputHandlerImpl, PrintHandlerImpl};
use mpl_ir::StringInterner;
use mpl_parse::ParseOutput;
use mpl_types::TypedModule;

use crate::Problem;

/// A parsed and type-checked program.
#[derive(Clone, Debug)]
pub struct Checked {
    pub parsed: ParseOutput,
    pub typed: TypedModule,
}

/// State for one program: its interned names and its variables.
///
/// Type checking declares variables in the environment, so a session is
/// good for exactly one source text. The driver makes a fresh one per file.
#[derive(Default)]
pub struct Session {
    interner: StringInterner,
    env: Environment,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Parse only.
    pub fn parse(&mut self, source: &str) -> Result<ParseOutput, Problem> {
        Ok(mpl_parse::parse(source, &mut self.interner)?)
    }

    /// Parse and type check.
    pub fn check(&mut self, source: &str) -> Result<Checked, Problem> {
        let parsed = self.parse(source)?;
        let typed = mpl_types::type_check(
            &parsed.module,
            &parsed.arena,
            &self.interner,
            &mut self.env,
        )?;
        Ok(Checked { parsed, typed })
    }

    /// Parse, type check and interpret.
    pub fn run(
        &mut self,
        source: &str,
        print: &PrintHandlerImpl,
        input: &InputHandlerImpl,
    ) -> Result<(), Problem> {
        let checked = self.check(source)?;
        mpl_eval::interpret(
            &checked.parsed.module,
            &checked.parsed.arena,
            &checked.typed,
            &self.interner,
            &mut self.env,
            print,
            input,
        )?;
        Ok(())
    }
}
