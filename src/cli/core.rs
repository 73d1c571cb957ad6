//! Shell context helpers: construction, dispatch, prompting and error reporting.

use std::io;

use rustyline::error::ReadlineError;
use strsim::levenshtein;
use tracing::{debug, info};

use crate::{
    config::ConfigManager,
    errors::{BudgetError, CliError},
    ledger::{parse_amount, BudgetLedger, LineFormat},
};

use super::commands;
use super::io::{Prompter, ScriptPrompter, TerminalPrompter};
use super::output;
use super::registry::CommandRegistry;
pub use super::shell_context::{CliMode, ShellContext};

const SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let prompter: Box<dyn Prompter> = match mode {
            CliMode::Interactive => Box::new(TerminalPrompter::new(commands::command_names())?),
            CliMode::Script => Box::new(ScriptPrompter::new(io::stdin().lock())),
        };
        Self::with_prompter(mode, config_manager, prompter)
    }

    /// Builds a context around an explicit input source and configuration location.
    pub fn with_prompter(
        mode: CliMode,
        config_manager: ConfigManager,
        prompter: Box<dyn Prompter>,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config = config_manager.load()?;
        output::apply_config(&config);
        info!(?mode, config = %config_manager.path().display(), "session started");

        Ok(ShellContext {
            mode,
            registry,
            ledger: BudgetLedger::new(),
            config_manager,
            config,
            prompter,
            running: true,
        })
    }

    pub(crate) fn line_format(&self) -> LineFormat {
        self.config.line_format()
    }

    pub(crate) fn choice_prompt(&self) -> String {
        format!("Enter your choice (1-{}): ", commands::MENU_LEN)
    }

    pub(crate) fn dispatch(
        &mut self,
        input: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(entry) = self.registry.resolve(input) else {
            self.suggest_command(input);
            return Ok(LoopControl::Continue);
        };
        let (name, handler) = (entry.name, entry.handler);
        debug!(command = name, args = args.len(), "dispatching command");

        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested | CommandError::EndOfInput) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Invalid choice `{}`. Enter a number between 1 and {} or a command name.",
            input,
            commands::MENU_LEN
        ));

        let needle = input.to_ascii_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= SUGGESTION_DISTANCE {
                output::hint(format!("Did you mean `{}`?", name));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested | CommandError::EndOfInput => {}
            CommandError::Interrupted => output::info("Cancelled."),
            CommandError::InvalidArguments(message) => {
                output::error(&message);
                output::hint("Type `help <command>` for usage details.");
            }
            CommandError::Core(BudgetError::DivisionByZero(what)) => {
                output::error(format!("Cannot compute {what}: the total is zero."));
                output::hint("Record expenses first with `expenses` or `wish`.");
            }
            CommandError::Core(core @ BudgetError::Export { .. }) => {
                output::error(&core);
                output::hint("The budget is unchanged; adjust `export_path` and try again.");
            }
            other => output::error(&other),
        }
    }

    /// Asks whether an interrupted session should end.
    pub(crate) fn confirm_exit(&mut self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(self.prompter.confirm("Exit the budget tracker?")?)
    }

    /// Reads a trimmed answer; the end of input aborts the current command.
    pub(crate) fn prompt(&mut self, label: &str) -> Result<String, CommandError> {
        match self.prompter.read_line(label)? {
            Some(answer) => Ok(answer.trim().to_string()),
            None => Err(CommandError::EndOfInput),
        }
    }

    pub(crate) fn prompt_amount(&mut self, label: &str) -> Result<f64, CommandError> {
        let answer = self.prompt(label)?;
        Ok(parse_amount(&answer)?)
    }

    pub(crate) fn confirm(&mut self, label: &str) -> Result<bool, CommandError> {
        self.prompter.confirm(label)
    }

    /// Ends the session and releases everything the ledger owns.
    pub(crate) fn end_session(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.ledger.release();
        output::info("Exiting the program. Goodbye!");
        info!("session ended");
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error("input interrupted")]
    Interrupted,
    #[error("input ended")]
    EndOfInput,
    #[error("exit requested")]
    ExitRequested,
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Core(inner) => CliError::Core(inner),
            other => CliError::Command(other.to_string()),
        }
    }
}

/// A script-mode context reading `input`, with its configuration under a fresh temporary home.
#[cfg(test)]
pub(crate) fn script_context(input: &str) -> (ShellContext, tempfile::TempDir) {
    use std::io::Cursor;

    let home = tempfile::tempdir().expect("temp home");
    let manager = ConfigManager::with_base_dir(home.path().to_path_buf()).expect("config dir");
    let prompter = Box::new(ScriptPrompter::new(Cursor::new(input.to_string())));
    let context =
        ShellContext::with_prompter(CliMode::Script, manager, prompter).expect("shell context");
    (context, home)
}

#[cfg(test)]
pub(crate) fn process_script(input: &str) -> Result<ShellContext, CliError> {
    let (mut context, _home) = script_context(input);
    super::shell::run_session(&mut context)?;
    Ok(context)
}
