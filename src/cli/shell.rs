use std::fmt;

use shell_words::split;

use crate::cli::core::{CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::menu;
use crate::cli::output;
use crate::errors::CliError;

/// Environment variable that switches the shell to non-interactive script mode.
pub const SCRIPT_ENV_VAR: &str = "HOME_BUDGET_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV_VAR).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    run_session(&mut context)
}

/// Runs the menu loop until `exit`, the end of input, or a confirmed interrupt.
pub(crate) fn run_session(context: &mut ShellContext) -> Result<(), CliError> {
    while context.running {
        if context.mode == CliMode::Interactive {
            menu::print_main_menu(&context.registry);
        }
        let prompt = context.choice_prompt();
        let line = match context.prompter.read_line(&prompt) {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(CommandError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
                continue;
            }
            Err(err) => {
                context.end_session();
                return Err(err.into());
            }
        };

        match handle_line(context, &line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err),
        }
    }

    context.end_session();
    Ok(())
}

fn handle_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CommandError> {
    let tokens = match parse_command_line(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            output::warning(&err);
            return Ok(LoopControl::Continue);
        }
    };

    let Some((command, rest)) = tokens.split_first() else {
        return Ok(LoopControl::Continue);
    };
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();
    context.dispatch(command, &args)
}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    split(input).map_err(|err| ParseError {
        message: err.to_string(),
    })
}

#[derive(Debug)]
pub(crate) struct ParseError {
    message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not parse input: {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::core::process_script;

    #[test]
    fn quoted_arguments_stay_together() {
        let tokens = parse_command_line("wish \"Gaming Chair\" 12k").unwrap();
        assert_eq!(tokens, vec!["wish", "Gaming Chair", "12k"]);
    }

    #[test]
    fn unbalanced_quotes_are_rejected() {
        assert!(parse_command_line("wish \"Chair 12k").is_err());
    }

    #[test]
    fn unparsable_line_does_not_stop_the_session() {
        let context = process_script("wish \"Chair 100\nmembers 4\n").unwrap();
        assert_eq!(context.ledger.family_member_count(), 4);
    }

    #[test]
    fn unknown_commands_are_skipped() {
        let context = process_script("salary 100\n42\nmembers 1\n").unwrap();
        assert_eq!(context.ledger.family_member_count(), 1);
    }
}
