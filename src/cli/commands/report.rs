use std::path::PathBuf;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::ledger::report::render_percentages;
use crate::utils::persistence;

pub(crate) fn cmd_view(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let format = context.line_format();
    let report = context.ledger.view_report(&format)?;
    output::report(report.render(&format));
    Ok(())
}

pub(crate) fn cmd_analyze(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let format = context.line_format();
    let analysis = context.ledger.analyze_expenses().render(&format);
    output::report(analysis.lines());
    Ok(())
}

/// Writes the expense analysis to `path`, or to the configured export path.
///
/// A failed write is reported to the user; the ledger is left as it was.
pub(crate) fn cmd_save(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let path = match args {
        [] => context.config.export_path.clone(),
        [path] => PathBuf::from(*path),
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: save [path]".into(),
            ))
        }
    };

    let contents = context
        .ledger
        .export_analysis(&context.line_format(), context.config.export_format)?;
    let written = persistence::write_report(&path, &contents)?;
    output::success(format!(
        "Expense analysis saved to '{}' successfully!",
        written.display()
    ));
    Ok(())
}

pub(crate) fn cmd_percent(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let format = context.line_format();
    let rows = context.ledger.calculate_expense_percentage()?;
    output::report(render_percentages(&rows, &format).lines());
    Ok(())
}
