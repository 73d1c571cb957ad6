use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::menu::{self, GOAL_MENU};
use crate::cli::output;
use crate::ledger::parse_amount;
use crate::ledger::report::{render_goal_lines, GOAL_ACHIEVED_MESSAGE, NO_GOALS_MESSAGE};

pub(crate) fn cmd_goals(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return goals_menu(context);
    };

    match action.to_ascii_lowercase().as_str() {
        "add" => match rest {
            [] => add_goal_prompted(context),
            [name @ .., target] if !name.is_empty() => {
                add_goal(context, &name.join(" "), parse_amount(target)?)
            }
            _ => Err(usage()),
        },
        "view" => view_goals(context),
        "contribute" => match rest {
            [] => contribute_prompted(context),
            [name @ .., amount] if !name.is_empty() => {
                contribute(context, &name.join(" "), parse_amount(amount)?)
            }
            _ => Err(usage()),
        },
        _ => Err(usage()),
    }
}

/// Submenu loop; errors are reported in place so the user stays in the submenu.
fn goals_menu(context: &mut ShellContext) -> CommandResult {
    let prompt = format!("Enter your choice (1-{}): ", GOAL_MENU.len());
    loop {
        if context.mode == CliMode::Interactive {
            menu::print_goal_menu();
        }
        let choice = context.prompt(&prompt)?;
        let outcome = match choice.to_ascii_lowercase().as_str() {
            "1" | "add" => add_goal_prompted(context),
            "2" | "view" => view_goals(context),
            "3" | "contribute" => contribute_prompted(context),
            "4" | "back" | "exit" => {
                output::info("Exiting Financial Goals Management.");
                return Ok(());
            }
            _ => {
                output::warning(format!(
                    "Invalid choice. Please enter a number between 1 and {}.",
                    GOAL_MENU.len()
                ));
                Ok(())
            }
        };

        match outcome {
            Ok(()) => {}
            Err(CommandError::EndOfInput) => return Err(CommandError::EndOfInput),
            Err(CommandError::Interrupted) => return Ok(()),
            Err(err) => context.report_error(err),
        }
    }
}

fn add_goal_prompted(context: &mut ShellContext) -> CommandResult {
    let currency = context.config.currency.clone();
    let name = context.prompt("Enter the name of the financial goal: ")?;
    let target = context.prompt_amount(&format!(
        "Enter the target amount for the financial goal: {currency}"
    ))?;
    add_goal(context, &name, target)
}

fn add_goal(context: &mut ShellContext, name: &str, target: f64) -> CommandResult {
    context.ledger.add_financial_goal(name, target)?;
    output::success("Financial goal added successfully!");
    Ok(())
}

fn view_goals(context: &mut ShellContext) -> CommandResult {
    if context.ledger.goals().is_empty() {
        output::info(NO_GOALS_MESSAGE);
        return Ok(());
    }
    let lines = context.ledger.goal_lines(&context.line_format())?;
    output::report(std::iter::once(String::from("Financial Goals:")).chain(render_goal_lines(&lines)));
    Ok(())
}

fn contribute_prompted(context: &mut ShellContext) -> CommandResult {
    if context.ledger.goals().is_empty() {
        output::info(NO_GOALS_MESSAGE);
        return Ok(());
    }
    let currency = context.config.currency.clone();
    let name = context.prompt("Enter the name of the goal to contribute to: ")?;
    let amount = context.prompt_amount(&format!("Enter the contribution amount: {currency}"))?;
    contribute(context, &name, amount)
}

fn contribute(context: &mut ShellContext, name: &str, amount: f64) -> CommandResult {
    let achieved = context.ledger.contribute_to_goal(name, amount)?;
    output::success("Contribution recorded.");
    if achieved {
        output::info(GOAL_ACHIEVED_MESSAGE);
    } else if let Some(goal) = context.ledger.goal(name) {
        output::info(format!(
            "{} still needed for {}.",
            context.line_format().money(goal.remaining()),
            goal.name
        ));
    }
    Ok(())
}

fn usage() -> CommandError {
    CommandError::InvalidArguments(
        "usage: goals [add <name> <target>|view|contribute <name> <amount>]".into(),
    )
}
