//! Commands that feed the ledger: household size, income, fixed expenses and wish-list items.

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::errors::BudgetError;
use crate::ledger::{parse_amount, FIXED_CATEGORY_COUNT, FIXED_CATEGORY_NAMES};

pub(crate) fn cmd_members(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = match args {
        [] => context.prompt("Enter the number of family members: ")?,
        [count] => count.to_string(),
        _ => return Err(usage("members [count]")),
    };
    let count: i32 = raw
        .trim()
        .parse()
        .map_err(|_| BudgetError::parse(&raw, "expected a whole number of family members"))?;

    context.ledger.set_family_member_count(count);
    output::success(format!("Family members set to {count}."));
    Ok(())
}

/// Without arguments, asks for one income per family member.
pub(crate) fn cmd_income(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw_amounts: Vec<String> = if args.is_empty() {
        let members = context.ledger.family_member_count();
        if members <= 0 {
            output::warning("No family members recorded; total income is set to zero.");
        }
        let currency = context.config.currency.clone();
        let mut answers = Vec::new();
        for person in 1..=members.max(0) {
            answers.push(context.prompt(&format!(
                "Enter monthly income for person {person}: {currency}"
            ))?);
        }
        answers
    } else {
        args.iter().map(|arg| arg.to_string()).collect()
    };

    let total = context.ledger.add_income(&raw_amounts)?;
    output::success("Income added successfully!");
    output::info(format!(
        "Total income: {}",
        context.line_format().money(total)
    ));
    Ok(())
}

pub(crate) fn cmd_expenses(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let amounts = match args.len() {
        0 => {
            output::info("\nEnter expenses for each category:");
            let currency = context.config.currency.clone();
            let mut amounts = Vec::with_capacity(FIXED_CATEGORY_COUNT);
            for name in FIXED_CATEGORY_NAMES {
                amounts.push(context.prompt_amount(&format!("Enter amount for {name}: {currency}"))?);
            }
            amounts
        }
        FIXED_CATEGORY_COUNT => args
            .iter()
            .map(|arg| parse_amount(arg))
            .collect::<Result<Vec<f64>, BudgetError>>()?,
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "expected {FIXED_CATEGORY_COUNT} amounts ({}), got {other}",
                FIXED_CATEGORY_NAMES.join(", ")
            )))
        }
    };

    let total = context.ledger.add_fixed_expenses(&amounts)?;
    output::success("Expenses added successfully!");
    output::info(format!(
        "Total expenses: {}",
        context.line_format().money(total)
    ));
    Ok(())
}

/// `wish <name> <price>` adds one item; without arguments, keeps asking until declined.
pub(crate) fn cmd_wish(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {}
        [_] => return Err(usage("wish [name price]")),
        [name @ .., price] => {
            let price = parse_amount(price)?;
            context.ledger.add_wish_list_item(&name.join(" "), price)?;
            output::success("Wish list item added to expenses successfully!");
            return Ok(());
        }
    }

    output::info("Enter items for your wish list:");
    let currency = context.config.currency.clone();
    loop {
        let name = context.prompt("Item name: ")?;
        let price = context.prompt_amount(&format!("Item price: {currency}"))?;
        context.ledger.add_wish_list_item(&name, price)?;
        if !context.confirm("Do you want to add more items?")? {
            break;
        }
    }
    output::success("Wish list items added to expenses successfully!");
    Ok(())
}

fn usage(text: &str) -> CommandError {
    CommandError::InvalidArguments(format!("usage: {text}"))
}
