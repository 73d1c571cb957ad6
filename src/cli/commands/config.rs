use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::config::CONFIG_KEYS;

pub(crate) fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        show_config(context);
        return Ok(());
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(format!(
                    "usage: config set <{}> <value>",
                    CONFIG_KEYS.join("|")
                )));
            }
            set_config_value(context, args[1], &args[2..].join(" "))
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{other}` (use show or set)"
        ))),
    }
}

fn show_config(context: &ShellContext) {
    output::section("Configuration");
    for (key, value) in context.config.entries() {
        output::info(format!("  {key:<14}: {value}"));
    }
    output::info(format!(
        "  {:<14}: {}",
        "file",
        context.config_manager.path().display()
    ));
}

/// Applies and persists one setting; nothing changes unless both steps succeed.
fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut updated = context.config.clone();
    updated.set(key, value)?;
    context.config_manager.save(&updated)?;
    context.config = updated;
    output::apply_config(&context.config);
    output::success(format!("Saved {} = {}.", key.trim(), value.trim()));
    Ok(())
}
