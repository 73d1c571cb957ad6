use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::output::{info, section};
use crate::utils::build_info;

pub(crate) fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    section(format!("Home Budget {}", meta.version));
    info(format!("  Build hash   : {}", meta.git_hash));
    info(format!("  Built at     : {}", meta.timestamp));
    info(format!("  Target       : {}", meta.target));
    info(format!("  Profile      : {}", meta.profile));
    Ok(())
}

pub(crate) fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.registry.resolve(name) {
            Some(entry) => help::print_command(entry),
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

pub(crate) fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
