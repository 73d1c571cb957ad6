pub mod config;
pub mod goals;
pub mod household;
pub mod report;
pub mod system;

use crate::cli::registry::{CommandEntry, CommandRegistry};

/// Commands reachable by menu number; the rest are name-only.
pub const MENU_LEN: usize = 10;

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "members",
            "Add Family Members",
            "members [count]",
            household::cmd_members,
        ),
        CommandEntry::new(
            "income",
            "Add Monthly Income",
            "income [amount...]",
            household::cmd_income,
        ),
        CommandEntry::new(
            "expenses",
            "Add Expenses",
            "expenses [rent maintenance electricity transport food utilities other entertainment shopping gifts]",
            household::cmd_expenses,
        ),
        CommandEntry::new("view", "View Budget", "view", report::cmd_view),
        CommandEntry::new("analyze", "Analyze Expenses", "analyze", report::cmd_analyze),
        CommandEntry::new(
            "wish",
            "Add Wish List",
            "wish [name price]",
            household::cmd_wish,
        ),
        CommandEntry::new(
            "save",
            "Save Expense Analysis to File",
            "save [path]",
            report::cmd_save,
        ),
        CommandEntry::new(
            "percent",
            "Calculate Expense Percentage",
            "percent",
            report::cmd_percent,
        ),
        CommandEntry::new(
            "goals",
            "Manage Financial Goals",
            "goals [add <name> <target>|view|contribute <name> <amount>]",
            goals::cmd_goals,
        ),
        CommandEntry::new("exit", "Exit", "exit", system::cmd_exit),
        CommandEntry::new(
            "config",
            "View and change saved preferences",
            "config [show|set <key> <value>]",
            config::cmd_config,
        ),
        CommandEntry::new("help", "Show available commands", "help [command]", system::cmd_help),
        CommandEntry::new("version", "Show build metadata", "version", system::cmd_version),
    ]
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in all_definitions() {
        registry.register(entry);
    }
}

pub(crate) fn command_names() -> Vec<&'static str> {
    all_definitions().iter().map(|entry| entry.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers_follow_the_classic_layout() {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);
        assert_eq!(registry.resolve("1").map(|entry| entry.name), Some("members"));
        assert_eq!(registry.resolve("6").map(|entry| entry.name), Some("wish"));
        assert_eq!(
            registry.resolve(&MENU_LEN.to_string()).map(|entry| entry.name),
            Some("exit")
        );
        assert_eq!(registry.len(), command_names().len());
    }
}
