use crate::cli::commands::MENU_LEN;
use crate::cli::output::info;
use crate::cli::registry::CommandRegistry;
use crate::ledger::report::BANNER;

const MAIN_TITLE: &str = "===== Home Budget Management System =====";

pub(crate) const GOAL_MENU: [&str; 4] = [
    "1. Add Financial Goal",
    "2. View Financial Goals",
    "3. Contribute to Financial Goal",
    "4. Exit Financial Goals Management",
];

pub fn print_main_menu(registry: &CommandRegistry) {
    info("");
    info(MAIN_TITLE);
    for (index, entry) in registry.list().into_iter().take(MENU_LEN).enumerate() {
        info(format!("{}. {}", index + 1, entry.description));
    }
    info(BANNER);
}

pub fn print_goal_menu() {
    info("\nFinancial Goals Management:");
    for line in GOAL_MENU {
        info(line);
    }
}
