use crate::{
    config::{Config, ConfigManager},
    ledger::BudgetLedger,
};

use super::{io::Prompter, registry::CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything one budgeting session owns: the ledger, settings and the input source.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub ledger: BudgetLedger,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub(crate) prompter: Box<dyn Prompter>,
    pub running: bool,
}
