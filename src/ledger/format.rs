use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY: &str = "PKR";
pub const DEFAULT_NAME_WIDTH: usize = 25;

/// Column layout and currency label shared by every rendered report line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineFormat {
    pub currency: String,
    pub name_width: usize,
}

impl Default for LineFormat {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.into(),
            name_width: DEFAULT_NAME_WIDTH,
        }
    }
}

impl LineFormat {
    pub fn new(currency: impl Into<String>, name_width: usize) -> Self {
        Self {
            currency: currency.into(),
            name_width,
        }
    }

    /// Currency label followed by the amount with two decimals, e.g. `PKR1200.00`.
    pub fn money(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency, amount)
    }

    /// Left-aligned name padded to the configured width.
    pub fn label(&self, name: &str) -> String {
        format!("{:<width$}", name, width = self.name_width)
    }

    /// `<name padded>: <currency><amount>`
    pub fn amount_line(&self, name: &str, amount: f64) -> String {
        format!("{}: {}", self.label(name), self.money(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_line_pads_name_and_fixes_precision() {
        let format = LineFormat::new("PKR", 12);
        assert_eq!(format.amount_line("Rent", 1200.0), "Rent        : PKR1200.00");
        assert_eq!(format.money(-13000.0), "PKR-13000.00");
    }

    #[test]
    fn long_names_are_not_truncated() {
        let format = LineFormat::new("$", 4);
        assert_eq!(format.label("Electricity"), "Electricity");
    }
}
