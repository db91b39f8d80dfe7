use rust_decimal::Decimal;

use crate::SpesaConfig;

/// Formats an amount with two decimals, the configured separator, and the
/// configured currency symbol appended: `3.50$`.
pub fn format_amount(amount: Decimal, config: &SpesaConfig) -> String {
    let mut s = format!("{:.2}", amount);
    if config.decimal_sep != '.' {
        s = s.replace('.', &config.decimal_sep.to_string());
    }
    s.push(config.currency);
    s
}
