//! # Currency Amounts
//!
//! Amounts in reais as typed into salary fields: `1412`, `1412,5`,
//! `1.412,00`, `R$ 1.412,00`. The comma is the decimal separator and dots
//! group thousands, so `1.412` is one thousand four hundred and twelve
//! reais. Amounts are carried as a whole number of centavos; negative
//! amounts cannot be written.

use std::sync::OnceLock;

use regex::Regex;

fn amount_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:R\$ ?)?([0-9]{1,3}(?:\.[0-9]{3})+|[0-9]+)(?:,([0-9]{1,2}))?$")
            .expect("static amount pattern compiles")
    })
}

/// Parse a pt-BR amount into centavos.
///
/// Returns `None` for anything that is not a well-formed amount, including
/// amounts too large for `u64` centavos. Surrounding whitespace is not
/// accepted.
pub fn parse_currency(raw: &str) -> Option<u64> {
    let caps = amount_pattern().captures(raw)?;
    let reais: u64 = caps[1].replace('.', "").parse().ok()?;
    let centavos: u64 = match caps.get(2).map(|m| m.as_str()) {
        None => 0,
        Some(frac) if frac.len() == 1 => frac.parse::<u64>().ok()? * 10,
        Some(frac) => frac.parse().ok()?,
    };
    reais.checked_mul(100)?.checked_add(centavos)
}

pub fn is_valid_currency(raw: &str) -> bool {
    parse_currency(raw).is_some()
}

/// Render centavos as `R$ 1.234,56`.
pub fn format_currency(centavos: u64) -> String {
    let reais = (centavos / 100).to_string();
    let mut grouped = String::with_capacity(reais.len() + reais.len() / 3);
    for (i, c) in reais.chars().enumerate() {
        if i > 0 && (reais.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("R$ {grouped},{:02}", centavos % 100)
}
