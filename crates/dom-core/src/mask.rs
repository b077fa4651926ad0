//! # Display Masks
//!
//! Conventional presentation masks for Brazilian identifiers. Masks are
//! applied to the normalized digits of the input and are progressive: a
//! partially typed value receives the separators that precede the digits
//! typed so far, never a trailing separator. Digits beyond the mask's
//! capacity are dropped.
//!
//! Masking is presentation only. It never validates; `mask_cpf("123")` is
//! `"123"`. [`mask_currency`] is the exception to the layout rule: it reads
//! the digits as centavos and always renders a full amount.

use crate::digits::normalize_digits;
use crate::money::format_currency;

const CPF_MASK: &str = "###.###.###-##";
const CNPJ_MASK: &str = "##.###.###/####-##";
const PIS_MASK: &str = "###.#####.##-#";
const CEP_MASK: &str = "#####-###";
const LANDLINE_MASK: &str = "(##) ####-####";
const MOBILE_MASK: &str = "(##) #####-####";
const DATE_MASK: &str = "##/##/####";
const TIME_MASK: &str = "##:##";
const CARD_MASK: &str = "#### #### #### #### ###";
const TITULO_ELEITOR_MASK: &str = "#### #### ####";
const CNH_MASK: &str = "###.###.###-##";

/// Most centavo digits read by [`mask_currency`]; more would overflow `u64`.
const CURRENCY_MAX_DIGITS: usize = 18;

/// Lay `digits` over `pattern`, where `#` consumes one digit and every other
/// character is emitted only when at least one digit remains.
fn apply(digits: &str, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = digits.chars().peekable();
    for slot in pattern.chars() {
        if rest.peek().is_none() {
            break;
        }
        if slot == '#' {
            if let Some(d) = rest.next() {
                out.push(d);
            }
        } else {
            out.push(slot);
        }
    }
    out
}

/// `000.000.000-00`
pub fn mask_cpf(raw: &str) -> String {
    apply(&normalize_digits(raw), CPF_MASK)
}

/// `00.000.000/0000-00`
pub fn mask_cnpj(raw: &str) -> String {
    apply(&normalize_digits(raw), CNPJ_MASK)
}

/// CPF mask up to 11 digits, CNPJ mask beyond.
pub fn mask_cpf_cnpj(raw: &str) -> String {
    let digits = normalize_digits(raw);
    if digits.len() <= 11 {
        apply(&digits, CPF_MASK)
    } else {
        apply(&digits, CNPJ_MASK)
    }
}

/// `000.00000.00-0`
pub fn mask_pis(raw: &str) -> String {
    apply(&normalize_digits(raw), PIS_MASK)
}

/// `00000-000`
pub fn mask_cep(raw: &str) -> String {
    apply(&normalize_digits(raw), CEP_MASK)
}

/// `(00) 0000-0000` up to 10 digits, `(00) 00000-0000` for 11.
pub fn mask_phone(raw: &str) -> String {
    let digits = normalize_digits(raw);
    if digits.len() <= 10 {
        apply(&digits, LANDLINE_MASK)
    } else {
        apply(&digits, MOBILE_MASK)
    }
}

/// `DD/MM/AAAA`
pub fn mask_date(raw: &str) -> String {
    apply(&normalize_digits(raw), DATE_MASK)
}

/// `HH:MM`
pub fn mask_time(raw: &str) -> String {
    apply(&normalize_digits(raw), TIME_MASK)
}

/// Groups of four, up to 19 digits.
pub fn mask_credit_card(raw: &str) -> String {
    apply(&normalize_digits(raw), CARD_MASK)
}

/// `0000 0000 0000`
pub fn mask_titulo_eleitor(raw: &str) -> String {
    apply(&normalize_digits(raw), TITULO_ELEITOR_MASK)
}

/// `000.000.000-00`
pub fn mask_cnh(raw: &str) -> String {
    apply(&normalize_digits(raw), CNH_MASK)
}

/// The digits of `raw` as centavos, e.g. `1234567` is `R$ 12.345,67`.
/// No digits at all is `R$ 0,00`.
pub fn mask_currency(raw: &str) -> String {
    let digits = normalize_digits(raw);
    let kept = &digits[..digits.len().min(CURRENCY_MAX_DIGITS)];
    format_currency(kept.parse().unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_full_and_remasked() {
        assert_eq!(mask_cpf("12345678909"), "123.456.789-09");
        assert_eq!(mask_cpf("123.456.789-09"), "123.456.789-09");
    }

    #[test]
    fn cpf_partial() {
        assert_eq!(mask_cpf(""), "");
        assert_eq!(mask_cpf("123"), "123");
        assert_eq!(mask_cpf("1234"), "123.4");
        assert_eq!(mask_cpf("1234567890"), "123.456.789-0");
    }

    #[test]
    fn cpf_excess_digits_dropped() {
        assert_eq!(mask_cpf("123456789091"), "123.456.789-09");
    }

    #[test]
    fn cnpj_full_and_partial() {
        assert_eq!(mask_cnpj("12345678000195"), "12.345.678/0001-95");
        assert_eq!(mask_cnpj("12.345.678/0001-95"), "12.345.678/0001-95");
        assert_eq!(mask_cnpj("123"), "12.3");
        assert_eq!(mask_cnpj("1234567800019"), "12.345.678/0001-9");
    }

    #[test]
    fn cpf_cnpj_switches_on_length() {
        assert_eq!(mask_cpf_cnpj("11144477735"), "111.444.777-35");
        assert_eq!(mask_cpf_cnpj("11444777000161"), "11.444.777/0001-61");
    }

    #[test]
    fn pis() {
        assert_eq!(mask_pis("12345678901"), "123.45678.90-1");
        assert_eq!(mask_pis("123"), "123");
        assert_eq!(mask_pis("1234567890"), "123.45678.90");
    }

    #[test]
    fn cep() {
        assert_eq!(mask_cep("12345678"), "12345-678");
        assert_eq!(mask_cep("12345-678"), "12345-678");
        assert_eq!(mask_cep("1234567"), "12345-67");
        assert_eq!(mask_cep("123"), "123");
    }

    #[test]
    fn phone() {
        assert_eq!(mask_phone("11999999999"), "(11) 99999-9999");
        assert_eq!(mask_phone("1133333333"), "(11) 3333-3333");
        assert_eq!(mask_phone("(11) 3333-3333"), "(11) 3333-3333");
        assert_eq!(mask_phone("11"), "(11");
        assert_eq!(mask_phone(""), "");
    }

    #[test]
    fn date_and_time() {
        assert_eq!(mask_date("01012023"), "01/01/2023");
        assert_eq!(mask_date("0101"), "01/01");
        assert_eq!(mask_date("010"), "01/0");
        assert_eq!(mask_date("01"), "01");
        assert_eq!(mask_time("2359"), "23:59");
        assert_eq!(mask_time("235"), "23:5");
        assert_eq!(mask_time("23:59:10"), "23:59");
    }

    #[test]
    fn credit_card() {
        assert_eq!(mask_credit_card("4532015112830366"), "4532 0151 1283 0366");
        assert_eq!(mask_credit_card("453201511283036"), "4532 0151 1283 036");
        assert_eq!(mask_credit_card("4532-0151-1283-0366"), "4532 0151 1283 0366");
        assert_eq!(mask_credit_card("4532"), "4532");
    }

    #[test]
    fn titulo_eleitor_and_cnh() {
        assert_eq!(mask_titulo_eleitor("123456789012"), "1234 5678 9012");
        assert_eq!(mask_titulo_eleitor("12345"), "1234 5");
        assert_eq!(mask_cnh("12345678901"), "123.456.789-01");
        assert_eq!(mask_cnh("1234"), "123.4");
    }

    #[test]
    fn currency_reads_centavos() {
        assert_eq!(mask_currency("1234567"), "R$ 12.345,67");
        assert_eq!(mask_currency("R$ 12.345,67"), "R$ 12.345,67");
        assert_eq!(mask_currency("5"), "R$ 0,05");
        assert_eq!(mask_currency(""), "R$ 0,00");
        assert_eq!(mask_currency("abc"), "R$ 0,00");
    }

    #[test]
    fn currency_long_input_is_truncated() {
        let masked = mask_currency(&"9".repeat(30));
        assert_eq!(masked, format_currency(999_999_999_999_999_999));
    }
}
