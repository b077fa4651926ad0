//! # Reference Vector Tests
//!
//! Known-good and known-bad identifiers exercised through the public
//! `dom_core` API only. These are the vectors the registration forms are
//! expected to agree with; a change in any row is a behavior change for
//! every form that collects the field.

use dom_core::checksum::{complete_cnpj, complete_cpf};
use dom_core::{
    is_valid_cep, is_valid_cnh, is_valid_cnpj, is_valid_cpf, is_valid_credit_card,
    is_valid_currency, is_valid_document, is_valid_pis, is_valid_titulo_eleitor, is_valid_uf,
    normalize_digits, parse_currency, Cpf, TaxDocument, Uf,
};

/// (input, expected) for `is_valid_cpf`.
const CPF_VECTORS: &[(&str, bool)] = &[
    ("", false),
    ("111.444.777-35", true),
    ("11144477735", true),
    ("111 444 777 35", true),
    ("529.982.247-25", true),
    ("123.456.789-09", true),
    ("111.111.111-11", false),
    ("000.000.000-00", false),
    ("123.456.789-00", false),
    ("111.444.777-3", false),
    ("111.444.777-350", false),
    ("abc.def.ghi-jk", false),
];

/// (input, expected) for `is_valid_pis`.
const PIS_VECTORS: &[(&str, bool)] = &[
    ("120.43527.72-1", true),
    ("170.33259.50-4", true),
    ("120.43527.72-8", false),
    ("1204352772", false),
    ("", false),
];

/// (input, expected) for `is_valid_cnpj`.
const CNPJ_VECTORS: &[(&str, bool)] = &[
    ("11.444.777/0001-61", true),
    ("12.345.678/0001-95", true),
    ("11.444.777/0001-62", false),
    ("11111111111111", false),
    ("123", false),
];

/// (input, expected) for `is_valid_credit_card`.
const CARD_VECTORS: &[(&str, bool)] = &[
    ("4532015112830366", true),
    ("4532 0151 1283 0366", true),
    ("5424000000000015", true),
    ("378282246310005", true),
    ("4111111111111111", true),
    ("4532015112830367", false),
    ("453201511283036", false),
    ("45320151128303666", false),
    ("79927398713", false),
    ("", false),
];

/// (input, centavos) for `parse_currency`; `None` is an invalid amount.
const CURRENCY_VECTORS: &[(&str, Option<u64>)] = &[
    ("1412", Some(141_200)),
    ("1.412,00", Some(141_200)),
    ("R$ 1.412,00", Some(141_200)),
    ("0", Some(0)),
    ("abc1", None),
    ("-1", None),
    ("", None),
];

#[test]
fn cpf_vectors() {
    for (input, expected) in CPF_VECTORS {
        assert_eq!(is_valid_cpf(input), *expected, "is_valid_cpf({input:?})");
    }
}

#[test]
fn pis_vectors() {
    for (input, expected) in PIS_VECTORS {
        assert_eq!(is_valid_pis(input), *expected, "is_valid_pis({input:?})");
    }
}

#[test]
fn cnpj_vectors() {
    for (input, expected) in CNPJ_VECTORS {
        assert_eq!(is_valid_cnpj(input), *expected, "is_valid_cnpj({input:?})");
    }
}

#[test]
fn credit_card_vectors() {
    for (input, expected) in CARD_VECTORS {
        assert_eq!(is_valid_credit_card(input), *expected, "is_valid_credit_card({input:?})");
    }
}

#[test]
fn currency_vectors() {
    for (input, expected) in CURRENCY_VECTORS {
        assert_eq!(parse_currency(input), *expected, "parse_currency({input:?})");
        assert_eq!(is_valid_currency(input), expected.is_some());
    }
}

#[test]
fn civil_registry_lengths() {
    assert!(is_valid_titulo_eleitor("123456789012"));
    assert!(!is_valid_titulo_eleitor("12345678901"));
    assert!(!is_valid_titulo_eleitor("1234567890123"));
    assert!(is_valid_cnh("12345678901"));
    assert!(!is_valid_cnh("1234567890"));
    assert!(!is_valid_cnh("123456789012"));
}

#[test]
fn cep_and_uf() {
    assert!(is_valid_cep("01311-000"));
    assert!(!is_valid_cep("123"));
    assert!(is_valid_uf("sp"));
    assert!(!is_valid_uf("XX"));
}

#[test]
fn every_repeated_digit_cpf_is_invalid() {
    for d in '0'..='9' {
        let cpf: String = std::iter::repeat(d).take(11).collect();
        assert!(!is_valid_cpf(&cpf), "{cpf}");
    }
}

#[test]
fn document_accepts_cpf_and_cnpj_only() {
    assert!(is_valid_document("111.444.777-35"));
    assert!(is_valid_document("11.444.777/0001-61"));
    for input in ["", "01311-000", "120.43527.72", "1144477700016", "114447770001610"] {
        assert!(!is_valid_document(input), "{input:?}");
    }
}

#[test]
fn document_agrees_with_specific_checks() {
    let cpfs = (100_000_000u32..100_000_050).filter_map(|n| complete_cpf(&n.to_string()));
    for cpf in cpfs {
        assert_eq!(is_valid_document(&cpf), is_valid_cpf(&cpf));
    }
    let cnpj = complete_cnpj("987654320001").unwrap();
    assert!(is_valid_document(&cnpj));
}

#[test]
fn normalizer_feeds_every_check() {
    let masked = "111.444.777-35";
    assert_eq!(
        is_valid_cpf(masked),
        is_valid_cpf(&normalize_digits(masked))
    );
}

#[test]
fn newtypes_interoperate() {
    let cpf = Cpf::new("111.444.777-35").unwrap();
    let doc: TaxDocument = cpf.as_str().parse().unwrap();
    assert_eq!(doc, TaxDocument::Cpf(cpf));
    assert_eq!(Uf::parse("mg").unwrap().name(), "Minas Gerais");
}
