//! # Password Policy
//!
//! Account passwords must satisfy every [`PasswordRule`]. Unlike the
//! identifier checks, the outcome lists each violated rule so the form can
//! show all problems at once.

use serde::{Deserialize, Serialize};

/// Minimum password length in characters.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Characters that satisfy [`PasswordRule::Special`].
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*(),.?\":{}|<>";

/// One requirement of the password policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordRule {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl PasswordRule {
    /// Every rule, in the order violations are reported.
    pub const ALL: [PasswordRule; 5] = [
        Self::MinLength,
        Self::Uppercase,
        Self::Lowercase,
        Self::Digit,
        Self::Special,
    ];

    /// Whether `password` satisfies this rule.
    pub fn holds(&self, password: &str) -> bool {
        match self {
            Self::MinLength => password.chars().count() >= PASSWORD_MIN_LEN,
            Self::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Self::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Self::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Self::Special => password.chars().any(|c| PASSWORD_SPECIALS.contains(c)),
        }
    }

    /// User-facing pt-BR message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::MinLength => "A senha deve ter pelo menos 8 caracteres",
            Self::Uppercase => "A senha deve conter pelo menos uma letra maiúscula",
            Self::Lowercase => "A senha deve conter pelo menos uma letra minúscula",
            Self::Digit => "A senha deve conter pelo menos um número",
            Self::Special => "A senha deve conter pelo menos um caractere especial",
        }
    }
}

/// Outcome of checking a password against the policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordReport {
    pub violations: Vec<PasswordRule>,
}

impl PasswordReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn messages(&self) -> Vec<&'static str> {
        self.violations.iter().map(PasswordRule::message).collect()
    }
}

/// Check `password` against every rule.
pub fn check_password(password: &str) -> PasswordReport {
    PasswordReport {
        violations: PasswordRule::ALL
            .into_iter()
            .filter(|rule| !rule.holds(password))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_password_passes() {
        let report = check_password("Senha@123");
        assert!(report.is_valid());
        assert!(report.messages().is_empty());
    }

    #[test]
    fn weak_password_lists_every_violation() {
        let report = check_password("senha");
        assert!(!report.is_valid());
        assert_eq!(
            report.violations,
            vec![
                PasswordRule::MinLength,
                PasswordRule::Uppercase,
                PasswordRule::Digit,
                PasswordRule::Special,
            ]
        );
        assert!(report
            .messages()
            .contains(&"A senha deve ter pelo menos 8 caracteres"));
    }

    #[test]
    fn empty_password_violates_all() {
        assert_eq!(check_password("").violations.len(), PasswordRule::ALL.len());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 7 characters, 14 bytes.
        assert!(!PasswordRule::MinLength.holds("ááááááá"));
    }
}
