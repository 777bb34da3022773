//! Password value object and composable strength rules
//!
//! Only validation lives here; hashing is an infrastructure concern.

use std::fmt;

use crate::error::{DomainError, ValidationError};

/// Minimum length required by the strong policy
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A single password requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    NotEmpty,
    MinLength(usize),
    Uppercase,
    Lowercase,
    Digit,
    SpecialCharacter,
}

impl PasswordRule {
    /// Check whether a raw password satisfies this rule
    pub fn is_satisfied_by(&self, raw: &str) -> bool {
        match self {
            Self::NotEmpty => !raw.is_empty(),
            Self::MinLength(min) => raw.chars().count() >= *min,
            Self::Uppercase => raw.chars().any(char::is_uppercase),
            Self::Lowercase => raw.chars().any(char::is_lowercase),
            Self::Digit => raw.chars().any(|c| c.is_ascii_digit()),
            Self::SpecialCharacter => raw
                .chars()
                .any(|c| !c.is_alphanumeric() && !c.is_whitespace()),
        }
    }

    /// Human-readable requirement shown when the rule is violated
    pub fn message(&self) -> String {
        match self {
            Self::NotEmpty => "Password is required".to_string(),
            Self::MinLength(min) => format!("Password must be at least {min} characters long"),
            Self::Uppercase => "Password must contain at least one uppercase letter".to_string(),
            Self::Lowercase => "Password must contain at least one lowercase letter".to_string(),
            Self::Digit => "Password must contain at least one digit".to_string(),
            Self::SpecialCharacter => {
                "Password must contain at least one special character".to_string()
            }
        }
    }
}

/// An ordered set of rules a password must satisfy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    rules: Vec<PasswordRule>,
}

impl PasswordPolicy {
    /// Create a policy from explicit rules
    pub fn new(rules: Vec<PasswordRule>) -> Self {
        Self { rules }
    }

    /// Complexity rules for new passwords
    pub fn strong() -> Self {
        Self::new(vec![
            PasswordRule::MinLength(MIN_PASSWORD_LENGTH),
            PasswordRule::Uppercase,
            PasswordRule::Lowercase,
            PasswordRule::Digit,
            PasswordRule::SpecialCharacter,
        ])
    }

    /// Rules for credentials presented at login
    ///
    /// Existing accounts may predate the strong policy, so only presence is checked.
    pub fn credentials() -> Self {
        Self::new(vec![PasswordRule::NotEmpty])
    }

    /// Add a rule to the policy
    pub fn with_rule(mut self, rule: PasswordRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[PasswordRule] {
        &self.rules
    }

    /// Messages for every rule the password violates
    pub fn violations(&self, raw: &str) -> Vec<String> {
        self.rules
            .iter()
            .filter(|rule| !rule.is_satisfied_by(raw))
            .map(PasswordRule::message)
            .collect()
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::strong()
    }
}

/// A raw password that passed a [`PasswordPolicy`]
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Validate against the strong policy
    pub fn create(raw: &str) -> Result<Self, DomainError> {
        Self::with_policy(raw, &PasswordPolicy::strong())
    }

    /// Validate as a login credential
    pub fn credential(raw: &str) -> Result<Self, DomainError> {
        Self::with_policy(raw, &PasswordPolicy::credentials())
    }

    /// Validate against a custom policy
    pub fn with_policy(raw: &str, policy: &PasswordPolicy) -> Result<Self, DomainError> {
        let violations = policy.violations(raw);
        if !violations.is_empty() {
            return Err(ValidationError::WeakPassword(violations).into());
        }
        Ok(Self(raw.to_string()))
    }

    /// The raw password, for handing to a hasher or transport
    #[inline]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}
