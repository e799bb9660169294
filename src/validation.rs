use std::fmt;

use crate::requests::DeleteUrl;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must not be empty.
    Required,
    /// Value must be an absolute URL with a host.
    Url,
}

impl Rule {
    fn check(self, value: &str) -> bool {
        match self {
            Rule::Required => !value.is_empty(),
            // the parser silently strips whitespace and control characters
            Rule::Url if value.chars().any(|c| c.is_whitespace() || c.is_control()) => false,
            Rule::Url => url::Url::parse(value)
                .map(|url| url.host_str().is_some_and(|host| !host.is_empty()))
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub rule: Rule,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rule {
            Rule::Required => write!(f, "field {} is a required field", self.field),
            Rule::Url => write!(f, "field {} is not a valid URL", self.field),
        }
    }
}

/// Violations in field declaration order, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Accumulates violations over a set of fields.
///
/// Every field is checked; within one field the rules run in order and stop
/// at the first one that fails.
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<FieldViolation>,
}

impl Validator {
    pub fn field(mut self, field: &'static str, value: &str, rules: &[Rule]) -> Self {
        if let Some(rule) = rules.iter().copied().find(|rule| !rule.check(value)) {
            self.violations.push(FieldViolation { field, rule });
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.violations))
        }
    }
}

impl Validate for DeleteUrl {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::default()
            .field("URL", &self.url, &[Rule::Required, Rule::Url])
            .field("Alias", &self.alias, &[])
            .finish()
    }
}
