//! Allowed option sets for the input form.

use serde::Serialize;

use crate::error::Field;
use crate::units::{Prefix, UnitSystem, UnitType};

/// A selectable key with its form label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionChoice {
    pub key: String,
    pub label: String,
}

impl OptionChoice {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Ordered allowed values for each enumerated field.
///
/// Doubles as the validation whitelist and as the field choices rendered
/// when input is incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllowedOptions {
    pub prefix: Vec<OptionChoice>,
    #[serde(rename = "type")]
    pub unit_type: Vec<OptionChoice>,
    pub base: Vec<OptionChoice>,
}

impl Default for AllowedOptions {
    fn default() -> Self {
        Self {
            prefix: Prefix::ALL
                .iter()
                .map(|p| OptionChoice::new(p.key(), p.form_label()))
                .collect(),
            unit_type: UnitType::ALL
                .iter()
                .map(|t| OptionChoice::new(t.key(), t.form_label()))
                .collect(),
            base: UnitSystem::ALL
                .iter()
                .map(|b| OptionChoice::new(b.key(), b.form_label()))
                .collect(),
        }
    }
}

impl AllowedOptions {
    pub fn prefix_keys(&self) -> Vec<String> {
        keys(&self.prefix)
    }

    pub fn type_keys(&self) -> Vec<String> {
        keys(&self.unit_type)
    }

    pub fn base_keys(&self) -> Vec<String> {
        keys(&self.base)
    }

    pub fn keys_for(&self, field: Field) -> Vec<String> {
        match field {
            Field::Prefix => self.prefix_keys(),
            Field::Type => self.type_keys(),
            Field::Base => self.base_keys(),
        }
    }
}

fn keys(choices: &[OptionChoice]) -> Vec<String> {
    choices.iter().map(|c| c.key.clone()).collect()
}
