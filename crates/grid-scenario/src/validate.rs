//! Scenario validation logic.

use std::collections::HashSet;

use grid_core::Namespace;

use crate::LATEST_VERSION;
use crate::schema::{Scenario, Step};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Duplicate name: {name} in {context}")]
    DuplicateName { name: String, context: String },

    #[error("Missing reference: {name} in {context}")]
    MissingReference { name: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

/// Check version, config, name uniqueness, and every name reference.
///
/// Self-charging and repeated charging entries are accepted: the grid
/// ignores them at connect time.
pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version == 0 || scenario.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    if let Some(ns) = &scenario.config.id_namespace {
        Namespace::new(ns.as_str()).map_err(|e| ValidationError::InvalidValue {
            field: "config.id_namespace".to_string(),
            value: ns.clone(),
            reason: e.to_string(),
        })?;
    }

    let mut names = HashSet::new();
    let mut source_names = HashSet::new();
    for source in &scenario.sources {
        if !names.insert(source.name.as_str()) {
            return Err(duplicate(&source.name, "sources"));
        }
        source_names.insert(source.name.as_str());
    }

    let mut consumer_names = HashSet::new();
    for consumer in &scenario.consumers {
        if !names.insert(consumer.name.as_str()) {
            return Err(duplicate(&consumer.name, "consumers"));
        }
        consumer_names.insert(consumer.name.as_str());
    }

    for consumer in &scenario.consumers {
        for source in &consumer.sources {
            require(&source_names, source, || {
                format!("consumer '{}' sources", consumer.name)
            })?;
        }
        for origin in &consumer.charges_from {
            require(&consumer_names, origin, || {
                format!("consumer '{}' charges_from", consumer.name)
            })?;
        }
    }

    for (i, step) in scenario.steps.iter().enumerate() {
        let context = || format!("step {}", i + 1);
        match step {
            Step::Activate { source } | Step::Deactivate { source } => {
                require(&source_names, source, context)?;
            }
            Step::ConnectSource { consumer, source }
            | Step::DisconnectSource { consumer, source } => {
                require(&consumer_names, consumer, context)?;
                require(&source_names, source, context)?;
            }
            Step::ConnectConsumer { target, origin } => {
                require(&consumer_names, target, context)?;
                require(&consumer_names, origin, context)?;
            }
            Step::Check { consumer, .. } => {
                require(&consumer_names, consumer, context)?;
            }
        }
    }

    Ok(())
}

fn duplicate(name: &str, context: &str) -> ValidationError {
    ValidationError::DuplicateName {
        name: name.to_string(),
        context: context.to_string(),
    }
}

fn require(
    known: &HashSet<&str>,
    name: &str,
    context: impl Fn() -> String,
) -> Result<(), ValidationError> {
    if known.contains(name) {
        Ok(())
    } else {
        Err(ValidationError::MissingReference {
            name: name.to_string(),
            context: context(),
        })
    }
}
