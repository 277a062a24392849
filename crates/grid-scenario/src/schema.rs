//! Scenario schema definitions.

use grid_graph::TraversalOrder;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub config: ConfigDef,
    #[serde(default)]
    pub sources: Vec<SourceDef>,
    #[serde(default)]
    pub consumers: Vec<ConsumerDef>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// World settings carried by a scenario.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigDef {
    /// Key prefix; a random one is chosen when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_namespace: Option<String>,
    #[serde(default)]
    pub traversal: TraversalOrder,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceDef {
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsumerDef {
    pub name: String,
    /// Source names, connected in order. Repeats create repeated edges.
    #[serde(default)]
    pub sources: Vec<String>,
    /// Consumer names this one charges from, in order.
    #[serde(default)]
    pub charges_from: Vec<String>,
}

/// One scripted action or expectation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Activate {
        source: String,
    },
    Deactivate {
        source: String,
    },
    ConnectSource {
        consumer: String,
        source: String,
    },
    DisconnectSource {
        consumer: String,
        source: String,
    },
    ConnectConsumer {
        target: String,
        origin: String,
    },
    Check {
        consumer: String,
        energized: bool,
    },
}
