//! World configuration.

use grid_core::Namespace;
use grid_graph::TraversalOrder;
use grid_scenario::ConfigDef;

use crate::error::AppResult;

/// Settings fixed when a [`World`](crate::World) is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldConfig {
    /// Prefix for entity keys. `None` picks a random UUID-based namespace.
    pub id_namespace: Option<String>,
    /// Worklist discipline for energized-status queries.
    pub traversal: TraversalOrder,
}

impl WorldConfig {
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.id_namespace = Some(namespace.into());
        self
    }

    pub fn with_traversal(mut self, traversal: TraversalOrder) -> Self {
        self.traversal = traversal;
        self
    }

    /// Resolve the configured namespace, generating one when unset.
    pub fn namespace(&self) -> AppResult<Namespace> {
        match &self.id_namespace {
            Some(ns) => Ok(Namespace::new(ns.as_str())?),
            None => Ok(Namespace::random()),
        }
    }
}

impl From<&ConfigDef> for WorldConfig {
    fn from(def: &ConfigDef) -> Self {
        Self {
            id_namespace: def.id_namespace.clone(),
            traversal: def.traversal,
        }
    }
}
