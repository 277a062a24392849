use core::fmt;
use core::num::NonZeroU32;

use uuid::Uuid;

use crate::error::{CoreError, CoreResult};

/// Compact, stable identifier used across the grid.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<Id>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based index by storing index+1.
    pub fn from_index(index: u32) -> Self {
        Self(NonZeroU32::MIN.saturating_add(index))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

macro_rules! typed_handle {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Id);

        impl $name {
            pub fn from_index(index: u32) -> Self {
                Self(Id::from_index(index))
            }

            pub fn index(self) -> u32 {
                self.0.index()
            }

            pub fn id(self) -> Id {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.index())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", $kind.as_str(), self.index())
            }
        }
    };
}

typed_handle!(
    /// Handle of a power source registered in a grid.
    SourceId,
    EntityKind::Source
);

typed_handle!(
    /// Handle of a consumer registered in a grid.
    ConsumerId,
    EntityKind::Consumer
);

/// The two kinds of entity a grid stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Source,
    Consumer,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Source => "source",
            EntityKind::Consumer => "consumer",
        }
    }
}

/// Prefix shared by every entity key of one grid.
///
/// Keys have the form `<namespace>/<kind>/<index>`. Indexes come from a
/// monotonic per-kind counter, so keys are unique within a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
    /// Validate and wrap a caller-chosen namespace.
    pub fn new(namespace: impl Into<String>) -> CoreResult<Self> {
        let namespace = namespace.into();
        let reason = if namespace.is_empty() {
            Some("must not be empty")
        } else if namespace.contains('/') {
            Some("must not contain '/'")
        } else if namespace.chars().any(char::is_whitespace) {
            Some("must not contain whitespace")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(CoreError::InvalidNamespace { namespace, reason }),
            None => Ok(Self(namespace)),
        }
    }

    /// A fresh namespace backed by a random UUID.
    pub fn random() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Format the key of the `index`-th entity of `kind`.
    pub fn key(&self, kind: EntityKind, index: u32) -> String {
        format!("{}/{}/{}", self.0, kind.as_str(), index)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
