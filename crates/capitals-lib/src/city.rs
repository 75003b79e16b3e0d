use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// A named location in the routing graph.
///
/// Identity, ordering and hashing all derive from the name alone: two cities
/// built from the same string are the same vertex. The name is shared, so
/// cloning a city (for example when extending a search path) does not copy
/// the string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct City {
    name: Arc<str>,
}

impl City {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: Arc::from(name.as_ref()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.name)
    }
}

impl From<&str> for City {
    fn from(name: &str) -> Self {
        City::new(name)
    }
}

impl From<String> for City {
    fn from(name: String) -> Self {
        City {
            name: Arc::from(name),
        }
    }
}

// Allows `HashMap<City, _>` lookups keyed by `&str`.
impl Borrow<str> for City {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl Serialize for City {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

/// Join city names with the arrow separator used in reports.
pub fn format_path(path: &[City]) -> String {
    path.iter()
        .map(City::name)
        .collect::<Vec<_>>()
        .join(" -> ")
}
