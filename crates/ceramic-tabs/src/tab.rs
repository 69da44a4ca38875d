//! Tab identifier
//!
//! A tab is identified by the path of the file it shows. The tab strip
//! labels each tab with the last `/`-separated segment of that path.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(String);

impl TabId {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Label shown in the tab strip
    pub fn display_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl From<String> for TabId {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl From<&str> for TabId {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl AsRef<str> for TabId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TabId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TabId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
