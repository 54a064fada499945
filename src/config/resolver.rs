//! Identity resolver configuration

use crate::resolver::MatchStrategy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// How raw names are matched against aliases
    pub strategy: MatchStrategy,
}
