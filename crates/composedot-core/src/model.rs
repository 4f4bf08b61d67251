//! Compose document model.
//!
//! Only the fields that feed graph construction (plus a few informational
//! ones) are modelled; everything else in the document is ignored. Named
//! sections decode into ordered maps, so iteration is always by name.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::de;
use crate::environment::Environment;

/// A parsed compose document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Schema version string; not used by graph construction.
    #[serde(deserialize_with = "de::opt_scalar")]
    pub version: Option<String>,
    #[serde(deserialize_with = "de::entries")]
    pub services: BTreeMap<String, Service>,
    #[serde(deserialize_with = "de::entries")]
    pub networks: BTreeMap<String, Network>,
    #[serde(deserialize_with = "de::entries")]
    pub volumes: BTreeMap<String, Volume>,
}

/// One deployable unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Service {
    #[serde(deserialize_with = "de::opt_scalar")]
    pub container_name: Option<String>,
    #[serde(deserialize_with = "de::opt_scalar")]
    pub image: Option<String>,
    /// Attached networks; entries may carry an alias (`backend:alias`).
    #[serde(deserialize_with = "de::references")]
    pub networks: Vec<String>,
    #[serde(deserialize_with = "de::string_list")]
    pub ports: Vec<String>,
    #[serde(deserialize_with = "de::string_list")]
    pub volumes: Vec<String>,
    #[serde(deserialize_with = "de::string_list")]
    pub volumes_from: Vec<String>,
    #[serde(deserialize_with = "de::references")]
    pub depends_on: Vec<String>,
    /// Legacy links; entries may carry an alias (`db:database`).
    #[serde(deserialize_with = "de::string_list")]
    pub links: Vec<String>,
    pub environment: Environment,
    #[serde(deserialize_with = "de::string_or_list")]
    pub command: Vec<String>,
    #[serde(deserialize_with = "de::string_list")]
    pub cap_add: Vec<String>,
    pub build: Option<Build>,
}

/// Build section of a service; `build: ./dir` is shorthand for the context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BuildDef")]
pub struct Build {
    pub context: Option<String>,
    pub dockerfile: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BuildDef {
    Context(String),
    Full {
        #[serde(default)]
        context: Option<String>,
        #[serde(default)]
        dockerfile: Option<String>,
    },
}

impl From<BuildDef> for Build {
    fn from(def: BuildDef) -> Self {
        match def {
            BuildDef::Context(context) => Build {
                context: Some(context),
                dockerfile: None,
            },
            BuildDef::Full {
                context,
                dockerfile,
            } => Build {
                context,
                dockerfile,
            },
        }
    }
}

/// A named network. Informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Network {
    #[serde(deserialize_with = "de::opt_scalar")]
    pub driver: Option<String>,
    #[serde(deserialize_with = "de::opt_scalar")]
    pub external: Option<String>,
    #[serde(deserialize_with = "de::scalar_map")]
    pub driver_opts: BTreeMap<String, String>,
}

/// A named volume. Informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Volume {
    #[serde(deserialize_with = "de::opt_scalar")]
    pub driver: Option<String>,
    #[serde(deserialize_with = "de::opt_scalar")]
    pub external: Option<String>,
    #[serde(deserialize_with = "de::scalar_map")]
    pub driver_opts: BTreeMap<String, String>,
}
