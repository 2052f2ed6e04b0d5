use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Result, ScopeError};
use crate::scope::Scope;

/// A single fixture declaration from `fixtures.yml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureDecl {
    /// Raw scope label as typed by the user. Default: "function".
    #[serde(default = "default_scope")]
    pub scope: String,

    /// Whether the fixture is requested implicitly by every test in its scope.
    #[serde(default)]
    pub autouse: bool,
}

fn default_scope() -> String {
    Scope::Function.label().to_string()
}

/// Fixture declarations keyed by fixture name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixtureManifest {
    #[serde(default)]
    pub fixtures: BTreeMap<String, FixtureDecl>,
}

/// A fixture whose scope label has been validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedFixture {
    pub name: String,
    pub scope: Scope,
    pub autouse: bool,
}

impl FixtureManifest {
    /// Load a manifest from a YAML file. Returns an empty manifest if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let manifest: Self =
            serde_yaml::from_str(&contents).map_err(|e| ScopeError::ConfigParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        tracing::debug!(
            "loaded {} fixture(s) from {}",
            manifest.fixtures.len(),
            path.display()
        );
        Ok(manifest)
    }

    /// Load the manifest from the project root. Checks `.fixture-scope/fixtures.yml`.
    pub fn load_project(project_root: &Path) -> Result<Self> {
        let path = project_root.join(".fixture-scope").join("fixtures.yml");
        Self::load_from(&path)
    }

    /// Validate every declared scope and return the fixtures broadest first.
    ///
    /// `source` identifies the manifest in error messages; each fixture is
    /// reported as `<source>::<name>`. Stops at the first invalid label.
    pub fn resolve(&self, source: &str) -> Result<Vec<ResolvedFixture>> {
        let mut resolved = Vec::with_capacity(self.fixtures.len());

        for (name, decl) in &self.fixtures {
            let origin = format!("{source}::{name}");
            let scope = Scope::from_label(&decl.scope, "for fixture", Some(origin.as_str()))
                .inspect_err(|e| tracing::debug!("rejected fixture {}: {}", origin, e))?;
            resolved.push(ResolvedFixture {
                name: name.clone(),
                scope,
                autouse: decl.autouse,
            });
        }

        // BTreeMap iteration already orders names; a stable sort keeps that within a scope.
        resolved.sort_by_key(|f| f.scope.ordinal());
        Ok(resolved)
    }
}
