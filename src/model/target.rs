use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// A named location whose subtree size is measured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    name: String,
    path: PathBuf,
}

impl Target {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let name = name.into();
        let path = path.into();
        if name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if !path.is_absolute() {
            return Err(ConfigError::RelativePath(path));
        }
        Ok(Self { name, path })
    }

    /// Parse a `NAME=PATH` pair as given on the command line
    pub fn parse_spec(spec: &str) -> Result<Self, ConfigError> {
        match spec.split_once('=') {
            Some((name, path)) if !path.is_empty() => Self::new(name.trim(), path),
            _ => Err(ConfigError::InvalidSpec(spec.to_string())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// An ordered set of targets with unique names
#[derive(Debug, Clone, Default)]
pub struct TargetSet {
    targets: Vec<Target>,
}

impl TargetSet {
    pub fn new(targets: impl IntoIterator<Item = Target>) -> Result<Self, ConfigError> {
        let mut set = Self::default();
        for target in targets {
            set.push(target)?;
        }
        Ok(set)
    }

    pub fn push(&mut self, target: Target) -> Result<(), ConfigError> {
        if self.targets.iter().any(|t| t.name == target.name) {
            return Err(ConfigError::DuplicateName(target.name));
        }
        self.targets.push(target);
        Ok(())
    }

    /// Keep only targets whose name is in `names`; returns the names that
    /// matched nothing
    pub fn retain_named(&mut self, names: &[String]) -> Vec<String> {
        let wanted: HashSet<&str> = names.iter().map(String::as_str).collect();
        self.targets.retain(|t| wanted.contains(t.name()));

        let mut unmatched: Vec<String> = Vec::new();
        for name in names {
            if !self.targets.iter().any(|t| t.name() == name) && !unmatched.contains(name) {
                unmatched.push(name.clone());
            }
        }
        unmatched
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }
}

impl IntoIterator for TargetSet {
    type Item = Target;
    type IntoIter = std::vec::IntoIter<Target>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.into_iter()
    }
}
