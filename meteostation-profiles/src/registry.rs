//! Profile Registry for Version Management
//!
//! Centralized profile lookup with versioning, so tooling can address a
//! single revision or follow the latest one.

use std::collections::HashMap;
use std::sync::RwLock;

use meteostation_core::{StationConfig, StationProfile, CALIBRATION, REGIONAL};

use crate::{ProfileError, ProfileResult};

/// Registry metadata of one profile revision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileMetadata {
    /// Profile id (e.g. "regional")
    pub id: String,

    /// Profile version
    pub version: u32,

    /// Qualified name (e.g. "regional_v1")
    pub qualified_name: String,

    /// Whether this revision is deprecated
    pub deprecated: bool,

    /// Replacement revision if deprecated
    pub replacement: Option<String>,
}

/// Qualified name of a profile revision
pub fn qualified_name(id: &str, version: u32) -> String {
    format!("{}_v{}", id, version)
}

/// Thread-safe profile registry with version management
pub struct ProfileRegistry {
    /// Profiles indexed by qualified name
    profiles: RwLock<HashMap<String, (StationProfile, ProfileMetadata)>>,

    /// Version mappings (id -> [versions])
    versions: RwLock<HashMap<String, Vec<u32>>>,

    /// Latest version for each id
    latest: RwLock<HashMap<String, u32>>,
}

impl ProfileRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            profiles: RwLock::new(HashMap::new()),
            versions: RwLock::new(HashMap::new()),
            latest: RwLock::new(HashMap::new()),
        }
    }

    /// Registry holding the built-in calibration and regional profiles
    pub fn with_builtins() -> ProfileResult<Self> {
        let registry = Self::new();
        registry.register(CALIBRATION)?;
        registry.register(REGIONAL)?;
        Ok(registry)
    }

    /// Validate and register a profile revision
    pub fn register(&self, profile: StationProfile) -> ProfileResult<()> {
        profile.validate()?;

        let id = profile.id.to_string();
        let version = profile.version;
        let name = qualified_name(&id, version);

        {
            let mut profiles = self.profiles.write().map_err(|_| ProfileError::LockPoisoned)?;
            if profiles.contains_key(&name) {
                return Err(ProfileError::AlreadyRegistered(name));
            }
            let metadata = ProfileMetadata {
                id: id.clone(),
                version,
                qualified_name: name.clone(),
                deprecated: false,
                replacement: None,
            };
            profiles.insert(name.clone(), (profile, metadata));
        }

        {
            let mut versions = self.versions.write().map_err(|_| ProfileError::LockPoisoned)?;
            let known = versions.entry(id.clone()).or_default();
            known.push(version);
            known.sort_unstable();
        }

        {
            let mut latest = self.latest.write().map_err(|_| ProfileError::LockPoisoned)?;
            let newest = latest.entry(id).or_insert(version);
            if version > *newest {
                *newest = version;
            }
        }

        log::debug!("registered profile {}", name);
        Ok(())
    }

    /// Get a profile by qualified name
    pub fn get(&self, name: &str) -> ProfileResult<StationProfile> {
        let profiles = self.profiles.read().map_err(|_| ProfileError::LockPoisoned)?;

        let (profile, metadata) = profiles
            .get(name)
            .ok_or_else(|| ProfileError::NotFound(name.to_string()))?;
        if metadata.deprecated {
            log::warn!(
                "profile {} is deprecated, replacement: {}",
                name,
                metadata.replacement.as_deref().unwrap_or("none")
            );
        }
        Ok(*profile)
    }

    /// Get a specific revision
    pub fn get_version(&self, id: &str, version: u32) -> ProfileResult<StationProfile> {
        self.get(&qualified_name(id, version))
    }

    /// Get the latest revision of a profile
    pub fn get_latest(&self, id: &str) -> ProfileResult<StationProfile> {
        let version = {
            let latest = self.latest.read().map_err(|_| ProfileError::LockPoisoned)?;
            *latest
                .get(id)
                .ok_or_else(|| ProfileError::NotFound(format!("No versions of {}", id)))?
        };
        self.get_version(id, version)
    }

    /// Validated station configuration from the latest revision
    pub fn station(&self, id: &str) -> ProfileResult<StationConfig> {
        Ok(StationConfig::new(self.get_latest(id)?)?)
    }

    /// All registered versions of a profile, ascending
    pub fn versions(&self, id: &str) -> ProfileResult<Vec<u32>> {
        let versions = self.versions.read().map_err(|_| ProfileError::LockPoisoned)?;
        Ok(versions.get(id).cloned().unwrap_or_default())
    }

    /// Registered profile ids, sorted
    pub fn ids(&self) -> ProfileResult<Vec<String>> {
        let versions = self.versions.read().map_err(|_| ProfileError::LockPoisoned)?;
        let mut ids: Vec<String> = versions.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    /// Get registry metadata of a revision
    pub fn metadata(&self, name: &str) -> ProfileResult<ProfileMetadata> {
        let profiles = self.profiles.read().map_err(|_| ProfileError::LockPoisoned)?;

        profiles
            .get(name)
            .map(|(_, metadata)| metadata.clone())
            .ok_or_else(|| ProfileError::NotFound(name.to_string()))
    }

    /// Mark a revision as deprecated
    pub fn deprecate(&self, name: &str, replacement: Option<String>) -> ProfileResult<()> {
        let mut profiles = self.profiles.write().map_err(|_| ProfileError::LockPoisoned)?;

        let (_profile, metadata) = profiles
            .get_mut(name)
            .ok_or_else(|| ProfileError::NotFound(name.to_string()))?;

        metadata.deprecated = true;
        metadata.replacement = replacement;

        Ok(())
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    /// Shared registry with the built-in profiles loaded
    pub static ref BUILTIN_REGISTRY: ProfileRegistry = {
        let registry = ProfileRegistry::new();
        for profile in [CALIBRATION, REGIONAL] {
            if let Err(err) = registry.register(profile) {
                log::error!("built-in profile {} rejected: {}", profile.id, err);
            }
        }
        registry
    };
}
