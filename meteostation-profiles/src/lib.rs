//! Station Profiles for Host Tooling
//!
//! ## Overview
//!
//! The firmware bakes exactly one [`StationProfile`] into each build. Host
//! tooling (flashing scripts, dashboards, calibration benches) needs to see
//! all of them side by side, pick one by id and version, and hand it to other
//! systems as JSON. This crate provides both on `std`:
//!
//! - [`ProfileRegistry`]: thread-safe, versioned lookup of profiles
//! - [`export`]: JSON documents carrying a profile plus its derived values
//!
//! ## Versioning
//!
//! Profiles are keyed by `id` and a numeric `version`. The qualified name
//! `"{id}_v{version}"` addresses a single revision; lookups by bare id resolve
//! to the highest registered version. Old revisions can be deprecated with a
//! pointer to their replacement but are never removed.
//!
//! ## Usage Example
//!
//! ```rust
//! use meteostation_profiles::{export, ProfileRegistry};
//!
//! let registry = ProfileRegistry::with_builtins()?;
//! let regional = registry.get_latest("regional")?;
//!
//! let json = export::to_json(&regional)?;
//! assert!(json.contains("\"base_pressure_hpa\""));
//! # Ok::<(), meteostation_profiles::ProfileError>(())
//! ```

use meteostation_core::ConfigError;

pub mod export;
pub mod registry;

pub use meteostation_core::StationProfile;
pub use registry::{ProfileMetadata, ProfileRegistry, BUILTIN_REGISTRY};

/// Registry and export errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum ProfileError {
    /// No profile under this name
    #[error("Profile not found: {0}")]
    NotFound(String),

    /// Qualified name already taken
    #[error("Profile {0} already registered")]
    AlreadyRegistered(String),

    /// Profile failed validation
    #[error("Invalid profile: {0}")]
    Invalid(#[from] ConfigError),

    /// JSON encoding failed
    #[error("Failed to serialize profile: {0}")]
    Serialization(String),

    /// A registry lock was poisoned by a panicking writer
    #[error("Registry lock poisoned")]
    LockPoisoned,
}

/// Result alias for registry and export operations
pub type ProfileResult<T> = Result<T, ProfileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_convert() {
        let err: ProfileError = ConfigError::ZeroInterval { field: "timing.sensor_update_ms" }.into();
        assert!(matches!(err, ProfileError::Invalid(_)));
        assert!(err.to_string().starts_with("Invalid profile:"));
    }
}
