//! RegistrarContext - Plugin's interface to the host's provider registry

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};

use crate::error::PluginError;
use crate::types::ProviderRecord;

/// Plugin's interface to the host during registration.
///
/// Passed to [`ProviderPlugin::register`](crate::ProviderPlugin::register)
/// exactly once at load time. Provides access to:
/// - Provider registration (records are collected here, then drained
///   into the host's registry)
/// - Plugin configuration (persistent key-value store)
/// - Plugin directory for storing data
/// - Logging utilities
pub struct RegistrarContext {
    plugin_name: String,
    plugin_dir: PathBuf,
    config: PluginConfig,
    /// Providers pending registration
    pending_providers: Vec<ProviderRecord>,
}

impl RegistrarContext {
    /// Create a new registrar context
    pub fn new(plugin_name: String, plugin_dir: PathBuf) -> Self {
        Self {
            plugin_name,
            plugin_dir,
            config: PluginConfig::new(),
            pending_providers: Vec::new(),
        }
    }

    /// Create a context with a pre-loaded config
    pub fn with_config(plugin_name: String, plugin_dir: PathBuf, config: PluginConfig) -> Self {
        Self {
            plugin_name,
            plugin_dir,
            config,
            pending_providers: Vec::new(),
        }
    }

    /// Get the plugin's directory (for storing data files)
    pub fn plugin_dir(&self) -> &Path {
        &self.plugin_dir
    }

    /// Get the plugin's name
    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }

    // ─── Provider Registration ───────────────────────────────────────

    /// Register a model provider with the host.
    ///
    /// The record is queued here and drained into the host's provider
    /// registry after `register` returns. Returns an error if a
    /// provider with the same id was already registered by this plugin.
    pub fn register_provider(&mut self, record: ProviderRecord) -> Result<(), PluginError> {
        if self.pending_providers.iter().any(|p| p.id == record.id) {
            return Err(PluginError::DuplicateProvider(record.id));
        }
        tracing::debug!(
            plugin = %self.plugin_name,
            provider = %record.id,
            models = record.models.models.len(),
            "queued provider registration"
        );
        self.pending_providers.push(record);
        Ok(())
    }

    /// Get providers pending registration (used by the host)
    pub fn pending_providers(&self) -> &[ProviderRecord] {
        &self.pending_providers
    }

    /// Take pending providers (used by the host after validation)
    pub fn take_pending_providers(&mut self) -> Vec<ProviderRecord> {
        std::mem::take(&mut self.pending_providers)
    }

    // ─── Configuration ───────────────────────────────────────────────

    /// Read a configuration value
    pub fn config_get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.config.get(key)
    }

    /// Write a configuration value
    ///
    /// The configuration is persisted when the host saves the context.
    pub fn config_set<T: Serialize>(&mut self, key: &str, value: T) -> Result<(), PluginError> {
        self.config.set(key, value)
    }

    /// Check if the configuration has unsaved changes
    pub fn config_is_dirty(&self) -> bool {
        self.config.is_dirty()
    }

    /// Get a mutable reference to the config (for internal use by the host)
    pub fn config_mut(&mut self) -> &mut PluginConfig {
        &mut self.config
    }

    // ─── Logging ─────────────────────────────────────────────────────

    /// Log an info message (automatically prefixed with plugin name)
    pub fn log_info(&self, message: &str) {
        tracing::info!(plugin = %self.plugin_name, "{}", message);
    }

    /// Log a warning message
    pub fn log_warn(&self, message: &str) {
        tracing::warn!(plugin = %self.plugin_name, "{}", message);
    }

    /// Log an error message
    pub fn log_error(&self, message: &str) {
        tracing::error!(plugin = %self.plugin_name, "{}", message);
    }

    /// Log a debug message
    pub fn log_debug(&self, message: &str) {
        tracing::debug!(plugin = %self.plugin_name, "{}", message);
    }
}

/// Plugin configuration - persistent key-value store backed by TOML.
///
/// Keys are kept in a sorted map so saved files are stable across runs.
pub struct PluginConfig {
    values: BTreeMap<String, toml::Value>,
    dirty: bool,
}

impl PluginConfig {
    /// Create a new empty config
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
            dirty: false,
        }
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, PluginError> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let content = std::fs::read_to_string(path)?;
        let values: BTreeMap<String, toml::Value> =
            toml::from_str(&content).map_err(|e| PluginError::Config(e.to_string()))?;
        Ok(Self {
            values,
            dirty: false,
        })
    }

    /// Save configuration to a TOML file
    pub fn save(&mut self, path: &Path) -> Result<(), PluginError> {
        let content = toml::to_string_pretty(&self.values)
            .map_err(|e| PluginError::Serialization(e.to_string()))?;

        if let Some(parent) = path.parent().filter(|p| !p.exists()) {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        self.dirty = false;
        Ok(())
    }

    /// Get a configuration value
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.values.get(key).and_then(|v| v.clone().try_into().ok())
    }

    /// Set a configuration value
    pub fn set<T: Serialize>(&mut self, key: &str, value: T) -> Result<(), PluginError> {
        let toml_value =
            toml::Value::try_from(value).map_err(|e| PluginError::Serialization(e.to_string()))?;
        self.values.insert(key.to_string(), toml_value);
        self.dirty = true;
        Ok(())
    }

    /// Check if the config has been modified since loading/saving
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the config as clean (internal use after save)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self::new()
    }
}
