//! tandem-plugin-api - Plugin API for tandem model providers
//!
//! This crate provides the traits and types needed to write provider
//! plugins for tandem. A provider plugin declares one or more model
//! providers (endpoint, API dialect, model catalog) and the interactive
//! auth flows that collect credentials for them.
//!
//! # Example
//!
//! ```ignore
//! use tandem_plugin_api::{
//!     PluginError, PluginManifest, ProviderPlugin, RegistrarContext, export_provider_plugin,
//! };
//!
//! #[derive(Default)]
//! pub struct MyProviderPlugin;
//!
//! impl ProviderPlugin for MyProviderPlugin {
//!     fn manifest(&self) -> PluginManifest {
//!         PluginManifest {
//!             name: "my-provider".to_string(),
//!             version: "0.1.0".to_string(),
//!             description: "My model provider".to_string(),
//!             ..Default::default()
//!         }
//!     }
//!
//!     fn register(&self, ctx: &mut RegistrarContext) -> Result<(), PluginError> {
//!         ctx.register_provider(/* ProviderRecord */)?;
//!         Ok(())
//!     }
//! }
//!
//! export_provider_plugin!(MyProviderPlugin);
//! ```

pub mod auth;
pub mod context;
pub mod error;
pub mod types;

pub use auth::{
    AgentDefaults, AgentsPatch, ApiKey, AuthContext, AuthFlow, AuthOutcome, ConfigPatch,
    Credential, ModelAlias, ModelsPatch, Profile, Prompter, TextPrompt, Validator,
};
pub use context::{PluginConfig, RegistrarContext};
pub use error::PluginError;
pub use types::*;

/// Current plugin API version. Plugins must match this exactly.
/// This will be checked when loading plugins to ensure compatibility.
pub const API_VERSION: u32 = 1;

/// The core plugin trait - implement this to create a tandem provider plugin.
pub trait ProviderPlugin: Send + Sync {
    /// Return plugin metadata
    fn manifest(&self) -> PluginManifest;

    /// Called once when the plugin is loaded. Use this to register
    /// providers with the host.
    fn register(&self, ctx: &mut RegistrarContext) -> Result<(), PluginError>;
}

/// Export a provider plugin type for dynamic loading.
///
/// This macro generates the C ABI entry points that tandem uses to load
/// and unload plugins dynamically.
///
/// # Usage
///
/// ```ignore
/// tandem_plugin_api::export_provider_plugin!(MyProviderPlugin);
/// ```
///
/// # Generated Functions
///
/// - `_tandem_plugin_create()`: Creates a new plugin instance
/// - `_tandem_plugin_api_version()`: Returns the API version
/// - `_tandem_plugin_destroy()`: Destroys a plugin instance
#[macro_export]
macro_rules! export_provider_plugin {
    ($plugin_type:ty) => {
        #[unsafe(no_mangle)]
        pub extern "C" fn _tandem_plugin_create() -> *mut dyn $crate::ProviderPlugin {
            let plugin: Box<dyn $crate::ProviderPlugin> = Box::new(<$plugin_type>::default());
            Box::into_raw(plugin)
        }

        #[unsafe(no_mangle)]
        pub extern "C" fn _tandem_plugin_api_version() -> u32 {
            $crate::API_VERSION
        }

        #[unsafe(no_mangle)]
        pub extern "C" fn _tandem_plugin_destroy(ptr: *mut dyn $crate::ProviderPlugin) {
            if !ptr.is_null() {
                unsafe {
                    drop(Box::from_raw(ptr));
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_is_set() {
        assert_eq!(API_VERSION, 1);
    }

    #[test]
    fn test_plugin_trait_is_object_safe() {
        // This compiles only if ProviderPlugin is object-safe
        fn _takes_boxed_plugin(_: Box<dyn ProviderPlugin>) {}
    }

    #[test]
    fn test_manifest_default_has_correct_api_version() {
        let manifest = PluginManifest::default();
        assert_eq!(manifest.api_version, API_VERSION);
    }
}
