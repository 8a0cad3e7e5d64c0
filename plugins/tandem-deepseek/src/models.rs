//! Fixed DeepSeek model catalog.
//!
//! Two models, built once at registration time and never extended at
//! runtime. Pricing is reported as all-zero placeholders.

use tandem_plugin_api::{InputModality, ModelDefinition, ServingConfig};

use crate::{API_DIALECT, DEFAULT_BASE_URL};

/// Model id of the V3 chat model.
pub const CHAT: &str = "deepseek-chat";

/// Model id of the R1 reasoning model.
pub const REASONER: &str = "deepseek-reasoner";

/// Build the full DeepSeek model list.
///
/// Pure and deterministic: identical output on every call.
pub fn catalog() -> Vec<ModelDefinition> {
    vec![
        // DeepSeek V3 series (chat)
        ModelDefinition::builder(CHAT, "DeepSeek V3")
            .input(vec![InputModality::Text])
            .context_window(65536)
            .max_tokens(8192)
            .build(),
        // DeepSeek R1 series (reasoning)
        ModelDefinition::builder(REASONER, "DeepSeek R1")
            .input(vec![InputModality::Text])
            .context_window(65536)
            .max_tokens(8192)
            .reasoning()
            .build(),
    ]
}

/// Build the model-serving config for the provider record.
///
/// The auth flow reuses this when building its config patch, so the
/// patch always mirrors what was registered.
pub fn serving_config() -> ServingConfig {
    ServingConfig {
        base_url: DEFAULT_BASE_URL.to_string(),
        api: API_DIALECT.to_string(),
        models: catalog(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tandem_plugin_api::ModelCost;

    #[test]
    fn catalog_has_exactly_two_models() {
        let models = catalog();
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].id, "deepseek-chat");
        assert_eq!(models[1].id, "deepseek-reasoner");
    }

    #[test]
    fn reasoning_flags_are_set_correctly() {
        let models = catalog();
        assert!(!models[0].reasoning);
        assert!(models[1].reasoning);
    }

    #[test]
    fn both_models_report_shared_limits() {
        for model in catalog() {
            assert_eq!(model.context_window, 65536);
            assert_eq!(model.max_tokens, 8192);
            assert_eq!(model.input, vec![InputModality::Text]);
        }
    }

    #[test]
    fn cost_is_all_zero() {
        for model in catalog() {
            assert_eq!(model.cost, ModelCost::default());
        }
    }

    #[test]
    fn catalog_is_deterministic() {
        assert_eq!(catalog(), catalog());
    }

    #[test]
    fn serving_config_uses_provider_constants() {
        let config = serving_config();
        assert_eq!(config.base_url, "https://api.deepseek.com/v1");
        assert_eq!(config.api, "openai-completions");
        assert_eq!(config.models, catalog());
    }
}
