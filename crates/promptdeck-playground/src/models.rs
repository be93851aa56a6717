//! Curated model catalog for the playground picker.

/// One entry in the featured-model list. `is_codestral` routes the entry
/// through the FIM backend instead of the general chat API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedModel {
    /// Provider-scoped model identifier sent in the request body.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Provider display name.
    pub provider: &'static str,
    /// Short badge shown next to the name ("Best", "Fast", ...).
    pub badge: Option<&'static str>,
    pub is_codestral: bool,
}

/// Models surfaced in the playground picker, in display order.
pub const FEATURED_MODELS: &[FeaturedModel] = &[
    FeaturedModel {
        id: "anthropic/claude-sonnet-4",
        name: "Claude Sonnet 4",
        provider: "Anthropic",
        badge: Some("Best"),
        is_codestral: false,
    },
    FeaturedModel {
        id: "openai/gpt-4o",
        name: "GPT-4o",
        provider: "OpenAI",
        badge: Some("Popular"),
        is_codestral: false,
    },
    FeaturedModel {
        id: "openai/gpt-4o-mini",
        name: "GPT-4o Mini",
        provider: "OpenAI",
        badge: None,
        is_codestral: false,
    },
    FeaturedModel {
        id: "google/gemini-2.0-flash-001",
        name: "Gemini 2.0 Flash",
        provider: "Google",
        badge: Some("Fast"),
        is_codestral: false,
    },
    FeaturedModel {
        id: "codestral",
        name: "Codestral",
        provider: "Mistral",
        badge: Some("Code"),
        is_codestral: true,
    },
    FeaturedModel {
        id: "meta-llama/llama-3.3-70b-instruct",
        name: "Llama 3.3 70B",
        provider: "Meta",
        badge: None,
        is_codestral: false,
    },
    FeaturedModel {
        id: "deepseek/deepseek-chat",
        name: "DeepSeek Chat",
        provider: "DeepSeek",
        badge: Some("Value"),
        is_codestral: false,
    },
    FeaturedModel {
        id: "mistralai/mistral-large-2411",
        name: "Mistral Large",
        provider: "Mistral",
        badge: None,
        is_codestral: false,
    },
    FeaturedModel {
        id: "qwen/qwen-2.5-72b-instruct",
        name: "Qwen 2.5 72B",
        provider: "Alibaba",
        badge: None,
        is_codestral: false,
    },
];

/// Look up a featured model by id.
pub fn find_model(id: &str) -> Option<&'static FeaturedModel> {
    FEATURED_MODELS.iter().find(|m| m.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        for (i, a) in FEATURED_MODELS.iter().enumerate() {
            for b in &FEATURED_MODELS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn only_codestral_routes_to_fim() {
        let fim: Vec<_> = FEATURED_MODELS.iter().filter(|m| m.is_codestral).collect();
        assert_eq!(fim.len(), 1);
        assert_eq!(fim[0].id, "codestral");
    }

    #[test]
    fn find_model_by_id() {
        assert_eq!(find_model("openai/gpt-4o").unwrap().name, "GPT-4o");
        assert!(find_model("nonexistent/model").is_none());
    }
}
