//! Model Catalog
//!
//! Best-effort lookup of embedding-capable models from the Generative
//! Language API. Single request, no retry, no pagination; callers treat any
//! failure as non-fatal.

use serde::Deserialize;

/// Models listing endpoint.
pub const MODELS_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Capability marker for embedding models.
const EMBED_METHOD: &str = "embedContent";

/// One model entry from the listing response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    /// True when the model supports the `embedContent` method.
    pub fn supports_embedding(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|method| method == EMBED_METHOD)
    }
}

/// The full model listing response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelCatalog {
    #[serde(default)]
    pub models: Vec<ModelInfo>,
}

impl ModelCatalog {
    /// Names of models that support embedding, in listing order.
    pub fn embedding_models(&self) -> Vec<&str> {
        self.models
            .iter()
            .filter(|model| model.supports_embedding())
            .map(|model| model.name.as_str())
            .collect()
    }
}

/// Fetch the model catalog from `endpoint`.
///
/// One request; any transport or decode failure bubbles to the caller.
pub async fn fetch_catalog_from(
    client: &reqwest::Client,
    endpoint: &str,
    api_key: &str,
) -> reqwest::Result<ModelCatalog> {
    let url = format!("{endpoint}?key={api_key}");
    client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<ModelCatalog>()
        .await
}

/// Fetch the model catalog from the production endpoint.
pub async fn fetch_catalog(
    client: &reqwest::Client,
    api_key: &str,
) -> reqwest::Result<ModelCatalog> {
    fetch_catalog_from(client, MODELS_ENDPOINT, api_key).await
}
