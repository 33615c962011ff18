use async_trait::async_trait;

use crate::error::extraction::ExtractionError;

/// Entity fields produced by an extractor, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawIngredient {
    pub name: Option<String>,
    pub quantity: Option<String>,
}

#[async_trait]
pub trait IngredientExtractor: Send + Sync {
    async fn extract(&self, text: &str) -> Result<Vec<RawIngredient>, ExtractionError>;
}
