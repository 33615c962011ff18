pub mod parse {
    use crate::{
        app::resource::parse::{ParseResponse, ParseText},
        domain::{
            datatype::ingredient::{self, Ingredient},
            service::IngredientExtractor,
        },
        error::app::ApplicationError,
    };

    pub async fn parse_text<EX>(
        extractor: &EX,
        dto: ParseText,
    ) -> Result<ParseResponse, ApplicationError>
    where
        EX: IngredientExtractor + ?Sized,
    {
        let raw = extractor.extract(&dto.text).await?;

        let ingredients: Vec<Ingredient> = raw
            .into_iter()
            .filter_map(Ingredient::from_extraction)
            .collect();
        let merged = ingredient::merge_duplicates(ingredients);

        Ok(ParseResponse {
            ingredients: merged.into_iter().map(Into::into).collect(),
        })
    }
}
