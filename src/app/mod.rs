pub mod resource;
pub mod use_case;

pub mod transform {
    pub mod parse {
        use crate::{
            app::resource::parse::IngredientResponse, domain::datatype::ingredient::Ingredient,
        };

        impl From<Ingredient> for IngredientResponse {
            fn from(ingredient: Ingredient) -> Self {
                Self {
                    name: ingredient.name,
                    quantity: ingredient.quantity,
                }
            }
        }
    }
}
