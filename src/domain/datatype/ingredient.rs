use std::collections::HashMap;

use super::quantity;
use crate::domain::service::RawIngredient;

/// A single ingredient mention extracted from free text.
///
/// `quantity` holds the normalized quantity text and is empty when the
/// extraction did not find one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
}

impl Ingredient {
    /// Build an ingredient from a raw extraction entity, normalizing the
    /// quantity. Entities without a name are dropped.
    pub fn from_extraction(raw: RawIngredient) -> Option<Self> {
        let name = raw.name?;
        if name.trim().is_empty() {
            return None;
        }

        let (name, quantity) = quantity::normalize(&name, raw.quantity.as_deref().unwrap_or(""));
        Some(Self { name, quantity })
    }
}

/// Merge ingredients sharing a name, case-insensitive.
///
/// The first occurrence keeps its position; an entry carrying a quantity
/// replaces an earlier one without.
pub fn merge_duplicates(ingredients: Vec<Ingredient>) -> Vec<Ingredient> {
    let mut merged: Vec<Ingredient> = Vec::with_capacity(ingredients.len());
    let mut index: HashMap<String, usize> = HashMap::new();

    for ingredient in ingredients {
        let key = ingredient.name.trim().to_lowercase();
        match index.get(&key) {
            None => {
                index.insert(key, merged.len());
                merged.push(ingredient);
            }
            Some(&at) => {
                if merged[at].quantity.is_empty() && !ingredient.quantity.is_empty() {
                    merged[at] = ingredient;
                }
            }
        }
    }

    merged
}
