pub mod parse {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Deserialize)]
    pub struct ParseText {
        pub text: String,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct IngredientResponse {
        pub name: String,
        pub quantity: String,
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct ParseResponse {
        pub ingredients: Vec<IngredientResponse>,
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct HealthResponse {
        pub status: &'static str,
    }

    impl HealthResponse {
        pub fn ok() -> Self {
            Self { status: "ok" }
        }
    }
}
