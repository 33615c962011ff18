pub mod controller;
pub mod service;

pub mod router {
    use std::sync::Arc;

    use salvo::{logging::Logger, Router};

    use super::controller::*;
    use crate::domain::service::IngredientExtractor;

    pub fn app(extractor: Arc<dyn IngredientExtractor>) -> Router {
        Router::new()
            .push(Router::with_path("health").get(HealthController))
            .push(Router::with_path("parse").post(ParseTextController::new(extractor)))
            .hoop(Logger)
    }
}
