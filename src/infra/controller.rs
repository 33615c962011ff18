use std::sync::Arc;

use async_trait::async_trait;
use salvo::{http::StatusCode, writer::Json, Depot, FlowCtrl, Handler, Request, Response};

use crate::app::{
    resource::parse::{HealthResponse, ParseText},
    use_case,
};
use crate::domain::service::IngredientExtractor;
use crate::error::http::BadRequest;

macro_rules! map_res_err {
    ($result:ident, $response:ident) => {
        match $result {
            Err(err) => {
                $response.render(err);
                return;
            }
            Ok(ok) => ok,
        }
    };
}

pub struct HealthController;

#[async_trait]
impl Handler for HealthController {
    async fn handle(&self, _: &mut Request, _: &mut Depot, res: &mut Response, _: &mut FlowCtrl) {
        res.render(Json(HealthResponse::ok()));
        res.set_status_code(StatusCode::OK);
    }
}

pub struct ParseTextController {
    extractor: Arc<dyn IngredientExtractor>,
}

impl ParseTextController {
    pub fn new(extractor: Arc<dyn IngredientExtractor>) -> Self {
        Self { extractor }
    }
}

#[async_trait]
impl Handler for ParseTextController {
    async fn handle(&self, req: &mut Request, _: &mut Depot, res: &mut Response, _: &mut FlowCtrl) {
        let result: Result<ParseText, _> = req.parse_body().await.map_err(BadRequest::from);
        let dto = map_res_err!(result, res);

        let result = use_case::parse::parse_text(self.extractor.as_ref(), dto).await;
        let response = map_res_err!(result, res);

        res.render(Json(response));
        res.set_status_code(StatusCode::OK);
    }
}
