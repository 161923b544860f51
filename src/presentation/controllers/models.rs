//! Models controller for the closed model-name enumeration

use axum::{extract::Path, response::Json};

use crate::domain::ModelName;
use crate::presentation::models::ModelResponse;

/// Look up the message for a model.
///
/// `model_name` deserializes into the closed [`ModelName`] enumeration, so
/// anything outside {alexnet, resnet, lenet} is rejected by the path
/// extractor and never reaches this handler.
#[utoipa::path(
    get,
    path = "/models/{model_name}",
    tag = "models",
    params(
        ("model_name" = ModelName, Path, description = "One of the known model names")
    ),
    responses(
        (status = 200, description = "The model name and its message", body = ModelResponse)
    )
)]
pub async fn get_model(Path(model_name): Path<ModelName>) -> Json<ModelResponse> {
    Json(ModelResponse {
        model_name,
        message: model_name.message().to_string(),
    })
}
