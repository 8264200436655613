use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::chat::chat,
        api::transcript::get_transcript,
    ),
    components(schemas(api::chat::ChatRequest)),
    tags(
        (name = "shelfie", description = "Shelfie chat API")
    )
)]
pub struct ApiDoc;
