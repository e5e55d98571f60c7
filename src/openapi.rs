/// OpenAPI documentation for the direct-messaging service
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DM Service API",
        version = "0.1.0",
        description = "Direct messaging between users: send, conversation history, delete",
        license(name = "MIT")
    ),
    tags(
        (name = "Health", description = "Service health checks"),
        (name = "Messages", description = "Message send, conversation fetch, delete"),
    )
)]
pub struct ApiDoc;
