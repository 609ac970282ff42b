//! OpenAPI 3 schema (utoipa) plus the Swagger UI page served at /docs.

use utoipa::OpenApi;

use crate::snapshot::{
    EndpointDescriptor, HealthResponse, RequestSnapshot, RuntimeSnapshot, ServiceDescriptor,
    ServiceInfo, SystemSnapshot,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DevOps Info Service",
        description = "DevOps course info service",
        version = "1.0.0"
    ),
    paths(
        crate::api::index,
        crate::api::health
    ),
    components(schemas(
        ServiceInfo,
        ServiceDescriptor,
        SystemSnapshot,
        RuntimeSnapshot,
        RequestSnapshot,
        EndpointDescriptor,
        HealthResponse
    ))
)]
pub struct ApiDoc;

/// Interactive docs page. Static shell that loads Swagger UI from a CDN
/// and points it at our /openapi.json. Double-hash delimiter: the inline
/// script contains `"#` in the dom_id selector.
pub const SWAGGER_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8"/>
    <title>DevOps Info Service - Swagger UI</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css"/>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        window.ui = SwaggerUIBundle({
            url: "/openapi.json",
            dom_id: "#swagger-ui",
            deepLinking: true,
            presets: [SwaggerUIBundle.presets.apis],
            layout: "BaseLayout"
        });
    </script>
</body>
</html>
"##;
