//! API documentation handlers.

use axum::response::Html;
use axum::Json;

use crate::openapi::openapi_document;

/// Swagger UI shell loading the document from the JSON endpoint.
const SWAGGER_UI_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>User API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/api-docs/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

/// `GET /api-docs/openapi.json`
pub async fn openapi_json() -> Json<serde_json::Value> {
    Json(openapi_document())
}

/// `GET /api`
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_PAGE)
}
