use axum::{extract::Path, response::Html};

use super::utils::escape_html;

/// GET /users/:id - Echo the requested id.
///
/// Does not look the user up; existing clients only rely on the echo.
pub async fn show(Path(id): Path<String>) -> Html<String> {
    Html(format!("<h1>User details for ID: {}</h1>", escape_html(&id)))
}
