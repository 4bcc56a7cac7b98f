//! Index page handler.
//!
//! Returns a static HTML page listing the available API routes. No data
//! access.

use axum::response::Html;
use tracing::debug;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>kona</title></head>
<body>
<h1>Welcome to the kona API!</h1>
<p>Available routes:</p>
<ul>
<li>/api/v1.0/precipitation</li>
<li>/api/v1.0/stations</li>
<li>/api/v1.0/tobs</li>
<li>/api/v1.0/&lt;start&gt; (start date in YYYY-MM-DD format)</li>
<li>/api/v1.0/&lt;start&gt;/&lt;end&gt; (start and end dates in YYYY-MM-DD format)</li>
</ul>
</body>
</html>
"#;

/// Handle GET / requests
pub async fn home_handler() -> Html<&'static str> {
    debug!(endpoint = "/", "Processing index request");

    Html(INDEX_HTML)
}
