// Shared fixtures for the integration tests.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A page declaring all four required properties.
#[allow(dead_code)] // Used by other test files
pub const CONFORMING_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>The Rock (1996) - IMDb</title>
    <meta property="og:title" content="The Rock" />
    <meta property="og:type" content="movie" />
    <meta property="og:url" content="https://www.imdb.com/title/tt0117500/" />
    <meta property="og:image" content="https://ia.media-imdb.com/images/rock.jpg" />
    <meta property="og:site_name" content="IMDb" />
  </head>
  <body><p>Directed by Michael Bay.</p></body>
</html>"#;

/// A page declaring no Open Graph data at all.
#[allow(dead_code)] // Used by other test files
pub const PLAIN_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width">
  </head>
  <body>
    <h1>Breaking News</h1>
    <div><p>Lede text.</p></div>
  </body>
</html>"#;

/// Starts a mock server answering `GET {route}` with `body` as HTML.
#[allow(dead_code)] // Used by other test files
pub async fn serve_html(route: &str, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(body),
        )
        .mount(&server)
        .await;
    server
}
