use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder};

// The UI bundle is embedded at compile time so the binary is self-contained.
const INDEX_HTML: &str = include_str!("../ui/index.html");
const APP_JS: &str = include_str!("../ui/app.js");
const STYLE_CSS: &str = include_str!("../ui/style.css");

/// SPA fallback: any unmatched GET gets the root document so client-side
/// routing can take over. API routes are matched before this handler.
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .insert_header(ContentType::html())
        .body(INDEX_HTML)
}

pub async fn app_js() -> impl Responder {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(APP_JS)
}

pub async fn style_css() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(STYLE_CSS)
}
