use crate::config::Config;
use crate::handlers::prompts;
use crate::spa;
use actix_cors::Cors;
use actix_web::web::JsonConfig;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpServer,
};
use futures::{Future, TryFutureExt};
use nebula_core::store::PromptStore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub enum CorsOptions {
    Permissive,
    Custom(Vec<String>, usize),
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Actix(#[from] std::io::Error),
}

#[derive(Clone, Debug)]
pub struct ApiServer {
    config: Config,
    store: PromptStore,
}

impl ApiServer {
    pub fn new(config: Config, store: PromptStore) -> Self {
        Self { config, store }
    }

    pub fn print_useful_info(&self) {
        println!("\n🌌 Prompt Nebula starting up:");
        println!(
            "   🚀 API ready at: \x1b[36mhttp://{}:{}/api/prompts\x1b[0m",
            self.config.http.host, self.config.http.port
        );
        println!(
            "   🖥  UI ready at: \x1b[36mhttp://{}:{}\x1b[0m",
            self.config.http.host, self.config.http.port
        );
        println!("   📄 Prompt database: {}", self.store.path().display());
        println!();
    }

    pub async fn start(self) -> Result<impl Future<Output = Result<(), ServerError>>, ServerError> {
        let cors_options = self.cors_options();
        let store = self.store.clone();

        let server = HttpServer::new(move || {
            let cors = Self::get_cors(cors_options.clone());
            Self::create_app_entry(cors, store.clone())
        })
        .bind((self.config.http.host.as_str(), self.config.http.port))?
        .run()
        .map_err(ServerError::Actix);

        self.print_useful_info();

        Ok(server)
    }

    fn cors_options(&self) -> CorsOptions {
        let origins = &self.config.http.cors_allowed_origins;
        if origins.iter().any(|origin| origin == "*") {
            CorsOptions::Permissive
        } else {
            CorsOptions::Custom(origins.clone(), 3600)
        }
    }

    fn create_app_entry(
        cors: Cors,
        store: PromptStore,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Response = ServiceResponse<impl MessageBody>,
            Config = (),
            InitError = (),
            Error = actix_web::Error,
        >,
    > {
        let json_config = JsonConfig::default().limit(8 * 1024 * 1024); // 8MB in bytes

        // API routes are registered before the SPA fallback so they always
        // take precedence.
        App::new()
            .app_data(web::Data::new(store))
            .app_data(json_config)
            .service(
                web::scope("/api/prompts")
                    .route("", web::get().to(prompts::list_prompts))
                    .route("", web::post().to(prompts::create_prompt))
                    .route("/{id}", web::put().to(prompts::update_prompt))
                    .route("/{id}", web::delete().to(prompts::delete_prompt)),
            )
            .route("/app.js", web::get().to(spa::app_js))
            .route("/style.css", web::get().to(spa::style_css))
            .default_service(web::get().to(spa::index))
            .wrap(cors)
    }

    fn get_cors(cors: CorsOptions) -> Cors {
        match cors {
            CorsOptions::Permissive => Cors::permissive(),
            CorsOptions::Custom(origins, max_age) => origins
                .into_iter()
                .fold(Cors::default(), |cors, origin| cors.allowed_origin(&origin))
                .max_age(max_age),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    fn scratch_store() -> (TempDir, PromptStore) {
        let dir = TempDir::new().unwrap();
        let store = PromptStore::new(dir.path().join("prompts.json"));
        (dir, store)
    }

    macro_rules! test_app {
        ($store:expr) => {
            test::init_service(ApiServer::create_app_entry(
                ApiServer::get_cors(CorsOptions::Permissive),
                $store,
            ))
            .await
        };
    }

    #[actix_web::test]
    async fn test_create_returns_record_with_fresh_id() {
        let (_dir, store) = scratch_store();
        let app = test_app!(store);

        let req = test::TestRequest::post()
            .uri("/api/prompts")
            .set_json(json!({"title": "T", "basePrompt": "B"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["title"], json!("T"));
        assert_eq!(body["basePrompt"], json!("B"));
        assert!(!body["id"].as_str().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_update_unknown_id_is_404() {
        let (_dir, store) = scratch_store();
        let app = test_app!(store);

        let req = test::TestRequest::put()
            .uri("/api/prompts/abc")
            .set_json(json!({"title": "T"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], json!("Prompt not found"));
    }

    #[actix_web::test]
    async fn test_list_returns_records_in_creation_order() {
        let (_dir, store) = scratch_store();
        let app = test_app!(store);

        for title in ["first", "second"] {
            let req = test::TestRequest::post()
                .uri("/api/prompts")
                .set_json(json!({"title": title}))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get().uri("/api/prompts").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let prompts = body.as_array().unwrap();
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0]["title"], json!("first"));
        assert_eq!(prompts[1]["title"], json!("second"));
    }

    #[actix_web::test]
    async fn test_delete_removes_record_from_listing() {
        let (_dir, store) = scratch_store();
        let app = test_app!(store);

        let req = test::TestRequest::post()
            .uri("/api/prompts")
            .set_json(json!({"title": "T"}))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::delete()
            .uri(&format!("/api/prompts/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri("/api/prompts").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body
            .as_array()
            .unwrap()
            .iter()
            .all(|p| p["id"].as_str() != Some(id.as_str())));
    }

    #[actix_web::test]
    async fn test_delete_unknown_id_is_404() {
        let (_dir, store) = scratch_store();
        let app = test_app!(store);

        let req = test::TestRequest::delete()
            .uri("/api/prompts/abc")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_malformed_database_lists_as_empty() {
        let (_dir, store) = scratch_store();
        std::fs::write(store.path(), "{not json").unwrap();
        let app = test_app!(store);

        let req = test::TestRequest::get().uri("/api/prompts").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn test_unmatched_path_serves_spa_index() {
        let (_dir, store) = scratch_store();
        let app = test_app!(store);

        let req = test::TestRequest::get()
            .uri("/prompts/some-client-route")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("<title>Prompt Nebula</title>"));
    }
}
