mod analytics;
mod config;
mod dataset;
mod error;
mod presentation;
mod services;

use crate::config::Config;
use crate::dataset::state::DatasetState;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use clap::Parser;
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info, warn};
use mime_guess::from_path;
use std::process;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded frontend; unknown paths fall back to `index.html` so
/// the client-side pages resolve on reload.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    // Invalid flags or variables print clap's usage error and exit with status 2.
    let config = Config::parse();

    // Parsing and deriving the table is CPU-bound; keep it off the runtime threads.
    let dataset_path = config.dataset_path.clone();
    let state = match tokio::task::spawn_blocking(move || DatasetState::load(&dataset_path)).await {
        Ok(Ok(state)) => web::Data::new(state),
        Ok(Err(e)) => {
            error!("{}", e);
            process::exit(1);
        }
        Err(e) => {
            error!("dataset loader panicked: {}", e);
            process::exit(1);
        }
    };

    let url = config.url();
    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("could not open browser: {}", e);
            }
        });
    }

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(services::overview::configure_routes())
            .service(services::features::configure_routes())
            .service(services::visualizations::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::test;

    #[actix_web::test]
    async fn every_page_path_loads_the_app() {
        let app = test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;

        for path in ["/", "/features", "/visualizations"] {
            let req = test::TestRequest::get().uri(path).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 200, "{}", path);
            let content_type = resp
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            assert!(content_type.starts_with("text/html"), "{}: {}", path, content_type);
        }
    }

    #[actix_web::test]
    async fn page_paths_share_the_index_document() {
        let app = test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;

        let root = test::call_and_read_body(&app, test::TestRequest::get().uri("/").to_request()).await;
        let features =
            test::call_and_read_body(&app, test::TestRequest::get().uri("/features").to_request()).await;
        assert!(!root.is_empty());
        assert_eq!(root, features);
    }
}
