use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::http::header::ContentType;
use actix_web::web::{self, Data};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer};
use anyhow::{Context, Result};
use log::{error, info};

use crate::application::services::CheckInWorkflow;

const HEALTHZ_PATH: &str = "/healthz";

/// Whether the query string asks for a forced notification
///
/// Only the first `bark` pair counts, and only the exact value `true`.
fn force_notify(query_string: &str) -> bool {
    url::form_urlencoded::parse(query_string.as_bytes())
        .find(|(key, _)| key == "bark")
        .is_some_and(|(_, value)| value == "true")
}

/// Register the trigger routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(HEALTHZ_PATH).route(web::get().to(handle_healthz)))
        .default_service(web::route().to(handle_trigger));
}

async fn handle_healthz() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("ok")
}

async fn handle_trigger(req: HttpRequest, workflow: Data<CheckInWorkflow>) -> HttpResponse {
    let force = force_notify(req.query_string());
    info!("On-demand check-in requested: {} {} (bark={})", req.method(), req.path(), force);

    match workflow.run(force).await {
        Ok(report) => HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body(report),
        Err(e) => {
            error!("On-demand check-in failed: {:#}", e);
            HttpResponse::InternalServerError()
                .content_type(ContentType::plaintext())
                .body(format!("Error: {}", e))
        }
    }
}

/// Serve the on-demand trigger until the process is signalled
pub async fn serve(workflow: Arc<CheckInWorkflow>, addr: SocketAddr) -> Result<()> {
    let data = Data::from(workflow);
    let srv = HttpServer::new(move || App::new().app_data(data.clone()).configure(configure))
        .bind(addr)
        .with_context(|| format!("bind {}", addr))?;

    info!("Listening on http://{}", addr);
    srv.run().await.context("run http server")?;

    info!("HTTP server stopped");
    Ok(())
}
