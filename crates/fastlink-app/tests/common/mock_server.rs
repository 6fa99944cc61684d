//! Portal and Bark relay served over real HTTP, for wiring tests

use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use actix_web::http::header;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};

struct ServerState {
    status_page: String,
    paths: Arc<Mutex<Vec<String>>>,
}

pub struct MockServer {
    pub base_url: String,
    paths: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    /// Paths requested so far, in order
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

async fn handle(req: HttpRequest, state: web::Data<ServerState>) -> HttpResponse {
    state.paths.lock().unwrap().push(req.path().to_string());

    match req.path() {
        "/auth/login" => HttpResponse::Ok()
            .append_header((header::SET_COOKIE, "uid=42; path=/"))
            .append_header((header::SET_COOKIE, "key=abc123; path=/"))
            .content_type("application/json")
            .body(r#"{"ret":1}"#),
        "/user" => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(state.status_page.clone()),
        "/user/checkin" => HttpResponse::Ok()
            .content_type("application/json")
            .body(r#"{"ret":1,"msg":"Got 512MB"}"#),
        "/push" => HttpResponse::Ok()
            .content_type("application/json")
            .body(r#"{"code":200}"#),
        _ => HttpResponse::NotFound().finish(),
    }
}

/// Start the server on an ephemeral port. Must be called inside an actix system.
pub fn spawn(status_page: &str) -> MockServer {
    let paths = Arc::new(Mutex::new(Vec::new()));
    let state = web::Data::new(ServerState {
        status_page: status_page.to_string(),
        paths: paths.clone(),
    });

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .default_service(web::to(handle))
    })
    .workers(1)
    .disable_signals()
    .listen(listener)
    .unwrap()
    .run();

    actix_web::rt::spawn(server);

    MockServer {
        base_url: format!("http://{}", addr),
        paths,
    }
}
