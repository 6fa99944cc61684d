//! In-process stand-ins for the membership portal and the Bark relay

#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::http::{header, StatusCode};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};

pub const USERNAME: &str = "user@example.com";
pub const PASSWORD: &str = "secret";

pub const STATUS_PAGE: &str = r#"<html><body>
<script>
trafficDountChat('200GB', '1.35GB', '158.2GB', 'x');
</script>
<button>明日再来</button>
</body></html>"#;

/// A request as the mock server saw it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub cookie: Option<String>,
    pub body: String,
}

/// Canned responses, one per endpoint
#[derive(Debug, Clone)]
pub struct MockPortal {
    pub login_status: u16,
    pub login_cookies: Vec<String>,
    pub page_status: u16,
    pub page_body: String,
    pub checkin_status: u16,
    pub checkin_body: String,
    pub push_status: u16,
    pub push_delay: Option<Duration>,
}

impl Default for MockPortal {
    fn default() -> Self {
        Self {
            login_status: 200,
            login_cookies: vec![
                "uid=42; path=/; expires=Sat, 01 Jan 2050 00:00:00 GMT".to_string(),
                "key=abc123; path=/; HttpOnly".to_string(),
            ],
            page_status: 200,
            page_body: STATUS_PAGE.to_string(),
            checkin_status: 200,
            checkin_body: r#"{"ret":1,"msg":"Got 512MB"}"#.to_string(),
            push_status: 200,
            push_delay: None,
        }
    }
}

struct ServerState {
    portal: MockPortal,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_to(&self, path: &str) -> Option<RecordedRequest> {
        self.requests().into_iter().find(|r| r.path == path)
    }
}

async fn handle(req: HttpRequest, body: String, state: web::Data<ServerState>) -> HttpResponse {
    let header_value = |name: header::HeaderName| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        method: req.method().to_string(),
        path: req.path().to_string(),
        content_type: header_value(header::CONTENT_TYPE),
        cookie: header_value(header::COOKIE),
        body,
    });

    let portal = &state.portal;
    let status = |code: u16| StatusCode::from_u16(code).unwrap();

    match req.path() {
        "/auth/login" => {
            let mut response = HttpResponse::build(status(portal.login_status));
            for cookie in &portal.login_cookies {
                response.append_header((header::SET_COOKIE, cookie.as_str()));
            }
            response.content_type("application/json").body(r#"{"ret":1}"#)
        }
        "/user" => HttpResponse::build(status(portal.page_status))
            .content_type("text/html; charset=utf-8")
            .body(portal.page_body.clone()),
        "/user/checkin" => HttpResponse::build(status(portal.checkin_status))
            .content_type("application/json")
            .body(portal.checkin_body.clone()),
        "/push" => {
            if let Some(delay) = portal.push_delay {
                actix_web::rt::time::sleep(delay).await;
            }
            HttpResponse::build(status(portal.push_status))
                .content_type("application/json")
                .body(r#"{"code":200,"message":"success"}"#)
        }
        _ => HttpResponse::NotFound().finish(),
    }
}

/// Start the mock on an ephemeral port. Must be called inside an actix system.
pub fn spawn_mock_server(portal: MockPortal) -> MockServer {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = web::Data::new(ServerState {
        portal,
        requests: requests.clone(),
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
        requests,
    }
}

/// A base URL nothing listens on
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
