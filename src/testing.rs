//! Shared fixtures for route tests: app state, multipart bodies and a mock
//! prediction backend served by actix-web on an ephemeral port.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_multipart::Multipart;
use actix_web::{App, HttpResponse, HttpServer, http::header::CONTENT_TYPE, test, web};
use serde_json::json;

use crate::config::{Config, Theme};
use crate::handlers::form::{FormLimits, collect_form};
use crate::models::submission::FieldValue;
use crate::state::AppState;

pub fn test_state(backend_url: &str) -> AppState {
    test_state_with_timeout(backend_url, Duration::from_secs(10))
}

pub fn test_state_with_timeout(backend_url: &str, astrology_timeout: Duration) -> AppState {
    AppState::new(Config {
        astrology_timeout,
        ..test_config(backend_url)
    })
    .unwrap()
}

pub fn test_state_with_limits(backend_url: &str, form_limits: FormLimits) -> AppState {
    AppState::new(Config {
        form_limits,
        ..test_config(backend_url)
    })
    .unwrap()
}

fn test_config(backend_url: &str) -> Config {
    Config {
        host: "127.0.0.1".into(),
        port: 0,
        backend_url: backend_url.parse().unwrap(),
        astrology_timeout: Duration::from_secs(10),
        carousel_interval: Duration::from_secs(3600),
        theme: Theme::Dark,
        form_limits: FormLimits::default(),
    }
}

pub enum FormPart {
    Text(&'static str, &'static str),
    File(&'static str, &'static str, &'static [u8]),
}

const BOUNDARY: &str = "soulbuddy-test-boundary";

/// Multipart POST to `uri` carrying `parts` in order.
pub fn post_form(uri: &str, parts: &[FormPart]) -> test::TestRequest {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            FormPart::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                        .as_bytes(),
                );
            }
            FormPart::File(name, filename, data) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: image/png\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
                body.extend_from_slice(b"\r\n");
            }
        }
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    test::TestRequest::post()
        .uri(uri)
        .insert_header((
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(body)
}

/// A complete horoscope form whose `name` selects the mock backend's behaviour.
pub fn horoscope_parts(name: &'static str) -> Vec<FormPart> {
    vec![
        FormPart::Text("name", name),
        FormPart::Text("date_of_birth", "04-07-1990"),
        FormPart::Text("time_of_birth", "06:30"),
        FormPart::Text("gender", "female"),
        FormPart::Text("state", "Karnataka"),
        FormPart::Text("city", "Mysuru"),
    ]
}

#[derive(Default)]
struct Recorder {
    hits: AtomicUsize,
    last_fields: Mutex<Vec<String>>,
}

impl Recorder {
    async fn record(&self, payload: Multipart) -> Vec<String> {
        self.hits.fetch_add(1, Ordering::SeqCst);
        let form = collect_form(payload, FormLimits::default())
            .await
            .unwrap();
        let fields: Vec<String> = form
            .fields()
            .map(|(name, value)| match value {
                FieldValue::Text(text) => format!("{name}={text}"),
                FieldValue::File { filename, .. } => format!("{name}@{filename}"),
            })
            .collect();
        *self.last_fields.lock().unwrap() = fields.clone();
        fields
    }
}

/// Stand-in for the prediction backend.
///
/// `/astrology` reacts to the submitted `name`: `slow` answers after two
/// seconds, `fail` returns 422 with an error body, `bare` returns 400 with no
/// error field, `numeric` returns 400 with a numeric error, `opaque` returns
/// 502 with plain text, `garbled` returns 200 with a non-JSON body. Anything
/// else succeeds. `/compatibility` fails with 500 when `your_name` is `fail`.
pub struct MockBackend {
    pub url: String,
    recorder: Arc<Recorder>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let recorder = Arc::new(Recorder::default());
        let data = web::Data::from(recorder.clone());

        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .route("/astrology", web::post().to(mock_astrology))
                .route("/compatibility", web::post().to(mock_compatibility))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        Self {
            url: format!("http://{addr}"),
            recorder,
        }
    }

    pub fn hits(&self) -> usize {
        self.recorder.hits.load(Ordering::SeqCst)
    }

    /// Fields of the last request as `name=value`, or `name@filename` for files.
    pub fn last_fields(&self) -> Vec<String> {
        self.recorder.last_fields.lock().unwrap().clone()
    }
}

async fn mock_astrology(recorder: web::Data<Recorder>, payload: Multipart) -> HttpResponse {
    let fields = recorder.record(payload).await;
    let name = fields
        .iter()
        .find_map(|field| field.strip_prefix("name="))
        .unwrap_or_default();

    match name {
        "slow" => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            HttpResponse::Ok().json(json!({ "success": true, "response": "<p>late</p>" }))
        }
        "fail" => HttpResponse::UnprocessableEntity()
            .json(json!({ "success": false, "error": "bad location" })),
        "bare" => HttpResponse::BadRequest().json(json!({ "success": false })),
        "numeric" => HttpResponse::BadRequest().json(json!({ "error": 42 })),
        "opaque" => HttpResponse::BadGateway().body("upstream exploded"),
        "garbled" => HttpResponse::Ok().body("this is not json"),
        _ => HttpResponse::Ok().json(json!({
            "success": true,
            "response": "<p>Hi</p><script>alert('x')</script>",
            "zodiac_sign": "Cancer",
        })),
    }
}

async fn mock_compatibility(recorder: web::Data<Recorder>, payload: Multipart) -> HttpResponse {
    let fields = recorder.record(payload).await;
    if fields.iter().any(|field| field == "your_name=fail") {
        return HttpResponse::InternalServerError().json(json!({ "error": "model down" }));
    }
    HttpResponse::Ok().json(json!({
        "success": true,
        "response": "Great match!",
        "extra": "ignored",
    }))
}
