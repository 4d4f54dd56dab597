#![allow(dead_code)]

use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, Uri, header},
    response::IntoResponse,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use link_lens::config::Config;
use link_lens::server::build_state;
use link_lens::state::AppState;
use lopdf::content::{Content, Operation};
use lopdf::{
    Dictionary, Document, EncryptionState, EncryptionVersion, Object, Permissions, Stream,
    StringFormat, dictionary,
};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// ─── FAKE GITHUB API ─────────────────────────────────────────────────────────

/// A request seen by the fake API.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub accept: Option<String>,
}

/// Canned GitHub API keyed by request path; unknown paths answer 404.
#[derive(Default)]
pub struct FakeGithub {
    routes: HashMap<String, (StatusCode, Value)>,
}

/// Handle to a running fake API.
pub struct FakeGithubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeGithubServer {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn hits(&self, path: &str) -> usize {
        self.requests().iter().filter(|r| r.path == path).count()
    }
}

impl FakeGithub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn json(mut self, path: &str, body: Value) -> Self {
        self.routes.insert(path.to_string(), (StatusCode::OK, body));
        self
    }

    pub fn status(mut self, path: &str, status: u16, body: Value) -> Self {
        let status = StatusCode::from_u16(status).unwrap();
        self.routes.insert(path.to_string(), (status, body));
        self
    }

    /// Serves a README whose markdown is `markdown`, base64-wrapped like GitHub does.
    pub fn readme(self, owner: &str, repo: &str, markdown: &str) -> Self {
        let encoded = STANDARD.encode(markdown);
        let wrapped: Vec<String> = encoded
            .as_bytes()
            .chunks(60)
            .map(|chunk| String::from_utf8_lossy(chunk).to_string())
            .collect();
        self.json(
            &format!("/repos/{}/{}/readme", owner, repo),
            json!({ "content": wrapped.join("\n"), "encoding": "base64" }),
        )
    }

    pub async fn start(self) -> FakeGithubServer {
        let routes = Arc::new(self.routes);
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();

        let app = Router::new().fallback(move |uri: Uri, headers: HeaderMap| {
            let routes = routes.clone();
            let recorded = recorded.clone();
            async move {
                let header_value = |name: header::HeaderName| {
                    headers
                        .get(name)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string)
                };
                recorded.lock().unwrap().push(RecordedRequest {
                    path: uri.path().to_string(),
                    query: uri.query().map(str::to_string),
                    authorization: header_value(header::AUTHORIZATION),
                    accept: header_value(header::ACCEPT),
                });

                match routes.get(uri.path()) {
                    Some((status, body)) => (*status, Json(body.clone())).into_response(),
                    None => (
                        StatusCode::NOT_FOUND,
                        Json(json!({ "message": "Not Found" })),
                    )
                        .into_response(),
                }
            }
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        FakeGithubServer {
            base_url: format!("http://{}", addr),
            requests,
        }
    }
}

// ─── FIXTURES ────────────────────────────────────────────────────────────────

pub fn user_json(login: &str, name: Option<&str>) -> Value {
    json!({
        "login": login,
        "name": name,
        "bio": "Builds things",
        "html_url": format!("https://github.com/{}", login),
        "avatar_url": format!("https://avatars.githubusercontent.com/{}", login),
        "followers": 10,
        "following": 2,
        "public_repos": 3,
        "company": null,
        "blog": "",
        "twitter_username": null,
        "created_at": "2020-01-15T10:00:00Z"
    })
}

pub fn repo_json(owner: &str, name: &str, stars: u64, description: Option<&str>) -> Value {
    json!({
        "name": name,
        "full_name": format!("{}/{}", owner, name),
        "owner": { "login": owner },
        "html_url": format!("https://github.com/{}/{}", owner, name),
        "description": description,
        "language": "Rust",
        "stargazers_count": stars,
        "forks_count": 1,
        "license": null,
        "created_at": "2021-06-05T08:30:00Z"
    })
}

pub fn contributors_json(entries: &[(&str, u64)]) -> Value {
    Value::Array(
        entries
            .iter()
            .map(|(login, commits)| {
                json!({
                    "login": login,
                    "contributions": commits,
                    "html_url": format!("https://github.com/{}", login)
                })
            })
            .collect(),
    )
}

// ─── STATE ───────────────────────────────────────────────────────────────────

pub fn test_config(github_api_url: &str) -> Config {
    Config {
        github_token: "ghp_test_token".to_string(),
        github_api_url: github_api_url.to_string(),
        target_domain: "github.com".to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        enrich_concurrency: 4,
        github_timeout_seconds: 5,
        max_upload_bytes: 1024 * 1024,
        behind_proxy: false,
    }
}

pub fn create_test_state(github_api_url: &str) -> AppState {
    build_state(&test_config(github_api_url)).unwrap()
}

// ─── PDF BUILDER ─────────────────────────────────────────────────────────────

/// A `/Link` annotation with a `/URI` action.
pub fn link_annotation(uri: &str) -> Dictionary {
    dictionary! {
        "Type" => "Annot",
        "Subtype" => "Link",
        "Rect" => vec![
            Object::Integer(72),
            Object::Integer(700),
            Object::Integer(300),
            Object::Integer(720),
        ],
        "A" => dictionary! {
            "S" => "URI",
            "URI" => Object::string_literal(uri),
        },
    }
}

/// A sticky-note annotation, which carries no link.
pub fn text_annotation(contents: &str) -> Dictionary {
    dictionary! {
        "Type" => "Annot",
        "Subtype" => "Text",
        "Rect" => vec![
            Object::Integer(10),
            Object::Integer(10),
            Object::Integer(30),
            Object::Integer(30),
        ],
        "Contents" => Object::string_literal(contents),
    }
}

/// Builds a PDF with one page per entry, each page carrying the given annotations.
pub fn pdf_with_annotations(pages: Vec<Vec<Dictionary>>) -> Vec<u8> {
    save(&mut build_document(pages))
}

/// Builds a one-page PDF with the given links, encrypted with `user_password`.
///
/// An empty `user_password` yields a document any reader can open.
pub fn encrypted_pdf_with_links(uris: &[&str], user_password: &str) -> Vec<u8> {
    let mut doc = build_document(vec![uris.iter().map(|uri| link_annotation(uri)).collect()]);
    doc.trailer.set(
        "ID",
        Object::Array(vec![
            Object::String((1u8..=16).collect(), StringFormat::Literal),
            Object::String((1u8..=16).rev().collect(), StringFormat::Literal),
        ]),
    );

    let state = EncryptionState::try_from(EncryptionVersion::V2 {
        document: &doc,
        owner_password: "owner",
        user_password,
        key_length: 128,
        permissions: Permissions::all(),
    })
    .unwrap();
    doc.encrypt(&state).unwrap();

    save(&mut doc)
}

fn save(doc: &mut Document) -> Vec<u8> {
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

fn build_document(pages: Vec<Vec<Dictionary>>) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids = Vec::new();
    for (index, annotations) in pages.into_iter().enumerate() {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), Object::Integer(12)]),
                Operation::new("Td", vec![Object::Integer(72), Object::Integer(740)]),
                Operation::new(
                    "Tj",
                    vec![Object::string_literal(format!("Page {}", index + 1))],
                ),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));

        let annots: Vec<Object> = annotations
            .into_iter()
            .map(|annotation| Object::Reference(doc.add_object(annotation)))
            .collect();

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Annots" => annots,
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(count),
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(595),
                Object::Integer(842),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc
}

/// Builds a PDF whose pages carry link annotations for the given URIs.
pub fn pdf_with_links(pages: &[&[&str]]) -> Vec<u8> {
    pdf_with_annotations(
        pages
            .iter()
            .map(|uris| uris.iter().map(|uri| link_annotation(uri)).collect())
            .collect(),
    )
}
