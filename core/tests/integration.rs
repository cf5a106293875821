//! End-to-end run of the client against the live plugin server.
//!
//! Starts the server on a random port with the manifest files shipped at the
//! workspace root, then drives every client operation over real HTTP using
//! ureq.

use std::path::PathBuf;

use todo_core::{HttpMethod, HttpRequest, HttpResponse, TodoClient, TodoInput};
use todo_plugin_server::{AppState, Config, TodoStore};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Status codes are returned as data rather than `Err` so the client does
/// the interpretation.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.url).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.url).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.url).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.url).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.url).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.url).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers,
        body,
    }
}

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    let config = Config {
        port: addr.port(),
        asset_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(".."),
        ..Config::default()
    };

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_plugin_server::run(listener, AppState::new(config, TodoStore::seeded())).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn plugin_lifecycle() {
    let client = TodoClient::new(&start_server());

    // Service metadata.
    let info = client.parse_service_info(execute(client.build_service_info())).unwrap();
    assert_eq!(info.title, "ToDo API");

    // Seeded list.
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!(todos.len(), 4);
    assert_eq!(todos[0].title_str(), Some("ToDo #1"));

    // Create.
    let req = client.build_create_todo(&TodoInput::titled("Buy milk")).unwrap();
    let created = client.parse_create_todo(execute(req)).unwrap();
    assert_eq!(created.title_str(), Some("Buy milk"));
    assert!(uuid::Uuid::parse_str(&created.id).is_ok());

    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!(todos.len(), 5);

    // Get.
    let fetched = client.parse_get_todo(execute(client.build_get_todo(&created.id))).unwrap();
    assert_eq!(fetched.as_ref(), Some(&created));

    // Update keeps the id.
    let req = client.build_update_todo(&created.id, &TodoInput::titled("Buy oat milk")).unwrap();
    let updated = client.parse_update_todo(execute(req)).unwrap().unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title_str(), Some("Buy oat milk"));

    // Update on an unknown id is null.
    let req = client.build_update_todo("missing", &TodoInput::titled("x")).unwrap();
    assert_eq!(client.parse_update_todo(execute(req)).unwrap(), None);

    // Delete, twice: both acknowledged.
    let ack = client.parse_delete_todo(execute(client.build_delete_todo(&created.id))).unwrap();
    assert!(ack.ok);
    let ack = client.parse_delete_todo(execute(client.build_delete_todo(&created.id))).unwrap();
    assert!(ack.ok);

    // Gone.
    let fetched = client.parse_get_todo(execute(client.build_get_todo(&created.id))).unwrap();
    assert_eq!(fetched, None);
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!(todos.len(), 4);
}

#[test]
fn shipped_manifests_are_served() {
    let client = TodoClient::new(&start_server());

    let response = execute(client.build_openapi());
    assert!(response.header("content-type").unwrap().starts_with("text/yaml"));
    let yaml = client.parse_openapi(response).unwrap();
    assert!(yaml.contains("/todos"));

    let base = client.build_service_info().url;
    let manifest = execute(HttpRequest {
        method: HttpMethod::Get,
        url: format!("{base}.well-known/ai-plugin.json"),
        headers: Vec::new(),
        body: None,
    });
    assert_eq!(manifest.status, 200);
    let manifest: serde_json::Value = serde_json::from_str(&manifest.body).unwrap();
    assert_eq!(manifest["api"]["type"], "openapi");
}
