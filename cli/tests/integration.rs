//! Full view lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `TodoView` over real
//! HTTP through the same `UreqTransport` the binary uses. Validates that
//! request building, response parsing and the reducer agree with an actual
//! server, including server-assigned ids.

use todoview_cli::UreqTransport;
use todoview_core::{ApiError, TodoClient, TodoId, TodoItem, TodoView, Transport};

fn id(n: u64) -> TodoId {
    TodoId::from(n)
}

/// Start the mock server on a background thread and return its base URL.
fn spawn_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn view_lifecycle() {
    // Step 1: start mock server on a random port and mount the view.
    let base_url = spawn_server();
    let mut view = TodoView::new(TodoClient::new(&base_url), UreqTransport::new());
    view.mount();
    assert!(view.state().items().is_empty(), "expected empty list");

    // Step 2: add two todos; the server assigns its own ids.
    view.set_draft("  Integration test ");
    view.submit();
    view.set_draft("Second");
    view.submit();
    assert_eq!(
        view.state().items(),
        &[
            TodoItem::new(id(1), "Integration test"),
            TodoItem::new(id(2), "Second"),
        ]
    );
    assert_eq!(view.state().draft_text(), "");

    // Step 3: blank input never reaches the server.
    view.set_draft("   ");
    view.submit();
    assert_eq!(view.state().items().len(), 2);

    // Step 4: look one up directly.
    let fetched = view.lookup(&id(1)).unwrap();
    assert_eq!(fetched.text, "Integration test");

    // Step 5: edit and commit.
    view.begin_edit(id(1));
    view.set_edit_text("Updated text");
    view.commit_edit();
    assert_eq!(view.state().editing(), None);
    assert_eq!(view.state().items()[0].text, "Updated text");
    assert_eq!(view.state().items()[1].text, "Second");

    // Step 6: the server agrees.
    let fetched = view.lookup(&id(1)).unwrap();
    assert_eq!(fetched.text, "Updated text");

    // Step 7: delete.
    view.delete(id(1));
    assert_eq!(
        view.state().items(),
        &[TodoItem::new(id(2), "Second")]
    );

    // Step 8: delete again is a 404; state is unchanged.
    let before = view.state().clone();
    view.delete(id(1));
    assert_eq!(view.state(), &before);
    assert!(matches!(view.lookup(&id(1)), Err(ApiError::NotFound)));

    // Step 9: a fresh view sees exactly what the server holds.
    let mut fresh = TodoView::new(TodoClient::new(&base_url), UreqTransport::new());
    fresh.mount();
    assert_eq!(fresh.state().items(), view.state().items());
}

#[test]
fn unreachable_backend_leaves_view_empty() {
    // Bind then drop to get a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let mut view = TodoView::new(TodoClient::new(&format!("http://{addr}")), UreqTransport::new());
    view.mount();
    view.set_draft("never stored");
    view.submit();

    assert!(view.state().items().is_empty());
    assert_eq!(view.state().draft_text(), "never stored");
}

#[test]
fn client_headers_are_what_reach_the_server() {
    let base_url = spawn_server();
    let client = TodoClient::new(&base_url);
    let transport = UreqTransport::new();
    let candidate = TodoItem::new(id(1), "Typed body");

    // The JSON extractor refuses a body that arrives without its content type.
    let mut bare = client.build_create_todo(&candidate).unwrap();
    bare.headers.clear();
    assert_eq!(transport.execute(bare).unwrap().status, 415);

    let request = client.build_create_todo(&candidate).unwrap();
    let response = transport.execute(request).unwrap();
    assert_eq!(response.status, 201);
    assert!(response
        .headers
        .iter()
        .any(|(name, value)| name == "content-type" && value == "application/json"));
}
