mod support;

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use gns3tui::tui::{Action, App};
use support::{dead_addr, project, spawn};

const TIMEOUT: Duration = Duration::from_secs(5);

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Feed keys, applying any action they produce.
async fn press(app: &mut App, codes: &[KeyCode]) {
    for code in codes {
        if let Some(action) = app.on_key(key(*code)) {
            app.apply(action).await;
        }
    }
}

fn names(app: &App) -> Vec<String> {
    app.projects.iter().map(|p| p.name.clone()).collect()
}

#[tokio::test]
async fn test_connect_lists_sorted_rows() {
    let stub = spawn(vec![
        project("web", "id-3", "closed"),
        project("core", "id-1", "opened"),
        project("edge", "id-2", "closed"),
    ])
    .await;
    let mut app = App::new(TIMEOUT);

    app.connect(&stub.addr.to_string()).await;

    assert!(app.is_connected());
    assert_eq!(app.title(), format!("GNS3 Server TUI ({})", stub.addr));
    assert_eq!(app.server_version.as_deref(), Some("2.2.44"));
    assert_eq!(names(&app), vec!["core", "edge", "web"]);
    assert_eq!(app.table_state.selected(), Some(0));
}

#[tokio::test]
async fn test_connect_via_set_server_dialog() {
    let stub = spawn(vec![project("core", "id-1", "opened")]).await;
    let mut app = App::new(TIMEOUT);

    app.on_key(key(KeyCode::F(1)));
    let modal = app.modal.as_mut().unwrap();
    modal.input = Some(gns3tui::tui::modal::TextInput::new(stub.addr.to_string()));
    press(&mut app, &[KeyCode::Enter]).await;

    assert!(app.is_connected());
    assert_eq!(names(&app), vec!["core"]);

    // Clear button
    press(&mut app, &[KeyCode::F(1), KeyCode::Tab, KeyCode::Enter]).await;
    assert!(!app.is_connected());
    assert!(app.projects.is_empty());
    assert_eq!(app.title(), "GNS3 Server TUI");
}

#[tokio::test]
async fn test_connect_to_dead_server_stays_disconnected() {
    let mut app = App::new(TIMEOUT);

    app.connect(&dead_addr().await.to_string()).await;

    assert!(!app.is_connected());
    assert!(app.projects.is_empty());
    assert_eq!(app.title(), "GNS3 Server TUI");
}

#[tokio::test]
async fn test_delete_declined_sends_nothing() {
    let stub = spawn(vec![project("core", "id-1", "opened")]).await;
    let mut app = App::new(TIMEOUT);
    app.connect(&stub.addr.to_string()).await;

    press(&mut app, &[KeyCode::F(8), KeyCode::Char('n')]).await;
    press(&mut app, &[KeyCode::F(8), KeyCode::Esc]).await;

    assert!(stub.state.mutations().is_empty());
    assert_eq!(names(&app), vec!["core"]);
}

#[tokio::test]
async fn test_delete_confirmed_removes_row() {
    let stub = spawn(vec![
        project("core", "id-1", "opened"),
        project("edge", "id-2", "closed"),
    ])
    .await;
    let mut app = App::new(TIMEOUT);
    app.connect(&stub.addr.to_string()).await;

    press(&mut app, &[KeyCode::Down, KeyCode::F(8), KeyCode::Enter]).await;

    let mutations = stub.state.mutations();
    assert_eq!(mutations.len(), 1);
    assert_eq!(mutations[0].method, "DELETE");
    assert_eq!(mutations[0].path, "/v2/projects/id-2");
    assert_eq!(names(&app), vec!["core"]);
    assert_eq!(app.table_state.selected(), Some(0));
}

#[tokio::test]
async fn test_rename_reorders_table() {
    let stub = spawn(vec![
        project("core", "id-1", "opened"),
        project("edge", "id-2", "closed"),
    ])
    .await;
    let mut app = App::new(TIMEOUT);
    app.connect(&stub.addr.to_string()).await;

    let mut keys = vec![KeyCode::F(6)];
    keys.extend(std::iter::repeat(KeyCode::Backspace).take("core".len()));
    keys.extend("zulu".chars().map(KeyCode::Char));
    keys.push(KeyCode::Enter);
    press(&mut app, &keys).await;

    let mutations = stub.state.mutations();
    assert_eq!(mutations.len(), 1);
    assert_eq!(mutations[0].method, "PUT");
    assert_eq!(names(&app), vec!["edge", "zulu"]);
    // Cursor follows the renamed project
    assert_eq!(
        app.selected_project().map(|p| p.project_id.as_str()),
        Some("id-1")
    );
}

#[tokio::test]
async fn test_duplicate_adds_row() {
    let stub = spawn(vec![project("core", "id-1", "opened")]).await;
    let mut app = App::new(TIMEOUT);
    app.connect(&stub.addr.to_string()).await;

    let mut keys = vec![KeyCode::F(5)];
    keys.extend("-copy".chars().map(KeyCode::Char));
    keys.push(KeyCode::Enter);
    press(&mut app, &keys).await;

    assert_eq!(names(&app), vec!["core", "core-copy"]);
    assert_eq!(stub.state.mutations()[0].path, "/v2/projects/id-1/duplicate");
}

#[tokio::test]
async fn test_cancelled_prompt_sends_nothing() {
    let stub = spawn(vec![project("core", "id-1", "opened")]).await;
    let mut app = App::new(TIMEOUT);
    app.connect(&stub.addr.to_string()).await;

    press(&mut app, &[KeyCode::F(6), KeyCode::Char('x'), KeyCode::Esc]).await;
    press(&mut app, &[KeyCode::F(5), KeyCode::Tab, KeyCode::Enter]).await;

    assert!(stub.state.mutations().is_empty());
}

#[tokio::test]
async fn test_failed_refresh_keeps_rows() {
    let stub = spawn(vec![
        project("core", "id-1", "opened"),
        project("edge", "id-2", "closed"),
    ])
    .await;
    let mut app = App::new(TIMEOUT);
    app.connect(&stub.addr.to_string()).await;

    stub.state.set_failing(true);
    app.apply(Action::Refresh).await;
    assert_eq!(names(&app), vec!["core", "edge"]);

    // A failed delete is swallowed; the dashboard stays usable
    press(&mut app, &[KeyCode::F(8), KeyCode::Char('y')]).await;
    assert_eq!(names(&app), vec!["core", "edge"]);
    assert!(app.is_connected());
    assert!(!app.should_quit);
}

#[tokio::test]
async fn test_quit() {
    let mut app = App::new(TIMEOUT);
    press(&mut app, &[KeyCode::F(10)]).await;
    assert!(app.should_quit);
}
