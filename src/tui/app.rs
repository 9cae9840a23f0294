//! Dashboard state and the key → action state machine.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::TableState;
use tracing::{debug, info, warn};

use crate::controller::Gns3Controller;
use crate::types::{Project, ServerAddr};

use super::modal::{Modal, ModalKind, Outcome};

pub const BASE_TITLE: &str = "GNS3 Server TUI";

/// Rows skipped by PageUp/PageDown.
const PAGE: usize = 10;

/// Requests produced by key handling, executed against the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Refresh,
    Delete { project_id: String },
    Rename { project_id: String, name: String },
    Duplicate { project_id: String, name: String },
    Connect(String),
    Disconnect,
}

pub struct App {
    controller: Option<Gns3Controller>,
    timeout: Duration,
    /// Version reported by the connected server.
    pub server_version: Option<String>,
    pub projects: Vec<Project>,
    pub table_state: TableState,
    pub modal: Option<Modal>,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(timeout: Duration) -> Self {
        Self {
            controller: None,
            timeout,
            server_version: None,
            projects: Vec::new(),
            table_state: TableState::default(),
            modal: None,
            show_help: false,
            should_quit: false,
        }
    }

    /// Use an already built controller without probing it.
    pub fn with_controller(controller: Gns3Controller, timeout: Duration) -> Self {
        let mut app = Self::new(timeout);
        app.controller = Some(controller);
        app
    }

    pub fn is_connected(&self) -> bool {
        self.controller.is_some()
    }

    pub fn title(&self) -> String {
        match &self.controller {
            Some(c) => format!("{BASE_TITLE} ({})", c.addr()),
            None => BASE_TITLE.to_string(),
        }
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.table_state
            .selected()
            .and_then(|i| self.projects.get(i))
    }

    /// Replace the rows, keeping the cursor on the same project when it survives.
    pub fn set_projects(&mut self, projects: Vec<Project>) {
        let previous = self.selected_project().map(|p| p.project_id.clone());
        let old_index = self.table_state.selected().unwrap_or(0);
        self.projects = projects;

        let index = previous
            .and_then(|id| self.projects.iter().position(|p| p.project_id == id))
            .unwrap_or_else(|| old_index.min(self.projects.len().saturating_sub(1)));

        if self.projects.is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(index));
        }
    }

    fn clear_projects(&mut self) {
        self.projects.clear();
        self.table_state.select(None);
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.projects.is_empty() {
            return;
        }
        let last = self.projects.len() - 1;
        let current = self.table_state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(last);
        self.table_state.select(Some(next));
    }

    /// Translate a key press into an action. Modal dialogs and the help overlay take
    /// the key first.
    pub fn on_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        if let Some(modal) = self.modal.as_mut() {
            let outcome = modal.handle_key(key)?;
            let kind = modal.kind.clone();
            self.modal = None;
            return Self::resolve(kind, outcome);
        }

        if self.show_help {
            self.show_help = false;
            return None;
        }

        match key.code {
            KeyCode::F(10) | KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::F(1) => {
                let current = self
                    .controller
                    .as_ref()
                    .map(|c| c.addr().clone())
                    .unwrap_or_default();
                self.modal = Some(Modal::set_server(&current.to_string()));
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::PageUp => self.move_cursor(-(PAGE as isize)),
            KeyCode::PageDown => self.move_cursor(PAGE as isize),
            KeyCode::Home => self.move_cursor(isize::MIN),
            KeyCode::End => self.move_cursor(isize::MAX),
            _ if !self.is_connected() => {}
            KeyCode::F(2) | KeyCode::Char('r') => return Some(Action::Refresh),
            KeyCode::F(5) => {
                let p = self.selected_project()?;
                self.modal = Some(Modal::duplicate(&p.project_id, &p.name));
            }
            KeyCode::F(6) => {
                let p = self.selected_project()?;
                self.modal = Some(Modal::rename(&p.project_id, &p.name));
            }
            KeyCode::F(8) => {
                let p = self.selected_project()?;
                self.modal = Some(Modal::confirm_delete(&p.project_id, &p.name));
            }
            _ => {}
        }

        None
    }

    fn resolve(kind: ModalKind, outcome: Outcome) -> Option<Action> {
        match (kind, outcome) {
            (ModalKind::SetServer, Outcome::Confirmed(input)) => {
                Some(Action::Connect(input.unwrap_or_default()))
            }
            (ModalKind::SetServer, Outcome::Dismissed) => Some(Action::Disconnect),
            (_, Outcome::Dismissed) => None,
            (ModalKind::Delete { project_id }, Outcome::Confirmed(_)) => {
                Some(Action::Delete { project_id })
            }
            (ModalKind::Rename { project_id }, Outcome::Confirmed(name)) => {
                let name = non_empty(name)?;
                Some(Action::Rename { project_id, name })
            }
            (ModalKind::Duplicate { project_id }, Outcome::Confirmed(name)) => {
                let name = non_empty(name)?;
                Some(Action::Duplicate { project_id, name })
            }
        }
    }

    /// Run an action. Controller failures are logged and otherwise ignored.
    pub async fn apply(&mut self, action: Action) {
        debug!(?action, "applying action");

        match action {
            Action::Quit => self.should_quit = true,
            Action::Refresh => self.refresh().await,
            Action::Connect(raw) => self.connect(&raw).await,
            Action::Disconnect => self.disconnect(),
            Action::Delete { project_id } => {
                if let Some(c) = &self.controller {
                    if let Err(e) = c.delete_project(&project_id).await {
                        warn!(%project_id, error = %e, "delete failed");
                    }
                }
                self.refresh().await;
            }
            Action::Rename { project_id, name } => {
                if let Some(c) = &self.controller {
                    if let Err(e) = c.rename(&project_id, &name).await {
                        warn!(%project_id, %name, error = %e, "rename failed");
                    }
                }
                self.refresh().await;
            }
            Action::Duplicate { project_id, name } => {
                if let Some(c) = &self.controller {
                    if let Err(e) = c.duplicate(&project_id, &name).await {
                        warn!(%project_id, %name, error = %e, "duplicate failed");
                    }
                }
                self.refresh().await;
            }
        }
    }

    /// Re-fetch the project list. On failure the current rows stay.
    pub async fn refresh(&mut self) {
        let Some(controller) = &self.controller else {
            return;
        };

        let result = controller.projects().await;
        match result {
            Ok(projects) => {
                debug!(count = projects.len(), "projects refreshed");
                self.set_projects(projects);
            }
            Err(e) => warn!(error = %e, "project refresh failed"),
        }
    }

    /// Switch to the server in `raw`; an empty, invalid or unreachable address disconnects.
    pub async fn connect(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            self.disconnect();
            return;
        }

        let addr: ServerAddr = match raw.parse() {
            Ok(addr) => addr,
            Err(e) => {
                warn!(error = %e, "invalid server address");
                self.disconnect();
                return;
            }
        };

        let controller = match Gns3Controller::with_timeout(addr.clone(), self.timeout) {
            Ok(c) => c,
            Err(e) => {
                warn!(%addr, error = %e, "could not build controller");
                self.disconnect();
                return;
            }
        };

        match controller.version().await {
            Ok(version) => {
                info!(%addr, version = %version.version, "connected to controller");
                self.server_version = Some(version.version);
                self.controller = Some(controller);
                self.clear_projects();
                self.refresh().await;
            }
            Err(e) => {
                warn!(%addr, error = %e, "controller is not alive");
                self.disconnect();
            }
        }
    }

    pub fn disconnect(&mut self) {
        if self.controller.take().is_some() {
            info!("disconnected from controller");
        }
        self.server_version = None;
        self.clear_projects();
    }
}

fn non_empty(name: Option<String>) -> Option<String> {
    name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}
