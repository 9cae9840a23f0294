use std::time::Duration;

use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::{Gns3Error, Result};
use crate::types::{sort_by_name, Project, ProjectUpdate, ServerAddr, ServerVersion};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the REST API (v2) of a single GNS3 controller.
pub struct Gns3Controller {
    addr: ServerAddr,
    base: Url,
    http: Client,
}

impl Gns3Controller {
    pub fn new(addr: ServerAddr) -> Result<Self> {
        Self::with_timeout(addr, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(addr: ServerAddr, timeout: Duration) -> Result<Self> {
        let raw = format!("http://{addr}/");
        let base = Url::parse(&raw).map_err(|_| Gns3Error::InvalidUrl(raw))?;
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self { addr, base, http })
    }

    pub fn addr(&self) -> &ServerAddr {
        &self.addr
    }

    /// Build `http://host:port/v2/<segments...>`, encoding each segment.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.clear().push("v2").extend(segments);
        }
        url
    }

    async fn send(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&ProjectUpdate>,
    ) -> Result<Response> {
        let url = self.url(segments);
        debug!(%method, %url, "controller request");

        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!(%method, %url, error = %e, "controller unreachable");
            e
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read response body>".to_string());
            warn!(%method, %url, status = status.as_u16(), "controller rejected request");
            return Err(Gns3Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let response = self.send(Method::GET, segments, None).await?;
        Ok(response.json().await?)
    }

    pub async fn version(&self) -> Result<ServerVersion> {
        self.get(&["version"]).await
    }

    /// Whether the controller answers its version endpoint.
    pub async fn is_alive(&self) -> bool {
        self.version().await.is_ok()
    }

    /// All projects known to the controller, sorted by name.
    pub async fn projects(&self) -> Result<Vec<Project>> {
        let mut projects: Vec<Project> = self.get(&["projects"]).await?;
        sort_by_name(&mut projects);
        Ok(projects)
    }

    pub async fn project(&self, project_id: &str) -> Result<Project> {
        match self.get(&["projects", project_id]).await {
            Err(Gns3Error::Api { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(Gns3Error::ProjectNotFound(project_id.to_string()))
            }
            other => other,
        }
    }

    pub async fn delete_project(&self, project_id: &str) -> Result<()> {
        self.send(Method::DELETE, &["projects", project_id], None)
            .await?;
        Ok(())
    }

    pub async fn update_project(&self, project_id: &str, update: &ProjectUpdate) -> Result<Project> {
        let response = self
            .send(Method::PUT, &["projects", project_id], Some(update))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn duplicate_project(
        &self,
        project_id: &str,
        update: &ProjectUpdate,
    ) -> Result<Project> {
        let response = self
            .send(Method::POST, &["projects", project_id, "duplicate"], Some(update))
            .await?;
        Ok(response.json().await?)
    }

    /// Rename after re-reading the project so the server-side id is used.
    pub async fn rename(&self, project_id: &str, name: &str) -> Result<Project> {
        let current = self.project(project_id).await?;
        self.update_project(&current.project_id, &ProjectUpdate::rename(name))
            .await
    }

    /// Duplicate under a new name after re-reading the source project.
    pub async fn duplicate(&self, project_id: &str, name: &str) -> Result<Project> {
        let current = self.project(project_id).await?;
        self.duplicate_project(&current.project_id, &ProjectUpdate::rename(name))
            .await
    }
}
