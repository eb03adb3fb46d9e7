//! Content fetching
//!
//! Downloads every shared resource before anything is written. Either all
//! bodies arrive and a [`FetchedContent`] is returned, or the first failure is.

use reqwest::blocking::Client;
use reqwest::redirect::Policy;

use crate::config::RemoteResource;
#[cfg(test)]
use crate::config::ResourceKind;
use crate::error::{Result, SyncError};

/// Where resource bodies come from
pub trait ContentSource {
    /// Retrieve the body of one resource as text
    fn fetch(&self, resource: &RemoteResource) -> Result<String>;
}

/// Fetches resources with plain blocking HTTP GET requests
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self> {
        // Redirect responses are below 400 and count as success as they are.
        let client = Client::builder()
            .redirect(Policy::none())
            .build()
            .map_err(|e| SyncError::HttpClientFailed {
                reason: e.to_string(),
            })?;
        Ok(Self { client })
    }
}

fn transport_error(resource: &RemoteResource, e: &reqwest::Error) -> SyncError {
    SyncError::FetchFailed {
        resource: resource.kind.name().to_string(),
        url: resource.url.clone(),
        reason: e.to_string(),
    }
}

impl ContentSource for HttpSource {
    fn fetch(&self, resource: &RemoteResource) -> Result<String> {
        let response = self
            .client
            .get(&resource.url)
            .send()
            .map_err(|e| transport_error(resource, &e))?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(SyncError::FetchStatus {
                resource: resource.kind.name().to_string(),
                url: resource.url.clone(),
                status,
            });
        }

        response.text().map_err(|e| transport_error(resource, &e))
    }
}

/// Fully populated set of downloaded bodies
#[derive(Debug, Clone)]
pub struct FetchedContent {
    entries: Vec<(RemoteResource, String)>,
}

impl FetchedContent {
    /// Resources paired with their bodies, in fetch order
    pub fn entries(&self) -> impl Iterator<Item = (&RemoteResource, &str)> {
        self.entries.iter().map(|(r, body)| (r, body.as_str()))
    }

    #[cfg(test)]
    pub fn get(&self, kind: ResourceKind) -> Option<&str> {
        self.entries
            .iter()
            .find(|(r, _)| r.kind == kind)
            .map(|(_, body)| body.as_str())
    }

    #[cfg(test)]
    pub fn from_entries(entries: Vec<(RemoteResource, String)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Fetch every resource in order, stopping at the first failure
pub fn fetch_content(
    source: &dyn ContentSource,
    resources: &[RemoteResource],
) -> Result<FetchedContent> {
    let mut entries = Vec::with_capacity(resources.len());
    for resource in resources {
        let body = source.fetch(resource)?;
        tracing::debug!(
            resource = resource.kind.name(),
            url = %resource.url,
            bytes = body.len(),
            "fetched resource"
        );
        entries.push((resource.clone(), body));
    }
    Ok(FetchedContent { entries })
}
