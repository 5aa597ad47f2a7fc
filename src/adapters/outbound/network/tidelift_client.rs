use super::chunked_lookup::lookup_in_chunks;
use crate::config::AppConfig;
use crate::ports::outbound::{CatalogRepository, LookupProgressCallback};
use crate::sbom_analysis::domain::{
    MissingPackage, MissingRelease, PackageDetail, PackageLookup, Purl, ReleaseDetail,
    ReleaseLookup,
};
use crate::shared::Result;
use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Tidelift catalog client for bulk package and release lookups
///
/// Requests are sent one chunk at a time with the blocking client. The API
/// key and endpoint come from [`AppConfig`].
pub struct TideliftClient {
    client: Client,
    api_key: String,
    packages_url: String,
    releases_url: String,
    chunk_size: usize,
}

impl TideliftClient {
    const PACKAGES_ENDPOINT: &'static str = "packages/lookup";
    const RELEASES_ENDPOINT: &'static str = "releases/lookup";

    pub fn new(config: &AppConfig) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("tidelift-sbom-info/{}", version);

        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let base = config.api_base_url();
        Ok(Self {
            client,
            api_key: config.api_key().to_string(),
            packages_url: format!("{}/{}", base, Self::PACKAGES_ENDPOINT),
            releases_url: format!("{}/{}", base, Self::RELEASES_ENDPOINT),
            chunk_size: config.chunk_size(),
        })
    }

    /// Sends one lookup request for a chunk of purls
    fn post_lookup<R: DeserializeOwned>(&self, url: &str, purls: &[String]) -> Result<R> {
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(&LookupRequest { purls })
            .send()?;

        if !response.status().is_success() {
            anyhow::bail!("Tidelift API returned status code {}", response.status());
        }

        Ok(response.json()?)
    }
}

impl CatalogRepository for TideliftClient {
    fn lookup_packages(
        &self,
        purls: &[Purl],
        progress: LookupProgressCallback<'_>,
    ) -> PackageLookup {
        lookup_in_chunks(
            purls,
            self.chunk_size,
            |chunk| {
                let response: PackageLookupResponse = self.post_lookup(&self.packages_url, chunk)?;
                Ok((response.packages, response.missing_results))
            },
            progress,
        )
    }

    fn lookup_releases(
        &self,
        purls: &[Purl],
        progress: LookupProgressCallback<'_>,
    ) -> ReleaseLookup {
        lookup_in_chunks(
            purls,
            self.chunk_size,
            |chunk| {
                let response: ReleaseLookupResponse = self.post_lookup(&self.releases_url, chunk)?;
                Ok((response.releases, response.missing_results))
            },
            progress,
        )
    }
}

// Tidelift API wire types

#[derive(Debug, Serialize)]
struct LookupRequest<'a> {
    purls: &'a [String],
}

#[derive(Debug, Deserialize)]
struct PackageLookupResponse {
    #[serde(default)]
    packages: Vec<PackageDetail>,
    #[serde(default)]
    missing_results: Vec<MissingPackage>,
}

#[derive(Debug, Deserialize)]
struct ReleaseLookupResponse {
    #[serde(default)]
    releases: Vec<ReleaseDetail>,
    #[serde(default)]
    missing_results: Vec<MissingRelease>,
}
