// Data Dragon version lookup.
// Every versioned URL is built from the cached latest patch.

use std::convert::Infallible;

use tracing::warn;

use crate::api::endpoints;

use super::GameData;

pub const VERSION_KEY: &str = "ddragon-version";

impl GameData {
    /// Latest Data Dragon patch, cached for `config.version_ttl`.
    ///
    /// Never fails: if the versions list cannot be fetched the configured
    /// fallback patch is returned, and cached like a real answer.
    pub async fn latest_version(&self) -> String {
        self.cache
            .get_with_ttl(
                VERSION_KEY,
                || async { Ok::<_, Infallible>(self.fetch_latest_version().await) },
                self.config.version_ttl,
            )
            .await
            .unwrap_or_else(|never| match never {})
    }

    /// Versioned Data Dragon CDN root for the latest patch.
    pub async fn ddragon_base(&self) -> String {
        let version = self.latest_version().await;
        endpoints::ddragon_cdn(&self.config, &version)
    }

    /// Fallback patch for callers that cannot await.
    pub fn current_patch(&self) -> &str {
        &self.config.fallback_version
    }

    async fn fetch_latest_version(&self) -> String {
        let url = endpoints::versions_url(&self.config);
        match self.client.get_json::<Vec<String>>(&url).await {
            Ok(versions) => match versions.into_iter().next() {
                Some(latest) => latest,
                None => {
                    warn!(fallback = %self.config.fallback_version, "versions list is empty");
                    self.config.fallback_version.clone()
                }
            },
            Err(e) => {
                warn!(
                    error = %e,
                    fallback = %self.config.fallback_version,
                    "failed to fetch latest Data Dragon version"
                );
                self.config.fallback_version.clone()
            }
        }
    }
}
