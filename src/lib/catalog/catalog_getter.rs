use std::fs;

use log::{error, info};
use reqwest::Client;

use super::error::CatalogError;

/// A trait, necessary for every entity that will be used for getting the catalog CSV text.
///
/// Every failure is reported as [`CatalogError::Fetch`]; the cause only goes to the log.
#[allow(async_fn_in_trait)]
pub trait CatalogGetter {
    async fn get_catalog(&self, source: &str) -> Result<String, CatalogError>;
}

/// Allows to use Client for downloading the catalog from an http(s) URL.
impl CatalogGetter for Client {
    async fn get_catalog(&self, source: &str) -> Result<String, CatalogError> {
        info!("Downloading catalog from {}", source);
        let response = self.get(source).send().await.map_err(|err| {
            error!("Request to {} failed: {}", source, err);
            CatalogError::Fetch
        })?;
        if !response.status().is_success() {
            error!("{} answered with {}", source, response.status());
            return Err(CatalogError::Fetch);
        }
        response.text().await.map_err(|err| {
            error!("Could not read catalog body from {}: {}", source, err);
            CatalogError::Fetch
        })
    }
}

/// Reads the catalog from the local filesystem.
pub struct LocalFile;

impl CatalogGetter for LocalFile {
    async fn get_catalog(&self, source: &str) -> Result<String, CatalogError> {
        info!("Reading catalog from {}", source);
        fs::read_to_string(source).map_err(|err| {
            error!("Could not read {}: {}", source, err);
            CatalogError::Fetch
        })
    }
}

pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}
