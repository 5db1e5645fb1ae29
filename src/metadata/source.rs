use log::{debug, info};
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::{MetadataFetchError, MetadataTable};
use crate::http::{HttpClient, status_of};

/// Where the metadata document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataSource {
    Url(String),
    File(PathBuf),
}

impl FromStr for MetadataSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(MetadataSource::Url(s.to_string()))
        } else {
            Ok(MetadataSource::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for MetadataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataSource::Url(url) => f.write_str(url),
            MetadataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load the metadata table once. There is no retry: any failure is final.
#[tracing::instrument(skip(http_client))]
pub async fn load(
    http_client: &HttpClient,
    source: &MetadataSource,
) -> Result<MetadataTable, MetadataFetchError> {
    info!("Loading metadata from {}...", source);

    let table = match source {
        MetadataSource::Url(url) => fetch(http_client, url).await?,
        MetadataSource::File(path) => {
            let json = tokio::fs::read_to_string(path).await.map_err(|e| {
                MetadataFetchError::Read {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                }
            })?;
            MetadataTable::from_json(&json).map_err(|e| MetadataFetchError::Parse {
                source: path.display().to_string(),
                reason: e.to_string(),
            })?
        }
    };

    debug!("Loaded metadata: {:?}", table);
    Ok(table)
}

async fn fetch(http_client: &HttpClient, url: &str) -> Result<MetadataTable, MetadataFetchError> {
    http_client
        .get_json::<MetadataTable>(url)
        .await
        .map_err(|e| {
            if let Some(status) = status_of(&e) {
                MetadataFetchError::Status {
                    url: url.to_string(),
                    status: status.as_u16(),
                }
            } else if e.downcast_ref::<serde_json::Error>().is_some() {
                MetadataFetchError::Parse {
                    source: url.to_string(),
                    reason: e.root_cause().to_string(),
                }
            } else {
                MetadataFetchError::Request {
                    url: url.to_string(),
                    reason: format!("{:#}", e),
                }
            }
        })
}
