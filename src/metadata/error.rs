use std::fmt;

/// The metadata document could not be retrieved or parsed.
///
/// Fatal for the page view: it is shown to the user once and nothing else is rendered.
#[derive(Debug)]
pub enum MetadataFetchError {
    /// The request never produced a response (DNS, connection, TLS)
    Request { url: String, reason: String },
    /// The server answered with a non-success status
    Status { url: String, status: u16 },
    /// A local metadata file could not be read
    Read { path: String, reason: String },
    /// The document is not valid metadata JSON
    Parse { source: String, reason: String },
}

impl fmt::Display for MetadataFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataFetchError::Request { url, reason } => {
                write!(f, "Could not reach {}: {}", url, reason)
            }
            MetadataFetchError::Status { url, status } => {
                write!(f, "Server returned HTTP {} for {}", status, url)
            }
            MetadataFetchError::Read { path, reason } => {
                write!(f, "Could not read {}: {}", path, reason)
            }
            MetadataFetchError::Parse { source, reason } => {
                write!(f, "Invalid metadata in {}: {}", source, reason)
            }
        }
    }
}

impl std::error::Error for MetadataFetchError {}
