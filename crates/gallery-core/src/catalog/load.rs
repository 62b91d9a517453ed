//! Fetch the catalog JSON from a local path or over HTTP.

use std::path::Path;
use std::time::Duration;

use super::CatalogError;

/// True for sources that should be fetched with an HTTP GET.
pub(crate) fn is_remote(source: &str) -> bool {
    let lower = source.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Reads the raw catalog text from `source` (path or http(s) URL).
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub(crate) fn read_source(source: &str) -> Result<String, CatalogError> {
    if is_remote(source) {
        fetch(source)
    } else {
        std::fs::read_to_string(Path::new(source)).map_err(|e| CatalogError::Read {
            source_name: source.to_string(),
            error: e,
        })
    }
}

fn fetch(url: &str) -> Result<String, CatalogError> {
    let transport = |e: curl::Error| CatalogError::Fetch {
        url: url.to_string(),
        reason: e.to_string(),
    };

    let mut body: Vec<u8> = Vec::new();
    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(transport)?;
    easy.get(true).map_err(transport)?;
    easy.follow_location(true).map_err(transport)?;
    easy.connect_timeout(Duration::from_secs(15)).map_err(transport)?;
    easy.timeout(Duration::from_secs(30)).map_err(transport)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(transport)?;
        transfer.perform().map_err(transport)?;
    }

    let code = easy.response_code().map_err(transport)?;
    if !(200..300).contains(&code) {
        return Err(CatalogError::Fetch {
            url: url.to_string(),
            reason: format!("HTTP {}", code),
        });
    }
    tracing::debug!(url, bytes = body.len(), "fetched catalog");

    String::from_utf8(body).map_err(|_| CatalogError::Fetch {
        url: url.to_string(),
        reason: "response is not UTF-8".to_string(),
    })
}
