//! Cached download of the raw registry file.
//!
//! Retrieval is a boundary concern: the cleaning pipeline itself never
//! touches the network. A previously downloaded file is reused unless
//! the caller asks for an update.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use tracing::info;

/// The ANAC open-data endpoint for the aircraft registry CSV.
pub const RAB_CSV_URL: &str =
    "https://sistemas.anac.gov.br/dadosabertos/Aeronaves/RAB/dados_aeronaves.csv";

const USER_AGENT_VALUE: &str = concat!("rab-cleaner/", env!("CARGO_PKG_VERSION"));

/// Downloads `url` into `dir/filename`, skipping the download when the
/// file already exists and `update` is false. Returns the local path.
pub fn fetch_raw(url: &str, dir: &Path, filename: &str, update: bool) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create data dir {}", dir.display()))?;
    let path = dir.join(filename);
    if path.exists() && !update {
        info!(path = %path.display(), "raw registry already downloaded");
        return Ok(path);
    }

    info!(url, "downloading raw registry");
    let response = Client::new()
        .get(url)
        .header(USER_AGENT, USER_AGENT_VALUE)
        .send()
        .with_context(|| format!("request {url}"))?
        .error_for_status()
        .with_context(|| format!("request {url}"))?;
    let body = response.bytes().context("read response body")?;
    fs::write(&path, &body).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), bytes = body.len(), "stored raw registry");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cached_file_short_circuits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.csv");
        fs::write(&path, "cached").unwrap();

        // An unroutable URL proves no request is made
        let got = fetch_raw("http://invalid.invalid/raw.csv", dir.path(), "raw.csv", false)
            .expect("cache hit avoids the network");
        assert_eq!(got, path);
        assert_eq!(fs::read_to_string(&got).unwrap(), "cached");
    }
}
