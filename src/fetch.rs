//! Corpus acquisition: streaming download and extraction of the gzipped tar
//! archive that holds the review polarity corpus

use crate::{
    config::Config,
    progress::{ProgressReport, ProgressTracker},
    Result,
};
use anyhow::Context;
use async_compression::tokio::bufread::GzipDecoder;
use futures::stream::TryStreamExt;
use reqwest::Response;
use std::{
    io::{self, ErrorKind},
    path::Path,
    sync::Arc,
};
use tokio::{fs, io::AsyncRead};
use tokio_util::io::StreamReader;

/// Suffix of the staging directory used during extraction
///
/// Extraction lands here first and the directory is renamed to the marker
/// path on success, so an extraction that dies halfway never leaves behind a
/// marker directory that later runs would trust.
const STAGING_SUFFIX: &str = ".partial";

/// Ensure a local extracted copy of the corpus exists
///
/// If the marker directory is already present, this is a no-op: its content
/// is trusted unconditionally and no network access happens. Otherwise the
/// archive is streamed from the network straight through gzip and tar
/// decoding, so no archive file ever needs to be cleaned up from disk.
pub async fn download_and_extract(
    config: Arc<Config>,
    client: reqwest::Client,
    report: &ProgressReport,
) -> Result<()> {
    let marker_dir = config.marker_dir();
    if marker_dir.exists() {
        log::info!("Corpus already downloaded and extracted");
        return Ok(());
    }

    // Start the download
    log::info!("Downloading {}", config.archive_name());
    let url = &*config.corpus_url;
    let context = || format!("initiating download of {url}");
    let response = client
        .get(url)
        .send()
        .await
        .and_then(Response::error_for_status)
        .with_context(context)?;
    let bytes = report.add_bytes("Downloading and extracting corpus");
    if let Some(total) = response.content_length() {
        bytes.set_total(total);
    }

    // Slice the download into chunks of bytes
    let tracker = bytes.clone();
    let gz_bytes = StreamReader::new(response.bytes_stream().map_ok(move |bytes_block| {
        // Track how many input bytes have been downloaded so far
        tracker.make_progress(bytes_block.len() as u64);
        bytes_block
    }).map_err(|e| io::Error::new(ErrorKind::Other, Box::new(e))));

    // Apply gzip decoder to compressed bytes and unpack the tar stream inside
    let staging_dir = staging_path(&marker_dir);
    extract_tar_gz(gz_bytes, &staging_dir)
        .await
        .with_context(|| format!("extracting {url}"))?;
    bytes.finish();

    // Publish the fully extracted tree under the marker path
    fs::rename(&staging_dir, &marker_dir)
        .await
        .context("moving the extracted corpus into place")?;
    log::info!("Successfully downloaded and extracted the corpus");
    Ok(())
}

/// Decode a gzipped tar byte stream into a freshly created directory
///
/// A leftover directory from a previously interrupted extraction is discarded
/// first.
pub async fn extract_tar_gz(gz_bytes: impl AsyncRead + Unpin + Send, dest: &Path) -> Result<()> {
    if dest.exists() {
        fs::remove_dir_all(dest)
            .await
            .context("discarding a previous partial extraction")?;
    }
    fs::create_dir_all(dest)
        .await
        .context("creating the extraction directory")?;
    let tar_bytes = GzipDecoder::new(tokio::io::BufReader::new(gz_bytes));
    tokio_tar::Archive::new(tar_bytes)
        .unpack(dest)
        .await
        .context("unpacking the tar archive")?;
    Ok(())
}

/// Staging directory associated with a marker directory
fn staging_path(marker_dir: &Path) -> std::path::PathBuf {
    let mut name = marker_dir.as_os_str().to_os_string();
    name.push(STAGING_SUFFIX);
    name.into()
}
