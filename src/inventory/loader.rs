use crate::domain::device::Device;
use futures::stream::FuturesUnordered;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task::JoinError;
use tokio::{fs, task};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::ReadDirStream;
use tracing::{info, instrument, warn};

/// Loads every inventory file in `directory`. Each file holds a JSON array of
/// devices. Files that fail to read or parse are logged and skipped; the
/// devices from the remaining files are returned in file-completion order.
#[instrument]
pub async fn load_devices_from(directory: &str, extension: &str) -> Result<Vec<Device>, LoaderError> {
    info!("📁 Loading device inventory...");
    let files = list_files(directory, extension)
        .await
        .map_err(|e| LoaderError::Io { source: e, path: None })?;

    let results = load_files(files).await;
    let (loaded, errors): (Vec<_>, Vec<_>) = results.into_iter().partition(Result::is_ok);

    for error in errors.iter().filter_map(|res| res.as_ref().err()) {
        log_error(error);
    }

    let num_files = loaded.len();
    let devices: Vec<Device> = loaded.into_iter().filter_map(Result::ok).flatten().collect();
    #[rustfmt::skip]
    info!("📁 Loading device inventory... OK, {} device(s) from {} file(s), {} failed", devices.len(), num_files, errors.len());
    Ok(devices)
}

#[instrument]
async fn list_files(directory: &str, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let dir = fs::read_dir(directory).await?;
    let mut entries = ReadDirStream::new(dir);

    while let Some(entry) = entries.next().await {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension) {
                    files.push(path);
                }
            }
            Err(err) => warn!("⚠️ Unable to read directory entry: {}", err),
        }
    }

    Ok(files)
}

#[instrument(skip_all)]
async fn load_files(paths: Vec<PathBuf>) -> Vec<Result<Vec<Device>, LoaderError>> {
    FuturesUnordered::from_iter(paths.into_iter().map(|path| async move {
        match fs::read_to_string(&path).await {
            Ok(content) => {
                task::spawn_blocking(move || {
                    serde_json::from_str::<Vec<Device>>(&content).map_err(|e| LoaderError::Parse { source: e, path })
                })
                .await?
            }
            Err(err) => Err(LoaderError::Io {
                source: err,
                path: Some(path),
            }),
        }
    }))
    .collect()
    .await
}

#[instrument(skip_all)]
fn log_error(error: &LoaderError) {
    match error {
        LoaderError::Parse { source, path } => warn!("⚠️ Failed to load '{}': {}", file_name(path), source),
        LoaderError::Io { source, path } => match path {
            Some(path) => warn!("⚠️ Failed to load '{}': {}", file_name(path), source),
            None => warn!("⚠️ {}", source),
        },
        LoaderError::JoinError(err) => warn!("⚠️ {}", err),
    }
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|s| s.to_str()).unwrap_or("unknown")
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("{}", source)]
    Parse { source: serde_json::Error, path: PathBuf },
    #[error("{}", source)]
    Io { source: io::Error, path: Option<PathBuf> },
    #[error(transparent)]
    JoinError(#[from] JoinError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::status::DeviceStatus;
    use std::env::temp_dir;
    use test_log::test;

    #[tokio::test]
    async fn list_files_returns_all_relevant_files() -> io::Result<()> {
        let temp_dir = temp_dir().join("flotilla_inventory");
        fs::create_dir_all(&temp_dir).await?;

        let file1 = temp_dir.join("devices.json");
        let file2 = temp_dir.join("notes.txt");
        let file3 = temp_dir.join("devices2.json");

        fs::write(&file1, "[]").await?;
        fs::write(&file2, "text").await?;
        fs::write(&file3, "[]").await?;

        let mut files = list_files(temp_dir.to_string_lossy().as_ref(), "json").await?;
        files.sort();
        let string_file_names = files.iter().map(|e| e.to_string_lossy()).collect::<Vec<_>>();

        assert_eq!(
            string_file_names,
            vec![file1.to_string_lossy().into_owned(), file3.to_string_lossy().into_owned(),]
        );

        Ok(())
    }

    #[test(tokio::test)]
    async fn load_files_returns_the_devices_of_a_valid_inventory_file() -> Result<(), LoaderError> {
        let path = PathBuf::from(format!("{}/tests/resources/devices/edge.json", env!("CARGO_MANIFEST_DIR")));
        assert!(path.is_file(), "expected path to be a file");

        let result = load_files(vec![path]).await;
        assert_eq!(result.len(), 1);
        match &result[0] {
            Ok(devices) => {
                assert_eq!(devices.len(), 2);
                assert_eq!(devices[0].id, "edge-001");
                assert_eq!(devices[0].device_status, DeviceStatus::Online);
            }
            Err(err) => assert!(false, "Expected devices, found {:?}", err),
        }

        Ok(())
    }

    #[test(tokio::test)]
    async fn load_files_returns_an_error_for_an_invalid_inventory_file() -> Result<(), LoaderError> {
        let path = PathBuf::from(format!(
            "{}/tests/resources/devices/invalid/unknownStatus.json",
            env!("CARGO_MANIFEST_DIR")
        ));
        assert!(path.is_file(), "expected path to be a file");

        let result = load_files(vec![path]).await;
        assert_eq!(result.len(), 1);
        match &result[0] {
            Err(err) => assert!(matches!(err, LoaderError::Parse { source: _, path: _ })),
            _ => assert!(false, "Expected a LoaderError::Parse"),
        }

        Ok(())
    }
}
