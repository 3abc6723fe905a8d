use crate::domain::Device;
use crate::extensions::path_ext::FileName;
use crate::thinq::domain::DeviceReport;
use crate::thinq::map_device::{MapDeviceError, map_device};
use futures::stream::FuturesUnordered;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tokio::task::JoinError;
use tokio::{fs, task};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::ReadDirStream;
use tracing::{info, instrument, warn};

/// Loads every device report in `directory`, skipping the reports that cannot be read or mapped.
#[instrument]
pub async fn load_devices_from(directory: &str, extension: &str) -> Result<Vec<Device>, LoaderError> {
    info!("📁 Loading device reports...");
    let files = list_files(directory, extension)
        .await
        .map_err(|e| LoaderError::Io { source: e, path: None })?;

    let results = load_files(files).await;
    let (devices, errors): (Vec<_>, Vec<_>) = results.into_iter().partition(Result::is_ok);

    for error in errors.iter().filter_map(|res| res.as_ref().err()) {
        log_error(error);
    }

    info!("📁 Loading device reports... OK, {} loaded, {} failed", devices.len(), errors.len());
    Ok(devices.into_iter().filter_map(Result::ok).collect())
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
async fn load_files(paths: Vec<PathBuf>) -> Vec<Result<Device, LoaderError>> {
    let reports: Vec<Result<Vec<Result<Device, LoaderError>>, LoaderError>> = FuturesUnordered::from_iter(paths.into_iter().map(|path| async move {
        let content = fs::read_to_string(&path).await.map_err(|e| LoaderError::Io {
            source: e,
            path: Some(path.clone()),
        })?;
        task::spawn_blocking(move || parse_report(&content, path)).await?
    }))
    .collect()
    .await;

    reports
        .into_iter()
        .flat_map(|report| match report {
            Ok(devices) => devices,
            Err(err) => vec![Err(err)],
        })
        .collect()
}

fn parse_report(content: &str, path: PathBuf) -> Result<Vec<Result<Device, LoaderError>>, LoaderError> {
    let report = serde_json::from_str::<DeviceReport>(content).map_err(|e| LoaderError::Parse {
        source: e,
        path: path.clone(),
    })?;

    Ok(report
        .into_devices()
        .into_iter()
        .map(|device_get| {
            map_device(device_get).map_err(|e| LoaderError::MapDevice {
                source: e,
                path: path.clone(),
            })
        })
        .collect())
}

#[instrument(skip_all)]
fn log_error(error: &LoaderError) {
    match error {
        LoaderError::Parse { source, path } => warn!("⚠️ Failed to parse '{}': {}", path.string_file_name(), source),
        LoaderError::MapDevice { source, path } => warn!("⚠️ Skipped a device in '{}': {}", path.string_file_name(), source),
        LoaderError::Io { source, path } => match path {
            Some(path) => warn!("⚠️ Failed to load '{}': {}", path.string_file_name(), source),
            None => warn!("⚠️ {}", source),
        },
        LoaderError::JoinError(err) => warn!("⚠️ {}", err),
    }
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("{}", source)]
    Parse { source: serde_json::Error, path: PathBuf },
    #[error("{}", source)]
    MapDevice { source: MapDeviceError, path: PathBuf },
    #[error("{}", source)]
    Io { source: io::Error, path: Option<PathBuf> },
    #[error(transparent)]
    JoinError(#[from] JoinError),
}
