use std::{
    io,
    path::{Path, PathBuf},
};
use tokio::{fs, io::AsyncWriteExt};

/// URL prefix under which stored files are served.
pub const PUBLIC_PREFIX: &str = "/uploads";

const FALLBACK_NAME: &str = "upload";

/// Directory that receives uploaded images.
#[derive(Debug, Clone)]
pub struct UploadDir {
    root: PathBuf,
    max_bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    file_name: String,
    path: PathBuf,
}

impl StoredFile {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn public_path(&self) -> String {
        format!("{PUBLIC_PREFIX}/{}", self.file_name)
    }
}

impl UploadDir {
    pub async fn create(root: impl Into<PathBuf>, max_bytes: usize) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await?;

        info!("storing uploads in {}", root.display());

        Ok(Self { root, max_bytes })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Upper bound for a whole create request body.
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Writes `data` as `<unix-millis>-<original name>`. A taken name bumps the
    /// timestamp, an existing file is never overwritten.
    pub async fn store(&self, original_name: &str, data: &[u8]) -> io::Result<StoredFile> {
        let name = sanitize_file_name(original_name);
        let mut stamp = chrono::Utc::now().timestamp_millis();

        loop {
            let file_name = format!("{stamp}-{name}");
            let path = self.root.join(&file_name);

            let mut file = match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(error) if error.kind() == io::ErrorKind::AlreadyExists => {
                    stamp += 1;
                    continue;
                }
                Err(error) => return Err(error),
            };

            if let Err(error) = write_all(&mut file, data).await {
                drop(file);
                let _ = fs::remove_file(&path).await;
                return Err(error);
            }

            debug!("stored upload {} ({} bytes)", file_name, data.len());

            return Ok(StoredFile { file_name, path });
        }
    }

    pub async fn remove(&self, file: &StoredFile) -> io::Result<()> {
        fs::remove_file(&file.path).await
    }
}

async fn write_all(file: &mut fs::File, data: &[u8]) -> io::Result<()> {
    file.write_all(data).await?;
    file.flush().await
}

/// Keeps the last path component of a client supplied name.
fn sanitize_file_name(name: &str) -> &str {
    match name.rsplit(['/', '\\']).next().unwrap_or_default() {
        "" | "." | ".." => FALLBACK_NAME,
        name => name,
    }
}
