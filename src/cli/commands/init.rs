use std::path::Path;

use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::store::{JsonFileStore, UserStore};

pub async fn handle(path: &Path, force: bool, output_format: OutputFormat) -> anyhow::Result<()> {
    if tokio::fs::try_exists(path).await? && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    JsonFileStore::new(path).save_all(&[]).await?;

    output_success(output_format, &format!("Initialized {}", path.display()), None)
}
