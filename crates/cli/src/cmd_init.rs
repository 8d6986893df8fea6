// SPDX-License-Identifier: MIT

//! The `init` command: write a starter configuration.

use anyhow::{Context as _, bail};

use crate::config::{CONFIG_FILE_NAME, defaults};

pub fn run(force: bool) -> anyhow::Result<()> {
    let path = std::env::current_dir()
        .context("cannot determine working directory")?
        .join(CONFIG_FILE_NAME);

    if path.exists() && !force {
        bail!("{CONFIG_FILE_NAME} already exists (use --force to overwrite)");
    }

    std::fs::write(&path, defaults::STARTER)
        .with_context(|| format!("cannot write {}", path.display()))?;
    println!("Created {CONFIG_FILE_NAME}");
    Ok(())
}
