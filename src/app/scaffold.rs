use crate::app::error::BundleError;
use crate::app::models::{BundleConfig, CONFIG_EXT};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const MAKEFILE: &str = "\
BUNDLE ?= file-bundle

.PHONY: bundle clean

bundle:
\t$(BUNDLE) -i _{ext}

clean:
\trm -f {output}
";

/// File name `--touch` writes the starter config to.
pub fn starter_file_name() -> String {
    format!("_{}", CONFIG_EXT)
}

/// Writes the starter config into `cwd`, or into `dir` together with a
/// Makefile when a directory is requested. Returns the files written.
/// Without `force`, nothing is written if any target already exists.
pub fn touch(cwd: &Path, dir: Option<&Path>, force: bool) -> Result<Vec<PathBuf>> {
    let config = BundleConfig::starter();
    let rendered = toml::to_string(&config).context("Could not encode default config")?;

    let target = match dir {
        Some(dir) => cwd.join(dir),
        None => cwd.to_path_buf(),
    };

    let mut files = vec![(target.join(starter_file_name()), rendered)];
    if dir.is_some() {
        let makefile = MAKEFILE
            .replace("{ext}", CONFIG_EXT)
            .replace("{output}", &config.output);
        files.push((target.join("Makefile"), makefile));
    }

    if !force {
        if let Some((existing, _)) = files.iter().find(|(path, _)| path.exists()) {
            return Err(BundleError::ScaffoldExists(existing.clone()).into());
        }
    }

    fs::create_dir_all(&target).map_err(|e| BundleError::Scaffold(target.clone(), e))?;

    let mut written = Vec::new();
    for (path, content) in files {
        fs::write(&path, content).map_err(|e| BundleError::Scaffold(path.clone(), e))?;
        written.push(path);
    }

    Ok(written)
}
