use crate::app::cli::Cli;
use crate::app::error::BundleError;
use crate::app::models::{BundleConfig, CONFIG_EXT, DEFAULT_OUTPUT};
use ignore::WalkBuilder;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the first `*.file_bundle_rc` file directly inside `dir`, by file name order.
pub fn find_config_in(dir: &Path) -> Option<PathBuf> {
    let walker = WalkBuilder::new(dir)
        .max_depth(Some(1))
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for result in walker {
        match result {
            Ok(entry) => {
                if entry.depth() == 0 {
                    continue;
                }
                let named_like_config = entry.file_name().to_string_lossy().ends_with(CONFIG_EXT);
                if named_like_config && entry.path().is_file() {
                    return Some(entry.into_path());
                }
            }
            Err(err) => log::warn!("Error reading directory entry: {}", err),
        }
    }

    None
}

/// Picks the config file: the `-i` path as given, then with the extension
/// appended, then whatever `find_config_in` turns up in `cwd`.
pub fn locate_config(input: Option<&Path>, cwd: &Path) -> Result<PathBuf, BundleError> {
    if let Some(input) = input {
        let given = cwd.join(input);
        if given.exists() {
            return Ok(given);
        }

        let mut with_ext = OsString::from(given.as_os_str());
        with_ext.push(CONFIG_EXT);
        let with_ext = PathBuf::from(with_ext);
        if with_ext.exists() {
            return Ok(with_ext);
        }

        log::debug!(
            "{} not found, searching {} instead",
            input.display(),
            cwd.display()
        );
    }

    find_config_in(cwd).ok_or_else(|| BundleError::ConfigNotFound {
        dir: cwd.to_path_buf(),
        ext: CONFIG_EXT,
    })
}

pub fn parse_config(path: &Path) -> Result<BundleConfig, BundleError> {
    let content =
        fs::read_to_string(path).map_err(|e| BundleError::ConfigRead(path.to_path_buf(), e))?;

    toml::from_str(&content).map_err(|e| BundleError::MalformedConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// `-o` wins over the config's `output`, and an empty result falls back to the default.
fn apply_output_override(config: &mut BundleConfig, output: Option<&str>) {
    if let Some(output) = output.filter(|o| !o.is_empty()) {
        config.output = output.to_string();
    }
    if config.output.is_empty() {
        config.output = DEFAULT_OUTPUT.to_string();
    }
}

pub fn resolve_config(cli: &Cli, cwd: &Path) -> Result<BundleConfig, BundleError> {
    let path = locate_config(cli.input.as_deref(), cwd)?;
    log::debug!("Using config {}", path.display());

    let mut config = parse_config(&path)?;
    apply_output_override(&mut config, cli.output.as_deref());

    Ok(config)
}
