//! Configuration discovery and effective settings resolution.
//!
//! lintrun reads `lintrun.toml|yaml|yml` from the project root (or closest
//! ancestor) and merges it with CLI flags to produce the effective task
//! options. Defaults:
//! - `format`: `prose`
//! - `fix|force|silent|typeCheck`: false
//! - `target`: none
//!
//! Overrides precedence: CLI > config file > defaults. Patterns given on
//! the command line replace the file's targets with one ad-hoc target.

use crate::cli::Cli;
use crate::models::{LintConfig, LintTaskOptions, Patterns};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `lintrun.toml|yaml`.
pub struct FileConfig {
    pub fix: Option<bool>,
    pub force: Option<bool>,
    pub format: Option<String>,
    pub silent: Option<bool>,
    #[serde(rename = "typeCheck")]
    pub type_check: Option<bool>,
    /// Engine library path, relative to the root unless absolute.
    pub engine: Option<String>,
    #[serde(default, rename = "target")]
    pub targets: Vec<LintConfig>,
}

#[derive(Debug, Clone)]
/// Fully-resolved settings used by the binary after applying precedence.
pub struct Effective {
    pub root: PathBuf,
    pub engine: Option<PathBuf>,
    pub options: LintTaskOptions,
}

/// Walk upward from `start` to detect the project root.
///
/// Stops when a `lintrun.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("lintrun.toml").exists()
            || cur.join("lintrun.yaml").exists()
            || cur.join("lintrun.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `FileConfig` from `lintrun.toml` or `lintrun.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<FileConfig> {
    let toml_path = root.join("lintrun.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: FileConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["lintrun.yaml", "lintrun.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: FileConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve the effective settings by merging CLI flags, discovered config,
/// and defaults.
pub fn resolve_effective(cli: &Cli) -> Effective {
    let start = PathBuf::from(cli.root.as_deref().unwrap_or("."));
    let root = detect_root(&start);
    let cfg = load_config(&root).unwrap_or_default();

    let format = cli
        .format
        .clone()
        .or(cfg.format)
        .unwrap_or_else(|| "prose".to_string());
    // Boolean flags only override when set on the command line
    let fix = cli.fix || cfg.fix.unwrap_or(false);
    let force = cli.force || cfg.force.unwrap_or(false);
    let silent = cli.silent || cfg.silent.unwrap_or(false);
    let type_check = cli.type_check || cfg.type_check.unwrap_or(false);
    let engine = cli
        .engine
        .clone()
        .or(cfg.engine)
        .map(PathBuf::from);

    let configs = if cli.patterns.is_empty() {
        cfg.targets
    } else {
        vec![LintConfig {
            files: Some(Patterns::Many(cli.patterns.clone())),
            project: cli.project.clone().map(PathBuf::from),
            rules: cli.rules.clone().map(PathBuf::from),
            exclude: if cli.exclude.is_empty() {
                None
            } else {
                Some(Patterns::Many(cli.exclude.clone()))
            },
        }]
    };

    Effective {
        root,
        engine,
        options: LintTaskOptions {
            fix,
            force,
            format,
            silent,
            type_check,
            configs,
        },
    }
}
