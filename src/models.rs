//! Shared data models: task options, lint targets, and engine result records.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
/// One glob pattern or a sequence of them.
pub enum Patterns {
    One(String),
    Many(Vec<String>),
}

impl Patterns {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Patterns::One(p) => vec![p.clone()],
            Patterns::Many(v) => v.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
/// One lint target: a file set plus optional rule and project context.
pub struct LintConfig {
    /// Explicit file patterns. When absent, file names come from the
    /// type-check program if one is active.
    #[serde(default)]
    pub files: Option<Patterns>,
    /// Type-check project descriptor handed to the engine.
    #[serde(default)]
    pub project: Option<PathBuf>,
    /// Rule-configuration path override; default resolution is relative to
    /// each linted file.
    #[serde(default)]
    pub rules: Option<PathBuf>,
    /// Glob-ignore patterns removed from the resolved file set.
    #[serde(default)]
    pub exclude: Option<Patterns>,
}

#[derive(Debug, Clone)]
/// Run-time settings for one lint task invocation.
pub struct LintTaskOptions {
    pub fix: bool,
    /// Exit 0 even when failures are present.
    pub force: bool,
    pub format: String,
    pub silent: bool,
    pub type_check: bool,
    pub configs: Vec<LintConfig>,
}

impl Default for LintTaskOptions {
    fn default() -> Self {
        LintTaskOptions {
            fix: false,
            force: false,
            format: "prose".to_string(),
            silent: false,
            type_check: false,
            configs: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Severity attached to a failure by the engine.
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Zero-based source position.
pub struct Position {
    pub line: usize,
    pub character: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// A single rule violation reported by the engine.
///
/// Equality covers every field; two failures are duplicates iff they
/// describe the same violation at the same location.
pub struct LintFailure {
    pub file: String,
    pub rule: String,
    pub severity: Severity,
    pub message: String,
    pub start: Position,
    pub end: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A text replacement computed by the engine for `--fix`.
pub struct LintFix {
    pub file: String,
    pub start: usize,
    pub length: usize,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
/// Accumulated lint outcome across targets.
pub struct LintResult {
    /// Insertion-ordered, deduplicated by equality.
    pub failures: Vec<LintFailure>,
    /// Concatenated across targets; `None` when no target produced any.
    pub fixes: Option<Vec<LintFix>>,
}

impl LintResult {
    /// Fold another target's outcome into this one.
    ///
    /// Failures already present (by equality) are dropped; fixes are
    /// appended unconditionally.
    pub fn merge(&mut self, other: LintResult) {
        for failure in other.failures {
            if !self.failures.contains(&failure) {
                self.failures.push(failure);
            }
        }
        if let Some(mut fixes) = other.fixes {
            self.fixes.get_or_insert_with(Vec::new).append(&mut fixes);
        }
    }
}
