//! The engine seam: traits implemented by a project's lint engine.
//!
//! The runner never performs any lint analysis itself. It drives an
//! implementation of [`LintEngine`] discovered in the target project
//! (see [`loader`]), so the project's own engine version and rules are
//! honored rather than a copy bundled with this tool.

pub mod loader;

use crate::models::{LintFailure, LintFix, LintResult};
use semver::{Version, VersionReq};
use serde_json::Value as Json;
use std::any::Any;
use std::path::{Path, PathBuf};

/// Options handed to the engine when constructing a per-target linter.
#[derive(Debug, Clone)]
pub struct LinterOptions {
    pub fix: bool,
    pub formatter: String,
}

/// Opaque type-aware analysis context produced by
/// [`LintEngine::create_program`]. The runner never inspects it; engines
/// downcast to their own concrete type.
pub struct Program(pub Box<dyn Any>);

#[derive(Debug, Clone)]
/// Rule configuration resolved by the engine for a file. Opaque to the
/// runner, which only caches it per directory and passes it back.
pub struct RuleConfiguration(pub Json);

/// Failures reported by an engine operation.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("no engine library found; searched {0:?}")]
    NotFound(Vec<PathBuf>),

    #[error("failed to load engine library {}: {reason}", .path.display())]
    Load { path: PathBuf, reason: String },

    #[error("engine library {} does not export `{symbol}`", .path.display())]
    MissingSymbol { path: PathBuf, symbol: &'static str },

    #[error("cannot build analysis program from {}: {reason}", .project.display())]
    Program { project: PathBuf, reason: String },

    #[error("rule configuration resolution failed for {}: {reason}", .file.display())]
    Configuration { file: PathBuf, reason: String },

    #[error("lint failed on {}: {reason}", .file.display())]
    Lint { file: PathBuf, reason: String },
}

/// The narrow interface a loaded lint engine implements.
pub trait LintEngine {
    /// Semantic version string of the engine.
    fn version(&self) -> &str;

    /// Build a type-aware analysis program scoped to `project`.
    fn create_program(&self, project: &Path) -> Result<Program, EngineError>;

    /// Source files known to `program`.
    fn file_names(&self, program: &Program) -> Vec<PathBuf>;

    /// Construct a linter for one target.
    fn linter(&self, options: LinterOptions, program: Option<&Program>) -> Box<dyn FileLinter>;

    /// Resolve the rule configuration applicable to `file`. An explicit
    /// `override_path` wins over default resolution relative to the file.
    fn find_configuration(
        &self,
        override_path: Option<&Path>,
        file: &Path,
    ) -> Result<RuleConfiguration, EngineError>;

    /// Look up a named output formatter.
    fn find_formatter(&self, name: &str) -> Option<Box<dyn Formatter>>;
}

/// Per-target linter state. Files are fed one at a time; `result` drains
/// the accumulated outcome.
pub trait FileLinter {
    /// Lint one file. `contents` is `None` when an analysis program supplies
    /// the parsed source.
    fn lint(
        &mut self,
        file: &Path,
        contents: Option<&str>,
        config: &RuleConfiguration,
    ) -> Result<(), EngineError>;

    /// The aggregate outcome for this target.
    fn result(&mut self) -> LintResult;
}

/// A named output renderer for failure/fix records.
pub trait Formatter {
    fn format(&self, failures: &[LintFailure], fixes: Option<&[LintFix]>) -> String;
}

/// Engine versions that mishandle a supplied program when type information
/// was not requested.
const PROGRAM_BROKEN_RANGE: &str = ">=5.5.0, <5.6.0";

/// Whether an analysis program may be handed to an engine of `version`.
///
/// Returns false only for the affected version range without an explicit
/// type-check request; the runner then drops the program for that target.
/// Unparseable version strings are assumed fine.
pub fn program_supported(version: &str, type_check: bool) -> bool {
    if type_check {
        return true;
    }
    let parsed = match Version::parse(version) {
        Ok(v) => v,
        Err(_) => return true,
    };
    let range = VersionReq::parse(PROGRAM_BROKEN_RANGE).expect("valid version range");
    !range.matches(&parsed)
}

/// Emits the `lintrun_engine_new` entry point for an engine crate.
///
/// The expression must evaluate to a type implementing [`LintEngine`].
#[macro_export]
macro_rules! declare_engine {
    ($ctor:expr) => {
        #[no_mangle]
        #[allow(improper_ctypes_definitions)]
        pub extern "C" fn lintrun_engine_new() -> *mut dyn $crate::engine::LintEngine {
            let engine: Box<dyn $crate::engine::LintEngine> = Box::new($ctor);
            Box::into_raw(engine)
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_dropped_for_affected_range_without_type_check() {
        assert!(!program_supported("5.5.0", false));
        assert!(!program_supported("5.5.2", false));
        assert!(!program_supported("5.5.9", false));
    }

    #[test]
    fn test_program_kept_when_type_check_requested() {
        assert!(program_supported("5.5.2", true));
    }

    #[test]
    fn test_program_kept_outside_affected_range() {
        assert!(program_supported("5.4.9", false));
        assert!(program_supported("5.6.0", false));
        assert!(program_supported("6.0.0", false));
    }

    #[test]
    fn test_unparseable_version_is_assumed_fine() {
        assert!(program_supported("next", false));
    }
}
