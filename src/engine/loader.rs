//! Dynamic loading of a project's lint engine library.
//!
//! An explicit engine path from CLI or config wins; otherwise the
//! conventional location under the project root is probed. The library must
//! export [`ENGINE_ENTRY`], which the `declare_engine!` macro emits.

use super::{EngineError, LintEngine};
use libloading::Library;
use std::path::{Path, PathBuf};

/// Entry symbol every engine library exports.
pub const ENGINE_ENTRY: &str = "lintrun_engine_new";

type EngineConstructor = unsafe extern "C" fn() -> *mut dyn LintEngine;

/// A loaded engine. Keeps the library mapped for as long as the engine
/// is alive; the field order makes the engine drop first.
pub struct LoadedEngine {
    engine: Box<dyn LintEngine>,
    _lib: Library,
}

impl LoadedEngine {
    pub fn engine(&self) -> &dyn LintEngine {
        self.engine.as_ref()
    }
}

impl std::fmt::Debug for LoadedEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedEngine").finish_non_exhaustive()
    }
}

fn dll_suffix() -> &'static str {
    if cfg!(target_os = "windows") {
        "dll"
    } else if cfg!(target_os = "macos") {
        "dylib"
    } else {
        "so"
    }
}

/// Candidate engine locations for `root`, in probe order.
pub fn candidate_paths(root: &Path, explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    if let Some(p) = explicit {
        out.push(if p.is_absolute() {
            p.to_path_buf()
        } else {
            root.join(p)
        });
    }
    out.push(root.join(".lintrun").join(format!("engine.{}", dll_suffix())));
    out
}

/// Load the lint engine from the target project's tree.
pub fn load_project_engine(
    root: &Path,
    explicit: Option<&Path>,
) -> Result<LoadedEngine, EngineError> {
    let candidates = candidate_paths(root, explicit);
    let path = match candidates.iter().find(|p| p.exists()) {
        Some(p) => p.clone(),
        None => return Err(EngineError::NotFound(candidates)),
    };
    unsafe {
        let lib = Library::new(&path).map_err(|e| EngineError::Load {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let ctor: EngineConstructor = *lib
            .get::<EngineConstructor>(ENGINE_ENTRY.as_bytes())
            .map_err(|_| EngineError::MissingSymbol {
                path: path.clone(),
                symbol: ENGINE_ENTRY,
            })?;
        let engine = Box::from_raw(ctor());
        Ok(LoadedEngine { engine, _lib: lib })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_explicit_path_probed_before_convention() {
        let root = Path::new("/proj");
        let paths = candidate_paths(root, Some(Path::new("vendor/engine.so")));
        assert_eq!(paths[0], PathBuf::from("/proj/vendor/engine.so"));
        assert_eq!(paths[1].parent().unwrap(), root.join(".lintrun"));
    }

    #[test]
    fn test_absolute_explicit_path_is_kept() {
        let paths = candidate_paths(Path::new("/proj"), Some(Path::new("/opt/engine.so")));
        assert_eq!(paths[0], PathBuf::from("/opt/engine.so"));
    }

    #[test]
    fn test_missing_engine_reports_searched_paths() {
        let dir = tempdir().unwrap();
        let err = load_project_engine(dir.path(), None).unwrap_err();
        match err {
            EngineError::NotFound(searched) => {
                assert_eq!(searched.len(), 1);
                assert!(searched[0].starts_with(dir.path()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
