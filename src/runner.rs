//! The lint task runner.
//!
//! For each configured target: resolve its file set, drive the engine over
//! every file, and collect the target's outcome. Targets are then merged
//! (failures deduplicated by equality, fixes concatenated), the merged
//! result is formatted, and the outcome maps to a process exit code.
//!
//! The flow is strictly sequential per target and per file: the
//! per-directory rule-configuration cache and the ordered merge both depend
//! on iteration order.

use crate::engine::{
    self, loader, FileLinter, LintEngine, LinterOptions, Program, RuleConfiguration,
};
use crate::error::FatalError;
use crate::files;
use crate::models::{LintConfig, LintResult, LintTaskOptions, Patterns};
use crate::output;
use std::path::{Path, PathBuf};

/// Formats that end with a colored red/green banner.
const HUMAN_FORMATS: [&str; 3] = ["prose", "verbose", "stylish"];

/// Exit code for a run with unforced lint failures.
pub const EXIT_FAILURES: i32 = 2;

enum EngineSource<'a> {
    Injected(&'a dyn LintEngine),
    Project { engine_path: Option<PathBuf> },
}

/// Drives one lint task invocation against a project root.
pub struct LintRunner<'a> {
    root: PathBuf,
    source: EngineSource<'a>,
}

impl<'a> LintRunner<'a> {
    /// Runner over an already-constructed engine. Used by tests and by
    /// callers embedding an engine in-process.
    pub fn new(root: impl Into<PathBuf>, engine: &'a dyn LintEngine) -> Self {
        LintRunner {
            root: root.into(),
            source: EngineSource::Injected(engine),
        }
    }

    /// Runner that loads the engine from the target project's tree on
    /// first use, honoring an explicit engine path when given.
    pub fn from_project(root: impl Into<PathBuf>, engine_path: Option<PathBuf>) -> Self {
        LintRunner {
            root: root.into(),
            source: EngineSource::Project { engine_path },
        }
    }

    /// Run every configured target and reduce the outcome to an exit code.
    ///
    /// Returns 0 on success (or when `force` suppresses failures) and
    /// [`EXIT_FAILURES`] when failures remain. Fatal conditions abort with
    /// an error instead.
    pub fn run(&self, options: &LintTaskOptions) -> Result<i32, FatalError> {
        if options.configs.is_empty() {
            if !options.silent {
                output::warn("no lint targets configured; nothing to do");
            }
            return Ok(0);
        }

        // The engine comes from the project's own tree, not a bundled copy
        let loaded;
        let engine: &dyn LintEngine = match &self.source {
            EngineSource::Injected(e) => *e,
            EngineSource::Project { engine_path } => {
                loaded = loader::load_project_engine(&self.root, engine_path.as_deref())?;
                loaded.engine()
            }
        };

        let mut merged = LintResult::default();
        for config in &options.configs {
            let outcome = self.lint_target(engine, config, options)?;
            merged.merge(outcome);
        }

        if !options.silent {
            let formatter = engine
                .find_formatter(&options.format)
                .ok_or_else(|| FatalError::UnknownFormat(options.format.clone()))?;
            let rendered = formatter.format(&merged.failures, merged.fixes.as_deref());
            if !rendered.is_empty() {
                println!("{}", rendered);
            }
        }

        let failed = !merged.failures.is_empty();
        if !HUMAN_FORMATS.contains(&options.format.as_str()) {
            return Ok(if failed && !options.force { EXIT_FAILURES } else { 0 });
        }
        if failed {
            if !options.silent {
                output::failure_banner(merged.failures.len());
            }
            Ok(if options.force { 0 } else { EXIT_FAILURES })
        } else {
            if !options.silent {
                output::success_banner();
            }
            Ok(0)
        }
    }

    fn lint_target(
        &self,
        engine: &dyn LintEngine,
        config: &LintConfig,
        options: &LintTaskOptions,
    ) -> Result<LintResult, FatalError> {
        let mut program = match &config.project {
            Some(project) => Some(engine.create_program(&self.root.join(project))?),
            None => {
                if options.type_check && !options.silent {
                    output::warn(
                        "type checking requires a project; linting without type information",
                    );
                }
                None
            }
        };

        let lint_files = self.resolve_target_files(engine, config, program.as_ref());

        // Engines in the affected range mishandle a supplied program unless
        // type information was explicitly requested.
        if program.is_some() && !engine::program_supported(engine.version(), options.type_check) {
            program = None;
        }

        let mut linter: Box<dyn FileLinter> = engine.linter(
            LinterOptions {
                fix: options.fix,
                formatter: options.format.clone(),
            },
            program.as_ref(),
        );

        let rules_override = config.rules.as_ref().map(|p| self.root.join(p));
        let mut last_dir: Option<PathBuf> = None;
        let mut rule_config: Option<RuleConfiguration> = None;
        for file in &lint_files {
            // Configuration lookup is expensive; reload only on directory change
            let dir = file.parent().map(Path::to_path_buf);
            if rule_config.is_none() || last_dir != dir {
                rule_config = Some(engine.find_configuration(rules_override.as_deref(), file)?);
                last_dir = dir;
            }
            let contents = match program {
                Some(_) => None,
                None => Some(files::read_lint_input(file)?),
            };
            if let Some(loaded) = rule_config.as_ref() {
                linter.lint(file, contents.as_deref(), loaded)?;
            }
        }
        Ok(linter.result())
    }

    /// Resolve the ordered file list for one target. Explicit patterns win;
    /// otherwise file names come from the program. Either way each entry is
    /// glob-expanded with the target's exclude patterns applied.
    fn resolve_target_files(
        &self,
        engine: &dyn LintEngine,
        config: &LintConfig,
        program: Option<&Program>,
    ) -> Vec<PathBuf> {
        let entries: Vec<String> = match &config.files {
            Some(patterns) => patterns.to_vec(),
            None => match program {
                Some(p) => engine
                    .file_names(p)
                    .iter()
                    .map(|f| f.to_string_lossy().into_owned())
                    .collect(),
                None => Vec::new(),
            },
        };
        let exclude = config
            .exclude
            .as_ref()
            .map(Patterns::to_vec)
            .unwrap_or_default();
        files::resolve_files(&self.root, &entries, &exclude)
    }
}
