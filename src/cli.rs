//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "lintrun",
    version,
    about = "Run a project's lint engine across configured targets",
    long_about = "lintrun — resolve file sets, drive the target project's own lint engine over them, and reduce the merged outcome to an exit code.\n\nConfiguration precedence: CLI > lintrun.toml > defaults.",
    after_help = "Examples:\n  lintrun\n  lintrun --format stylish 'src/**/*.ts'\n  lintrun --fix --project tsconfig.json 'src/**/*.ts' --exclude 'src/**/*.d.ts'"
)]
/// Top-level CLI options.
pub struct Cli {
    /// Glob patterns forming a single ad-hoc target; replaces configured targets
    pub patterns: Vec<String>,
    #[arg(long, help = "Project root (default: current dir)")]
    pub root: Option<String>,
    #[arg(long, help = "Engine library path (default: .lintrun/engine.*)")]
    pub engine: Option<String>,
    #[arg(long, help = "Type-check project descriptor for the ad-hoc target")]
    pub project: Option<String>,
    #[arg(long, help = "Rule-configuration override for the ad-hoc target")]
    pub rules: Option<String>,
    #[arg(long, help = "Exclude pattern for the ad-hoc target (repeatable)")]
    pub exclude: Vec<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Apply auto-fixes computed by the engine")]
    pub fix: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit 0 even when failures are present")]
    pub force: bool,
    #[arg(long, help = "Output format: prose|verbose|stylish|... (default: prose)")]
    pub format: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Suppress console output")]
    pub silent: bool,
    #[arg(long = "type-check", action = clap::ArgAction::SetTrue, help = "Request type-aware linting")]
    pub type_check: bool,
}
