//! lintrun binary entry point.

use clap::Parser;
use lintrun::cli::Cli;
use lintrun::config;
use lintrun::output;
use lintrun::runner::LintRunner;
use std::process;

fn main() {
    let cli = Cli::parse();
    let eff = config::resolve_effective(&cli);
    if !eff.options.silent && config::load_config(&eff.root).is_none() {
        output::note("no lintrun.toml found; using defaults");
    }
    let runner = LintRunner::from_project(&eff.root, eff.engine.clone());
    match runner.run(&eff.options) {
        Ok(code) => process::exit(code),
        Err(e) => {
            // Fatal errors surface regardless of silent
            output::error(&e.to_string());
            process::exit(1);
        }
    }
}
