use crate::config::{GeneratorConfig, DEFAULT_SPECS_ROOT};
use crate::generator::generate;
use anyhow::Context;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

const BANNER: &str = "navtree-gen\n===========\n";

/// Generates the Go resource navigation tree from Swagger documents.
#[derive(Parser, Debug)]
#[command(name = "navtree-gen", version)]
#[command(about = "Generate the resource navigation tree from Swagger documents", long_about = None)]
pub struct Cli {
    /// File to write the generated Go source to; usage is printed when omitted
    #[arg(long)]
    pub output_file: Option<PathBuf>,

    /// Root of the <service>/<resource-type>/... specification tree
    #[arg(long, env = "NAVTREE_SPECS_DIR", default_value = DEFAULT_SPECS_ROOT)]
    pub specs_dir: PathBuf,

    /// TOML file with path overrides merged over the built-in table
    #[arg(long)]
    pub overrides: Option<PathBuf>,

    /// Start from an empty override table
    #[arg(long, default_value_t = false)]
    pub no_builtin_overrides: bool,
}

impl Cli {
    /// Generator settings for this invocation, or `None` when no output file
    /// was given.
    pub fn config(&self) -> Option<GeneratorConfig> {
        let output_file = self.output_file.clone()?;
        Some(
            GeneratorConfig::new(output_file)
                .with_specs_root(self.specs_dir.clone())
                .with_overrides_file(self.overrides.clone())
                .with_builtin_overrides(!self.no_builtin_overrides),
        )
    }
}

/// Parse the process arguments and run.
pub fn run_cli() -> anyhow::Result<()> {
    run(Cli::parse())
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(config) = cli.config() else {
        print!("{BANNER}");
        Cli::command()
            .print_help()
            .context("failed to print usage")?;
        println!();
        return Ok(());
    };

    let summary = generate(&config).with_context(|| {
        format!(
            "failed to generate {} from {}",
            config.output_file.display(),
            config.specs_root.display()
        )
    })?;
    tracing::info!(
        output = %config.output_file.display(),
        documents = summary.documents,
        nodes = summary.nodes,
        bytes = summary.bytes,
        "done"
    );
    Ok(())
}
