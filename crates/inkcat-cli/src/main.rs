mod pipeline;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use inkcat_core::AppConfig;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "inkcat")]
#[command(about = "Merge Electric Ink product feeds and split them into category files")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Merge the three scraped feeds into one canonical product list
    Merge(MergeArgs),
    /// Classify the merged list and regenerate the per-category output tree
    Classify(ClassifyArgs),
    /// Merge, then classify; stops if the merge fails
    Run {
        #[command(flatten)]
        merge: MergeArgs,
        /// Directory regenerated with the category tree
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

/// Path overrides for the merge stage. Unset flags keep the configured values.
#[derive(Debug, Default, Args)]
struct MergeArgs {
    /// Structured-data feed (required input)
    #[arg(long)]
    primary: Option<PathBuf>,
    /// Listing-page feed (required input)
    #[arg(long)]
    supplementary: Option<PathBuf>,
    /// Cosmetics feed (skipped with a warning when absent)
    #[arg(long)]
    cosmetics: Option<PathBuf>,
    /// Where the merged list is written
    #[arg(long)]
    merged: Option<PathBuf>,
}

/// Path overrides for the classify stage.
#[derive(Debug, Default, Args)]
struct ClassifyArgs {
    /// Merged list to classify
    #[arg(long)]
    merged: Option<PathBuf>,
    /// Directory regenerated with the category tree
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

impl MergeArgs {
    fn apply(self, config: &mut AppConfig) {
        if let Some(path) = self.primary {
            config.primary_feed_path = path;
        }
        if let Some(path) = self.supplementary {
            config.supplementary_feed_path = path;
        }
        if let Some(path) = self.cosmetics {
            config.cosmetics_feed_path = path;
        }
        if let Some(path) = self.merged {
            config.merged_path = path;
        }
    }
}

impl ClassifyArgs {
    fn apply(self, config: &mut AppConfig) {
        if let Some(path) = self.merged {
            config.merged_path = path;
        }
        if let Some(path) = self.output_dir {
            config.output_dir = path;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = inkcat_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Some(Commands::Merge(args)) => {
            args.apply(&mut config);
            pipeline::run_merge_stage(&config)?;
        }
        Some(Commands::Classify(args)) => {
            args.apply(&mut config);
            pipeline::run_classify_stage(&config)?;
        }
        Some(Commands::Run { merge, output_dir }) => {
            merge.apply(&mut config);
            if let Some(path) = output_dir {
                config.output_dir = path;
            }
            pipeline::run_merge_stage(&config)?;
            pipeline::run_classify_stage(&config)?;
        }
        None => println!("inkcat: no command given; try `inkcat run` or `inkcat --help`"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
