use std::{fs, path::Path};

use quizmaster::{Config, Library};
use tracing::instrument;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// Similarity (0-100) a word must exceed to fuzzily match a search term
    #[arg(long, value_name = "SCORE")]
    similarity_threshold: Option<u8>,
}

impl Command {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let library = Library::new(root.to_path_buf(), Config::default());
        let config_path = library.config_path();
        if config_path.exists() {
            anyhow::bail!(
                "Quizzes directory already initialized (found existing {})",
                config_path.display()
            );
        }

        if let Some(metadata_dir) = config_path.parent() {
            fs::create_dir_all(metadata_dir)
                .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", metadata_dir.display()))?;
        }

        let mut config = Config::default();
        if let Some(threshold) = self.similarity_threshold {
            config.set_similarity_threshold(threshold);
        }
        config
            .save(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to create config.toml: {e}"))?;

        println!("Initialized quizzes directory in {}", root.display());
        println!("  Created: {}", config_path.display());
        println!();
        println!("Next steps:");
        println!(
            "  quiz new {} --title \"Your First Quiz\"",
            root.join("first.json").display()
        );

        Ok(())
    }
}
