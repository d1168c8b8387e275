use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use emoji_sync::check::check_manifest;
use emoji_sync::manifest::Manifest;
use emoji_sync::{Args, Command, ProjectPaths, list_emojis, sync_emojis};

fn main() -> anyhow::Result<ExitCode> {
    emoji_sync::init_logging();

    let args = Args::parse();
    let root = args.project_root();
    let paths = ProjectPaths::from_root(&root);
    log::debug!("Project root: {}", root.display());

    match args.command.clone().unwrap_or_default() {
        Command::Sync => {
            sync_emojis(&paths, args.sync_options()).context("emoji sync failed")?;
        }
        Command::List { category, search } => {
            let emojis = list_emojis(&paths.manifest, category.as_deref(), search.as_deref())?;
            for emoji in emojis {
                match emoji.description {
                    Some(description) => println!(
                        "{}\t{}\t{}x{}\t{}",
                        emoji.name, emoji.image, emoji.width, emoji.height, description
                    ),
                    None => println!(
                        "{}\t{}\t{}x{}",
                        emoji.name, emoji.image, emoji.width, emoji.height
                    ),
                }
            }
        }
        Command::Check => {
            let manifest = Manifest::load(&paths.manifest)?;
            let issues = check_manifest(&manifest, &paths);
            for issue in &issues {
                println!("{}", issue);
            }
            if !issues.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
            println!("Manifest and bundles are consistent.");
        }
    }

    Ok(ExitCode::SUCCESS)
}
