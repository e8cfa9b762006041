mod command;

use std::{path::Path, process};

use anyhow::{Context, Result};
use clap::Parser;
use command::{Cli, Command};
use speech_outline_config::Config;
use speech_outline_engine::{
    Speech, export, get_section, io, mindmap, parse_speech, replace_section, section_count,
};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    let config = match Config::load() {
        Ok(Some(config)) => {
            log::debug!("Loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            log::warn!("Ignoring unreadable config: {e}");
            Config::default()
        }
    };

    match command {
        Command::Outline { file } => {
            println!("{}", export::outline_text(&load(&config, &file)?));
        }
        Command::Markdown { file } => {
            print!("{}", export::outline_markdown(&load(&config, &file)?));
        }
        Command::Slides { file } => print_slides(&load(&config, &file)?),
        Command::Cards { file } => print_cards(&load(&config, &file)?),
        Command::MindMap {
            file,
            index,
            direction,
        } => {
            let speech = load(&config, &file)?;
            let index = index.unwrap_or(0);
            if speech.main_point(index).is_none() {
                log::warn!(
                    "{} has no main point {index}, rendering placeholder",
                    file.display()
                );
            }
            let options = config.mind_map.options(direction);
            println!(
                "{}",
                mindmap::generate_with(speech.main_point(index), &options)
            );
        }
        Command::Section { file, index } => {
            let source = read(&config, &file)?;
            if index >= section_count(&source) {
                log::warn!("{} has no section {index}", file.display());
            }
            print!("{}", get_section(&source, index));
        }
        Command::ReplaceSection {
            file,
            index,
            replacement,
            in_place,
        } => {
            let path = config.resolve_speech_path(&file);
            let source = io::read_source(&path)?;
            let new_section = io::read_source(&replacement)
                .with_context(|| format!("reading replacement {}", replacement.display()))?;
            if index >= section_count(&source) {
                log::warn!("{} has no section {index}, leaving it unchanged", path.display());
            }

            let updated = replace_section(&source, index, &new_section);
            if in_place {
                io::write_source(&path, &updated)?;
                log::info!("Updated section {index} of {}", path.display());
            } else {
                print!("{updated}");
            }
        }
        Command::List => {
            let root = config
                .speeches_path
                .as_deref()
                .context("no speeches_path configured")?;
            for path in io::scan_speech_files(root)? {
                let speech = io::load_speech(&path)?;
                println!(
                    "{}\t{}\t{} points",
                    path.display(),
                    speech.title.as_deref().unwrap_or("(untitled)"),
                    speech.main_points.len()
                );
            }
        }
    }
    Ok(())
}

fn read(config: &Config, file: &Path) -> Result<String> {
    let path = config.resolve_speech_path(file);
    io::read_source(&path).with_context(|| format!("reading {}", path.display()))
}

fn load(config: &Config, file: &Path) -> Result<Speech> {
    let speech = parse_speech(&read(config, file)?);
    if speech.is_empty() {
        log::warn!("{} has no title or main points", file.display());
    }
    Ok(speech)
}

fn print_slides(speech: &Speech) {
    for (i, slide) in export::slides(speech).iter().enumerate() {
        if i > 0 {
            println!("\n---\n");
        }
        println!("{}", slide.title);
        for line in &slide.lines {
            println!("  {line}");
        }
        for bullet in &slide.bullets {
            println!("  • {bullet}");
        }
    }
}

fn print_cards(speech: &Speech) {
    for card in export::cue_cards(speech) {
        println!("[{}]", card.path.join(" › "));
        for line in &card.lines {
            println!("  {line}");
        }
        println!();
    }
}
