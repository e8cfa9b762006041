use std::{path::PathBuf, str::FromStr};

use clap::{Parser, Subcommand};
use speech_outline_engine::Direction;

#[derive(Debug, Parser)]
#[command(name = "speech-outline")]
#[command(about = "Structured views of a Markdown speech outline")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, PartialEq, Subcommand)]
pub enum Command {
    /// Indented plain-text outline
    Outline { file: PathBuf },
    /// Outline re-serialised as Markdown
    Markdown { file: PathBuf },
    /// One slide per main point
    Slides { file: PathBuf },
    /// One cue card per point
    Cards { file: PathBuf },
    /// Mind-map markup for a main point
    #[command(name = "mindmap")]
    MindMap {
        file: PathBuf,
        /// Main point to render, defaults to the first
        index: Option<usize>,
        /// Graph direction, LR or TD
        #[arg(short, long, value_parser = Direction::from_str)]
        direction: Option<Direction>,
    },
    /// Raw text of one section
    Section { file: PathBuf, index: usize },
    /// Splice a section back into the file
    ReplaceSection {
        file: PathBuf,
        index: usize,
        /// File holding the new section text
        replacement: PathBuf,
        /// Write the result back instead of printing it
        #[arg(long)]
        in_place: bool,
    },
    /// Speech files in the configured directory
    List,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Command, clap::Error> {
        Cli::try_parse_from(std::iter::once("speech-outline").chain(args.iter().copied()))
            .map(|cli| cli.command)
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_outline() {
        assert_eq!(
            parse(&["outline", "talk.md"]).unwrap(),
            Command::Outline {
                file: PathBuf::from("talk.md")
            }
        );
    }

    #[test]
    fn test_parse_mindmap_with_direction() {
        assert_eq!(
            parse(&["mindmap", "talk.md", "2", "--direction", "td"]).unwrap(),
            Command::MindMap {
                file: PathBuf::from("talk.md"),
                index: Some(2),
                direction: Some(Direction::TopDown),
            }
        );
    }

    #[test]
    fn test_parse_mindmap_defaults() {
        assert_eq!(
            parse(&["mindmap", "talk.md"]).unwrap(),
            Command::MindMap {
                file: PathBuf::from("talk.md"),
                index: None,
                direction: None,
            }
        );
    }

    #[test]
    fn test_parse_replace_section() {
        assert_eq!(
            parse(&["replace-section", "talk.md", "1", "new.md", "--in-place"]).unwrap(),
            Command::ReplaceSection {
                file: PathBuf::from("talk.md"),
                index: 1,
                replacement: PathBuf::from("new.md"),
                in_place: true,
            }
        );
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(parse(&["list"]).unwrap(), Command::List);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["dance"]).is_err());
        assert!(parse(&["section", "talk.md"]).is_err());
        assert!(parse(&["section", "talk.md", "x"]).is_err());
        assert!(parse(&["mindmap", "talk.md", "--direction", "RL"]).is_err());
        assert!(parse(&["outline", "talk.md", "--verbose"]).is_err());
    }
}
