// SPDX-License-Identifier: MPL-2.0
//! Command-line flags.

use crate::domain::gallery::SortBy;
use crate::error::{Error, Result};
use std::path::PathBuf;

pub const HELP: &str = "\
gallery_lens - browse a generated image gallery

USAGE:
  gallery_lens [OPTIONS]

OPTIONS:
  --count N                 Images to generate (default from settings, 12)
  --seed N                  Seed for repeatable galleries
  --category C              Show only category C
  --tag T                   Show images carrying T (repeatable, any match)
  --author A                Show only images by A
  --sort ORDER              newest | oldest | popular | likes
  --search Q                Case-insensitive search over author, tags, category
  --favorite ID             Toggle favorite on image ID (repeatable)
  --view ID                 Open image ID in the detail view
  --stats                   Print gallery statistics
  --refresh                 Regenerate images even if a snapshot exists
  --data-dir DIR            Directory holding the gallery snapshot
  --config-dir DIR          Directory holding settings.toml
  --no-save                 Do not write the snapshot back
  --export-diagnostics FILE Write the diagnostics report as JSON
  -h, --help                Print this help
";

/// Parsed command-line options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flags {
    pub count: Option<usize>,
    pub seed: Option<u64>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub author: Option<String>,
    pub sort: Option<SortBy>,
    pub search: Option<String>,
    /// Image ids whose favorite flag is toggled, in order.
    pub favorites: Vec<u64>,
    pub view: Option<u64>,
    pub stats: bool,
    pub refresh: bool,
    /// Takes precedence over `GALLERY_LENS_DATA_DIR`.
    pub data_dir: Option<PathBuf>,
    /// Takes precedence over `GALLERY_LENS_CONFIG_DIR`.
    pub config_dir: Option<PathBuf>,
    pub no_save: bool,
    pub export_diagnostics: Option<PathBuf>,
}

impl Flags {
    /// Parses flags, rejecting anything left over.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cli`] for malformed values and unknown arguments.
    pub fn parse(mut args: pico_args::Arguments) -> Result<Self> {
        let flags = Self {
            count: args.opt_value_from_str("--count")?,
            seed: args.opt_value_from_str("--seed")?,
            category: args.opt_value_from_str("--category")?,
            tags: args.values_from_str("--tag")?,
            author: args.opt_value_from_str("--author")?,
            sort: args.opt_value_from_str("--sort")?,
            search: args.opt_value_from_str("--search")?,
            favorites: args.values_from_str("--favorite")?,
            view: args.opt_value_from_str("--view")?,
            stats: args.contains("--stats"),
            refresh: args.contains("--refresh"),
            data_dir: args.opt_value_from_os_str("--data-dir", parse_path)?,
            config_dir: args.opt_value_from_os_str("--config-dir", parse_path)?,
            no_save: args.contains("--no-save"),
            export_diagnostics: args.opt_value_from_os_str("--export-diagnostics", parse_path)?,
        };

        let rest = args.finish();
        if !rest.is_empty() {
            let rest: Vec<String> = rest
                .iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect();
            return Err(Error::Cli(format!("unexpected arguments: {}", rest.join(" "))));
        }

        Ok(flags)
    }
}

fn parse_path(value: &std::ffi::OsStr) -> std::result::Result<PathBuf, std::convert::Infallible> {
    Ok(PathBuf::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse(args: &[&str]) -> Result<Flags> {
        Flags::parse(pico_args::Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    #[test]
    fn empty_arguments_give_defaults() {
        assert_eq!(parse(&[]).unwrap(), Flags::default());
    }

    #[test]
    fn parses_filters_and_repeated_values() {
        let flags = parse(&[
            "--category",
            "Natureza",
            "--tag",
            "nova",
            "--tag",
            "premium",
            "--sort",
            "Popular",
            "--favorite",
            "3",
            "--favorite",
            "5",
            "--stats",
        ])
        .unwrap();

        assert_eq!(flags.category.as_deref(), Some("Natureza"));
        assert_eq!(flags.tags, vec!["nova", "premium"]);
        assert_eq!(flags.sort, Some(SortBy::Popular));
        assert_eq!(flags.favorites, vec![3, 5]);
        assert!(flags.stats);
        assert!(!flags.refresh);
    }

    #[test]
    fn parses_directories() {
        let flags = parse(&["--data-dir", "/tmp/data", "--config-dir", "/tmp/conf"]).unwrap();
        assert_eq!(flags.data_dir, Some(PathBuf::from("/tmp/data")));
        assert_eq!(flags.config_dir, Some(PathBuf::from("/tmp/conf")));
    }

    #[test]
    fn invalid_sort_is_rejected() {
        assert!(matches!(parse(&["--sort", "random"]), Err(Error::Cli(_))));
    }

    #[test]
    fn leftover_arguments_are_rejected() {
        match parse(&["--count", "3", "extra"]) {
            Err(Error::Cli(message)) => assert!(message.contains("extra")),
            other => panic!("expected Cli error, got {:?}", other),
        }
    }
}
