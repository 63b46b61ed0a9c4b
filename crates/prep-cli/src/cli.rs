//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Release Prep - Validate and optionally update logme release files
///
/// Checks, in order: (1) the changelog section, (2) the CMake project
/// version, (3) compiled entries in both project files, (4) entries in both
/// filter files, (5) the version header macros.
#[derive(Parser, Debug)]
#[command(name = "release-prep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Release version X.Y.Z (e.g. 2.4.10)
    #[arg(id = "release_version", value_name = "VERSION")]
    pub version: Option<String>,

    /// Apply updates for items 2-5 (the changelog is only checked)
    #[arg(long)]
    pub update: bool,

    /// Repository root
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Output as JSON for scripting
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_update_mode() {
        let cli = Cli::try_parse_from(["release-prep", "2.4.10", "--update", "--root", "repo"]).unwrap();
        assert_eq!(cli.version.as_deref(), Some("2.4.10"));
        assert!(cli.update);
        assert_eq!(cli.root, PathBuf::from("repo"));
        assert!(!cli.json);
    }

    #[test]
    fn version_is_optional_for_parsing() {
        let cli = Cli::try_parse_from(["release-prep"]).unwrap();
        assert!(cli.version.is_none());
        assert_eq!(cli.root, PathBuf::from("."));
    }
}
