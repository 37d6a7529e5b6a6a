//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::Parser;

use crate::commands::new::NewCommand;
use crate::utils::{logger, terminal};

/// create-prabogo - Prabogo project generator
///
/// Clones the Prabogo template and renames its Go module to the project name.
#[derive(Parser, Debug)]
#[command(name = "create-prabogo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(flatten)]
    pub new: NewCommand,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // Set up terminal colors
        if self.no_color {
            terminal::disable_colors();
        }

        logger::init_cli_logger(self.verbose);

        self.new.execute(self.verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_project_name() {
        let cli = Cli::try_parse_from(["create-prabogo", "shop"]).unwrap();
        assert_eq!(cli.new.name, "shop");
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_template_override() {
        let cli = Cli::try_parse_from([
            "create-prabogo",
            "--template",
            "/srv/prabogo.git",
            "-v",
            "shop",
        ])
        .unwrap();
        assert_eq!(cli.new.template, "/srv/prabogo.git");
        assert!(cli.verbose);
    }

    #[test]
    fn test_wrong_argument_count() {
        let missing = Cli::try_parse_from(["create-prabogo"]).unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::MissingRequiredArgument);

        let extra = Cli::try_parse_from(["create-prabogo", "shop", "other"]).unwrap_err();
        assert_eq!(extra.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
