//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};

/// sharedsettings - shared project settings synchronizer
///
/// Copies the shared LICENSE, settings.xml and CI workflow into every sibling
/// project that contains a `.sharedsettings` marker file.
#[derive(Parser, Debug)]
#[command(
    name = "sharedsettings",
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Propagate shared settings files into sibling projects",
    long_about = "Scans the parent of the current directory for projects containing a \
                  .sharedsettings marker file, downloads the shared LICENSE, settings.xml \
                  and build.yml, and writes them into each marked project \
                  (LICENSE, settings.xml, .github/workflows/build.yml)."
)]
pub struct Cli {
    /// Log each discovered project, fetched resource and written file to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_flag() {
        assert!(!Cli::parse_from(["sharedsettings"]).verbose);
        assert!(Cli::parse_from(["sharedsettings", "-v"]).verbose);
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["sharedsettings", "somewhere"]).is_err());
    }
}
