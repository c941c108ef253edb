use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the arguments ask for a configuration change.
pub fn is_config_update(args: &Args) -> bool {
    args.new_platform.is_some()
        || args.new_region.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// TESPA team and Overwatch player summaries, as chat bot commands.
///
/// Messages are read line by line from stdin (or once from --message) and
/// every recognized command is answered on stdout:
///
/// - `.bb help`
/// - `.bb stat <BattleTag>`
/// - `.bb summarize <team page URL>`
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Handle a single chat message and exit, e.g. --message ".bb stat Name#1234"
    #[arg(short = 'm', long = "message")]
    pub message: Option<String>,

    /// Set the lookup platform in config (e.g. pc, psn, xbl).
    #[arg(long = "set-platform", help_heading = "Configuration")]
    pub new_platform: Option<String>,

    /// Set the lookup region in config (e.g. us, eu, kr).
    #[arg(long = "set-region", help_heading = "Configuration")]
    pub new_region: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stderr.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message_argument() {
        let args = Args::try_parse_from(["bb_summarizer", "-m", ".bb stat Name#1234"]).unwrap();
        assert_eq!(args.message.as_deref(), Some(".bb stat Name#1234"));
        assert!(!is_config_update(&args));
    }

    #[test]
    fn test_config_update_flags() {
        let args = Args::try_parse_from(["bb_summarizer", "--set-region", "eu"]).unwrap();
        assert!(is_config_update(&args));

        let args = Args::try_parse_from(["bb_summarizer", "--clear-log-file"]).unwrap();
        assert!(is_config_update(&args));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
