use crate::cli::Args;
use bb_summarizer::config::Config;
use bb_summarizer::error::AppError;

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-platform, --set-region,
/// --set-log-file, --clear-log-file).
///
/// Starts from the saved config (or defaults), applies the changes,
/// validates and saves.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let config = if std::path::Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    let config = apply_config_updates(config, args);
    config.validate()?;
    config.save().await?;

    if args.clear_log_file_path {
        println!("Custom log file path cleared. Using default location.");
    }
    println!("Config updated successfully!");
    Ok(())
}

fn apply_config_updates(mut config: Config, args: &Args) -> Config {
    if let Some(platform) = &args.new_platform {
        config.lookup.platform = platform.clone();
    }

    if let Some(region) = &args.new_region {
        config.lookup.region = region.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_apply_config_updates() {
        let args = Args::try_parse_from([
            "bb_summarizer",
            "--set-platform",
            "psn",
            "--set-region",
            "eu",
        ])
        .unwrap();

        let config = apply_config_updates(Config::default(), &args);
        assert_eq!(config.lookup.platform, "psn");
        assert_eq!(config.lookup.region, "eu");
    }

    #[test]
    fn test_clear_log_file_path() {
        let args = Args::try_parse_from(["bb_summarizer", "--clear-log-file"]).unwrap();
        let config = Config {
            log_file_path: Some("/tmp/bot.log".to_string()),
            ..Config::default()
        };

        let config = apply_config_updates(config, &args);
        assert_eq!(config.log_file_path, None);
    }
}
