//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod settings;
pub mod theme_list;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::cli::settings::{set_at_path, unset_at_path, SettingRegistry};
use crate::cli::theme_list::list_themes;
use crate::core::app::{App, SessionContext};
use crate::core::config::Config;
use crate::core::constants::DEFAULT_THEME_ID;
use crate::core::reply_scheduler::ReplyScheduler;
use crate::ui::chat_loop::run_chat;
use crate::ui::theme::Theme;
use crate::utils::color::detect_color_depth;
use crate::utils::logging::init_file_logging;

#[derive(Parser)]
#[command(name = "parley")]
#[command(about = "A full-screen terminal chat with a simulated counterpart")]
#[command(
    long_about = "Parley is a full-screen terminal chat. Type a message and press Enter; \
a moment later the other participant answers with one of a handful of canned replies.\n\n\
Controls:\n\
  Type              Enter your message in the input field\n\
  Enter             Send the message\n\
  Up/Down           Scroll through the conversation\n\
  PgUp/PgDn         Scroll a page at a time\n\
  Ctrl+Home/End     Jump to the first or newest message\n\
  Ctrl+L            Clear the input field\n\
  Esc or Ctrl+C     Quit the application\n\n\
Environment Variables:\n\
  PARLEY_LOG        Log filter used with --log-file (default: info)\n\
  PARLEY_COLOR      Force color depth: truecolor, 256 or 16"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Theme to use for this session
    #[arg(short = 't', long, global = true, value_name = "THEME")]
    pub theme: Option<String>,

    /// Delay before the simulated reply, in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    pub reply_delay_ms: Option<u64>,

    /// Write diagnostic logs to the given file
    #[arg(short = 'l', long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat,
    /// List available themes
    Themes,
    /// Set configuration values, or show them when no key is given
    Set {
        /// Configuration key to set
        key: Option<String>,
        /// Value to set for the key (can be multiple words)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_file_logging(path)?;
    }

    match args.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let config = Config::load()?;
            let app = build_app(&config, args.theme.as_deref(), args.reply_delay_ms);
            let scheduler = ReplyScheduler::with_random_replies(app.session.reply_delay);
            run_chat(app, scheduler).await
        }
        Commands::Themes => {
            let config = Config::load()?;
            list_themes(&config);
            Ok(())
        }
        Commands::Set { key, value } => {
            let registry = SettingRegistry::new();
            let Some(key) = key else {
                let config = Config::load()?;
                print!("{}", registry.format_all(&config));
                return Ok(());
            };
            let path = Config::get_config_path()?;
            match set_at_path(&registry, &path, &key, &value) {
                Ok(message) => {
                    println!("{message}");
                    Ok(())
                }
                Err(err) => {
                    err.print();
                    std::process::exit(err.exit_code());
                }
            }
        }
        Commands::Unset { key } => {
            let registry = SettingRegistry::new();
            let path = Config::get_config_path()?;
            match unset_at_path(&registry, &path, &key) {
                Ok(message) => {
                    println!("{message}");
                    Ok(())
                }
                Err(err) => {
                    err.print();
                    std::process::exit(err.exit_code());
                }
            }
        }
    }
}

/// Resolve session settings and the theme. Command-line values win over the
/// config file, which wins over built-in defaults.
fn build_app(config: &Config, theme_override: Option<&str>, reply_delay_ms: Option<u64>) -> App {
    let session = SessionContext::from_config(config, reply_delay_ms);
    let theme_id = theme_override
        .or(config.theme.as_deref())
        .unwrap_or(DEFAULT_THEME_ID)
        .to_string();
    let theme = Theme::from_name(&theme_id, config).quantized(detect_color_depth());
    info!(
        theme = %theme_id,
        reply_delay_ms = session.reply_delay.as_millis() as u64,
        "session configured"
    );
    App::new(session, theme, Some(theme_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::time::Duration;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_chat() {
        let args = Args::try_parse_from(["parley"]).expect("parse");
        assert!(args.command.is_none());
        assert!(args.log_file.is_none());
    }

    #[test]
    fn set_collects_multi_word_values() {
        let args = Args::try_parse_from(["parley", "set", "title", "Team", "chat"]).expect("parse");
        match args.command {
            Some(Commands::Set { key, value }) => {
                assert_eq!(key.as_deref(), Some("title"));
                assert_eq!(value, ["Team", "chat"]);
            }
            _ => panic!("expected set"),
        }

        let args = Args::try_parse_from(["parley", "set"]).expect("parse");
        assert!(matches!(
            args.command,
            Some(Commands::Set { key: None, .. })
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let args = Args::try_parse_from([
            "parley",
            "chat",
            "--theme",
            "dark",
            "--reply-delay-ms",
            "250",
            "--log-file",
            "/tmp/parley.log",
        ])
        .expect("parse");
        assert_eq!(args.theme.as_deref(), Some("dark"));
        assert_eq!(args.reply_delay_ms, Some(250));
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/parley.log")));
    }

    #[test]
    fn command_line_overrides_config() {
        let config = Config {
            theme: Some("light".into()),
            reply_delay_ms: Some(2000),
            ..Default::default()
        };

        let app = build_app(&config, Some("dark"), Some(10));
        assert_eq!(app.ui.current_theme_id.as_deref(), Some("dark"));
        assert_eq!(app.session.reply_delay, Duration::from_millis(10));

        let app = build_app(&config, None, None);
        assert_eq!(app.ui.current_theme_id.as_deref(), Some("light"));
        assert_eq!(app.session.reply_delay, Duration::from_millis(2000));

        let app = build_app(&Config::default(), None, None);
        assert_eq!(app.ui.current_theme_id.as_deref(), Some("material"));
        assert_eq!(app.session.reply_delay, Duration::from_millis(1000));
    }
}
