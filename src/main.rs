//! Pushover CLI - main entry point
//!
//! Usage:
//!   pushover [options] 'Message to send'
//!   echo 'Message to send' | pushover [options]
//!   pushover [options] < file-with-message.txt

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pushover_notify::config::{self, ClientConfig, TOKEN_ENV, USER_ENV};
use pushover_notify::{commands, Error, FieldPolicy, RequestDraft};

#[derive(Parser, Debug)]
#[command(name = "pushover")]
#[command(about = "Send a notification through the Pushover API", long_about = None)]
#[command(version)]
#[command(after_help = "The message is read from standard input when no MESSAGE argument is given.")]
struct Cli {
    /// Your personal user key, identifying the recipient (required)
    #[arg(long, env = USER_ENV, hide_env_values = true)]
    user: Option<String>,

    /// The application API token to send this message as (required)
    #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
    token: Option<String>,

    /// Name of the device to send the message to directly
    #[arg(long, default_value = "")]
    device: String,

    /// Title of the message
    #[arg(long, default_value = "")]
    title: String,

    /// Sound to play on the recipient device(s), see https://pushover.net/api#sounds
    #[arg(long, default_value = "")]
    sound: String,

    /// A URL to show with the message
    #[arg(long, default_value = "")]
    url: String,

    /// Text for the URL given in --url
    #[arg(long, default_value = "")]
    url_title: String,

    /// -2 no notification; -1 quiet; 1 high priority; 2 require confirmation
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    priority: i64,

    /// Unix timestamp to show to the user
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    timestamp: i64,

    /// Attach every optional field instead of only the first one set
    #[arg(long, default_value_t = false)]
    all_fields: bool,

    /// Request timeout in seconds (PUSHOVER_TIMEOUT env variable also available)
    #[arg(long)]
    timeout: Option<u64>,

    /// Message to send
    message: Vec<String>,
}

impl Cli {
    /// Split parsed arguments into the request draft, field policy and timeout override.
    fn into_parts(self) -> (RequestDraft, FieldPolicy, Option<u64>) {
        let Cli {
            user,
            token,
            device,
            title,
            sound,
            url,
            url_title,
            priority,
            timestamp,
            all_fields,
            timeout,
            message,
        } = self;

        let draft = RequestDraft {
            user: user.unwrap_or_default(),
            token: token.unwrap_or_default(),
            device,
            title,
            sound,
            url,
            url_title,
            priority,
            timestamp,
            args: message,
        };
        let policy = if all_fields {
            FieldPolicy::Independent
        } else {
            FieldPolicy::FirstMatch
        };

        (draft, policy, timeout)
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let (draft, policy, timeout) = cli.into_parts();

    // Input errors come first; an interactive terminal has no piped message to offer.
    let stdin = io::stdin();
    let request = if stdin.is_terminal() {
        draft.validate(io::empty())?
    } else {
        draft.validate(stdin.lock())?
    };

    let mut client_config = ClientConfig::from_env()?;
    if let Some(secs) = timeout {
        client_config = client_config
            .with_timeout_secs(secs)
            .context("invalid --timeout")?;
    }

    commands::send::run(&request, client_config, policy).await?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env for local development
    config::load_dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too
            print!("{}", err.render());
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stdout)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{:#}", err);
            if err
                .downcast_ref::<Error>()
                .is_some_and(Error::is_validation)
            {
                println!("Run 'pushover --help' for usage.");
            }
            ExitCode::FAILURE
        }
    }
}
