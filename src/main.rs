use std::sync::Arc;

use chat_auth::config::ConfigError;
use chat_auth::{Action, ApiError, AuthClientConfig, HttpAuthApi, Store};
use clap::{Parser, Subcommand};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("failed to render state: {0}")]
    Render(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "chat-auth", about = "Chat authentication client")]
struct Cli {
    /// Overrides `CHAT_API_BASE_URL` from the environment or `.env`.
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register a new user and log in.
    SignUp {
        #[arg(long)]
        name: String,
        #[arg(long, env = "CHAT_AUTH_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Log in as an existing user.
    Login {
        #[arg(long)]
        name: String,
        #[arg(long, env = "CHAT_AUTH_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

impl From<Command> for Action {
    fn from(command: Command) -> Self {
        match command {
            Command::SignUp { name, password } => Action::sign_up(name, password),
            Command::Login { name, password } => Action::log_in(name, password),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env loaded");
    }

    let cli = Cli::parse();
    let mut config = AuthClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url.trim_end_matches('/').to_owned();
    }

    let api = HttpAuthApi::new(&config)?;
    let store = Store::new(Arc::new(api));

    let action = Action::from(cli.command);
    let name = action.name();
    tracing::info!(action = name, base_url = %config.base_url, "dispatching");

    if let Err(e) = store.dispatch(action).await {
        tracing::error!(action = name, error = %e, retryable = e.retryable(), "action failed");
        return Err(e.into());
    }

    println!("{}", serde_json::to_string_pretty(&store.snapshot())?);
    Ok(())
}
