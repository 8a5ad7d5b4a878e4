use tasker::commands::Cli;
use tasker::msg_error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(err) = Cli::menu().await {
        msg_error!(format!("{:#}", err));
        std::process::exit(1);
    }
}
