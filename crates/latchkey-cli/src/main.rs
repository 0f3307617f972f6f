//! One-shot door-lock command.
//!
//! Each run performs exactly one action and exits; the lock flag persists in
//! the state file between runs, which is what makes `TOGGLE` work without a
//! daemon. At most one invocation may run at a time — the launcher (button
//! loop, shell) enforces that, not this binary.

use anyhow::Context;
use clap::Parser;
use latchkey_controller::execute;
use latchkey_core::LockConfig;
use latchkey_hardware::AnyGpioDriver;
use latchkey_state::StateStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "latchkey",
    about = "Drive the door-lock servo, status LED, and buzzer",
    version
)]
struct Cli {
    /// Action to perform: LOCK, UNLOCK, BUZZ, BUZZ_AND_UNLOCK, TOGGLE,
    /// or DELAY_LOCK
    action: String,

    /// Configuration file (JSON); built-in defaults apply when absent
    #[arg(long, env = "LATCHKEY_CONFIG", default_value = "latchkey.json")]
    config: PathBuf,

    /// Override the state-file path from the configuration
    #[arg(long)]
    state_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = LockConfig::load(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;
    if let Some(path) = cli.state_file {
        config.state_file = path;
    }

    let store = StateStore::new(&config.state_file);

    // Mock backend until a real GPIO backend lands behind `hardware-rpi`.
    let (mut gpio, _handle) = AnyGpioDriver::mock();

    execute(&mut gpio, &store, &config, &cli.action)
        .await
        .with_context(|| format!("action {} failed", cli.action))?;

    tracing::info!(
        locked = store.is_locked().ok(),
        "done; lock state persisted at {}",
        config.state_file.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_action_and_overrides() {
        let cli = Cli::parse_from([
            "latchkey",
            "TOGGLE",
            "--config",
            "/etc/latchkey.json",
            "--state-file",
            "/var/lib/latchkey/state.json",
            "-vv",
        ]);
        assert_eq!(cli.action, "TOGGLE");
        assert_eq!(cli.config, PathBuf::from("/etc/latchkey.json"));
        assert_eq!(
            cli.state_file.as_deref(),
            Some(std::path::Path::new("/var/lib/latchkey/state.json"))
        );
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_requires_an_action() {
        assert!(Cli::try_parse_from(["latchkey"]).is_err());
    }
}
