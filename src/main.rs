use anyhow::Result;
use clap::Parser;
use platpick::{
    config::Config,
    metadata::{MetadataFetchError, MetadataSource},
    navigator::ClientHintsNavigator,
    presentation::{ButtonChoice, OutputFormat, TerminalPresenter},
};
use std::process::ExitCode;
use std::time::Duration;

/// platpick - installer download page
///
/// Detects the visitor's operating system and CPU from a user-agent string and
/// optional client hints, then shows the matching installer package.
///
/// Examples:
///   platpick --metadata https://example.com/metadata.json --user-agent "Mozilla/5.0 (Macintosh; ...)"
///   platpick --metadata metadata.json --user-agent "$UA" --ch-platform '"macOS"' --ch-arch '"arm"'
#[derive(Parser, Debug)]
#[command(author, version = env!("PLATPICK_VERSION"), about)]
struct Cli {
    /// Metadata document, as an http(s) URL or a local path
    #[arg(long, value_name = "URL|PATH")]
    metadata: MetadataSource,

    /// The visitor's user-agent string
    #[arg(long = "user-agent", short = 'u', value_name = "UA")]
    user_agent: String,

    /// Sec-CH-UA-Platform client hint
    #[arg(long = "ch-platform", value_name = "VALUE")]
    ch_platform: Option<String>,

    /// Sec-CH-UA-Arch client hint
    #[arg(long = "ch-arch", value_name = "VALUE")]
    ch_arch: Option<String>,

    /// How long to wait for client hints before falling back to the user-agent
    #[arg(long = "hint-timeout-ms", value_name = "MS", default_value_t = 1000)]
    hint_timeout_ms: u64,

    /// Click a download button after the page is shown
    #[arg(long, value_enum, value_name = "BUTTON")]
    activate: Option<ButtonChoice>,

    /// Print the page as JSON lines
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let navigator = ClientHintsNavigator::new(cli.user_agent)
        .with_platform(cli.ch_platform.as_deref())
        .with_architecture(cli.ch_arch.as_deref());

    let config = Config::new(navigator, cli.metadata)?
        .with_hint_timeout(Duration::from_millis(cli.hint_timeout_ms))
        .with_activation(cli.activate);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut presenter = TerminalPresenter::new(std::io::stdout(), format);

    match platpick::page::run(&config, &mut presenter).await {
        Ok(_) => Ok(ExitCode::SUCCESS),
        // Already shown to the user as a fatal notice
        Err(e) if e.is::<MetadataFetchError>() => Ok(ExitCode::FAILURE),
        Err(e) => Err(e),
    }
}
