use clap::{
    CommandFactory, Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use colored::Colorize;

use powerspot::{
    Error, chain, cli, config, error,
    management::FileCredentialStore,
    prompt::TerminalPrompt,
    spotify::{SpotifyLibrary, auth::Authenticator},
    warning,
};

const GREET: &str = r"
 _ __   _____      _____ _ __ ___ _ __   ___ | |_
| '_ \ / _ \ \ /\ / / _ \ '__/ __| '_ \ / _ \| __|
| |_) | (_) \ V  V /  __/ |  \__ \ |_) | (_) | |_
| .__/ \___/ \_/\_/ \___|_|  |___/ .__/ \___/ \__|
|_|                              |_|
";

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
  after_help = "Commands: albums, artists, tracks, releases, topartists, toptracks, save, show, write\n\
                Chain them in one call, e.g. `powerspot artists releases --weeks 4 save --ask write new.wiki`.\n\
                Run `powerspot <command> --help` for the options of a command.",
)]
struct Cli {
    /// Spotify username; falls back to SPOTIFY_USER, then to a prompt
    #[clap(long, short = 'u')]
    username: Option<String>,

    /// Print shell completions for the chain commands and exit
    #[clap(long, value_name = "SHELL", exclusive = true)]
    completions: Option<Shell>,

    /// Chain of commands with their options
    #[clap(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    chain: Vec<String>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = chain::StepParser::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let steps = match chain::parse_chain(&cli.chain).and_then(|steps| {
        chain::validate(&steps)?;
        Ok(steps)
    }) {
        Ok(steps) => steps,
        Err(Error::Usage(e)) => e.exit(),
        Err(e) => error!("{}", e),
    };

    println!("{}", GREET.magenta().bold());

    let store = FileCredentialStore::default();
    let mut prompt = TerminalPrompt::new();

    let given = cli.username.or_else(config::spotify_user);
    let username = match cli::username(given, &store, &mut prompt).await {
        Ok(username) => username,
        Err(e) => error!("Cannot determine username. Err: {}", e),
    };
    powerspot::info!("Welcome {}", username);

    let mut library = SpotifyLibrary::new(username, Authenticator::new(store));
    let mut ctx = chain::Context::new();

    if let Err(e) = chain::run(&steps, &mut ctx, &mut library, &mut prompt).await {
        error!("Chain aborted: {}", e);
    }
}
