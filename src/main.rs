mod commands;
mod config;
mod git;
mod jira;
mod ranking;
mod utils;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    ActivesArgs, CheckoutArgs, CurrentArgs, CurrentPushArgs, ExistsArgs, FreqArgs, RecentArgs,
    SearchArgs,
};
use config::Config;

/// Environment variable holding the log filter, e.g. `GIT_NINJA_LOG=debug`.
const LOG_ENV: &str = "GIT_NINJA_LOG";

#[derive(Parser)]
#[command(name = "git-ninja")]
#[command(version)]
#[command(about = "Find your way back to the branches you actually work on")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recently checked out branches, newest first
    #[command(name = "branch:recent", alias = "recent")]
    Recent(RecentArgs),

    /// Branches ranked by checkout frequency and recency
    #[command(name = "branch:freq", alias = "freq")]
    Freq(FreqArgs),

    /// Search branch names
    #[command(name = "branch:search", alias = "search")]
    Search(SearchArgs),

    /// The branch you were on before the last checkout
    #[command(name = "branch:last", alias = "last")]
    Last,

    /// Exit 0 if a local branch exists, 1 otherwise
    #[command(name = "branch:exists")]
    Exists(ExistsArgs),

    /// Show or sync the current branch
    #[command(name = "branch:current", alias = "current")]
    Current(CurrentArgs),

    /// Push the current branch
    #[command(name = "branch:current:push")]
    CurrentPush(CurrentPushArgs),

    /// Branches with commits in the last two days
    #[command(name = "branch:actives", alias = "actives")]
    Actives(ActivesArgs),

    /// Check out a branch, optionally pulling it afterwards
    #[command(alias = "co")]
    Checkout(CheckoutArgs),

    /// List your open issue keys
    #[command(name = "jira:issues", hide = true)]
    JiraIssues,

    /// Anything else goes straight to git
    #[command(external_subcommand)]
    Git(Vec<String>),
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    config::setup_colors();
    init_logging();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("git-ninja: {}", e);
            std::process::exit(1);
        }
    };

    let exit_code = match cli.command {
        Commands::Recent(args) => commands::recent::run(args, &config),
        Commands::Freq(args) => commands::freq::run(args, &config),
        Commands::Search(args) => commands::search::run(args, &config),
        Commands::Last => commands::last::run(&config),
        Commands::Exists(args) => commands::exists::run(args),
        Commands::Current(args) => commands::current::run(args),
        Commands::CurrentPush(args) => commands::current::run_push(args),
        Commands::Actives(args) => commands::actives::run(args),
        Commands::Checkout(args) => commands::checkout::run(args),
        Commands::JiraIssues => commands::jira_issues::run(),
        Commands::Git(args) => git::passthrough(&args),
    };

    std::process::exit(exit_code);
}
