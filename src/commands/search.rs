use clap::Args;
use colored::Colorize;
use time::OffsetDateTime;

use super::LABEL_WIDTH;
use crate::config::{Config, Theme};
use crate::git::GitCli;
use crate::ranking::{BranchMatcher, Ranker};
use crate::utils::relative_time;

#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in branch names
    pub pattern: String,

    /// Treat the pattern as a regular expression
    #[arg(short, long)]
    pub regex: bool,
}

pub fn run(args: SearchArgs, config: &Config) -> i32 {
    match run_inner(args, config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("git-ninja: {}", e);
            1
        }
    }
}

fn run_inner(args: SearchArgs, config: &Config) -> Result<i32, Box<dyn std::error::Error>> {
    let matcher = if args.regex {
        BranchMatcher::regex(&args.pattern)?
    } else {
        BranchMatcher::substring(args.pattern)
    };

    let source = GitCli;
    let ranker = Ranker::new(&source, &config.ranking)?;
    let theme = Theme::default();
    let now = OffsetDateTime::now_utc();

    let matches = ranker.search(&matcher)?;
    if matches.is_empty() {
        println!("No matching branches found.");
        return Ok(0);
    }

    for record in matches {
        let when = if record.never_checked_out() {
            "never".to_string()
        } else {
            relative_time(record.last_checkout_at, now)
        };

        println!(
            "{} {}",
            format!("{:<width$}", when, width = LABEL_WIDTH).color(theme.label),
            record.name.color(theme.branch)
        );
    }

    Ok(0)
}
