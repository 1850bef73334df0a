use clap::Args;
use colored::Colorize;
use time::OffsetDateTime;

use super::{print_fallback, LABEL_WIDTH};
use crate::config::{Config, Theme};
use crate::git::GitCli;
use crate::jira::{self, JiraCredentials};
use crate::ranking::{Listing, Ranker};

#[derive(Args)]
pub struct RecentArgs {
    /// Number of recent branches to show (default: 10)
    #[arg(short, long)]
    pub count: Option<usize>,

    /// Leave out branches matching this regex
    #[arg(short, long)]
    pub exclude: Option<String>,

    /// Put branches named after your open Jira issues first
    #[arg(long)]
    pub jira: bool,
}

pub fn run(args: RecentArgs, config: &Config) -> i32 {
    match run_inner(args, config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("git-ninja: {}", e);
            1
        }
    }
}

fn run_inner(args: RecentArgs, config: &Config) -> Result<i32, Box<dyn std::error::Error>> {
    let mut settings = config.ranking.clone();
    if args.exclude.is_some() {
        settings.exclude = args.exclude;
    }
    let limit = args.count.unwrap_or(settings.recent_limit);

    let source = GitCli;
    let ranker = Ranker::new(&source, &settings)?;
    let theme = Theme::default();

    let by_issue = args.jira || (settings.use_issue_priority && JiraCredentials::from_env().is_some());
    if by_issue {
        let keys = jira::priority_keys(OffsetDateTime::now_utc());

        match ranker.by_priority(&keys, limit)? {
            Listing::Ranked(ranked) => {
                for entry in ranked {
                    println!(
                        "{} {} {}",
                        format!("{:<width$}", entry.label, width = LABEL_WIDTH).color(theme.label),
                        format!("{:>8}", entry.rank).color(theme.rank),
                        entry.branch_name.color(theme.branch)
                    );
                }
            }
            Listing::Fallback(current) => print_fallback(&current, &theme),
        }

        return Ok(0);
    }

    match ranker.recent(limit)? {
        Listing::Ranked(events) => {
            for event in events {
                println!(
                    "{} {}",
                    format!("{:<width$}", event.relative_time, width = LABEL_WIDTH)
                        .color(theme.label),
                    event.branch_name.color(theme.branch)
                );
            }
        }
        Listing::Fallback(current) => print_fallback(&current, &theme),
    }

    Ok(0)
}
