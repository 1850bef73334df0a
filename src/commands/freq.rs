use clap::Args;
use colored::Colorize;
use time::OffsetDateTime;

use super::{print_fallback, LABEL_WIDTH};
use crate::config::{Config, Theme};
use crate::git::GitCli;
use crate::ranking::{Listing, Ranker};
use crate::utils::relative_time;

#[derive(Args)]
pub struct FreqArgs {
    /// Number of branches to show (default: 20)
    #[arg(short, long)]
    pub count: Option<usize>,

    /// Branches checked out within this many days count as very recent (default: 3)
    #[arg(long)]
    pub recent_days: Option<u32>,

    /// Branches not checked out for this many days count as old (default: 14)
    #[arg(long)]
    pub older_days: Option<u32>,

    /// Leave out branches matching this regex
    #[arg(short, long)]
    pub exclude: Option<String>,
}

pub fn run(args: FreqArgs, config: &Config) -> i32 {
    match run_inner(args, config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("git-ninja: {}", e);
            1
        }
    }
}

fn run_inner(args: FreqArgs, config: &Config) -> Result<i32, Box<dyn std::error::Error>> {
    let mut settings = config.ranking.clone();
    if let Some(days) = args.recent_days {
        settings.recent_days = days;
    }
    if let Some(days) = args.older_days {
        settings.older_days = days;
    }
    if args.exclude.is_some() {
        settings.exclude = args.exclude;
    }
    settings.validate()?;

    let limit = args.count.unwrap_or(settings.freq_limit);
    let now = OffsetDateTime::now_utc();
    let thresholds = settings.thresholds(now)?;

    let source = GitCli;
    let ranker = Ranker::new(&source, &settings)?;
    let theme = Theme::default();

    match ranker.by_activity(&thresholds, limit, now)? {
        Listing::Ranked(records) => {
            for record in records {
                let label = format!(
                    "{:2} checkouts, {:<width$}",
                    record.checkout_count,
                    relative_time(record.last_checkout_at, now),
                    width = LABEL_WIDTH
                );
                println!("{} {}", label.color(theme.label), record.name.color(theme.branch));
            }
        }
        Listing::Fallback(current) => print_fallback(&current, &theme),
    }

    Ok(0)
}
