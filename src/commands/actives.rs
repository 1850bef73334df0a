use clap::Args;
use colored::Colorize;
use time::{Duration, OffsetDateTime};

use crate::config::Theme;
use crate::utils::{active_branches, get_repo, relative_time};

#[derive(Args)]
pub struct ActivesArgs {
    /// Look back this many hours (default: 48)
    #[arg(long, default_value = "48")]
    pub hours: u32,

    /// Maximum number of branches to show (default: 50)
    #[arg(short, long, default_value = "50")]
    pub count: usize,
}

pub fn run(args: ActivesArgs) -> i32 {
    match run_inner(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("git-ninja: {}", e);
            1
        }
    }
}

fn run_inner(args: ActivesArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let repo = get_repo()?;
    let theme = Theme::default();
    let now = OffsetDateTime::now_utc();
    let cutoff = now
        .checked_sub(Duration::hours(i64::from(args.hours)))
        .ok_or_else(|| format!("--hours {} reaches before the earliest supported date", args.hours))?;

    let active: Vec<_> = active_branches(&repo, cutoff, args.count)?
        .into_iter()
        .filter(|activity| activity.commit_count > 0)
        .collect();

    if active.is_empty() {
        println!("No branches with commits in the last {} hours.", args.hours);
        return Ok(0);
    }

    for activity in active {
        let when = activity
            .latest_commit_at
            .map(|at| relative_time(at, now))
            .unwrap_or_default();
        let name = if activity.is_remote {
            activity.name.dimmed()
        } else {
            activity.name.color(theme.branch)
        };

        println!(
            "{} {} {}  {}",
            format!("{:>3} commits", activity.commit_count).color(theme.rank),
            format!("{:<15}", when).color(theme.label),
            name,
            activity.latest_commit.dimmed()
        );
    }

    Ok(0)
}
