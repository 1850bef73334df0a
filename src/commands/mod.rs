pub mod actives;
pub mod checkout;
pub mod current;
pub mod exists;
pub mod freq;
pub mod jira_issues;
pub mod last;
pub mod recent;
pub mod search;

pub use actives::ActivesArgs;
pub use checkout::CheckoutArgs;
pub use current::{CurrentArgs, CurrentPushArgs};
pub use exists::ExistsArgs;
pub use freq::FreqArgs;
pub use recent::RecentArgs;
pub use search::SearchArgs;

use colored::Colorize;

use crate::config::Theme;

/// Width of the time/label column in branch listings.
pub(crate) const LABEL_WIDTH: usize = 15;

/// Shown when a listing came back empty: the branch you are on.
pub(crate) fn print_fallback(current: &str, theme: &Theme) {
    println!(
        "{} {}",
        format!("{:<width$}", "current", width = LABEL_WIDTH).color(theme.label),
        current.color(theme.fallback).bold()
    );
}
