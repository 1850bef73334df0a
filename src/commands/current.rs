use clap::Args;
use colored::Colorize;

use crate::config::Theme;
use crate::git;
use crate::utils::{get_branch_name, get_repo};

#[derive(Args)]
pub struct CurrentArgs {
    /// Push the current branch after the other steps
    #[arg(long)]
    pub push: bool,

    /// Pull the current branch (rebasing unless --ff is given)
    #[arg(long)]
    pub pull: bool,

    /// Only fast-forward when pulling
    #[arg(long, requires = "pull")]
    pub ff: bool,

    /// Force push (use with caution)
    #[arg(short, long, requires = "push")]
    pub force: bool,

    /// Remote to pull from and push to
    #[arg(long, default_value = "origin")]
    pub remote: String,

    /// Rebase the current branch onto this branch
    #[arg(long, value_name = "BRANCH", conflicts_with = "merge")]
    pub rebase: Option<String>,

    /// Merge this branch into the current branch
    #[arg(long, value_name = "BRANCH")]
    pub merge: Option<String>,
}

#[derive(Args)]
pub struct CurrentPushArgs {
    /// Force push (use with caution)
    #[arg(short, long)]
    pub force: bool,

    /// Remote to push to
    #[arg(long, default_value = "origin")]
    pub remote: String,
}

pub fn run(args: CurrentArgs) -> i32 {
    match run_inner(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("git-ninja: {}", e);
            1
        }
    }
}

pub fn run_push(args: CurrentPushArgs) -> i32 {
    match current_branch() {
        Ok(branch) => push(&branch, &args.remote, args.force),
        Err(e) => {
            eprintln!("git-ninja: {}", e);
            1
        }
    }
}

fn current_branch() -> Result<String, Box<dyn std::error::Error>> {
    let repo = get_repo()?;
    Ok(get_branch_name(&repo).ok_or("Could not determine current branch")?)
}

fn run_inner(args: CurrentArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let branch = current_branch()?;

    let syncing = args.pull || args.push || args.rebase.is_some() || args.merge.is_some();
    if !syncing {
        println!("{}", branch);
        return Ok(0);
    }

    if args.pull {
        let mode = if args.ff { "--ff-only" } else { "--rebase" };
        let code = announce_and_run(&["pull", &args.remote, &branch, mode]);
        if code != 0 {
            return Ok(code);
        }
    }

    if let Some(onto) = &args.rebase {
        if *onto == branch {
            eprintln!("git-ninja: refusing to rebase {} onto itself", branch);
            return Ok(1);
        }
        let code = announce_and_run(&["rebase", onto]);
        if code != 0 {
            return Ok(code);
        }
    }

    if let Some(from) = &args.merge {
        if *from == branch {
            eprintln!("git-ninja: refusing to merge {} into itself", branch);
            return Ok(1);
        }
        let code = announce_and_run(&["merge", from]);
        if code != 0 {
            return Ok(code);
        }
    }

    if args.push {
        return Ok(push(&branch, &args.remote, args.force));
    }

    Ok(0)
}

fn push(branch: &str, remote: &str, force: bool) -> i32 {
    let mut push_args = vec!["push", remote, branch];
    if force {
        push_args.push("--force-with-lease");
    }

    announce_and_run(&push_args)
}

fn announce_and_run(args: &[&str]) -> i32 {
    let theme = Theme::default();
    println!(
        "Running: {}",
        format!("git {}", args.join(" ")).color(theme.label).bold()
    );

    git::run(args)
}
