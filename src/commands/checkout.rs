use clap::Args;

use crate::git::{self, GitCli, RefSource};

#[derive(Args)]
pub struct CheckoutArgs {
    /// Branch to switch to
    pub branch: String,

    /// Pull the branch from origin (with rebase) once switched
    #[arg(short, long)]
    pub pull: bool,
}

pub fn run(args: CheckoutArgs) -> i32 {
    match run_inner(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("git-ninja: {}", e);
            1
        }
    }
}

fn run_inner(args: CheckoutArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let code = git::run(&["checkout", &args.branch]);
    if code != 0 || !args.pull {
        return Ok(code);
    }

    // Pulling onto the wrong branch would mix histories
    let current = GitCli.current_branch()?;
    if current != args.branch {
        eprintln!(
            "git-ninja: expected to be on {} but HEAD is {}, not pulling",
            args.branch, current
        );
        return Ok(1);
    }

    Ok(git::run(&["pull", "origin", &args.branch, "--rebase"]))
}
