use clap::Args;

use crate::utils::{branch_exists, get_repo};

#[derive(Args)]
pub struct ExistsArgs {
    /// Local branch name
    pub name: String,
}

pub fn run(args: ExistsArgs) -> i32 {
    match run_inner(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("git-ninja: {}", e);
            1
        }
    }
}

fn run_inner(args: ExistsArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let repo = get_repo()?;

    Ok(if branch_exists(&repo, &args.name) { 0 } else { 1 })
}
