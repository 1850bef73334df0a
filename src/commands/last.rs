use crate::config::Config;
use crate::git::GitCli;
use crate::ranking::Ranker;

pub fn run(config: &Config) -> i32 {
    match run_inner(config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("git-ninja: {}", e);
            1
        }
    }
}

fn run_inner(config: &Config) -> Result<i32, Box<dyn std::error::Error>> {
    let source = GitCli;
    let ranker = Ranker::new(&source, &config.ranking)?;

    // Plain output so it can be used as `git checkout $(git-ninja last)`
    println!("{}", ranker.last_branch()?);
    Ok(0)
}
