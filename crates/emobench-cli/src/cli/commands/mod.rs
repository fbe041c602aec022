pub mod run;
pub mod score;

use super::args::{Cli, Command};

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Run(args) => run::cmd_run(args).await,
        Command::Score(args) => score::cmd_score(&args),
    }
}
