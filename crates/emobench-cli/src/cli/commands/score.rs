use crate::cli::args::ScoreArgs;
use crate::exit_codes::SUCCESS;
use emobench_core::scoring;

pub fn cmd_score(args: &ScoreArgs) -> anyhow::Result<i32> {
    let card = scoring::score_file(&args.results)?;

    for verdict in &card.verdicts {
        println!("ground_truth: {}", verdict.emotion);
        println!("prediction: {}", verdict.pred_emotion);
        println!("match: {}\n", verdict.correct);
    }

    println!("Accuracy:  {:.4}", card.accuracy());
    Ok(SUCCESS)
}
