use crate::cli::args::RunArgs;
use crate::exit_codes::SUCCESS;
use emobench_core::config::{EvalConfig, Mode, PromptStyle};
use emobench_core::prompt::Language;
use emobench_core::providers::{self, ProviderKind};
use emobench_core::{report, runner};
use std::str::FromStr;

pub async fn cmd_run(args: RunArgs) -> anyhow::Result<i32> {
    let language = args
        .language
        .as_deref()
        .map(Language::from_str)
        .transpose()?;
    let mode = Mode::resolve(language, args.country)?;
    let style = if args.plain_prompt {
        PromptStyle::Plain
    } else {
        PromptStyle::Situated
    };

    let config = EvalConfig {
        dataset: args.dataset,
        mode,
        style,
        model: args.model,
        output: args.out,
    };

    let kind = ProviderKind::from_str(&args.provider)?;
    let provider = providers::from_env(kind)?;

    let records = runner::run(&config, provider.as_ref()).await?;
    report::write_json(&records, &config.output)?;

    println!(
        "Wrote {} records to {}",
        records.len(),
        config.output.display()
    );
    Ok(SUCCESS)
}
