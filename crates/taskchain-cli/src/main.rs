use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use taskchain_core::{
    Exit, ObserverKind, Output, Params, PipelineBuilder, PipelineConfig, TaskError, bind, params,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ObserverArg {
    Stdout,
    Tracing,
    None,
}

impl From<ObserverArg> for ObserverKind {
    fn from(arg: ObserverArg) -> Self {
        match arg {
            ObserverArg::Stdout => ObserverKind::Stdout,
            ObserverArg::Tracing => ObserverKind::Tracing,
            ObserverArg::None => ObserverKind::None,
        }
    }
}

/// Runs the bundled demo pipelines.
#[derive(Debug, Parser)]
#[command(name = "taskchain", version)]
struct Args {
    /// Print progress for every task.
    #[arg(long)]
    debug: bool,

    /// Where progress goes; overrides the config file.
    #[arg(long, value_enum)]
    observer: Option<ObserverArg>,

    /// JSON pipeline config.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name passed to the greeting pipeline.
    #[arg(long, default_value = "taskchain")]
    name: String,
}

fn load_config(args: &Args) -> anyhow::Result<PipelineConfig> {
    let mut config = match &args.config {
        Some(path) => PipelineConfig::from_json_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    if args.debug {
        config.debug = true;
    }
    if let Some(observer) = args.observer {
        config.observer = observer.into();
    }
    Ok(config)
}

/// split -> sum -> finish: exits early with the finish payload.
fn sum_pipeline(config: &PipelineConfig) -> taskchain_core::Pipeline {
    PipelineBuilder::from_config(config)
        .task("split", |_| Ok(Output::multi(params![10, 20])))
        .task("sum", |params: Params| {
            let mut a = 0_i32;
            let mut b = 0_i32;
            bind!(params => a, b)?;
            Ok(Output::single(a + b))
        })
        .typed_task("finish", |(total,): (i32,)| {
            tracing::info!(total, "sum computed");
            Ok(Exit::new(0, "done").with_payload(total * 3 + 9).into())
        })
        .build()
}

fn greeting_pipeline(config: &PipelineConfig) -> taskchain_core::Pipeline {
    PipelineBuilder::from_config(config)
        .typed_task("greet", |(name,): (String,)| {
            if name.is_empty() {
                return Err(TaskError::new("name must not be empty"));
            }
            Ok(Output::single(format!("Hello, {name}!")))
        })
        .typed_task("shout", |(line,): (String,)| {
            Ok(Output::single(line.to_uppercase()))
        })
        .build()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,taskchain=debug")),
        )
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    let sum = sum_pipeline(&config)
        .run(params![])
        .context("sum pipeline failed")?;
    println!("sum pipeline: {sum}");

    let greeting = greeting_pipeline(&config)
        .run(params![args.name.clone()])
        .context("greeting pipeline failed")?;
    println!("greeting pipeline: {greeting}");

    Ok(())
}
