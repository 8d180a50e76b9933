use std::io::BufRead;

use medqa::{AnswerRecord, MedQaConfig, QueryPipeline};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("warn").add_directive("medqa=info".parse()?),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut json = false;
    let mut questions = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            questions.push(arg);
        }
    }

    let config = MedQaConfig::from_env();
    let pipeline = QueryPipeline::connect(&config).await?;

    if !questions.is_empty() {
        for question in &questions {
            print_answer(&pipeline.ask(question).await, json)?;
        }
        return Ok(());
    }

    info!("Reading questions from stdin");
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        print_answer(&pipeline.ask(question).await, json)?;
    }

    Ok(())
}


fn print_answer(answer: &AnswerRecord, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(answer)?);
    } else {
        println!("{}", answer);
        println!();
    }
    Ok(())
}
