use clap::Parser;
use dialoguer::Confirm;
use student_notes_ai::{cli, config, error, export, logging, pipeline, reader, summarizer};
use cli::{Cli, Commands};
use config::Config;
use error::{NotesAiError, Result};
use pipeline::FailurePolicy;
use student_notes_common::{NO_SKILLS, SKILL_SET};
use summarizer::{ChatSummarizer, OpenAiClient};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Summarize { input, output, model, temperature, max_tokens, keep_going, yes, preview_rows } => {
            println!("🎓 student-notes - summarize\n");

            // 1. 読み込み・検証
            println!("[1/4] Reading {}...", input.display());
            let table = reader::read_table(&input)?;
            table.validate()?;
            println!("✔ {} students, {} comment columns\n", table.len(), table.comment_columns().len());

            print!("{}", pipeline::format_preview(&table, preview_rows));
            println!();

            if table.is_empty() {
                println!("Nothing to summarize.");
                return Ok(());
            }

            // 2. 設定・確認
            let config = config.with_overrides(model, temperature, max_tokens);
            let client = OpenAiClient::from_config(&config)?;
            let summarizer = ChatSummarizer::new(client);

            if !yes {
                let proceed = Confirm::new()
                    .with_prompt(format!(
                        "Send {} students to {} for summarization?",
                        table.len(),
                        summarizer.model()
                    ))
                    .default(true)
                    .interact()
                    .map_err(|e| NotesAiError::Config(format!("confirmation failed: {}", e)))?;
                if !proceed {
                    return Err(NotesAiError::Cancelled);
                }
            }

            // 3. 要約
            println!("[2/4] Summarizing with {}...", summarizer.model());
            let policy = if keep_going { FailurePolicy::Continue } else { FailurePolicy::Abort };
            let run = pipeline::summarize_table(&table, &summarizer, policy, true).await?;
            println!("✔ {} / {} students summarized\n", run.succeeded(), run.results.len());

            // 4. 出力
            let output_path = export::resolve_output_path(output.as_deref(), &input);
            println!("[3/4] Writing {}...", output_path.display());
            export::excel::generate_excel(&run.table, &output_path)?;
            println!("✔ Saved: {}\n", output_path.display());

            println!("[4/4] Report");
            if !run.incomplete_rows.is_empty() {
                println!("  ⚠ rows with a missing labeled line: {:?}", run.incomplete_rows);
            }
            for (row, labels) in &run.unknown_skill_rows {
                println!("  ⚠ row {}: skills outside vocabulary: {}", row, labels.join(", "));
            }
            for failure in &run.failures {
                println!("  ✘ row {} ({}): {}", failure.row, failure.name, failure.message);
            }

            println!("\n✅ Done");
        }

        Commands::Preview { input, rows } => {
            println!("🎓 student-notes - preview\n");

            let table = reader::read_table(&input)?;
            table.validate()?;
            println!("✔ {} students\n", table.len());
            print!("{}", pipeline::format_preview(&table, rows));
        }

        Commands::Skills => {
            println!("Skill vocabulary ({}):", SKILL_SET.len());
            for (i, skill) in SKILL_SET.iter().enumerate() {
                println!("  {:>2}. {}", i + 1, skill);
            }
            println!("  (sentinel when nothing applies: {})", NO_SKILLS);
        }

        Commands::Config { set_api_key, set_model, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ API key saved");
            }

            if let Some(model) = set_model {
                config.set_model(model)?;
                println!("✔ Model saved");
            }

            if show {
                println!("Config: {}", Config::config_path()?.display());
                println!("  model: {}", config.model);
                println!("  api base url: {}", config.api_base_url);
                println!("  temperature: {}", config.temperature);
                println!("  max tokens: {}", config.max_tokens);
                println!("  timeout: {}s", config.timeout_seconds);
                println!("  max retries: {}", config.max_retries);
                println!("  api key: {}", if config.get_api_key().is_ok() { "set" } else { "not set" });
            }
        }
    }

    Ok(())
}
