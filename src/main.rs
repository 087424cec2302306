use anyhow::Context as _;
use clap::Parser;
use retina_sdk::config::cli::Command;
use retina_sdk::utils::error::{ErrorSeverity, RetinaError};
use retina_sdk::utils::{logger, validation::Validate};
use retina_sdk::{ApiClient, CategoryFilterRequest, CliConfig, Expression, ImageOptions, PosType};
use serde::Serialize;

fn parse_expression(json: &str) -> anyhow::Result<Expression> {
    serde_json::from_str(json).with_context(|| format!("invalid expression: {}", json))
}

fn print_result<T: Serialize>(result: Option<T>) -> anyhow::Result<()> {
    match result {
        Some(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        None => eprintln!("∅ No result (404)"),
    }
    Ok(())
}

async fn run(config: &CliConfig) -> anyhow::Result<()> {
    let client = ApiClient::new(&config.client_config()?)?;
    let retina = config.retina.as_str();
    tracing::info!("Using retina '{}' at {}", retina, client.base_path());

    match &config.command {
        Command::Retinas { name } => {
            print_result(client.retinas().get_retinas(name.as_deref()).await?)?;
        }
        Command::Term { term, page, .. } => {
            let terms = client
                .terms()
                .get_term(
                    retina,
                    Some(term.as_str()),
                    config.command.fingerprint_param(),
                    page.pagination(),
                )
                .await?;
            print_result(terms)?;
        }
        Command::Contexts { term, page, .. } => {
            let contexts = client
                .terms()
                .get_contexts_for_term(
                    retina,
                    term,
                    config.command.fingerprint_param(),
                    page.pagination(),
                )
                .await?;
            print_result(contexts)?;
        }
        Command::SimilarTerms {
            term,
            context_id,
            pos_type,
            page,
            ..
        } => {
            let terms = client
                .terms()
                .get_similar_terms(
                    retina,
                    term,
                    *context_id,
                    pos_type.map(PosType::from),
                    config.command.fingerprint_param(),
                    page.pagination(),
                )
                .await?;
            print_result(terms)?;
        }
        Command::Fingerprint { text } => {
            print_result(client.text().get_representation_for_text(retina, text).await?)?;
        }
        Command::Keywords { text } => {
            print_result(client.text().get_keywords_for_text(retina, text).await?)?;
        }
        Command::Tokenize { text, pos_tags } => {
            let pos_tags: Vec<PosType> = pos_tags.iter().copied().map(PosType::from).collect();
            print_result(client.text().get_tokens_for_text(retina, text, &pos_tags).await?)?;
        }
        Command::Language { text } => {
            print_result(client.text().get_language(text).await?)?;
        }
        Command::Expression { json, sparsity } => {
            let expression = parse_expression(json)?;
            let fingerprint = client
                .expressions()
                .resolve_expression(retina, &expression, *sparsity)
                .await?;
            print_result(fingerprint)?;
        }
        Command::Compare { left, right } => {
            let left = parse_expression(left)?;
            let right = parse_expression(right)?;
            print_result(client.fingerprints().compare(retina, &left, &right).await?)?;
        }
        Command::Image {
            json,
            output,
            scalar,
            shape,
        } => {
            let expression = parse_expression(json)?;
            let options = ImageOptions {
                image_scalar: *scalar,
                plot_shape: shape.map(Into::into),
                ..Default::default()
            };
            match client
                .image()
                .get_image_for_expression(retina, &expression, options)
                .await?
            {
                Some(bytes) => {
                    tokio::fs::write(output, &bytes)
                        .await
                        .map_err(RetinaError::IoError)?;
                    println!("🖼️  Image saved to: {}", output.display());
                }
                None => eprintln!("∅ No result (404)"),
            }
        }
        Command::Classify {
            name,
            positive,
            negative,
        } => {
            let request = CategoryFilterRequest::new(
                positive.iter().map(|t| Expression::text(t.as_str())).collect(),
            )
            .with_negative_examples(negative.iter().map(|t| Expression::text(t.as_str())).collect());
            let filter = client
                .classify()
                .create_category_filter(retina, name, &request)
                .await?;
            print_result(filter)?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config.command);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if let Err(err) = run(&config).await {
        match err.downcast_ref::<RetinaError>() {
            Some(e) => {
                tracing::error!(
                    "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());

                // 根據錯誤嚴重程度決定退出碼
                let exit_code = match e.severity() {
                    ErrorSeverity::Medium => 2,
                    ErrorSeverity::High => 1,
                    ErrorSeverity::Critical => 3,
                };
                std::process::exit(exit_code);
            }
            None => {
                eprintln!("❌ {:#}", err);
                std::process::exit(1);
            }
        }
    }
}
