use avatargen::{logger, GenerationError, GenerationWorkflow, WorkflowConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    logger::init_with_config(logger::LoggerConfig::development())?;

    if dotenv_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    let config = WorkflowConfig::from_env();
    logger::log_workflow_config(&config);

    let workflow = GenerationWorkflow::with_http(config)?;

    workflow.set_style("oil painting");
    workflow.set_artist("Vincent Van Gogh");
    workflow.set_finishing_touches("dramatic lighting");
    log::info!("📝 Prompt: {}", workflow.prompt());

    match workflow.generate().await {
        Ok(result) => {
            log::info!("✅ Image generated after {} attempt(s)", result.attempts);
            log::info!("🖼️  Prompt used: {}", result.prompt_used);
            match result.image_url.decode()? {
                Some(bytes) => log::info!(
                    "🖼️  Inline {} image, {} bytes",
                    result.image_url.media_type().unwrap_or("unknown"),
                    bytes.len()
                ),
                None => log::info!("🖼️  Image URL: {}", result.image_url),
            }
        }
        Err(e @ GenerationError::AttemptsExhausted { .. }) => {
            log::warn!("{}", e);
        }
        Err(e) => {
            log::error!("❌ Generation failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
