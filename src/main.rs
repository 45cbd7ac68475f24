use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use zulip_client::ZulipClient;
use zulip_client::infrastructure::{CliArgs, Command};

fn init_logging(args: &CliArgs) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(args.log_level.default_filter().into())
        .from_env_lossy();

    if let Some(log_path) = &args.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn create_client(args: &CliArgs) -> Result<ZulipClient> {
    let cwd = std::env::current_dir()?;
    let config = args
        .client_config(&cwd)
        .wrap_err("failed to load Zulip credentials")?;

    debug!(site = %config.site(), "Credentials resolved");

    let client = match &args.curl {
        Some(program) => ZulipClient::with_curl(config, program),
        None => ZulipClient::new(config)?,
    };

    Ok(client)
}

async fn run(client: &ZulipClient, command: Command) -> Result<()> {
    let messages = client.messages();

    match command {
        Command::SendPrivate { content, to } => {
            let id = messages.send_private(&content, to.recipients()).await?;
            println!("{id}");
        }
        Command::SendStream { content, topic, to } => {
            let id = messages.send_stream(&content, &topic, to.recipients()).await?;
            println!("{id}");
        }
        Command::Edit {
            message_id,
            content,
            topic,
            stream_id,
            propagate,
        } => {
            let edit = Command::edit_request(content, topic, stream_id, propagate);
            messages.edit(message_id, edit).await?;
        }
        Command::Delete { message_id } => messages.delete(message_id).await?,
        Command::React { message_id, emoji } => {
            messages.add_reaction(message_id, emoji.emoji()).await?;
        }
        Command::Unreact { message_id, emoji } => {
            messages.remove_reaction(message_id, emoji.emoji()).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();

    init_logging(&args)?;

    info!(version = zulip_client::VERSION, "Starting zulip");

    let client = create_client(&args)?;

    run(&client, args.command).await
}
