mod api;
mod form;

use clap::Parser;

#[derive(clap::Parser)]
struct Opts {
    #[clap(long, default_value = "config.toml")]
    config: std::path::PathBuf,

    /// Base URL of the moderation service, overriding the config file.
    #[clap(long)]
    endpoint: Option<String>,

    /// Bearer token, overriding the config file.
    #[clap(long)]
    token: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Submit an image for moderation and print the report.
    Moderate { image: std::path::PathBuf },

    /// Administer service tokens (requires an admin token).
    Tokens {
        #[clap(subcommand)]
        command: TokensCommand,
    },
}

#[derive(clap::Subcommand)]
enum TokensCommand {
    Create {
        #[clap(long)]
        admin: bool,
    },
    List,
    Revoke { token: String },
}

fn endpoint_default() -> String {
    "http://localhost:7000".to_owned()
}

#[derive(serde::Deserialize)]
struct Config {
    #[serde(default = "endpoint_default")]
    endpoint: String,
    token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: endpoint_default(),
            token: None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    env_logger::builder()
        .filter_module("imagemod", log::LevelFilter::Info)
        .init();

    let opts = Opts::parse();

    let config = if opts.config.exists() {
        toml::from_str::<Config>(std::str::from_utf8(&std::fs::read(&opts.config)?)?)?
    } else {
        Config::default()
    };

    let endpoint = opts.endpoint.unwrap_or(config.endpoint);
    let token = opts.token.or(config.token);

    match opts.command {
        Command::Moderate { image } => {
            let mut form = form::ModerationForm::new(endpoint);
            form.token = token.unwrap_or_default();
            form.file = Some(image);
            form.submit().await;
            debug_assert!(!form.loading);

            if form.report.is_some() {
                println!("Moderation Report");
                for line in form.report_lines() {
                    println!("{}", line);
                }
            }
            if !form.error.is_empty() {
                eprintln!("{}", form.error);
                std::process::exit(1);
            }
        }
        Command::Tokens { command } => {
            let token = token.ok_or_else(|| {
                anyhow::format_err!("a token is required (pass --token or set it in the config)")
            })?;
            let client = api::Client::new(&endpoint, &token);

            match command {
                TokensCommand::Create { admin } => {
                    let grant = client
                        .create_token(&api::tokens::CreateRequest { is_admin: admin })
                        .await?;
                    println!("{}", grant.token);
                }
                TokensCommand::List => {
                    for grant in client.list_tokens().await? {
                        println!(
                            "{}\t{}\t{}",
                            grant.token,
                            if grant.is_admin { "admin" } else { "user" },
                            grant.created_at
                        );
                    }
                }
                TokensCommand::Revoke { token } => {
                    let ack = client.revoke_token(&token).await?;
                    println!("{}", ack.detail);
                }
            }
        }
    }

    Ok(())
}
