#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::application::loaders;
use crate::application::render;
use crate::application::render::OutputFormat;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ChatBackend;
use crate::domain::models::ChatBackendBox;
use crate::infrastructure::backends::ChatManager;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

fn arg_conversation_id() -> Arg {
    return Arg::new("id")
        .short('i')
        .long("id")
        .help("Conversation ID")
        .num_args(1)
        .required(true);
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_send() -> Command {
    return Command::new("send")
        .about("Send a message to a conversation and print the stored message.")
        .arg(arg_conversation_id())
        .arg(
            Arg::new("message")
                .short('m')
                .long("message")
                .help("Message text")
                .num_args(1)
                .required(true),
        );
}

pub fn build() -> Command {
    return Command::new("chatview")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .subcommand(Command::new("list").about("List all conversations."))
        .subcommand(
            Command::new("show")
                .about("Show a conversation with all of its messages.")
                .arg(arg_conversation_id()),
        )
        .subcommand(Command::new("create").about("Start a new conversation."))
        .subcommand(subcommand_send())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .arg(
            Arg::new(ConfigKey::BackendURL.to_string())
                .short('u')
                .long(ConfigKey::BackendURL.to_string())
                .env("CHATVIEW_BACKEND_URL")
                .num_args(1)
                .help(format!("Base URL of the chat backend. [default: {}]", Config::default(ConfigKey::BackendURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("CHATVIEW_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Format.to_string())
                .short('f')
                .long(ConfigKey::Format.to_string())
                .env("CHATVIEW_FORMAT")
                .num_args(1)
                .help(format!("Output format for rendered pages. [default: {}]", Config::default(ConfigKey::Format)))
                .value_parser(PossibleValuesParser::new(OutputFormat::VARIANTS))
                .global(true),
        );
}

/// Runs a page loader or action for `name` and returns the rendered output.
pub async fn execute(
    backend: &dyn ChatBackend,
    format: OutputFormat,
    name: &str,
    matches: &ArgMatches,
) -> Result<String> {
    match name {
        "list" => {
            let data = loaders::index(backend).await?;
            return render::render_conversations(&data.conversations, format);
        }
        "show" => {
            let id = matches
                .get_one::<String>("id")
                .map(|id| return id.to_string())
                .unwrap_or_default();
            let page = loaders::conversation(backend, &id).await?;
            return render::render_conversation(&page.conversation, format);
        }
        "create" => {
            let conversation = loaders::create_conversation(backend).await?;
            return render::render_conversation(&conversation, format);
        }
        "send" => {
            let id = matches
                .get_one::<String>("id")
                .map(|id| return id.to_string())
                .unwrap_or_default();
            let text = matches
                .get_one::<String>("message")
                .map(|text| return text.to_string())
                .unwrap_or_default();
            let message = loaders::send_message(backend, &id, &text).await?;
            return render::render_message(&message, format);
        }
        _ => bail!(format!("Unknown command {name}")),
    }
}

pub async fn parse() -> Result<()> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
            }
            _ => {
                subcommand_config().print_long_help()?;
            }
        },
        Some((name, subcmd_matches)) => {
            let config = Config::load(build(), vec![&matches, subcmd_matches]).await?;
            let format = match OutputFormat::parse(config.get(ConfigKey::Format)) {
                Some(format) => format,
                None => bail!(format!(
                    "Unknown output format {}",
                    config.get(ConfigKey::Format)
                )),
            };

            let manager = ChatManager::new(&config);
            tracing::debug!(backend_url = manager.backend_url(), command = name, "Running command");

            let backend: ChatBackendBox = Box::new(manager);
            let output = execute(backend.as_ref(), format, name, subcmd_matches).await?;
            println!("{output}");
        }
        _ => {
            build().print_long_help()?;
        }
    }

    return Ok(());
}
