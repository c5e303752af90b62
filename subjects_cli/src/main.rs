mod commands;
mod output;
mod prompt;

use std::io::Stdout;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use subjects_lib::subjects_api::Client;
use subjects_lib::{SubjectListController, SubjectView, SubjectsConfig};
use tokio::io::{BufReader, Stdin};

use crate::commands::Action;
use crate::output::{OutputFormat, TerminalView};
use crate::prompt::{Input, LineConfirm};

#[derive(Parser)]
#[command(name = "subjects")]
#[command(about = "Browse and edit subjects in the school administration backend")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Backend entry point (overrides config and SUBJECTS_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Initial results per page
    #[arg(long)]
    page_size: Option<u32>,

    /// Display language: en or es
    #[arg(long)]
    locale: Option<String>,

    /// Output format: table or json
    #[arg(long, default_value = "table")]
    output: String,
}

type TerminalController =
    SubjectListController<Client, TerminalView<Stdout>, LineConfirm<BufReader<Stdin>>>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("subjects=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;
    tracing::debug!("Using backend {}", config.api_url);

    let input = Input::new(BufReader::new(tokio::io::stdin()));
    let view = TerminalView::new(std::io::stdout(), OutputFormat::parse(&cli.output));
    let client = Client::with_base_url(&config.api_url);
    let mut controller =
        SubjectListController::from_config(client, view, LineConfirm::new(input.clone()), &config)?;

    println!("{}", commands::help(&config));
    controller.initialize().await;
    run(&mut controller, &input, &config).await
}

fn build_config(cli: &Cli) -> Result<SubjectsConfig> {
    let mut config = SubjectsConfig::load(cli.config.as_deref())?;
    if let Some(ref url) = cli.api_url {
        config.api_url = url.clone();
    }
    if let Some(size) = cli.page_size {
        config.default_page_size = size;
    }
    if let Some(ref locale) = cli.locale {
        config.locale = locale.parse().map_err(anyhow::Error::msg)?;
    }
    config.validate()?;
    Ok(config)
}

async fn run(
    controller: &mut TerminalController,
    input: &Input<BufReader<Stdin>>,
    config: &SubjectsConfig,
) -> Result<()> {
    loop {
        if controller.view().modal().is_some() {
            // Any line acknowledges the modal.
            input.next_line().await?;
            controller.view_mut().dismiss_error();
            continue;
        }

        commands::print_prompt();
        let Some(line) = input.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let action = commands::parse(&line)
            .and_then(|command| commands::resolve(command, controller.rows(), config));
        match action {
            Ok(Action::Event(event)) => controller.handle(event).await,
            Ok(Action::SetId(id)) => controller.view_mut().set_id_field(&id),
            Ok(Action::SetName(name)) => controller.view_mut().set_name_field(&name),
            Ok(Action::ShowForm) => controller.view_mut().print_form(),
            Ok(Action::Help) => println!("{}", commands::help(config)),
            Ok(Action::Quit) => break,
            Err(msg) => eprintln!("{}", msg),
        }
    }

    Ok(())
}
