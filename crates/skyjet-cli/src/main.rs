use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::LevelFilter;
use skyjet_core::domain::models::Event;
use skyjet_core::domain::services::responses::{
    ASSISTANT_TITLE, INPUT_PLACEHOLDER, QUICK_REPLIES_CAPTION,
};
use skyjet_core::{ChatWidget, ConfigLoader, Message, Mode, Role, ServiceContext};
use tokio::io::{AsyncBufReadExt, BufReader};

mod commands;

use commands::{HostCommand, HELP};

#[derive(Parser, Debug)]
#[clap(name = "skyjet", author, version, about = "Skyjet flight assistant in the terminal")]
struct Cli {
    #[clap(long, short, help = "YAML configuration file")]
    config: Option<PathBuf>,

    #[clap(long, short, help = "Service mode: executive, medical or incucai")]
    mode: Option<String>,

    #[clap(long, short, help = "Log level, overrides the configuration file")]
    log_level: Option<String>,

    #[clap(long, help = "Write logs to this file instead of stderr")]
    log_file: Option<PathBuf>,
}

enum Input {
    Line(Option<String>),
    Reply(Event),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::load_or_default(cli.config.as_deref())
        .await
        .context("Failed to load configuration")?;

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    let log_file = cli.log_file.as_deref().or(config.logging.file.as_deref());
    init_logging(level, log_file)?;

    match &cli.config {
        Some(path) => log::info!("Using configuration from {}", path.display()),
        None => log::info!("Using built-in configuration"),
    }

    let mode = match &cli.mode {
        Some(mode) => Mode::from_host(mode),
        None => config.assistant.default_mode,
    };
    let mut ctx = ServiceContext::new(mode);
    let mut widget = ChatWidget::from_config(&config);
    log::info!("Session {} started in {} mode", widget.session().id, ctx.mode);

    widget.open();
    print_header(&ctx);
    for message in widget.messages() {
        print_message(message);
    }
    println!("({}  /help para comandos)", INPUT_PLACEHOLDER);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let input = tokio::select! {
            line = lines.next_line() => Input::Line(line?),
            Some(event) = widget.next_event(), if widget.typing_indicator() => Input::Reply(event),
        };

        match input {
            Input::Reply(event) => {
                let visible = widget.is_visible();
                let message = widget.apply(event);
                if visible {
                    print_message(message);
                }
            }
            Input::Line(None) => break,
            Input::Line(Some(line)) => match HostCommand::parse(&line) {
                Some(Ok(HostCommand::Quit)) => break,
                Some(Ok(command)) => run_command(command, &mut widget, &mut ctx),
                Some(Err(err)) => println!("{}", err),
                None => submit(&mut widget, &line, &ctx),
            },
        }
    }

    for message in widget.settle().await {
        print_message(&message);
    }
    log::info!("Session {} ended with {} messages", widget.session().id, widget.messages().len());

    Ok(())
}

fn parse_log_level(level: &str) -> Result<LevelFilter> {
    level.trim().parse().map_err(|_| {
        anyhow!(
            "Invalid log level '{}', expected one of: off, error, warn, info, debug, trace",
            level
        )
    })
}

fn init_logging(level: &str, file: Option<&Path>) -> Result<()> {
    let log_level_filter = parse_log_level(level)?;

    let mut builder = env_logger::Builder::new();
    builder.filter_level(log_level_filter);

    if let Some(path) = file {
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(log_file)));
    }

    builder.init();
    Ok(())
}

fn submit(widget: &mut ChatWidget, text: &str, ctx: &ServiceContext) {
    if widget.submit_turn(text, ctx).is_some() {
        print_turn_started(widget);
    }
}

fn run_command(command: HostCommand, widget: &mut ChatWidget, ctx: &mut ServiceContext) {
    match command {
        HostCommand::Mode(mode) => {
            ctx.set_mode(mode);
            print_header(ctx);
        }
        HostCommand::Emergency => {
            ctx.activate_emergency();
            print_header(ctx);
        }
        HostCommand::Suggest => {
            println!("{}", QUICK_REPLIES_CAPTION);
            for (position, suggestion) in widget.suggestions(ctx).iter().enumerate() {
                println!("  {}. {}", position + 1, suggestion);
            }
        }
        HostCommand::Pick(index) => match widget.select_suggestion(ctx, index) {
            Some(suggestion) => println!("> {}  (/send para enviar)", suggestion),
            None => println!("No hay una sugerencia {}", index + 1),
        },
        HostCommand::Send => match widget.submit_pending(ctx) {
            Some(_) => print_turn_started(widget),
            None => println!("Nada para enviar"),
        },
        HostCommand::Open => {
            widget.open();
            println!("Widget abierto, /history muestra la conversación");
        }
        HostCommand::Close => widget.close(),
        HostCommand::History => {
            for message in widget.messages() {
                print_message(message);
            }
        }
        HostCommand::Help => println!("{}", HELP),
        HostCommand::Quit => {}
    }
}

fn print_header(ctx: &ServiceContext) {
    let emergency = if ctx.emergency { " 🚨" } else { "" };
    println!(
        "== {} · {} · {}{} ==",
        ASSISTANT_TITLE,
        ctx.mode.assistant_subtitle(),
        ctx.mode.service_name(),
        emergency
    );
}

fn print_turn_started(widget: &ChatWidget) {
    if let Some(message) = widget.session().last_message() {
        print_message(message);
    }
    if widget.typing_indicator() {
        println!("   {} está escribiendo...", ASSISTANT_TITLE);
    }
}

fn print_message(message: &Message) {
    let speaker = match message.role {
        Role::User => "Tú",
        Role::Assistant => ASSISTANT_TITLE,
    };
    println!("[{}] {}: {}", message.formatted_time(), speaker, message.content);
}
