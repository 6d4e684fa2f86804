use std::io::Write;
use std::sync::Arc;

use clap::Parser;
use portfolio_assistant::assistant::{self, AssistantConfig, ChatView, ConversationController, Locale, Phase, Role, Turn};
use portfolio_assistant::llm::types::LlmError;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error("invalid configuration: {0}")]
    Config(#[from] LlmError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "portfolio-assistant", about = "Terminal host for the portfolio chat assistant")]
struct Cli {
    /// Widget language (`en` or `am`); overrides `ASSISTANT_LOCALE`.
    #[arg(long)]
    locale: Option<Locale>,

    /// Start with the widget closed.
    #[arg(long)]
    closed: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum HostCommand<'a> {
    Open,
    Close,
    Toggle,
    Lang,
    Quit,
    Say(&'a str),
}

impl<'a> HostCommand<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            "/open" => Self::Open,
            "/close" => Self::Close,
            "/toggle" => Self::Toggle,
            "/lang" => Self::Lang,
            "/quit" | "/exit" => Self::Quit,
            _ => Self::Say(line),
        }
    }
}

/// Prints each turn as it lands in the transcript.
struct TerminalView;

impl ChatView for TerminalView {
    fn scroll_to_latest(&self, latest: &Turn) {
        let who = match latest.role() {
            Role::User => "you",
            Role::Bot => "bot",
        };
        println!("{who}> {}", latest.text());
        let _ = std::io::stdout().flush();
    }
}

#[tokio::main]
async fn main() -> Result<(), HostError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let mut config = AssistantConfig::from_env()?;
    if let Some(locale) = cli.locale {
        config = config.with_locale(locale);
    }

    let controller = assistant::mount(&config, Arc::new(TerminalView));
    if !cli.closed {
        controller.open();
    }
    render_chrome(&controller);

    let mut pending: Option<JoinHandle<()>> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match HostCommand::parse(&line) {
            HostCommand::Quit => {
                controller.unmount();
                return Ok(());
            }
            HostCommand::Open => controller.open(),
            HostCommand::Close => controller.close(),
            HostCommand::Toggle => {
                controller.toggle();
            }
            HostCommand::Lang => {
                controller.toggle_locale();
            }
            HostCommand::Say(text) => {
                if !controller.is_open() {
                    println!("[{}] (closed, /open to chat)", controller.launcher_label());
                    continue;
                }
                controller.set_input(text);
                if let Some(handle) = controller.submit_input() {
                    if let Some(label) = controller.thinking_label() {
                        println!("   {label}");
                    }
                    pending = Some(handle);
                } else if controller.phase() == Phase::Awaiting {
                    println!("   (still waiting for the last reply)");
                }
                continue;
            }
        }
        render_chrome(&controller);
    }

    // stdin closed: let the last reply land before tearing down.
    if let Some(handle) = pending.take() {
        if let Err(e) = handle.await {
            tracing::error!(error = %e, "assistant: reply task failed");
        }
    }
    controller.unmount();
    Ok(())
}

/// Header plus the full transcript when open, launcher label when closed.
fn render_chrome(controller: &ConversationController) {
    if !controller.is_open() {
        println!("[{}]", controller.launcher_label());
        return;
    }
    println!("── AI Assistant [{}] · {}", controller.locale(), controller.placeholder());
    for turn in controller.transcript() {
        TerminalView.scroll_to_latest(&turn);
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
