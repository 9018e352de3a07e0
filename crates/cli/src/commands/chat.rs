//! `sandy chat`: Interactive or single-message chat mode.

use std::io::Write;
use std::path::PathBuf;
use sandy_agent::{ChatContext, ChatResponse};
use tokio::io::{self, AsyncBufReadExt, BufReader};

pub async fn run(
    message: Option<String>,
    user: String,
    profile: Option<PathBuf>,
    crisis: bool,
) -> anyhow::Result<()> {
    let config = super::load_config()?;
    let orchestrator = super::build_orchestrator(&config);
    let mut profile = super::load_profile(profile.as_deref(), &user)?;
    let context = if crisis {
        ChatContext::crisis()
    } else {
        ChatContext::default()
    };

    if let Some(msg) = message {
        // Single message mode
        eprint!("  Thinking...");
        let response = orchestrator.chat(&user, &msg, &mut profile, &context).await;
        eprint!("\r              \r");
        println!("{}", response.message);
        return Ok(());
    }

    // Interactive mode
    println!();
    println!("  ╔══════════════════════════════════════════════╗");
    println!("  ║          Sandy — Interactive Mode            ║");
    println!("  ╚══════════════════════════════════════════════╝");
    println!();
    println!("  Provider:  {}", config.default_provider);
    println!("  Model:     {}", orchestrator.settings().chat.model);
    println!("  User:      {user}");
    println!();
    println!("  Type your message and press Enter.");
    println!("  Commands: /summary, /clear. Type 'exit' or Ctrl+C to quit.");
    println!();

    let mut lines = BufReader::new(io::stdin()).lines();

    print!("  You > ");
    std::io::stdout().flush()?;

    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        match input {
            "" => {}
            "exit" | "quit" => break,
            "/summary" => {
                let summary = orchestrator.conversation_summary(&user).await;
                println!();
                println!("  Summary > {summary}");
                println!();
            }
            "/clear" => {
                orchestrator.clear_user_history(&user);
                println!("  History cleared.");
                println!();
            }
            text => {
                eprint!("  ...");
                let response = orchestrator.chat(&user, text, &mut profile, &context).await;
                eprint!("\r     \r");
                print_response(&response);
            }
        }

        print!("  You > ");
        std::io::stdout().flush()?;
    }

    println!();
    println!("  Goodbye! 👋");
    println!();
    Ok(())
}

fn print_response(response: &ChatResponse) {
    println!();
    for line in response.message.lines() {
        println!("  Sandy > {line}");
    }
    println!();
    for suggestion in &response.suggestions {
        println!("    → {suggestion}");
    }
    println!();
}
