use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::ai::FitnessAdvisor;
use crate::chat::{ChatSession, TurnError};
use crate::core::AppConfig;

pub async fn run() -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    let config = AppConfig::default();
    let advisor = FitnessAdvisor::from_config(&config);
    let mut session = ChatSession::new("terminal");

    if let Some(greeting) = session.transcript().last() {
        println!("{}", greeting.text);
    }

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                match session.send(&advisor, &line).await {
                    Ok(reply) => {
                        rl.add_history_entry(line.as_str())?;
                        println!("{}", reply.text);
                    }
                    // Enter on an empty prompt does nothing
                    Err(TurnError::EmptyMessage) => continue,
                    Err(e) => return Err(e.into()),
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
