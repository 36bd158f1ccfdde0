use anyhow::{Result, bail};

use crate::ai::FitnessAdvisor;
use crate::core::AppConfig;

pub async fn run(message: &str) -> Result<()> {
    if message.trim().is_empty() {
        bail!("Missing value for \"--message\"");
    }

    let advisor = FitnessAdvisor::from_config(&AppConfig::default());
    let advice = advisor.advise(message).await;
    println!("{}", advice.text);
    eprintln!("(source: {:?})", advice.source);

    Ok(())
}
