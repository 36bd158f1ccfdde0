//! Prompts sent to the generative language API, rendered with
//! Handlebars. Strict mode is on so a missing field is an error rather
//! than a silently empty prompt.

use std::fmt;

use anyhow::Result;
use handlebars::Handlebars;
use serde_json::json;

#[derive(Debug)]
pub enum Prompt {
    TrainerAdvice,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl From<Prompt> for String {
    fn from(item: Prompt) -> String {
        format!("{:?}", item)
    }
}

// Triple braces so the user's text is passed through without HTML
// escaping. This goes to the model, not a browser.
const TRAINER_ADVICE_PROMPT: &str = "You are a helpful fitness trainer at Surefit Gym in Ikeja, Lagos. Provide concise, practical fitness advice. User asks: {{{message}}}";

pub fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry
        .register_template_string(&Prompt::TrainerAdvice.to_string(), TRAINER_ADVICE_PROMPT)
        .expect("Failed to register template");
    registry
}

pub fn render_trainer_prompt(templates: &Handlebars, message: &str) -> Result<String> {
    let prompt = templates.render(
        &Prompt::TrainerAdvice.to_string(),
        &json!({ "message": message }),
    )?;
    Ok(prompt)
}
