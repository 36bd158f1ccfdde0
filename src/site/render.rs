//! Server side rendering of the landing page. Handlebars escapes all
//! `{{...}}` output so the copy can't inject markup.
use anyhow::Result;
use handlebars::{Handlebars, handlebars_helper};
use serde_json::json;

use crate::ai::fallback::DEFAULT_RESPONSE;
use crate::chat::GREETING;
use crate::site::content::SiteContent;

const INDEX_TEMPLATE_NAME: &str = "index";
const INDEX_TEMPLATE: &str = include_str!("../../templates/index.hbs");

// The scrolling banner repeats its phrases so it never runs out of
// text while animating.
const MARQUEE_REPEAT: usize = 6;

// Star rating as text, e.g. `stars 3` renders "★★★"
handlebars_helper!(stars: |n: u64| "\u{2605}".repeat(n as usize));

pub struct PageRenderer {
    registry: Handlebars<'static>,
    content: SiteContent,
}

impl PageRenderer {
    pub fn new(content: SiteContent) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_helper("stars", Box::new(stars));
        registry.register_template_string(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)?;
        Ok(Self { registry, content })
    }

    /// Render the full page. `base_path` is the normalized mount prefix
    /// used for asset and API URLs.
    pub fn render(&self, base_path: &str, year: i32) -> Result<String> {
        let marquee: Vec<&String> = self
            .content
            .marquee
            .iter()
            .cycle()
            .take(self.content.marquee.len() * MARQUEE_REPEAT)
            .collect();
        let ctx = json!({
            "site": &self.content,
            "marquee": marquee,
            "base_path": base_path,
            "year": year,
            "greeting": GREETING,
            "fallback_reply": DEFAULT_RESPONSE,
            "chat_api": format!("{}api/chat", base_path),
        });
        let html = self.registry.render(INDEX_TEMPLATE_NAME, &ctx)?;
        Ok(html)
    }
}
