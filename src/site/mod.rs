pub mod content;
pub mod render;

pub use content::SiteContent;
pub use render::PageRenderer;
