//! Chat mockup — canned responder and markdown-subset renderer

pub mod handler;
pub mod render;
pub mod responder;

pub use handler::{chat_router, ChatState};
pub use render::{escape_html, parse_blocks, render_html, render_message, Block};
pub use responder::{ChatResponder, GREETING};
