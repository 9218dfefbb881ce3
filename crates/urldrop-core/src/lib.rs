pub mod config;
pub mod error;
pub mod logging;

pub mod extract;
pub mod populate;
pub mod session;
pub mod storage;
pub mod validate;

pub use error::ExtractError;
pub use extract::{extract_html, extract_text, extract_url_shortcut, ExtractOptions, FileKind};
pub use populate::populate;
pub use session::Session;
pub use validate::validate;
