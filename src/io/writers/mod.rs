pub mod html;
pub use html::{render_html_document, write_html_document};
