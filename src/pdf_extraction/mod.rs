// PDF extraction module
pub mod lopdf_helper;
pub mod page_text;

pub use lopdf_helper::{get_page_count, load_pdf};
pub use page_text::{extract_document_text, join_pages, page_texts};
