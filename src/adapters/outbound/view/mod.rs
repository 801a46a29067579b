/// Table view adapters
mod document_view;

pub use document_view::DocumentView;
