pub mod commands;
pub mod config;
pub mod document;
pub mod editor;
pub mod form;
pub mod model;
pub mod outline;
pub mod parser;
pub mod picker;
pub mod tree;

// Re-export commonly used types
pub use config::AppConfig;
pub use document::{DocumentError, ObligationDocument, ObligationLevel, ObligationType};
pub use editor::TreeEditor;
pub use form::{FormMode, ObligationForm};
pub use model::{Node, NodeField, NodeId, ObligationElement, Payload};
pub use parser::{Indent, TextCodec};
pub use picker::ElementPicker;
