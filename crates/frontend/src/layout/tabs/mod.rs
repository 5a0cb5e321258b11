//! Tab management
//!
//! - `page` - TabPage wrapper for the content of one tab
//! - `registry` - tab.key → View
//! - `tab_labels` - tab titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
