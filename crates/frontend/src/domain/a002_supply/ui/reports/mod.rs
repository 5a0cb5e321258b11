//! Report downloads of the supplies page
//!
//! - view_model.rs: download command and dialog state
//! - view.rs: report buttons and the by-name / by-date dialogs

mod view;
mod view_model;

pub use view::SupplyReports;
pub use view_model::SupplyReportsViewModel;
