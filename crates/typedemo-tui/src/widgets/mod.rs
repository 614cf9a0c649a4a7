mod demo_view;
mod help;
mod status_bar;
mod tab_bar;

pub use demo_view::{segment_lines, DemoViewWidget};
pub use help::HelpWidget;
pub use status_bar::StatusBarWidget;
pub use tab_bar::TabBarWidget;
