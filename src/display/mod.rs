pub mod highlight;
pub mod messages;
pub mod response_panel;
pub mod style;
