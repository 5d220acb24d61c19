mod bar_widget;
mod status_bar;
pub mod widgets;

pub use bar_widget::*;
pub use status_bar::*;
pub use widgets::*;
