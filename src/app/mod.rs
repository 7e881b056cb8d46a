pub mod controller;
pub mod dispatch;
pub mod status;
pub mod tool_state;
pub mod view;

pub use controller::BrandApp;
pub use tool_state::{InFlight, ToolState};
pub use view::AppView;
