pub mod app;
pub mod event;
pub mod mode;
pub mod render_state;
pub mod session;

pub use app::App;
pub use event::AppEvent;
pub use mode::Stage;
pub use render_state::{OutputView, RenderState, SlotView};
pub use session::Session;
