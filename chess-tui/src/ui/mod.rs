pub mod app;
pub mod render_loop;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use render_loop::run_app;
