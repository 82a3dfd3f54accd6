pub mod board;
pub mod controls_panel;
pub mod game_info_panel;
pub mod promotion_dialog;

pub use board::BoardWidget;
pub use controls_panel::ControlsPanel;
pub use game_info_panel::GameInfoPanel;
pub use promotion_dialog::PromotionWidget;
