pub mod app;
pub mod error_modal;
pub mod form_page;
pub mod home;
pub mod message_overlay;
pub mod settings;
pub mod theme;
pub mod top_bar;

pub use app::MediVoiceApp;
