pub mod settings_panel;
pub mod timer;
pub mod wordset_toggle;
