//! Reusable UI pieces shared by the screens

mod attack_editor;
mod empty_state;
mod modal;
mod row;
mod text_input;
mod toast;

pub use attack_editor::AttackEditorPanel;
pub use empty_state::EmptyState;
pub use modal::Modal;
pub use row::{ListRow, Pill, PillTone};
pub use text_input::TextInput;
pub use toast::ToastView;
