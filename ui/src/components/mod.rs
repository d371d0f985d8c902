//! Page chrome shared by every launcher.

pub mod app_navbar;
mod page_shell;
mod qr_modal;
mod reveal;

pub use app_navbar::AppNavbar;
pub use page_shell::PageShell;
pub use qr_modal::{QrButton, QrModal, QrModalState};
pub use reveal::{reveal_class, RevealSection, REVEAL_THRESHOLD};
