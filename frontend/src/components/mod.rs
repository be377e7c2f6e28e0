pub mod preview;
pub mod sidebar;
pub mod toast;
pub mod workspace;
