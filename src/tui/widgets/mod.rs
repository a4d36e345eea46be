//! Reusable widgets for the TUI
//!
//! Contains custom widgets for common UI elements

pub mod error_dialog;
pub mod notification;
pub mod report_card;

// Re-export commonly used widgets
pub use error_dialog::{error_dialog_area, ErrorDialog, ErrorInfo};
pub use notification::{Notification, NotificationQueue, NotificationType, NotificationWidget};
pub use report_card::ReportCard;
