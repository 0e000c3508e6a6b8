//! Notification module
//!
//! Transient messages such as config warnings. Any component can post one.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::NotificationState;
