pub mod media;
pub mod notification;

pub use media::{MediaInfo, MediaTypeLabels};
pub use notification::{MediaNotificationConfig, NotificationPayload, NotifyType};
