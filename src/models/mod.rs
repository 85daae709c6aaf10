pub mod booking;
pub mod email;

pub use booking::{time_label, BookingNotification, BookingNotificationRequest, TimeSlot};
pub use email::OutboundEmail;
