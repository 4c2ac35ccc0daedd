mod subscriber_email;

pub use subscriber_email::SubscriberEmail;
pub use subscriber_email::ValidationError;
