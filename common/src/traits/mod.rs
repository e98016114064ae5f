pub mod clock;
pub mod publisher;

pub use crate::traits::clock::Clock;
pub use crate::traits::publisher::Notifiable;
