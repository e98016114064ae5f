//! # Crate publisher
//!
//! ## publisher
//!
//! The `publisher` crate provides a mechanism for registering and notifying listeners
//! of new events of type `T`.
//!
//! Listeners wrap asynchronous callbacks (`Fn(Uuid, Arc<T>) -> Future`). A [`Publisher`] keeps
//! the listeners registered for one kind of event, and a [`PublisherManager`] keeps one
//! publisher per event kind. Every registered listener receives each notification.
//!
//! ### Example
//!
//! ```
//! use std::sync::Arc;
//! use publisher::{Listener, Publishable, Publisher};
//! use uuid::Uuid;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let publisher = Publisher::<String>::new();
//!
//! // Register a listener
//! let mut listener = Listener::new(|_id: Uuid, data: Arc<String>| async move {
//!     println!("Listener received: {}", data);
//! });
//! let listener_id = publisher.register_listener(&mut listener);
//!
//! // Notify all listeners
//! publisher.notify_listeners(Arc::new("Hello, World!".to_string())).await;
//!
//! // Unregister the listener
//! publisher.unregister_listener(listener_id);
//! assert!(publisher.is_empty());
//! # });
//! ```

pub mod listener;
pub mod macros;
pub mod publisher;
pub mod publisher_manager;

use thiserror::Error;

pub use crate::listener::Listener;
pub use crate::publisher::{Publishable, Publisher};
pub use crate::publisher_manager::PublisherManager;

#[derive(Error, PartialEq, Clone, Debug)]
pub enum PublisherError {
    #[error("Publisher doesnt exist")]
    PublisherNotFound,
    #[error("Listener Id not found: {0}")]
    ListenerNotFound(uuid::Uuid),
}
