use dashmap::DashMap;
use log::debug;
use std::cmp::Eq;
use std::hash::Hash;
use std::sync::Arc;
use uuid::Uuid;

use crate::publisher::{Publishable, Publisher};
use crate::PublisherError;
use common::traits::Notifiable;

/// Manages one [`Publisher`] per event kind `S` and keeps track of which publisher every
/// registered listener belongs to, so listeners can be removed by id alone.
///
/// # Example
///
/// ```rust
/// use uuid::Uuid;
/// use publisher::{listener, PublisherManager};
/// use std::sync::Arc;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// enum Event {
///     NewSample,
///     ReadFailure,
/// }
///
/// impl From<Event> for usize {
///     fn from(value: Event) -> Self {
///         value as usize
///     }
/// }
///
/// struct StatusBar;
///
/// impl StatusBar {
///     async fn handle(&self, _id: Uuid, message: Arc<String>) {
///         println!("Status: {}", message);
///     }
/// }
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let manager = PublisherManager::<String, Event>::new(&[Event::NewSample]);
/// manager.add_publisher(Event::ReadFailure);
///
/// let status_bar = Arc::new(StatusBar);
/// let mut listener = listener!(status_bar.handle);
///
/// let id = manager.add_listener(&mut listener, &Event::ReadFailure).unwrap();
/// manager
///     .notify_listeners(Event::ReadFailure, Arc::new("gyroscope failed".to_string()))
///     .await;
/// manager.remove_listener(id).unwrap();
/// # });
/// ```
pub struct PublisherManager<T, S> {
    publishers: Arc<DashMap<S, Publisher<T>>>,
    control: Arc<DashMap<Uuid, S>>,
}

impl<T, S> Clone for PublisherManager<T, S> {
    fn clone(&self) -> Self {
        Self {
            publishers: self.publishers.clone(),
            control: self.control.clone(),
        }
    }
}

impl<T, S> PublisherManager<T, S>
where
    T: Send + Sync + 'static,
    S: Send + Sync + Hash + Eq + Clone + Into<usize>,
{
    pub fn new(publisher_types: &[S]) -> Self {
        let collection = DashMap::<S, Publisher<T>>::new();
        for publisher_type in publisher_types {
            collection.insert(publisher_type.clone(), Publisher::new());
        }

        Self {
            publishers: Arc::new(collection),
            control: Arc::new(DashMap::new()),
        }
    }

    /// Adds a publisher for `publisher_type`. Existing publishers keep their listeners.
    pub fn add_publisher(&self, publisher_type: S) {
        self.publishers.entry(publisher_type).or_default();
    }

    pub fn remove_publisher(&self, publisher_type: &S) {
        if let Some((_, publisher)) = self.publishers.remove(publisher_type) {
            publisher.unregister_all();
        }
    }

    pub fn get_available_publisher_types(&self) -> Vec<S> {
        let mut publisher_types: Vec<S> = self
            .publishers
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        publisher_types.sort_by_key(|publisher_type| Into::<usize>::into(publisher_type.clone()));
        publisher_types
    }

    pub fn add_listener(
        &self,
        listener: &mut dyn Notifiable<T>,
        publisher_type: &S,
    ) -> Result<Uuid, PublisherError> {
        let publisher = self
            .publishers
            .get(publisher_type)
            .ok_or(PublisherError::PublisherNotFound)?;
        let id = publisher.register_listener(listener);
        self.control.insert(id, publisher_type.clone());
        Ok(id)
    }

    pub fn remove_listener(&self, id: Uuid) -> Result<(), PublisherError> {
        let (_, publisher_type) = self
            .control
            .remove(&id)
            .ok_or(PublisherError::ListenerNotFound(id))?;
        let publisher = self
            .publishers
            .get(&publisher_type)
            .ok_or(PublisherError::PublisherNotFound)?;
        publisher.unregister_listener(id);
        Ok(())
    }

    pub fn listener_count(&self, publisher_type: &S) -> usize {
        self.publishers
            .get(publisher_type)
            .map_or(0, |publisher| publisher.len())
    }

    pub async fn notify_listeners(&self, publisher_type: S, data: Arc<T>) {
        // Clone the publisher out of the map so the shard lock is released before awaiting.
        let publisher = self
            .publishers
            .get(&publisher_type)
            .map(|entry| entry.value().clone());
        match publisher {
            Some(publisher) => publisher.notify_listeners(data).await,
            None => debug!(
                "Dropping notification for unknown publisher {}",
                Into::<usize>::into(publisher_type)
            ),
        }
    }
}
