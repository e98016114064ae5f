use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use uuid::Uuid;

use common::traits::Notifiable;
use common::types::Callback;

/// Asynchronous callback that can be registered with a [`crate::Publisher`].
#[derive(Clone)]
pub struct Listener<T> {
    callback: Callback<T>,
    id: Option<Uuid>,
}

impl<T> Listener<T>
where
    T: Send + Sync + 'static,
{
    pub fn new<F, Fut>(callback: F) -> Self
    where
        F: Fn(Uuid, Arc<T>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let callback = Arc::new(move |id: Uuid, data: Arc<T>| {
            let fut = callback(id, data);
            Box::pin(fut) as Pin<Box<dyn Future<Output = ()> + Send>>
        });

        Listener { callback, id: None }
    }
}

impl<T> Notifiable<T> for Listener<T>
where
    T: Send + Sync,
{
    fn get_callback(&self) -> Callback<T> {
        self.callback.clone()
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }

    fn get_id(&self) -> Option<Uuid> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listener;
    use tokio::sync::Mutex;

    struct RateDisplay {
        shown: Arc<Mutex<Vec<f64>>>,
    }

    impl RateDisplay {
        fn new() -> Self {
            Self {
                shown: Arc::new(Mutex::new(Vec::new())),
            }
        }

        async fn handle(&self, _id: Uuid, value: Arc<f64>) {
            let mut shown = self.shown.lock().await;
            shown.push(*value);
        }
    }

    #[tokio::test]
    async fn test_new_listener() {
        let listener = Listener::new({
            move |_id: Uuid, value: Arc<f64>| async move {
                assert_eq!(*value, 0.6);
            }
        });

        assert!(listener.get_id().is_none());
        let callback = listener.get_callback();
        callback(Uuid::new_v4(), Arc::new(0.6)).await;
    }

    #[tokio::test]
    async fn test_listener_with_method() {
        let display = Arc::new(RateDisplay::new());

        let listener = Listener::new({
            let display = display.clone();
            move |id: Uuid, value: Arc<f64>| {
                let display = display.clone();
                async move { display.handle(id, value).await }
            }
        });

        let callback = listener.get_callback();
        callback(Uuid::new_v4(), Arc::new(5.0)).await;
        assert_eq!(*display.shown.lock().await, vec![5.0]);
    }

    #[tokio::test]
    async fn test_listener_with_macro() {
        let display = Arc::new(RateDisplay::new());

        let mut listener = listener!(display.handle);
        listener.set_id(Uuid::new_v4());
        assert!(listener.get_id().is_some());

        let callback = listener.get_callback();
        callback(Uuid::new_v4(), Arc::new(0.0)).await;
        callback(Uuid::new_v4(), Arc::new(0.6)).await;
        assert_eq!(*display.shown.lock().await, vec![0.0, 0.6]);
    }
}
