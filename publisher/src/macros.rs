/// Builds a [`crate::Listener`] that forwards every notification to `handler.method(id, value)`.
///
/// `handler` must be an `Arc` to a type with an `async fn method(&self, Uuid, Arc<T>)`.
#[macro_export]
macro_rules! listener {
    ($handler:ident.$method:ident) => {
        $crate::Listener::new({
            let handler = $handler.clone();
            move |id, value| {
                let handler = handler.clone();
                async move {
                    handler.$method(id, value).await;
                }
            }
        })
    };
}
