use crate::components::RemoteController;
use crate::utils::{delay_ms, page_visible};
use dioxus::core::Task;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

/// Polls `/api/status` while mounted and the page is visible. The loop is
/// restarted on every visibility change and dropped with the component.
#[component]
pub fn StatusPoller() -> Element {
    let controller = use_context::<RemoteController>();
    let visible = use_signal(page_visible);
    let mut poll_task = use_signal(|| None::<Task>);

    #[cfg(target_arch = "wasm32")]
    {
        let listener = use_hook(move || {
            let runtime = Runtime::current();
            let mut visible = visible;
            let callback = Closure::wrap(Box::new(move || {
                let _guard = RuntimeGuard::new(runtime.clone());
                visible.set(page_visible());
            }) as Box<dyn FnMut()>);
            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                let _ = doc.add_event_listener_with_callback(
                    "visibilitychange",
                    callback.as_ref().unchecked_ref(),
                );
            }
            Rc::new(callback)
        });
        use_drop(move || {
            let callback: &Closure<dyn FnMut()> = &listener;
            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                let _ = doc.remove_event_listener_with_callback(
                    "visibilitychange",
                    callback.as_ref().unchecked_ref(),
                );
            }
        });
    }

    use_effect(move || {
        let is_visible = visible();
        if let Some(task) = poll_task.write().take() {
            debug!("status polling stopped");
            task.cancel();
        }
        if !is_visible {
            return;
        }

        let controller = controller.clone();
        let interval_ms = controller.settings().poll_interval_ms;
        debug!("status polling every {interval_ms}ms");
        let task = spawn(async move {
            loop {
                controller.refresh_status().await;
                delay_ms(interval_ms).await;
            }
        });
        poll_task.set(Some(task));
    });

    rsx! {}
}
