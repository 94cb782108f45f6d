//! Utility helpers for the Homero remote

#[cfg(not(target_arch = "wasm32"))]
pub async fn delay_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn delay_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

/// Whether the document is currently shown. Always `true` outside a browser.
#[cfg(target_arch = "wasm32")]
pub fn page_visible() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|doc| doc.visibility_state() != web_sys::VisibilityState::Hidden)
        .unwrap_or(true)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn page_visible() -> bool {
    true
}
