//! Browser platform layer
//!
//! The `Interval` ticking clock source (subscription lifetime matches the
//! handle's) and LocalStorage persistence for pause-time session
//! snapshots. Everything here is wasm-only; the native binary drives the
//! simulation directly.

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    use crate::sim::GameState;

    const SNAPSHOT_KEY: &str = "brick_break_save";

    /// A recurring browser timer. The underlying interval is cleared on
    /// `cancel` and on drop, so a stale handle can never fire again.
    pub struct Interval {
        id: Option<i32>,
        // Keeps the JS-side callback alive for as long as the timer can fire
        _closure: Closure<dyn FnMut()>,
    }

    impl Interval {
        /// Schedule `callback` every `ms` milliseconds until cancelled.
        pub fn every(ms: i32, callback: impl FnMut() + 'static) -> Result<Self, JsValue> {
            let closure = Closure::<dyn FnMut()>::new(callback);
            let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
            let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms,
            )?;
            Ok(Self {
                id: Some(id),
                _closure: closure,
            })
        }

        /// Stop the browser timer without dropping the callback, so this is
        /// safe to call from inside the callback itself.
        pub fn cancel(&mut self) {
            if let Some(id) = self.id.take() {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(id);
                }
            }
        }
    }

    impl Drop for Interval {
        fn drop(&mut self) {
            self.cancel();
        }
    }

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// Persist a paused session so a reload can pick it back up.
    pub fn save_snapshot(state: &GameState) {
        let Some(storage) = local_storage() else {
            return;
        };
        match serde_json::to_string(state) {
            Ok(json) => {
                let _ = storage.set_item(SNAPSHOT_KEY, &json);
                log::info!("session snapshot saved (score {})", state.score);
            }
            Err(err) => log::warn!("snapshot serialization failed: {err}"),
        }
    }

    pub fn load_snapshot() -> Option<GameState> {
        let storage = local_storage()?;
        let json = storage.get_item(SNAPSHOT_KEY).ok()??;
        serde_json::from_str(&json).ok()
    }

    pub fn clear_snapshot() {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(SNAPSHOT_KEY);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{Interval, clear_snapshot, load_snapshot, save_snapshot};
