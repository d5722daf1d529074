/// Session-store and tab bridge for the extension runtime
use crate::history::HistoryRecord;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Single session-store key holding the serialized history.
pub const HISTORY_KEY: &str = "pixivNavigatorHistory";

// Import JS bridge functions. The bridge talks to chrome.storage.session
// and chrome.tabs, falling back to window.open when chrome.tabs is absent.
#[wasm_bindgen(module = "/bridge.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getSessionStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setSessionStorage(key: &str, value: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn openTab(url: &str) -> Result<(), JsValue>;
}

/// Read the persisted history back from the session store. A missing key
/// is an empty history, not an error.
pub async fn load_history() -> Result<Vec<HistoryRecord>, String> {
    let value = getSessionStorage(HISTORY_KEY)
        .await
        .map_err(|e| format!("failed to read session store: {:?}", e))?;

    if value.is_null() || value.is_undefined() {
        return Ok(Vec::new());
    }

    serde_wasm_bindgen::from_value(value)
        .map_err(|e| format!("failed to parse stored history: {}", e))
}

/// Persist the history, fire-and-forget. A failed write is logged and
/// skipped; the in-memory ring keeps working for the popup's lifetime.
pub fn save_history(records: &[HistoryRecord]) {
    let value = match serde_wasm_bindgen::to_value(records) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("failed to serialize history: {}", e);
            return;
        }
    };

    spawn_local(async move {
        if let Err(e) = setSessionStorage(HISTORY_KEY, value).await {
            log::debug!("session store write skipped: {:?}", e);
        }
    });
}

/// Open a URL in a new browser tab.
pub async fn open_tab(url: &str) -> Result<(), String> {
    openTab(url)
        .await
        .map_err(|e| format!("failed to open tab: {:?}", e))
}
