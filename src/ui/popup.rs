/// Popup UI for the Pixiv Navigator extension

use crate::controller::PopupController;
use crate::storage;
use crate::urls::Mode;
use gloo_timers::callback::Timeout;
use patternfly_yew::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// The status line clears itself this long after the last message.
const STATUS_CLEAR_MS: u32 = 3_000;

#[derive(Clone, PartialEq)]
enum StatusTone {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
struct Status {
    tone: StatusTone,
    message: String,
}

#[function_component(App)]
pub fn app() -> Html {
    let controller = use_state(PopupController::new);
    let mode = use_state(|| Mode::Artwork);
    let status = use_state(|| None::<Status>);
    // Single-slot timer handle: each new message replaces (and thereby
    // cancels) the pending clear, so two rapid messages cannot race.
    let status_timer = use_mut_ref(|| None::<Timeout>);
    let input_ref = use_node_ref();

    // Restore history from the session store on mount. A missing or
    // failing store just completes the load phase with nothing.
    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let records = match storage::load_history().await {
                    Ok(records) => records,
                    Err(e) => {
                        log::debug!("history restore skipped: {}", e);
                        Vec::new()
                    }
                };
                let mut next = (*controller).clone();
                next.complete_history_load(records);
                controller.set(next);
            });
            || ()
        });
    }

    // Mode selector change handler
    let on_mode_change = {
        let mode = mode.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                match select.value().parse::<Mode>() {
                    Ok(selected) => mode.set(selected),
                    // The four option values are fixed, so this is a bug
                    // in the popup markup, not a user error.
                    Err(e) => log::error!("mode selector produced {}", e),
                }
            }
        })
    };

    // Parse button handler
    let on_parse = {
        let controller = controller.clone();
        let mode = mode.clone();
        let status = status.clone();
        let status_timer = status_timer.clone();
        let input_ref = input_ref.clone();

        Callback::from(move |_| {
            let raw = input_ref
                .cast::<HtmlTextAreaElement>()
                .map(|input| input.value())
                .unwrap_or_default();

            let mut next = (*controller).clone();
            match next.parse(*mode, &raw, now_ms()) {
                Ok(count) => {
                    storage::save_history(next.history());
                    controller.set(next);
                    show_status(
                        &status,
                        &status_timer,
                        StatusTone::Success,
                        format!("Parsed {} URLs", count),
                    );
                }
                Err(e) => {
                    show_status(&status, &status_timer, StatusTone::Error, e.to_string());
                }
            }
        })
    };

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Pixiv Navigator"}</h1>

            <select class="mode-select" onchange={on_mode_change}>
                { for Mode::ALL.iter().map(|m| html! {
                    <option value={m.to_string()} selected={*mode == *m}>{m.label()}</option>
                }) }
            </select>

            <textarea
                ref={input_ref}
                class="ids-input"
                rows="6"
                placeholder="One ID or keyword per line"
            />

            <Button onclick={on_parse} variant={ButtonVariant::Primary} block={true}>
                {"Parse"}
            </Button>

            // Transient status line
            if let Some(current) = (*status).clone() {
                <div class="status-line">
                    <Alert r#type={alert_type(&current.tone)} title={current.message} inline={true}>
                    </Alert>
                </div>
            }

            { url_list(&controller, &status, &status_timer) }
            { history_list(&controller, &status, &status_timer) }

            <p class="footer-popup">
                {"Pixiv Navigator v0.1.0"}
            </p>
        </div>
    }
}

fn url_list(
    controller: &UseStateHandle<PopupController>,
    status: &UseStateHandle<Option<Status>>,
    status_timer: &Rc<RefCell<Option<Timeout>>>,
) -> Html {
    if controller.parsed().is_empty() {
        return html! {};
    }

    html! {
        <div class="url-list-container">
            <h2 class="section-title">
                {format!("URLs ({})", controller.parsed().len())}
            </h2>
            <div class="url-list">
                { for controller.parsed().iter().enumerate().map(|(index, entry)| {
                    let url = entry.url.clone();
                    let on_open = {
                        let status = status.clone();
                        let status_timer = status_timer.clone();
                        Callback::from(move |_| {
                            show_status(
                                &status,
                                &status_timer,
                                StatusTone::Success,
                                "Opening tab...".to_string(),
                            );
                            let url = url.clone();
                            spawn_local(async move {
                                if let Err(e) = storage::open_tab(&url).await {
                                    log::warn!("{}", e);
                                }
                            });
                        })
                    };

                    html! {
                        <div class="url-item" onclick={on_open}>
                            <div class="url-index">{format!("{}.", index + 1)}</div>
                            <div class="url-text">{&entry.url}</div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

fn history_list(
    controller: &UseStateHandle<PopupController>,
    status: &UseStateHandle<Option<Status>>,
    status_timer: &Rc<RefCell<Option<Timeout>>>,
) -> Html {
    if !controller.history_loaded() {
        return html! {
            <div class="history-loading">
                <Spinner />
            </div>
        };
    }

    if controller.history().is_empty() {
        return html! {};
    }

    html! {
        <div class="history-container">
            <h2 class="section-title">{"History"}</h2>
            <div class="history-list">
                { for controller.history().iter().enumerate().map(|(index, record)| {
                    let on_recall = {
                        let controller = controller.clone();
                        let status = status.clone();
                        let status_timer = status_timer.clone();
                        Callback::from(move |_| {
                            let mut next = (*controller).clone();
                            if let Some(count) = next.recall(index) {
                                controller.set(next);
                                show_status(
                                    &status,
                                    &status_timer,
                                    StatusTone::Success,
                                    format!("Loaded {} URLs from history", count),
                                );
                            }
                        })
                    };

                    html! {
                        <div class="history-item">
                            <div class="history-index">{format!("{}.", index + 1)}</div>
                            <div class="history-content">
                                <div class="history-mode">{record.mode.label()}</div>
                                <div class="history-text">{&record.text}</div>
                                <div class="history-count">
                                    {format!("{} URLs", record.urls.len())}
                                </div>
                            </div>
                            <Button onclick={on_recall} variant={ButtonVariant::Secondary}>
                                {"Open"}
                            </Button>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

// Helper functions

fn show_status(
    status: &UseStateHandle<Option<Status>>,
    status_timer: &Rc<RefCell<Option<Timeout>>>,
    tone: StatusTone,
    message: String,
) {
    status.set(Some(Status { tone, message }));

    let clear = {
        let status = status.clone();
        move || status.set(None)
    };
    *status_timer.borrow_mut() = Some(Timeout::new(STATUS_CLEAR_MS, clear));
}

fn alert_type(tone: &StatusTone) -> AlertType {
    match tone {
        StatusTone::Success => AlertType::Success,
        StatusTone::Error => AlertType::Danger,
    }
}

fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}
