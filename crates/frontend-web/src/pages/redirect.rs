//! Dashboard hand-off route
//!
//! `/redirect` runs once, picks a token (URL parameter first, stored
//! token as fallback) and replaces the current page with the external
//! dashboard. Without a token it replaces back to `/login`. It never
//! renders anything; `replace` keeps this transient route out of the
//! browser history.

use medinic_frontend_common::redirect::{parse_redirect_query, resolve_redirect, RedirectOutcome};
use medinic_frontend_common::{BrowserTokenStore, FrontendConfig};
use yew::prelude::*;

#[function_component(RedirectPage)]
pub fn redirect_page() -> Html {
    use_effect_with((), |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let query = parse_redirect_query(&location.search().unwrap_or_default());

        let store = BrowserTokenStore::new();
        let destination = match resolve_redirect(&query, &store, FrontendConfig::get()) {
            RedirectOutcome::Dashboard(url) => url,
            RedirectOutcome::Login => "/login".to_string(),
        };
        if let Err(e) = location.replace(&destination) {
            gloo::console::error!("redirect failed:", e);
        }
    });

    html! {}
}
