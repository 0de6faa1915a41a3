//! Success/error banner fed by `BannerState`.

use leptos::prelude::*;

use crate::state::banner::BannerState;

#[component]
pub fn MessageBanner() -> impl IntoView {
    let banner = expect_context::<RwSignal<BannerState>>();

    view! {
        <div id="message" class=move || banner.with(BannerState::class_attr) role="status" aria-live="polite">
            {move || banner.with(|b| b.text().to_owned())}
        </div>
    }
}
