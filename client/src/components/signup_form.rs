//! Signup form with the activity selection control.
//!
//! The select follows `ActivitiesState::options`, always led by the
//! placeholder option. Options are keyed by activity name so a refresh never
//! relabels the node that is currently selected. Field values are not
//! validated here; the server decides.

#[cfg(test)]
#[path = "signup_form_test.rs"]
mod signup_form_test;

use leptos::prelude::*;

use crate::state::activities::ActivitiesState;
use crate::state::signup_form::SignupFormState;
use crate::util::board_view::SELECT_PLACEHOLDER_TEXT;

#[component]
pub fn SignupForm(on_submit: Callback<()>) -> impl IntoView {
    let form = expect_context::<RwSignal<SignupFormState>>();
    let activities = expect_context::<RwSignal<ActivitiesState>>();

    view! {
        <form
            id="signup-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required=true
                    placeholder="your-email@mergington.edu"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required=true
                    prop:value=move || form.with(|f| f.activity.clone())
                    on:change=move |ev| form.update(|f| f.activity = event_target_value(&ev))
                >
                    <option value="">{SELECT_PLACEHOLDER_TEXT}</option>
                    <For
                        each=move || activities.with(|s| s.options().to_vec())
                        key=|name: &String| name.clone()
                        children=|name: String| {
                            let label = name.clone();
                            view! { <option value=name>{label}</option> }
                        }
                    />
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
