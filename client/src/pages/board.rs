//! Sign-up board page: activity list next to the signup form.

use leptos::prelude::*;

use crate::components::activity_list::ActivityList;
use crate::components::message_banner::MessageBanner;
use crate::components::signup_form::SignupForm;
use crate::controller::BoardController;
use crate::util::delegate::UnregisterTarget;

#[component]
pub fn BoardPage() -> impl IntoView {
    let board = expect_context::<BoardController>();

    let on_unregister = Callback::new(move |target: UnregisterTarget| board.unregister(target));
    let on_signup = Callback::new(move |()| board.signup());

    view! {
        <main class="board-page">
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList on_unregister=on_unregister />
            </section>
            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm on_submit=on_signup />
                <MessageBanner />
            </section>
        </main>
    }
}
