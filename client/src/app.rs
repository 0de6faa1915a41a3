//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::BoardConfig;
use crate::controller::BoardController;
use crate::pages::board::BoardPage;

/// Root application component.
///
/// Creates the board controller, provides its state to child components,
/// and starts the initial fetch.
#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    provide_meta_context();

    let board = BoardController::new(config);
    board.provide();
    board.refresh();

    view! {
        <Title text="Mergington High School Activities" />
        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>
        <BoardPage />
    }
}
