//! Step List Component
//!
//! Flattened nested steps with depth-proportional indentation.

use leptos::prelude::*;

use crate::models::Step;
use crate::steps::flatten_steps;

#[component]
pub fn StepList(steps: Vec<Step>) -> impl IntoView {
    let rows = flatten_steps(&steps);

    view! {
        <ol class="step-list">
            {rows.into_iter().map(|(text, depth)| {
                let indent = depth * 24;
                view! {
                    <li class="step-row" style=format!("margin-left: {}px;", indent)>
                        {text}
                    </li>
                }
            }).collect_view()}
        </ol>
    }
}
