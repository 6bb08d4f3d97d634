//! Dashboard Page
//!
//! Chain heights and ledger fees from the Anchor Platform API.

use anchor_platform_core::nav::Section;
use anchor_platform_core::rpc::{Fees, Heights, RpcFailure, RpcMethod};
use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

use crate::api;
use crate::components::statistic::PENDING;
use crate::components::Statistic;
use crate::document::set_title;
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    set_title(Section::Dashboard);

    let heights = create_rw_signal(None::<Heights>);
    let fees = create_rw_signal(None::<Fees>);

    // Responses can land after the page is gone
    let alive = Rc::new(Cell::new(true));
    on_cleanup({
        let alive = Rc::clone(&alive);
        move || alive.set(false)
    });

    // Both calls go out at once; neither waits for the other
    {
        let alive = Rc::clone(&alive);
        spawn_local(async move {
            let outcome = api::fetch_fees().await;
            apply(RpcMethod::Fees, outcome, fees, state, &alive);
        });
    }
    spawn_local(async move {
        let outcome = api::fetch_heights().await;
        apply(RpcMethod::Heights, outcome, heights, state, &alive);
    });

    let directory_height = Signal::derive(move || heights.get().map(|h| h.directoryblockheight));
    let entry_height = Signal::derive(move || heights.get().map(|h| h.entryblockheight));

    view! {
        <div class="dashboard">
            <h2>"Dashboard"</h2>

            <div class="statistics">
                <Statistic title="DBHeight" value=directory_height />
                <Statistic title="EBHeight" value=entry_height />
            </div>

            <hr />

            <h3>"Ledgers"</h3>
            <LedgerFees fees=fees.read_only() />
        </div>
    }
}

/// Store a call result, or report its failure
fn apply<T: 'static>(
    method: RpcMethod,
    outcome: Result<T, RpcFailure>,
    target: RwSignal<Option<T>>,
    state: GlobalState,
    alive: &Cell<bool>,
) {
    match outcome {
        Ok(value) => {
            if alive.get() {
                let _ = target.try_set(Some(value));
            }
        }
        Err(failure) => {
            web_sys::console::error_1(&format!("{} call failed: {}", method, failure).into());
            state.notify_failure(&failure);
        }
    }
}

/// Fee table
#[component]
fn LedgerFees(fees: ReadSignal<Option<Fees>>) -> impl IntoView {
    view! {
        <table class="ledgers">
            <tbody>
                {move || match fees.get() {
                    None => view! {
                        <tr><td>{PENDING}</td></tr>
                    }.into_view(),
                    Some(fees) if fees.is_empty() => view! {
                        <tr><td>"No fee data"</td></tr>
                    }.into_view(),
                    Some(fees) => fees.rows().into_iter().map(|(name, value)| view! {
                        <tr>
                            <td class="ledger-key">{name}</td>
                            <td class="ledger-value">{value}</td>
                        </tr>
                    }).collect_view(),
                }}
            </tbody>
        </table>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn heights() -> Heights {
        Heights {
            directoryblockheight: 10,
            entryblockheight: 9,
        }
    }

    #[wasm_bindgen_test]
    fn test_result_applied_while_mounted() {
        let state = GlobalState::new();
        let target = create_rw_signal(None::<Heights>);

        apply(RpcMethod::Heights, Ok(heights()), target, state, &Cell::new(true));

        assert_eq!(target.get_untracked(), Some(heights()));
        assert_eq!(state.error.get_untracked(), None);
    }

    #[wasm_bindgen_test]
    fn test_result_ignored_after_unmount() {
        let state = GlobalState::new();
        let target = create_rw_signal(None::<Heights>);

        apply(RpcMethod::Heights, Ok(heights()), target, state, &Cell::new(false));

        assert_eq!(target.get_untracked(), None);
    }

    #[wasm_bindgen_test]
    fn test_failure_after_unmount_still_notifies() {
        let state = GlobalState::new();
        let target = create_rw_signal(None::<Fees>);

        apply(
            RpcMethod::Fees,
            Err(RpcFailure::Server("X".to_string())),
            target,
            state,
            &Cell::new(false),
        );

        assert_eq!(target.get_untracked(), None);
        assert_eq!(state.error.get_untracked().as_deref(), Some("X"));
    }
}
