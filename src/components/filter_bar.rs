//! Filter Bar Component
//!
//! Color/location/price inputs. Every edit is a live filter change;
//! "Clear Filters" resets the fields and forces a refetch even when
//! the resulting fetch key is unchanged.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::filters::FilterState;

#[component]
pub fn FilterBar(
    filters: ReadSignal<FilterState>,
    set_filters: WriteSignal<FilterState>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="filter-bar">
            <input
                placeholder="color"
                prop:value=move || filters.with(|f| f.color.clone())
                on:input=move |ev| set_filters.update(|f| f.color = event_target_value(&ev))
            />
            <input
                placeholder="location"
                prop:value=move || filters.with(|f| f.location.clone())
                on:input=move |ev| set_filters.update(|f| f.location = event_target_value(&ev))
            />
            <input
                placeholder="min price"
                type="number"
                prop:value=move || filters.with(|f| f.min_price.clone())
                on:input=move |ev| set_filters.update(|f| f.min_price = event_target_value(&ev))
            />
            <input
                placeholder="max price"
                type="number"
                prop:value=move || filters.with(|f| f.max_price.clone())
                on:input=move |ev| set_filters.update(|f| f.max_price = event_target_value(&ev))
            />
            <button
                class="clear-filters"
                on:click=move |_| {
                    set_filters.update(|f| f.clear());
                    ctx.refetch();
                }
            >
                "Clear Filters"
            </button>
        </div>
    }
}
