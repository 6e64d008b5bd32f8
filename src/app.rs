//! Product Swipe Frontend App
//!
//! Wires the deck, filters, search and dispatch together. All decision
//! sources (drag, buttons, arrow keys) funnel into one commit path.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_swipe::SwipeDirection;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    CategoryBar, DeckView, FilterBar, SearchPanel, SimilarCarousel, SwipeControls,
};
use crate::context::AppContext;
use crate::filters::FilterState;
use crate::models::Product;
use crate::store::{
    store_clear_stack, store_front, store_prepend_and_trim_top, store_push_front,
    store_remove_top, store_replace_stack, AppState, AppStateStoreFields,
};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    provide_context(store);

    let (refetch_trigger, set_refetch_trigger) = signal(0u32);
    let ctx = AppContext::new((refetch_trigger, set_refetch_trigger));
    provide_context(ctx);

    let (filters, set_filters) = signal(FilterState::default());
    let (exiting, set_exiting) = signal(None::<(Product, SwipeDirection)>);

    let swipe = leptos_swipe::create_swipe_signals();
    provide_context(swipe);

    // Load categories on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let categories = api::fetch_categories().await;
            store.categories().set(categories);
        });
    });

    // Fetch key: the serialized filter set. The search query is not part
    // of it, so typing in the search box does not reset the deck.
    let fetch_key = Memo::new(move |_| filters.with(|f| f.recommendations_query(&ctx.user_id())));

    // Any filter change clears the stack first, then refetches. A stale
    // response that resolves late simply gets overwritten by the next
    // one (last writer wins, no generation guard).
    Effect::new(move |_| {
        let _ = refetch_trigger.get();
        let key = fetch_key.get();
        store_clear_stack(&store);
        web_sys::console::log_1(&format!("[APP] Fetching recommendations {}", key).into());
        spawn_local(async move {
            let items = api::fetch_recommendations(&key).await;
            store_replace_stack(&store, items);
        });
    });

    // One commit path shared by drags, buttons and arrow keys. The top
    // card comes off the stack right away; the dispatch runs behind it
    // and merges follow-ons against the stack as it stands when the
    // response lands.
    let commit = Callback::new(move |direction: SwipeDirection| {
        let Some(item) = store_front(&store) else {
            return;
        };
        set_exiting.set(Some((item.clone(), direction)));
        Timeout::new(350, move || set_exiting.set(None)).forget();
        store_remove_top(&store);

        let user_id = ctx.user_id();
        spawn_local(async move {
            let follow_ons = api::send_swipe(direction, &user_id, &item).await;
            if !follow_ons.is_empty() {
                web_sys::console::log_1(
                    &format!("[APP] Merging {} follow-on items", follow_ons.len()).into(),
                );
                store_prepend_and_trim_top(&store, follow_ons);
            }
        });
    });

    leptos_swipe::bind_global_pointer(swipe, move |direction| commit.run(direction));
    leptos_swipe::bind_global_keys(move |direction| commit.run(direction));

    // Jump-to-similar, shared by search results and the carousel: the
    // selection goes to the front untrimmed, then similar items refill
    // the carousel.
    let select_similar = Callback::new(move |item: Product| {
        store_push_front(&store, item.clone());
        spawn_local(async move {
            let similar = api::fetch_similar(item.id).await;
            store.similar_items().set(similar);
        });
    });

    view! {
        <div class="container">
            <CategoryBar filters set_filters />
            <FilterBar filters set_filters />
            <h1>"Product Swipe"</h1>
            <DeckView exiting />
            <SwipeControls on_commit=commit />
            <SearchPanel filters set_filters on_select=select_similar />
            <SimilarCarousel on_select=select_similar />
        </div>
    }
}
