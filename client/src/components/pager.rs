//! Previous/next controls for client-side paginated tables.

use leptos::prelude::*;

use crate::util::table::PageWindow;

#[component]
pub fn Pager(window: Signal<PageWindow>, total: Signal<usize>, page: RwSignal<usize>) -> impl IntoView {
    view! {
        <div class="pager">
            <span class="pager__summary">{move || window.get().summary(total.get())}</span>
            <button
                class="btn pager__prev"
                disabled=move || !window.get().has_prev()
                on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
            >
                "Previous"
            </button>
            <span class="pager__position">
                {move || {
                    let w = window.get();
                    format!("Page {} of {}", w.page, w.total_pages)
                }}
            </span>
            <button
                class="btn pager__next"
                disabled=move || !window.get().has_next()
                on:click=move |_| page.update(|p| *p += 1)
            >
                "Next"
            </button>
        </div>
    }
}
