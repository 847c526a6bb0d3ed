use crate::dashboards::BookingList;
use crate::domain::a001_review::ui::ReviewList;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_router_integration();
    ctx.load_provider_data();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || view! { <PageContent /> }.into_any()
        />
    }
}

#[component]
fn PageContent() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    move || match ctx.active_page.get() {
        Page::Reviews => view! { <ReviewList account_loading=ctx.account_loading /> }.into_any(),
        Page::Bookings => view! {
            {move || ctx.booking_error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                    <button
                        class="button button--secondary"
                        disabled=move || ctx.account_loading.get()
                        on:click=move |_| ctx.load_provider_data()
                    >
                        "Retry"
                    </button>
                </div>
            })}
            <BookingList bookings=ctx.booking_chart />
        }
        .into_any(),
    }
}
