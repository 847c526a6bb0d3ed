use crate::dashboards::d400_weekly_bookings::aggregate::{aggregate_weeks, WeekBucket};
use crate::dashboards::d400_weekly_bookings::state::{needs_divider, ExpandedRows};
use crate::shared::components::table::format_number_int;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use chrono::{Local, NaiveDate};
use contracts::domain::a002_booking::{BookingAmountField, BookingRecord};
use leptos::prelude::*;

/// Payment history by week.
///
/// `bookings` is owned by the caller and already loaded; this component only
/// aggregates it. Expanding a row never re-runs the aggregation.
#[component]
pub fn BookingList(
    #[prop(into)] bookings: Signal<Vec<BookingRecord>>,
    /// Reference day for the trailing weeks, today in local time when omitted
    #[prop(optional)]
    as_of: Option<NaiveDate>,
) -> impl IntoView {
    let expanded = RwSignal::new(ExpandedRows::default());

    let weeks = Memo::new(move |_| {
        let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
        bookings.with(|b| aggregate_weeks(b, as_of))
    });

    view! {
        <div class="page booking-list">
            <PageHeader
                title="Payment method"
                subtitle="When provider have voucher new, they open here"
            />

            <div class="booking-list__title">"Payment history"</div>
            <div class="booking-list__card booking-list__card--head">
                <div class="booking-list__grid">
                    <span>"Date"</span>
                    <span>"Paid original"</span>
                    <span>"Paid price"</span>
                    <span>"Refund amount"</span>
                    <span>"Total"</span>
                </div>
            </div>

            <div class="booking-list__rows">
                {move || {
                    weeks
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, bucket)| view! { <WeekRow index=index bucket=bucket expanded=expanded /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn WeekRow(index: usize, bucket: WeekBucket, expanded: RwSignal<ExpandedRows>) -> impl IntoView {
    let is_open = Signal::derive(move || expanded.with(|e| e.is_expanded(index)));
    let names: Vec<String> = bucket
        .bookings
        .iter()
        .map(|b| b.booker_name().into_owned())
        .collect();

    view! {
        <div class="booking-list__card" on:click=move |_| expanded.update(|e| e.toggle(index))>
            <div class="booking-list__summary">
                {move || {
                    if is_open.get() {
                        view! { <span class="booking-list__toggle">"See less" {icon("chevron-up")}</span> }
                            .into_any()
                    } else {
                        view! { <span class="booking-list__toggle">"See tour" {icon("chevron-down")}</span> }
                            .into_any()
                    }
                }}
                <div class="booking-list__grid">
                    <span>{bucket.range.label()}</span>
                    <span>{format_number_int(bucket.total(BookingAmountField::Original))}</span>
                    <span>{format_number_int(bucket.total(BookingAmountField::Paid))}</span>
                    <span>{format_number_int(bucket.total(BookingAmountField::Refund))}</span>
                    <span>{bucket.booking_count()}</span>
                </div>
            </div>
            {move || is_open.get().then(|| booking_details(&names))}
        </div>
    }
}

fn booking_details(names: &[String]) -> AnyView {
    if names.is_empty() {
        return view! {
            <div class="booking-list__details">
                <hr class="booking-list__divider" />
                <div class="booking-list__empty">"No transactions this week"</div>
            </div>
        }
        .into_any();
    }

    let len = names.len();
    view! {
        <div class="booking-list__details">
            <hr class="booking-list__divider" />
            {names
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    view! {
                        <div class="booking-list__item">
                            <p>{name.clone()}</p>
                            {needs_divider(i, len).then(|| view! { <hr class="booking-list__divider" /> })}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}
