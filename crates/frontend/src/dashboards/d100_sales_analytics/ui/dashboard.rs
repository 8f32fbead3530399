use contracts::domain::a001_sales_dataset::DatasetKind;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::section::SectionPanel;
use crate::dashboards::d100_sales_analytics::api;
use crate::dashboards::d100_sales_analytics::export::export_section;
use crate::dashboards::d100_sales_analytics::state::DashboardStore;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_money_k, format_percent, format_thousands};

/// Sales analytics dashboard: quarter selector, headline cards and one tab per dataset
#[component]
pub fn SalesDashboard() -> impl IntoView {
    let store = expect_context::<DashboardStore>();
    let snapshot = store.snapshot();

    // Each dataset loads on its own; a failed one leaves the others usable
    Effect::new(move |_| {
        for kind in DatasetKind::ALL {
            store.begin_load(kind);
            spawn_local(async move {
                let result = api::fetch_records(kind).await;
                match &result {
                    Ok(records) => log::debug!("Loaded {} {} records", records.len(), kind.endpoint()),
                    Err(err) => log::error!("Failed to load {} dataset: {}", kind.endpoint(), err),
                }
                store.finish_load(kind, result);
            });
        }
    });

    let is_loading = move || store.loads.with(|loads| loads.is_loading());
    let load_errors = move || store.loads.with(|loads| loads.errors());

    let quarters = move || {
        snapshot.with(|s| s.as_ref().map(|s| s.quarters.clone()).unwrap_or_default())
    };
    let selected_quarter = move || {
        snapshot.with(|s| {
            s.as_ref()
                .ok()
                .and_then(|s| s.selected_quarter.clone())
                .unwrap_or_default()
        })
    };
    let headline = move || snapshot.with(|s| s.as_ref().ok().map(|s| s.headline));

    let on_export = move |_: leptos::ev::MouseEvent| {
        let kind = store.active_tab.get_untracked();
        snapshot.with_untracked(|s| {
            let Ok(s) = s else { return };
            let Some(section) = s.section(kind) else {
                return;
            };
            if let Err(err) = export_section(section, s.selected_quarter.as_deref()) {
                log::error!("Export failed: {}", err);
            }
        });
    };

    view! {
        <div class="sales-dashboard">
            <div class="sales-dashboard__header">
                <h1 class="sales-dashboard__title">"Sales Analytics"</h1>
                <div class="sales-dashboard__controls">
                    <select
                        class="sales-dashboard__quarter"
                        prop:value=selected_quarter
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            store.selected_quarter.set(if value.is_empty() { None } else { Some(value) });
                        }
                    >
                        {move || {
                            quarters()
                                .into_iter()
                                .map(|quarter| {
                                    view! { <option value=quarter.clone()>{quarter.clone()}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                    <button class="button button--secondary" on:click=on_export>
                        {icon("download")}
                        "Export"
                    </button>
                </div>
            </div>

            {move || {
                load_errors()
                    .into_iter()
                    .map(|(kind, err)| {
                        view! {
                            <div class="alert alert--error">
                                {format!("Failed to load {}: {}", kind.title(), err)}
                            </div>
                        }
                    })
                    .collect_view()
            }}

            {move || match snapshot.get() {
                Err(err) => view! {
                    <div class="alert alert--error">{err.to_string()}</div>
                }
                .into_any(),
                Ok(_) if is_loading() && store.datasets.with(|d| d.is_empty()) => view! {
                    <div class="sales-dashboard__loading">"Loading..."</div>
                }
                .into_any(),
                Ok(_) => view! { <div></div> }.into_any(),
            }}

            <div class="sales-dashboard__cards">
                <StatCard
                    label="Total ACV".to_string()
                    icon_name="dollar".to_string()
                    value=Signal::derive(move || headline().map(|h| format_money_k(h.total_value)))
                    change_percent=Signal::derive(move || headline().and_then(|h| h.change_percent))
                />
                <StatCard
                    label="Total Deals".to_string()
                    icon_name="deals".to_string()
                    value=Signal::derive(move || headline().map(|h| format_thousands(h.total_count)))
                    change_percent=Signal::derive(move || headline().and_then(|h| h.count_change_percent))
                />
                <StatCard
                    label="Avg Deal Size".to_string()
                    icon_name="average".to_string()
                    value=Signal::derive(move || {
                        headline().and_then(|h| h.average_value).map(format_money_k)
                    })
                    change_percent=Signal::derive(move || headline().and_then(|h| h.average_change_percent))
                />
                <StatCard
                    label="Growth Rate".to_string()
                    icon_name="growth".to_string()
                    value=Signal::derive(move || {
                        headline().and_then(|h| h.change_percent).map(|p| format_percent(Some(p)))
                    })
                    change_percent=Signal::derive(move || headline().and_then(|h| h.change_percent))
                />
            </div>

            <div class="tabs">
                {DatasetKind::ALL
                    .into_iter()
                    .map(|kind| {
                        let class = move || {
                            if store.active_tab.get() == kind { "tab tab--active" } else { "tab" }
                        };
                        view! {
                            <button class=class on:click=move |_| store.active_tab.set(kind)>
                                {kind.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                let kind = store.active_tab.get();
                snapshot
                    .with(|s| s.as_ref().ok().and_then(|s| s.section(kind).cloned()))
                    .map(|section| view! { <SectionPanel section=section /> })
            }}
        </div>
    }
}
