use crate::dashboards::d100_sales_analytics::state::DashboardStore;
use crate::dashboards::SalesDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the dashboard store to the whole app via context.
    provide_context(DashboardStore::new());

    view! {
        <SalesDashboard />
    }
}
