use contracts::dashboards::d100_sales_analytics::SectionSummary;
use contracts::domain::a001_sales_dataset::DatasetKind;
use leptos::prelude::*;

use crate::shared::number_format::{
    format_money_k, format_money_k_opt, format_percent, format_thousands,
};

fn count_label(kind: DatasetKind) -> &'static str {
    match kind {
        DatasetKind::Team => "Total Teams",
        DatasetKind::CustomerType => "Total Customer Types",
        DatasetKind::AcvRange => "Total ACV Ranges",
        DatasetKind::AccountIndustry => "Total Industries",
    }
}

/// Summary block, per-category cards and the detail table of one dataset
#[component]
pub fn SectionPanel(section: SectionSummary) -> impl IntoView {
    let summary = section.summary;
    let column = section.kind.category_column();

    let cards = section
        .rows
        .iter()
        .map(|row| {
            view! {
                <div class="category-card">
                    <div class="category-card__name">{row.category.clone()}</div>
                    <div class="category-card__metric">
                        <span>"ACV"</span>
                        <strong>{format_money_k(row.acv)}</strong>
                    </div>
                    <div class="category-card__metric">
                        <span>"Deals"</span>
                        <strong>{format_thousands(row.count)}</strong>
                    </div>
                    <div class="category-card__metric">
                        <span>"Avg Deal"</span>
                        <strong>{format_money_k_opt(row.average_deal_size)}</strong>
                    </div>
                    <div class="category-card__metric">
                        <span>"Share"</span>
                        <strong>{format_percent(row.share_percent)}</strong>
                    </div>
                </div>
            }
        })
        .collect_view();

    let table_rows = section
        .rows
        .iter()
        .map(|row| {
            view! {
                <tr>
                    <td>{row.category.clone()}</td>
                    <td class="table__cell--number">{format_thousands(row.count)}</td>
                    <td class="table__cell--number">{format_money_k(row.acv)}</td>
                    <td>{row.closed_fiscal_quarter.clone()}</td>
                    <td class="table__cell--number">{format_percent(row.share_percent)}</td>
                </tr>
            }
        })
        .collect_view();

    let empty = section.rows.is_empty();

    view! {
        <section class="section-panel">
            <h2 class="section-panel__title">{section.title.clone()}</h2>

            <div class="section-panel__summary">
                <div class="summary-item">
                    <span>{count_label(section.kind)}</span>
                    <strong>{section.category_count}</strong>
                </div>
                <div class="summary-item">
                    <span>"Total ACV"</span>
                    <strong>{format_money_k(summary.total_value)}</strong>
                </div>
                <div class="summary-item">
                    <span>"Total Deals"</span>
                    <strong>{format_thousands(summary.total_count)}</strong>
                </div>
                <div class="summary-item">
                    <span>"Avg Deal Size"</span>
                    <strong>{format_money_k_opt(summary.average_value)}</strong>
                </div>
            </div>

            {if empty {
                view! { <div class="section-panel__empty">"No data for this quarter"</div> }.into_any()
            } else {
                view! {
                    <div class="section-panel__cards">{cards}</div>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{column}</th>
                                <th>"count"</th>
                                <th>"acv"</th>
                                <th>"closed_fiscal_quarter"</th>
                                <th>"Share"</th>
                            </tr>
                        </thead>
                        <tbody>{table_rows}</tbody>
                    </table>
                }
                .into_any()
            }}
        </section>
    }
}
