//! Expense Chart Component
//!
//! Donut chart of spending per category.

use leptos::prelude::*;

use crate::format::format_naira;
use crate::insights::chart_segments;
use crate::models::ExpenseCategory;

const CHART_SIZE: f64 = 200.0;
const RADIUS: f64 = CHART_SIZE / 2.0 - 20.0;
const CENTER: f64 = CHART_SIZE / 2.0;
const STROKE_WIDTH: &str = "16";

#[component]
pub fn ExpenseChart(
    #[prop(into)] categories: Signal<Vec<ExpenseCategory>>,
    #[prop(into)] total_amount: Signal<f64>,
) -> impl IntoView {
    let size = CHART_SIZE.to_string();
    let center = CENTER.to_string();
    let radius = RADIUS.to_string();
    let rotate = format!("rotate(-90 {} {})", CENTER, CENTER);
    let view_box = format!("0 0 {} {}", CHART_SIZE, CHART_SIZE);

    let segments = {
        let center = center.clone();
        let radius = radius.clone();
        move || {
            categories
                .with(|c| chart_segments(c, RADIUS))
                .into_iter()
                .map(|segment| view! {
                    <circle
                        cx=center.clone()
                        cy=center.clone()
                        r=radius.clone()
                        stroke=segment.color
                        stroke-width=STROKE_WIDTH
                        fill="transparent"
                        stroke-dasharray=segment.dash_array
                        stroke-dashoffset=segment.dash_offset.to_string()
                        transform=rotate.clone()
                    />
                })
                .collect_view()
        }
    };

    view! {
        <div class="expense-chart">
            <svg width=size.clone() height=size viewBox=view_box>
                // Background ring
                <circle
                    cx=center.clone()
                    cy=center.clone()
                    r=radius
                    stroke="#F3F4F6"
                    stroke-width=STROKE_WIDTH
                    fill="transparent"
                />

                {segments}

                <text x=center.clone() y={(CENTER - 15.0).to_string()} text-anchor="middle" class="chart-caption">
                    "Total Expenses"
                </text>
                <text x=center.clone() y={(CENTER + 5.0).to_string()} text-anchor="middle" class="chart-subcaption">
                    "(in Naira)"
                </text>
                <text x=center y={(CENTER + 25.0).to_string()} text-anchor="middle" class="chart-total">
                    {move || format_naira(total_amount.get())}
                </text>
            </svg>
        </div>
    }
}
