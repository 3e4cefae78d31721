use yew::prelude::*;

use crate::state::detail::{ChartRow, bar_percentages};

#[derive(Properties, PartialEq, Clone)]
pub struct BarChartProps {
    pub title: &'static str,
    pub rows: Vec<ChartRow>,
    /// Fill of highlighted rows; the rest are drawn grey.
    pub color: &'static str,
}

#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let pct = bar_percentages(&props.rows);
    html! {
        <div class="chart-card">
            <h4>{ props.title }</h4>
            { for props.rows.iter().zip(pct).map(|(row, p)| {
                let fill = if row.highlight { props.color } else { "#475569" };
                html! {
                    <div class="chart-row">
                        <span class="chart-label">{ row.label.clone() }</span>
                        <div class="chart-track">
                            <div class="chart-bar" style={format!("width:{p:.1}%; background:{fill};")}></div>
                        </div>
                        <span class="chart-value">{ format!("{}", row.value) }</span>
                    </div>
                }
            }) }
        </div>
    }
}
