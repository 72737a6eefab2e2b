//! Chart rendering for spendlog
//!
//! Renders aggregated data to PNG files: a pie chart of the category
//! distribution and a bar chart of monthly totals. Callers are expected to
//! check for an empty expense set before rendering; an empty series here is
//! a chart error, not a silent no-op.

use std::path::Path;

use chrono::Local;
use plotters::prelude::*;

use crate::error::{SpendlogError, SpendlogResult};
use crate::reports::{CategoryTotal, MonthlySummary};

/// Color cycle shared by both chart types
const PALETTE: [RGBColor; 8] = [
    RGBColor(66, 133, 244),
    RGBColor(219, 68, 55),
    RGBColor(244, 180, 0),
    RGBColor(15, 157, 88),
    RGBColor(171, 71, 188),
    RGBColor(0, 172, 193),
    RGBColor(255, 112, 67),
    RGBColor(158, 157, 36),
];

/// Timestamped file name for a pie chart PNG
pub fn pie_chart_filename() -> String {
    format!("pie_category_{}.png", Local::now().format("%Y%m%d_%H%M%S"))
}

/// Timestamped file name for a bar chart PNG
pub fn bar_chart_filename() -> String {
    format!("bar_monthly_{}.png", Local::now().format("%Y%m%d_%H%M%S"))
}

/// Render the category distribution as a pie chart PNG
pub fn render_pie_chart(totals: &[CategoryTotal], path: &Path) -> SpendlogResult<()> {
    if totals.is_empty() {
        return Err(SpendlogError::Chart("No data to plot".into()));
    }

    let root = BitMapBackend::new(path, (700, 700)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;
    root.titled(
        "Expense Distribution by Category",
        ("sans-serif", 28).into_font(),
    )
    .map_err(chart_err)?;

    let sizes: Vec<f64> = totals.iter().map(|t| t.total.to_units_f64()).collect();
    let labels: Vec<String> = totals.iter().map(|t| t.category.clone()).collect();
    let colors: Vec<RGBColor> = (0..totals.len())
        .map(|i| PALETTE[i % PALETTE.len()])
        .collect();

    let center = (350, 370);
    let radius = 230.0;

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 18).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 14).into_font().color(&BLACK));

    root.draw(&pie).map_err(chart_err)?;
    root.present().map_err(chart_err)?;

    Ok(())
}

/// Render monthly totals as a bar chart PNG
///
/// Summaries are expected in ascending month order, as produced by
/// [`crate::reports::monthly_summaries`].
pub fn render_bar_chart(summaries: &[MonthlySummary], path: &Path) -> SpendlogResult<()> {
    if summaries.is_empty() {
        return Err(SpendlogError::Chart("No data to plot".into()));
    }

    let root = BitMapBackend::new(path, (900, 500)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let labels: Vec<String> = summaries.iter().map(|s| s.month.to_string()).collect();
    let max_total = summaries
        .iter()
        .map(|s| s.total.to_units_f64())
        .fold(1.0, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption("Monthly Spending Trends", ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(
            (0u32..summaries.len() as u32).into_segmented(),
            0f64..max_total * 1.1,
        )
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(summaries.len())
        .x_label_formatter(&|coord| match coord {
            SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .x_desc("Month")
        .y_desc("Total spend")
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(PALETTE[0].filled())
                .margin(20)
                .data(
                    summaries
                        .iter()
                        .enumerate()
                        .map(|(i, s)| (i as u32, s.total.to_units_f64())),
                ),
        )
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;

    Ok(())
}

fn chart_err(err: impl std::fmt::Display) -> SpendlogError {
    SpendlogError::Chart(err.to_string())
}
