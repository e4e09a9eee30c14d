use std::f32::consts::TAU;

use eframe::egui::{self, Color32, Pos2, RichText, Sense, Shape, Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::color::{ColorScale, GenreColors};
use crate::data::aggregate::{GenreCount, ScoreCount, YearBudget};
use crate::data::filter::ScoreRange;

const PLOT_HEIGHT: f32 = 280.0;
const NOTICE_COLOR: Color32 = Color32::from_rgb(200, 140, 0);

/// Text shown in place of a chart whose input is empty.
pub fn notice(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(format!("⚠ {text}")).color(NOTICE_COLOR));
}

/// Base plot for the dashboard: fixed height, no scroll capture so the
/// surrounding scroll area keeps working.
fn dashboard_plot(plot: Plot) -> Plot {
    plot.height(PLOT_HEIGHT)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_drag(false)
        .include_y(0.0)
}

// ---------------------------------------------------------------------------
// Line chart: movies per genre within the score range and year
// ---------------------------------------------------------------------------

pub fn genre_count_line(ui: &mut Ui, counts: &[GenreCount], year: i32, range: ScoreRange) {
    if counts.is_empty() {
        notice(ui, &format!("No data available for selected score range in {year}."));
        return;
    }

    ui.label(format!(
        "Number of Movies per Genre in {year} (Score: {:.1}–{:.1})",
        range.lower(),
        range.upper()
    ));

    let labels: Vec<String> = counts.iter().map(|c| c.genre.clone()).collect();
    let points: Vec<[f64; 2]> = counts
        .iter()
        .enumerate()
        .map(|(i, c)| [i as f64, c.count as f64])
        .collect();

    dashboard_plot(Plot::new("genre_count_plot"))
        .x_axis_label("genre")
        .y_axis_label("count")
        .x_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(PlotPoints::from(points.clone())).width(2.0));
            plot_ui.points(Points::new(PlotPoints::from(points)).radius(4.0));
        });
}

/// Label for a category axis tick: only whole positions carry a name.
fn category_label(labels: &[String], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Pie chart: genre distribution within the year
// ---------------------------------------------------------------------------

pub fn genre_pie(ui: &mut Ui, counts: &[GenreCount], year: i32, colors: &GenreColors) {
    if counts.is_empty() {
        notice(ui, &format!("No genre data available for the year {year}."));
        return;
    }

    ui.label(format!("Distribution of Genres in {year}"));

    let total: usize = counts.iter().map(|c| c.count).sum();
    let slices = pie_slices(counts);

    ui.horizontal(|ui: &mut Ui| {
        let size = PLOT_HEIGHT;
        let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let radius = size * 0.45;

        for (count, (start, end)) in counts.iter().zip(&slices) {
            let fill = colors.color_for(&count.genre);
            for points in wedge_polygons(center, radius, *start, *end) {
                painter.add(Shape::convex_polygon(points, fill, Stroke::NONE));
            }
        }
        // slice borders drawn last so fills don't cover them
        if slices.len() > 1 {
            for (start, _) in &slices {
                painter.line_segment(
                    [center, polar(center, radius, *start)],
                    Stroke::new(1.5, Color32::WHITE),
                );
            }
        }

        ui.vertical(|ui: &mut Ui| {
            for count in counts {
                let share = 100.0 * count.count as f64 / total as f64;
                ui.horizontal(|ui: &mut Ui| {
                    ui.label(RichText::new("■").color(colors.color_for(&count.genre)));
                    ui.label(format!("{}  {} ({share:.1}%)", count.genre, count.count));
                });
            }
        });
    });
}

/// Start / end angle (radians, clockwise from 12 o'clock) of each slice.
pub fn pie_slices(counts: &[GenreCount]) -> Vec<(f32, f32)> {
    let total: usize = counts.iter().map(|c| c.count).sum();
    if total == 0 {
        return Vec::new();
    }
    let mut start = 0.0f32;
    counts
        .iter()
        .map(|c| {
            let end = start + TAU * c.count as f32 / total as f32;
            let slice = (start, end);
            start = end;
            slice
        })
        .collect()
}

fn polar(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    center + radius * egui::vec2(angle.sin(), -angle.cos())
}

/// Split a wedge into convex pieces no wider than a quarter turn.
fn wedge_polygons(center: Pos2, radius: f32, start: f32, end: f32) -> Vec<Vec<Pos2>> {
    const MAX_PIECE: f32 = TAU / 4.0;
    const ARC_STEP: f32 = TAU / 180.0;

    let span = end - start;
    if span <= 0.0 {
        return Vec::new();
    }
    let n = ((span / MAX_PIECE) - 1e-4).ceil().max(1.0) as usize;
    let width = span / n as f32;

    let mut pieces = Vec::with_capacity(n);
    for k in 0..n {
        let from = start + width * k as f32;
        let steps = ((width / ARC_STEP).ceil() as usize).max(1);
        let mut points = Vec::with_capacity(steps + 2);
        points.push(center);
        for i in 0..=steps {
            let angle = from + width * i as f32 / steps as f32;
            points.push(polar(center, radius, angle));
        }
        pieces.push(points);
    }
    pieces
}

// ---------------------------------------------------------------------------
// Bar chart: average budget per year
// ---------------------------------------------------------------------------

pub fn average_budget_bars(ui: &mut Ui, rows: &[YearBudget]) {
    if rows.is_empty() {
        notice(ui, "No budget data available.");
        return;
    }

    ui.label("Average Movie Budget by Year");

    let scale = ColorScale::blues();
    let (min, max) = min_max(rows.iter().map(|r| r.mean_budget));
    let bars: Vec<Bar> = rows
        .iter()
        .map(|r| {
            Bar::new(r.year as f64, r.mean_budget)
                .width(0.8)
                .name(r.year.to_string())
                .fill(scale.for_value(r.mean_budget, min, max))
        })
        .collect();

    dashboard_plot(Plot::new("average_budget_plot"))
        .x_axis_label("Year")
        .y_axis_label("Average Budget")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Average Budget"));
        });
}

// ---------------------------------------------------------------------------
// Bar chart: score distribution for every selection
// ---------------------------------------------------------------------------

pub fn score_distribution_bars(ui: &mut Ui, rows: &[ScoreCount], year: i32, bar_width: f64) {
    if rows.is_empty() {
        notice(
            ui,
            "No movies found matching the selected filters. \
             Try adjusting the score range, year, or genre.",
        );
        return;
    }

    ui.label(format!("Score Distribution for Selected Genre(s) in {year}"));

    let scale = ColorScale::plasma();
    let (min, max) = min_max(rows.iter().map(|r| r.count as f64));
    let bars: Vec<Bar> = rows
        .iter()
        .map(|r| {
            Bar::new(r.score, r.count as f64)
                .width(bar_width)
                .name(format!("{:.1}", r.score))
                .fill(scale.for_value(r.count as f64, min, max))
        })
        .collect();

    dashboard_plot(Plot::new("score_distribution_plot"))
        .legend(Legend::default())
        .x_axis_label("User Score")
        .y_axis_label("Number of Movies")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Number of Movies"));
        });
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, usize)]) -> Vec<GenreCount> {
        pairs
            .iter()
            .map(|(g, c)| GenreCount {
                genre: g.to_string(),
                count: *c,
            })
            .collect()
    }

    #[test]
    fn pie_slices_cover_full_turn_in_proportion() {
        let slices = pie_slices(&counts(&[("Action", 2), ("Drama", 1), ("Comedy", 1)]));
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].0, 0.0);
        assert!((slices[0].1 - TAU / 2.0).abs() < 1e-5);
        assert!((slices[2].1 - TAU).abs() < 1e-5);
        for pair in slices.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }

    #[test]
    fn wedges_split_into_convex_quarters() {
        let pieces = wedge_polygons(Pos2::ZERO, 10.0, 0.0, TAU);
        assert_eq!(pieces.len(), 4);
        assert!(pieces.iter().all(|p| p[0] == Pos2::ZERO && p.len() >= 3));
    }

    #[test]
    fn category_labels_only_on_whole_ticks() {
        let labels = vec!["Action".to_string(), "Drama".to_string()];
        assert_eq!(category_label(&labels, 1.0), "Drama");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, -1.0), "");
        assert_eq!(category_label(&labels, 5.0), "");
    }

    #[test]
    fn min_max_of_values() {
        assert_eq!(min_max([3.0, -1.0, 7.5].into_iter()), (-1.0, 7.5));
    }
}
