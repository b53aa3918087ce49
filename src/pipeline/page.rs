use std::fmt::Write;

use crate::pipeline::dashboard::Dashboard;
use crate::pipeline::recent::ActivityCard;
use crate::pipeline::render::escape;
use crate::pipeline::selection::{Selection, WeekRef};
use crate::types::filter::{ActivityFilter, Metric};
use crate::types::weekly::{PeakSummary, WeeklyAggregate};

const TITLE: &str = "Strava Activities Dashboard";

const STYLE: &str = r#"
body { font-family: Helvetica, Arial, sans-serif; margin: 24px; color: #263238; }
.columns { display: flex; gap: 32px; }
.left { flex: 1; }
.right { flex: 2; }
.card { display: flex; align-items: center; background-color: #f0f0f0; border-radius: 10px; padding: 15px; margin-bottom: 15px; font-size: 14px; }
.card div { padding-right: 10px; }
.card .name { flex: 1; font-weight: bold; }
.stats { display: flex; justify-content: space-between; font-size: 16px; padding: 10px; }
.stats div { flex: 1; text-align: center; }
.notice { color: #8d6e63; font-size: 13px; }
.error { background: #fdecea; border-radius: 10px; padding: 20px; }
"#;

pub fn render_page(dashboard: &Dashboard, chart_svg: &str) -> String {
    let mut body = String::new();
    let _ = write!(body, "<h1>{}</h1><div class=\"columns\">", TITLE);

    body.push_str("<div class=\"left\"><h3>Recent Activities</h3>");
    if dashboard.recent.is_empty() {
        body.push_str("<p>No activities recorded.</p>");
    }
    for card in &dashboard.recent {
        body.push_str(&render_card(card));
    }
    body.push_str("</div>");

    body.push_str("<div class=\"right\"><h3>Select Sport</h3>");
    body.push_str(&render_controls(dashboard));
    if let Some(peak) = &dashboard.peak {
        body.push_str(&render_peak(peak));
    }
    let _ = write!(body, "<div class=\"chart\">{}</div>", chart_svg);
    match &dashboard.selection {
        Some(selection) => {
            if selection.reset {
                body.push_str(
                    "<p class=\"notice\">The selected week is not in the current view; showing the most recent week.</p>",
                );
            }
            body.push_str(&render_selected(&selection.week));
        }
        None => body.push_str("<p class=\"notice\">No activities in the last weeks for this sport.</p>"),
    }
    body.push_str("</div></div>");

    wrap(&body)
}

/// Shown instead of the dashboard when the source file cannot be loaded.
pub fn render_unavailable(message: &str) -> String {
    wrap(&format!(
        "<h1>{}</h1><div class=\"error\"><strong>Data unavailable.</strong><p>{}</p></div>",
        TITLE,
        escape(message)
    ))
}

fn wrap(body: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{}</title><style>{}</style></head><body>{}</body></html>",
        TITLE, STYLE, body
    )
}

fn render_card(card: &ActivityCard) -> String {
    format!(
        "<div class=\"card\"><div class=\"name\">{}</div><div>{}</div><div>{}</div><div>{}</div><div>{}</div><div>{}</div></div>",
        escape(&card.name),
        escape(&card.activity_type),
        escape(&card.distance),
        escape(&card.moving_time),
        escape(&card.elevation),
        escape(&card.date)
    )
}

fn render_controls(dashboard: &Dashboard) -> String {
    let mut form = String::from("<form method=\"get\" action=\"/\">");

    form.push_str("<label>Select Activity Type: <select name=\"filter\" onchange=\"this.form.submit()\">");
    for filter in ActivityFilter::ALL {
        let _ = write!(
            form,
            "<option value=\"{}\"{}>{}</option>",
            filter.as_str(),
            selected_attr(filter == dashboard.filter),
            filter.label()
        );
    }
    form.push_str("</select></label> ");

    form.push_str("<label>Select Data Type: <select name=\"metric\" onchange=\"this.form.submit()\">");
    for metric in Metric::ALL {
        let _ = write!(
            form,
            "<option value=\"{}\"{}>{}</option>",
            metric.as_str(),
            selected_attr(metric == dashboard.metric),
            metric.label()
        );
    }
    form.push_str("</select></label>");

    // Carry an explicit selection across filter and metric changes.
    if let Some(selection) = &dashboard.selection {
        if let Selection::Explicit(WeekRef::Start(start)) = &selection.state {
            let _ = write!(
                form,
                "<input type=\"hidden\" name=\"week\" value=\"{}\">",
                start.format("%Y-%m-%d")
            );
        }
    }

    form.push_str("<noscript><button type=\"submit\">Apply</button></noscript></form>");
    form
}

fn selected_attr(selected: bool) -> &'static str {
    if selected {
        " selected"
    } else {
        ""
    }
}

fn render_peak(peak: &PeakSummary) -> String {
    format!(
        "<div class=\"stats\"><div><strong>Moving Time:</strong> {:.2} hours</div><div><strong>Distance:</strong> {:.2} km</div><div><strong>Elevation:</strong> {:.0} m</div></div>",
        peak.moving_time_hours, peak.distance_km, peak.elevation_gain_m
    )
}

fn render_selected(week: &WeeklyAggregate) -> String {
    format!(
        "<h3>Week of {}</h3><div class=\"stats selected\" data-week=\"{}\"><div><strong>Moving Time:</strong> {:.2} hours</div><div><strong>Distance:</strong> {:.2} km</div><div><strong>Elevation:</strong> {:.0} m</div><div><strong>Activities:</strong> {}</div></div>",
        escape(&week.label),
        week.week_start.format("%Y-%m-%d"),
        week.moving_time_hours(),
        week.distance_km,
        week.elevation_gain_m,
        week.activity_count
    )
}
