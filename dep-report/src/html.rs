//! HTML fragment rendering for the map app's detail panel.
//!
//! The fragment is dropped into an existing page, which owns the
//! `#eventsModal` dialog and handles the `data-action` attributes.

use crate::error::ReportError;
use crate::report::{Report, TopLossEvent};
use dep_utils::dates::{event_label, heading_date};
use maud::{html, Markup, PreEscaped};

/// Event series buttons: `data-period` value and label.
const EVENT_VIEWS: [(&str, &str); 2] = [
    ("daily", "View Daily Data"),
    ("yearly", "View Yearly Data"),
];

/// Render a complete report fragment.
pub fn render_report(report: &Report) -> Markup {
    let window = match report.end {
        Some(end) => format!("{} to {}", heading_date(&report.start), heading_date(&end)),
        None => heading_date(&report.start),
    };
    html! {
        h4 { "Detailed Data:" }
        h4 { (report.name) }
        form name="changer" method="GET" {
            strong { "HUC 12:" }
            input type="text" value=(report.huc12) name="huc_12" id="huc_12" size="12";
            br;
            (PreEscaped("&nbsp;"))
            p {
                @for (period, label) in EVENT_VIEWS {
                    button data-action="view-events" data-huc12=(report.huc12) data-period=(period)
                        class="btn btn-sm btn-primary" type="button" data-bs-toggle="modal"
                        data-bs-target="#eventsModal" {
                        i class="fa fa-th-list" {}
                        " " (label)
                    }
                }
            }
        }
        h4 { (window) " Summary" }
        table class="table table-condensed table-bordered" {
            @for (label, value) in report.summary.display_rows() {
                tr { th { (label) } td { (value) } }
            }
        }
        (render_top_events(&report.top10))
    }
}

/// Ranked loss days, two per table row, or a notice when there are none.
fn render_top_events(events: &[TopLossEvent]) -> Markup {
    html! {
        @if events.is_empty() {
            br;
            strong { "Top events are missing!" }
        } @else {
            h4 { "Top 10 Soil Loss Days:" }
            table class="table table-condensed table-striped table-bordered" {
                @for pair in events.chunks(2) {
                    tr {
                        @for event in pair {
                            td {
                                span class="badge text-bg-secondary" { (event.rank) }
                                " "
                                a href="#" data-action="set-date" data-year=(event.year)
                                    data-month=(format!("{:02}", event.month))
                                    data-day=(format!("{:02}", event.day)) {
                                    (event_label(&event.date))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Body sent in place of a report. `None` means the error is not the
/// request's fault and should surface as a failure instead.
pub fn render_error(err: &ReportError) -> Option<String> {
    err.user_message().map(str::to_string)
}
