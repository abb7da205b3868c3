//! Update function for the home page.
//!
//! Each control message stores the new value and issues exactly one request
//! for the region it belongs to. Answers carry the sequence number they were
//! requested under; only the latest one replaces the region's chart.

use chrono::NaiveDate;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::{post_json, report_failure};

use super::messages::Msg;
use super::state::HomePage;

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

pub fn update(page: &mut HomePage, ctx: &Context<HomePage>, msg: Msg) -> bool {
    match msg {
        Msg::OverviewLoaded(overview) => {
            page.start = page.start.or(overview.stats.start_date);
            page.end = page.end.or(overview.stats.end_date);
            page.overview = Some(overview);
            request_trend(page, ctx);
            true
        }
        Msg::SetStart(raw) => {
            page.start = parse_date(&raw);
            request_trend(page, ctx);
            true
        }
        Msg::SetEnd(raw) => {
            page.end = parse_date(&raw);
            request_trend(page, ctx);
            true
        }
        Msg::SetPeriod(period) => {
            if page.period == period {
                return false;
            }
            page.period = period;
            request_trend(page, ctx);
            true
        }
        Msg::SetCumulative(cumulative) => {
            page.cumulative = cumulative;
            request_trend(page, ctx);
            true
        }
        Msg::TrendLoaded(seq, chart) => {
            if seq != page.trend_seq {
                return false;
            }
            page.trend_chart = Some(chart);
            true
        }
        Msg::SetThreshold(threshold) => {
            page.threshold = if threshold.is_finite() {
                threshold.clamp(0.0, 1.0)
            } else {
                0.0
            };
            request_correlation(page, ctx);
            true
        }
        Msg::CorrelationLoaded(seq, chart) => {
            if seq != page.correlation_seq {
                return false;
            }
            page.correlation_chart = Some(chart);
            true
        }
        Msg::RequestFailed(context, error) => {
            report_failure(context, &error);
            false
        }
    }
}

/// Posts the current trend controls. A cleared date input sends nothing.
pub fn request_trend(page: &mut HomePage, ctx: &Context<HomePage>) {
    let Some(req) = page.trend_request() else {
        return;
    };
    page.trend_seq += 1;
    let seq = page.trend_seq;
    let link = ctx.link().clone();
    spawn_local(async move {
        match post_json("/api/overview/trend", &req).await {
            Ok(chart) => link.send_message(Msg::TrendLoaded(seq, chart)),
            Err(e) => link.send_message(Msg::RequestFailed("Trend", e)),
        }
    });
}

pub fn request_correlation(page: &mut HomePage, ctx: &Context<HomePage>) {
    page.correlation_seq += 1;
    let seq = page.correlation_seq;
    let req = page.correlation_request();
    let link = ctx.link().clone();
    spawn_local(async move {
        match post_json("/api/overview/correlation", &req).await {
            Ok(chart) => link.send_message(Msg::CorrelationLoaded(seq, chart)),
            Err(e) => link.send_message(Msg::RequestFailed("Correlation", e)),
        }
    });
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_INPUT_FORMAT).ok()
}
