use common::model::overview::OverviewStats;
use common::requests::TrendPeriod;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::chart::ChartComponent;
use crate::components::stat_card::StatCard;
use crate::helpers::format_count;

use super::messages::Msg;
use super::state::HomePage;

pub fn view(page: &HomePage, ctx: &Context<HomePage>) -> Html {
    let link = ctx.link();
    html! {
        <div class="container-fluid py-4">
            <h2 class="text-center mb-4">{"Statistics & EDA"}</h2>
            { overview_card(page) }
            { trend_card(page, link) }
            { correlation_card(page, link) }
        </div>
    }
}

fn overview_card(page: &HomePage) -> Html {
    let overview = page.overview.as_ref();
    html! {
        <div class="card mb-4 shadow-sm">
            <div class="card-body">
                <h4 class="card-title">{"Overview 🗒️"}</h4>
                {
                    match overview {
                        Some(o) => stat_row(&o.stats),
                        None => html! { <p class="text-muted">{"Loading…"}</p> },
                    }
                }
                <div class="row mb-4">
                    <div class="col-md-6">
                        <ChartComponent spec={overview.map(|o| o.gender_chart.clone())} />
                    </div>
                    <div class="col-md-6">
                        <ChartComponent spec={overview.map(|o| o.treatment_chart.clone())} />
                    </div>
                </div>
                <div class="row">
                    <div class="col-md-6">
                        <ChartComponent spec={overview.map(|o| o.missing_chart.clone())} />
                    </div>
                    <div class="col-md-6">
                        <ChartComponent spec={overview.map(|o| o.world_chart.clone())} />
                    </div>
                </div>
            </div>
        </div>
    }
}

fn stat_row(stats: &OverviewStats) -> Html {
    let range = match (stats.start_date, stats.end_date) {
        (Some(start), Some(end)) => format!("{} → {}", start, end),
        _ => "—".to_string(),
    };
    html! {
        <div class="row mb-4 justify-content-center g-2">
            <div class="col-md-2">
                <StatCard label="📋 Total Records" value={format_count(stats.total_records)} />
            </div>
            <div class="col-md-3">
                <StatCard label="📅 Date Range" value={range} />
            </div>
            <div class="col-md-2">
                <StatCard label="🔢 Avg / Day" value={format_count(stats.avg_per_day)} />
            </div>
            <div class="col-md-2">
                <StatCard label="💊 Treatment Rate" value={format!("{:.1}%", stats.treatment_rate)} />
            </div>
            <div class="col-md-3">
                <StatCard label="💼 Top Occupation" value={stats.top_occupation.clone()} />
            </div>
        </div>
    }
}

fn trend_card(page: &HomePage, link: &Scope<HomePage>) -> Html {
    let bounds = page.overview.as_ref().map(|o| &o.stats);
    let min = bounds.and_then(|s| s.start_date).map(|d| d.to_string());
    let max = bounds.and_then(|s| s.end_date).map(|d| d.to_string());

    html! {
        <div class="card mb-4 shadow-sm">
            <div class="card-body">
                <h4 class="card-title">{"Trend Over Time 📈"}</h4>
                <div class="row mb-3">
                    <div class="col-md-6">
                        <label class="form-label">{"Date Range"}</label>
                        <div class="d-flex gap-2">
                            <input
                                type="date"
                                class="form-control"
                                min={min.clone()}
                                max={max.clone()}
                                value={page.start.map(|d| d.to_string()).unwrap_or_default()}
                                onchange={link.callback(|e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    Msg::SetStart(input.value())
                                })}
                            />
                            <input
                                type="date"
                                class="form-control"
                                min={min}
                                max={max}
                                value={page.end.map(|d| d.to_string()).unwrap_or_default()}
                                onchange={link.callback(|e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    Msg::SetEnd(input.value())
                                })}
                            />
                        </div>
                    </div>
                    <div class="col-md-6 d-flex flex-column justify-content-center">
                        <label class="form-label">{"Aggregate By"}</label>
                        <div>
                            { for TrendPeriod::ALL.into_iter().map(|period| period_radio(page, link, period)) }
                        </div>
                        <div class="form-check form-switch mt-2">
                            <input
                                id="home-trend-cum"
                                class="form-check-input"
                                type="checkbox"
                                checked={page.cumulative}
                                onchange={link.callback(|e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    Msg::SetCumulative(input.checked())
                                })}
                            />
                            <label class="form-check-label" for="home-trend-cum">{"Show cumulative"}</label>
                        </div>
                    </div>
                </div>
                <ChartComponent spec={page.trend_chart.clone()} />
            </div>
        </div>
    }
}

fn period_radio(page: &HomePage, link: &Scope<HomePage>, period: TrendPeriod) -> Html {
    let id = format!("home-trend-{}", period.label().to_lowercase());
    html! {
        <div class="form-check form-check-inline me-3">
            <input
                id={id.clone()}
                class="form-check-input"
                type="radio"
                name="home-trend-agg"
                checked={page.period == period}
                onchange={link.callback(move |_| Msg::SetPeriod(period))}
            />
            <label class="form-check-label" for={id}>{ period.label() }</label>
        </div>
    }
}

fn correlation_card(page: &HomePage, link: &Scope<HomePage>) -> Html {
    html! {
        <div class="card mb-4 shadow-sm">
            <div class="card-body">
                <h4 class="card-title">{"Correlations 🔗"}</h4>
                <p class="mb-2">{ format!("Filter by |r| threshold: {:.0}%", page.threshold * 100.0) }</p>
                <input
                    type="range"
                    class="form-range mb-3"
                    min="0"
                    max="1"
                    step="0.05"
                    value={page.threshold.to_string()}
                    onchange={link.callback(|e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetThreshold(input.value_as_number())
                    })}
                />
                <ChartComponent spec={page.correlation_chart.clone()} />
            </div>
        </div>
    }
}
