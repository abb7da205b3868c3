use common::model::column::Column;
use common::model::stats::{ColumnSummary, FeatureCard};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::chart::ChartComponent;

use super::{FeaturesPage, Msg};

pub fn view(page: &FeaturesPage, ctx: &Context<FeaturesPage>) -> Html {
    let link = ctx.link();
    let selected = page.selected;

    html! {
        <div class="container-fluid py-4">
            <h2 class="mt-2 mb-3 text-center">{"Understanding Dataset Features"}</h2>
            <div class="row mb-4 align-items-center">
                <div class="col-auto">
                    <label class="fw-bold" for="feature-dropdown">{"🔎 Select Feature:"}</label>
                </div>
                <div class="col-auto">
                    <select
                        id="feature-dropdown"
                        class="form-select"
                        style="max-width: 300px"
                        onchange={link.callback(|e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            Msg::Select(select.value())
                        })}
                    >
                        { for page.features.iter().map(|f| html! {
                            <option value={f.column.header()} selected={Some(f.column) == selected}>
                                { f.column.header() }
                            </option>
                        }) }
                    </select>
                </div>
                <div class="col-auto">
                    <div class="form-check form-switch">
                        <input
                            id="feature-encoded"
                            class="form-check-input"
                            type="checkbox"
                            checked={page.encoded}
                            onchange={link.callback(|e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                Msg::SetEncoded(input.checked())
                            })}
                        />
                        <label class="form-check-label" for="feature-encoded">{"Ordinal encoding"}</label>
                    </div>
                </div>
            </div>

            if let Some(column) = selected {
                <div class="row">{ card_column(page, column, true) }</div>
            }

            <div class="row">
                { for page.features.iter()
                    .filter(|f| Some(f.column) != selected)
                    .map(|f| card_column(page, f.column, false)) }
            </div>
        </div>
    }
}

fn card_column(page: &FeaturesPage, column: Column, selected: bool) -> Html {
    let (col_class, card_class) = if selected {
        ("col-12 col-lg-6 mb-4", "card h-100 shadow border-dark feature-card")
    } else {
        ("col-12 col-sm-6 col-md-4 col-lg-3 mb-4", "card h-100 shadow-sm border-secondary feature-card")
    };
    let title = if selected {
        format!("✨ {}", column)
    } else {
        column.to_string()
    };

    html! {
        <div key={column.header()} class={col_class}>
            <div class={card_class}>
                <div class="card-header">
                    <h5 class="mb-0">{ title }</h5>
                </div>
                <div class="card-body">
                    <p class="card-text">{ column.description() }</p>
                    {
                        match page.cards.get(&column) {
                            Some(card) => card_body(card),
                            None => html! { <p class="text-muted small">{"Loading…"}</p> },
                        }
                    }
                </div>
            </div>
        </div>
    }
}

fn card_body(card: &FeatureCard) -> Html {
    html! {
        <>
            <ul class="mt-2 mb-2">
                { for summary_lines(&card.summary).into_iter().map(|line| html! { <li>{ line }</li> }) }
            </ul>
            <ChartComponent spec={Some(card.chart.clone())} />
        </>
    }
}

fn summary_lines(summary: &ColumnSummary) -> Vec<String> {
    let missing = summary.missing();
    let missing_line = format!("❓ Missing: {} ({:.1}%)", missing.count, missing.percent);
    match summary {
        ColumnSummary::Numeric(s) => vec![
            format!("🔢 Min: {}", fmt_stat(s.min)),
            format!("🔢 Q1: {}", fmt_stat(s.q1)),
            format!("🔢 Median: {}", fmt_stat(s.median)),
            format!("🔢 Q3: {}", fmt_stat(s.q3)),
            format!("🔢 Max: {}", fmt_stat(s.max)),
            format!("📊 Mean: {}", fmt_stat(s.mean)),
            format!("📈 Std: {}", fmt_stat(s.std)),
            missing_line,
        ],
        ColumnSummary::Categorical(s) => vec![
            format!("🔢 Unique: {}", s.unique),
            format!("📊 Mode: {}", s.mode),
            missing_line,
        ],
    }
}

fn fmt_stat(value: Option<f64>) -> String {
    value.map_or_else(|| "—".to_string(), |v| format!("{:.2}", v))
}
