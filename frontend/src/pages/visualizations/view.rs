use common::model::column::Column;
use web_sys::HtmlSelectElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::chart::ChartComponent;
use crate::helpers::selected_values;

use super::{Msg, Tab, VisualizationsPage};

pub fn view(page: &VisualizationsPage, ctx: &Context<VisualizationsPage>) -> Html {
    let link = ctx.link();
    html! {
        <div class="container-fluid py-4">
            <h2 class="text-center mb-4">{"Interactive Visualizations"}</h2>
            <ul class="nav nav-tabs">
                { tab_button(page, link, Tab::Distribution, "Distribution") }
                { tab_button(page, link, Tab::Grouped, "Grouped Bar") }
            </ul>
            <div class="card border-top-0 rounded-0 rounded-bottom">
                <div class="card-body">
                    // Both tabs stay mounted so their charts keep their state.
                    <div hidden={page.tab != Tab::Distribution}>{ distribution_tab(page, link) }</div>
                    <div hidden={page.tab != Tab::Grouped}>{ grouped_tab(page, link) }</div>
                </div>
            </div>
        </div>
    }
}

fn tab_button(page: &VisualizationsPage, link: &Scope<VisualizationsPage>, tab: Tab, label: &'static str) -> Html {
    let class = classes!("nav-link", (page.tab == tab).then_some("active"));
    html! {
        <li class="nav-item">
            <button class={class} onclick={link.callback(move |_| Msg::SetTab(tab))}>{ label }</button>
        </li>
    }
}

fn filter_label(column: Column) -> &'static str {
    match column {
        Column::Country => "Country",
        Column::Gender => "Gender",
        Column::Treatment => "Treatment",
        Column::Occupation => "Occupation",
        Column::SelfEmployed => "Self-Employed",
        Column::FamilyHistory => "Family History",
        other => other.header(),
    }
}

fn distribution_tab(page: &VisualizationsPage, link: &Scope<VisualizationsPage>) -> Html {
    let filters = match &page.options {
        Some(options) => options
            .filters
            .iter()
            .map(|opts| {
                let column = opts.column;
                let chosen = page.filters.get(&column).cloned().unwrap_or_default();
                html! {
                    <div class="col-md-4">
                        <label class="form-label">{ filter_label(column) }</label>
                        <select
                            class="form-select"
                            multiple=true
                            size="4"
                            onchange={link.callback(move |e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                Msg::SetFilter(column, selected_values(&select))
                            })}
                        >
                            { for opts.values.iter().map(|v| html! {
                                <option value={v.clone()} selected={chosen.contains(v)}>{ v.clone() }</option>
                            }) }
                        </select>
                    </div>
                }
            })
            .collect::<Html>(),
        None => html! { <p class="text-muted">{"Loading filters…"}</p> },
    };

    html! {
        <>
            <div class="row gy-3 mb-3">{ filters }</div>
            <div class="mb-4">
                <label class="form-label">{"Select Column"}</label>
                { column_select(page, page.column, link.callback(Msg::SetColumn)) }
            </div>
            <ChartComponent spec={page.distribution_chart.clone()} />
        </>
    }
}

fn grouped_tab(page: &VisualizationsPage, link: &Scope<VisualizationsPage>) -> Html {
    html! {
        <>
            <div class="row gy-3 mb-4">
                <div class="col-md-6">
                    <label class="form-label">{"X-Axis"}</label>
                    { column_select(page, page.x, link.callback(Msg::SetX)) }
                </div>
                <div class="col-md-6">
                    <label class="form-label">{"Hue"}</label>
                    { column_select(page, page.hue, link.callback(Msg::SetHue)) }
                </div>
            </div>
            <ChartComponent spec={page.grouped_chart.clone()} />
        </>
    }
}

/// Single-choice dropdown over every dataset column.
fn column_select(page: &VisualizationsPage, current: Column, on_change: Callback<Column>) -> Html {
    let columns: Vec<Column> = page
        .options
        .as_ref()
        .map(|o| o.columns.clone())
        .unwrap_or_else(|| Column::ALL.to_vec());

    html! {
        <select
            class="form-select"
            onchange={Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                match select.value().parse::<Column>() {
                    Ok(column) => on_change.emit(column),
                    Err(e) => gloo_console::warn!(e),
                }
            })}
        >
            { for columns.into_iter().map(|c| html! {
                <option value={c.header()} selected={c == current}>{ c.header() }</option>
            }) }
        </select>
    }
}
