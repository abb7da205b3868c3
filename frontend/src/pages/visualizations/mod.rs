//! Visualizations page ("/visualizations"): a filtered distribution tab and a
//! grouped bar tab.
//!
//! Filter choices are kept per column. Choosing `"All"`, or nothing, leaves a
//! column unconstrained; the backend applies the same rule.

use std::collections::BTreeMap;

use common::model::chart::ChartSpec;
use common::model::column::Column;
use common::model::filter::{FilterConstraint, FilterSpec, ALL_SENTINEL};
use common::model::overview::FilterOptions;
use common::requests::{DistributionRequest, GroupedRequest};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::{get_json, post_json, report_failure};

mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Distribution,
    Grouped,
}

pub enum Msg {
    OptionsLoaded(FilterOptions),
    SetTab(Tab),
    SetFilter(Column, Vec<String>),
    SetColumn(Column),
    SetX(Column),
    SetHue(Column),
    DistributionLoaded(u32, ChartSpec),
    GroupedLoaded(u32, ChartSpec),
    RequestFailed(&'static str, String),
}

pub struct VisualizationsPage {
    pub tab: Tab,
    pub options: Option<FilterOptions>,
    pub filters: BTreeMap<Column, Vec<String>>,
    pub column: Column,
    pub x: Column,
    pub hue: Column,
    pub distribution_chart: Option<ChartSpec>,
    pub distribution_seq: u32,
    pub grouped_chart: Option<ChartSpec>,
    pub grouped_seq: u32,
}

impl Component for VisualizationsPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let filters = Column::FILTERABLE
            .into_iter()
            .map(|c| (c, vec![ALL_SENTINEL.to_string()]))
            .collect();
        Self {
            tab: Tab::Distribution,
            options: None,
            filters,
            column: Column::DaysIndoors,
            x: Column::Country,
            hue: Column::Gender,
            distribution_chart: None,
            distribution_seq: 0,
            grouped_chart: None,
            grouped_seq: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::OptionsLoaded(options) => {
                self.options = Some(options);
                true
            }
            Msg::SetTab(tab) => {
                self.tab = tab;
                true
            }
            Msg::SetFilter(column, values) => {
                self.filters.insert(column, values);
                self.request_distribution(ctx);
                true
            }
            Msg::SetColumn(column) => {
                self.column = column;
                self.request_distribution(ctx);
                true
            }
            Msg::SetX(column) => {
                self.x = column;
                self.request_grouped(ctx);
                true
            }
            Msg::SetHue(column) => {
                self.hue = column;
                self.request_grouped(ctx);
                true
            }
            Msg::DistributionLoaded(seq, chart) => {
                if seq != self.distribution_seq {
                    return false;
                }
                self.distribution_chart = Some(chart);
                true
            }
            Msg::GroupedLoaded(seq, chart) => {
                if seq != self.grouped_seq {
                    return false;
                }
                self.grouped_chart = Some(chart);
                true
            }
            Msg::RequestFailed(context, e) => {
                report_failure(context, &e);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                match get_json("/api/visualizations/options").await {
                    Ok(options) => link.send_message(Msg::OptionsLoaded(options)),
                    Err(e) => link.send_message(Msg::RequestFailed("Filter options", e)),
                }
            });
            self.request_distribution(ctx);
            self.request_grouped(ctx);
        }
    }
}

impl VisualizationsPage {
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec {
            constraints: self
                .filters
                .iter()
                .map(|(column, values)| FilterConstraint::new(*column, values.clone()))
                .collect(),
        }
    }

    fn request_distribution(&mut self, ctx: &Context<Self>) {
        self.distribution_seq += 1;
        let seq = self.distribution_seq;
        let req = DistributionRequest {
            filters: self.filter_spec(),
            column: self.column,
        };
        let link = ctx.link().clone();
        spawn_local(async move {
            match post_json("/api/visualizations/distribution", &req).await {
                Ok(chart) => link.send_message(Msg::DistributionLoaded(seq, chart)),
                Err(e) => link.send_message(Msg::RequestFailed("Distribution", e)),
            }
        });
    }

    fn request_grouped(&mut self, ctx: &Context<Self>) {
        self.grouped_seq += 1;
        let seq = self.grouped_seq;
        let req = GroupedRequest {
            x: self.x,
            hue: self.hue,
            filters: FilterSpec::all(),
        };
        let link = ctx.link().clone();
        spawn_local(async move {
            match post_json("/api/visualizations/grouped", &req).await {
                Ok(chart) => link.send_message(Msg::GroupedLoaded(seq, chart)),
                Err(e) => link.send_message(Msg::RequestFailed("Grouped bar", e)),
            }
        });
    }
}
