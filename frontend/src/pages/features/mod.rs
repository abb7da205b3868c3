//! Features page ("/features"): one summary card per dataset column.
//!
//! The selected feature is shown large at the top and every other feature as
//! a small card below it. The ordinal-encoding switch refetches all cards so
//! encodable columns show their numeric summary.

use std::collections::BTreeMap;

use common::model::column::Column;
use common::model::stats::{FeatureCard, FeatureInfo};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::{get_json, report_failure};

mod view;

pub enum Msg {
    FeaturesLoaded(Vec<FeatureInfo>),
    Select(String),
    SetEncoded(bool),
    /// A card fetched under the given generation.
    CardLoaded(u32, FeatureCard),
    RequestFailed(String),
}

pub struct FeaturesPage {
    pub features: Vec<FeatureInfo>,
    pub selected: Option<Column>,
    pub encoded: bool,
    pub cards: BTreeMap<Column, FeatureCard>,
    /// Bumped whenever the encoding switch changes; older cards are ignored.
    pub generation: u32,
}

impl Component for FeaturesPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            features: Vec::new(),
            selected: None,
            encoded: false,
            cards: BTreeMap::new(),
            generation: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FeaturesLoaded(features) => {
                self.selected = features.first().map(|f| f.column);
                self.features = features;
                self.request_cards(ctx);
                true
            }
            Msg::Select(header) => match header.parse::<Column>() {
                Ok(column) => {
                    self.selected = Some(column);
                    true
                }
                Err(e) => {
                    gloo_console::warn!(e);
                    false
                }
            },
            Msg::SetEncoded(encoded) => {
                self.encoded = encoded;
                self.request_cards(ctx);
                true
            }
            Msg::CardLoaded(generation, card) => {
                if generation != self.generation {
                    return false;
                }
                self.cards.insert(card.column, card);
                true
            }
            Msg::RequestFailed(e) => {
                report_failure("Feature card", &e);
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
                match get_json("/api/features").await {
                    Ok(features) => link.send_message(Msg::FeaturesLoaded(features)),
                    Err(e) => link.send_message(Msg::RequestFailed(e)),
                }
            });
        }
    }
}

impl FeaturesPage {
    /// Fetches one card per feature under a fresh generation.
    fn request_cards(&mut self, ctx: &Context<Self>) {
        self.generation += 1;
        let generation = self.generation;
        for feature in &self.features {
            let url = format!("/api/features/{}?encoded={}", feature.column, self.encoded);
            let link = ctx.link().clone();
            spawn_local(async move {
                match get_json(&url).await {
                    Ok(card) => link.send_message(Msg::CardLoaded(generation, card)),
                    Err(e) => link.send_message(Msg::RequestFailed(e)),
                }
            });
        }
    }
}
