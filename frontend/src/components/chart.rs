//! Plotly chart bound to a `ChartSpec`.
//!
//! The component owns a `<div>` with a unique id. Every time it renders with a
//! spec, the spec is handed to `Plotly.react`, which redraws that element in
//! place; the mode bar is always hidden.

use common::model::chart::ChartSpec;
use js_sys::{Array, Function, Reflect, JSON};
use uuid::Uuid;
use wasm_bindgen::{JsCast, JsValue};
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    /// Nothing is drawn until a spec arrives.
    #[prop_or_default]
    pub spec: Option<ChartSpec>,
    #[prop_or_default]
    pub class: Option<String>,
}

pub struct ChartComponent {
    id: String,
}

impl Component for ChartComponent {
    type Message = ();
    type Properties = ChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("chart-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let class = ctx.props().class.clone().unwrap_or_else(|| "chart".to_string());
        html! {
            <div id={self.id.clone()} class={class}>
                if ctx.props().spec.is_none() {
                    <div class="text-muted small p-3">{"Loading…"}</div>
                }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if let Some(spec) = &ctx.props().spec {
            if let Err(e) = plot(&self.id, spec) {
                gloo_console::error!("Plotly.react failed", e);
            }
        }
    }
}

/// Calls `Plotly.react(id, data, layout, config)` on the global Plotly object.
fn plot(id: &str, spec: &ChartSpec) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let plotly = Reflect::get(&window, &JsValue::from_str("Plotly"))?;
    if plotly.is_undefined() {
        return Err(JsValue::from_str("Plotly is not loaded"));
    }
    let react: Function = Reflect::get(&plotly, &JsValue::from_str("react"))?.dyn_into()?;

    let data = to_js(&spec.data)?;
    let layout = to_js(&spec.layout)?;
    let config = JSON::parse(r#"{"displayModeBar": false, "responsive": true}"#)?;

    react.apply(&plotly, &Array::of4(&JsValue::from_str(id), &data, &layout, &config))?;
    Ok(())
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    JSON::parse(&json)
}
