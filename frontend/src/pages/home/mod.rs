//! Home page ("/"): overview statistics, the records-over-time trend and the
//! correlation heatmap.
//!
//! The overview is fetched once on first render; its date bounds seed the
//! trend controls, which triggers the first trend request. The correlation
//! heatmap is requested at the same time with a zero threshold.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

use crate::helpers::get_json;
pub use messages::Msg;
pub use state::HomePage;

impl Component for HomePage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        HomePage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                match get_json("/api/overview").await {
                    Ok(overview) => link.send_message(Msg::OverviewLoaded(overview)),
                    Err(e) => link.send_message(Msg::RequestFailed("Overview", e)),
                }
            });
            update::request_correlation(self, ctx);
        }
    }
}
