use crate::components::navbar::Navbar;
use crate::pages::features::FeaturesPage;
use crate::pages::home::HomePage;
use crate::pages::visualizations::VisualizationsPage;
use yew::{html, Component, Context, Html};

/// The three views; the server answers every one of these paths with the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Features,
    Visualizations,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Features, Page::Visualizations];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Features => "/features",
            Page::Visualizations => "/visualizations",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Features => "Features",
            Page::Visualizations => "Visualizations",
        }
    }

    /// Unknown paths show the home page.
    pub fn from_path(path: &str) -> Page {
        let path = path.trim_end_matches('/');
        Page::ALL
            .into_iter()
            .find(|p| p.path().trim_end_matches('/') == path)
            .unwrap_or(Page::Home)
    }
}

pub struct App {
    page: Page,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        Self {
            page: Page::from_path(&path),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <Navbar active={self.page} />
                {
                    match self.page {
                        Page::Home => html! { <HomePage /> },
                        Page::Features => html! { <FeaturesPage /> },
                        Page::Visualizations => html! { <VisualizationsPage /> },
                    }
                }
            </div>
        }
    }
}
