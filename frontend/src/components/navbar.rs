use crate::app::Page;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub active: Page,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    html! {
        <nav class="navbar navbar-expand navbar-dark bg-dark">
            <div class="container-fluid">
                <a class="navbar-brand" href="/">{"🧠 Mental Health Dashboard"}</a>
                <ul class="navbar-nav ms-auto">
                    { for Page::ALL.iter().map(|page| {
                        let class = classes!("nav-link", (*page == props.active).then_some("active"));
                        html! {
                            <li class="nav-item">
                                <a class={class} href={page.path()}>{ page.title() }</a>
                            </li>
                        }
                    }) }
                </ul>
            </div>
        </nav>
    }
}
