use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
}

/// One headline figure on the home page.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="card border shadow-none stat-card h-100">
            <div class="card-body">
                <h6>{ props.label.clone() }</h6>
                <h4 class="mb-0">{ props.value.clone() }</h4>
            </div>
        </div>
    }
}
