use super::dom::DocumentScroll;
use super::Motion;
use crate::content::SectionId;
use crate::navigation::navigate_to;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScrollLinkProps {
    pub to: SectionId,
    #[prop_or_default]
    pub class: Classes,
    /// Runs after every click, e.g. to close the mobile menu.
    #[prop_or_default]
    pub on_navigate: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ScrollLink)]
pub fn scroll_link(props: &ScrollLinkProps) -> Html {
    let motion = use_context::<Motion>().unwrap_or_default();

    let onclick = {
        let to = props.to;
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let host = DocumentScroll::new(motion.reduced);
            navigate_to(&host, to.as_str(), || on_navigate.emit(()));
        })
    };

    html! {
        <a href={props.to.href()} class={props.class.clone()} onclick={onclick}>
            {props.children.clone()}
        </a>
    }
}
