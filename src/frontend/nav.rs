use super::scroll_link::ScrollLink;
use crate::content::{Icon, Identity, Navigation, SectionId};
use crate::menu::MenuState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub identity: Identity,
    pub nav: Navigation,
    pub menu: MenuState,
    pub on_toggle: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_| on_toggle.emit(()))
    };

    html! {
        <nav class="site-nav" aria-label="Primary">
            <div class="nav-row">
                <div class="brand">
                    <span class="accent-blue" aria-hidden="true">{Icon::Cpu.glyph()}</span>
                    {props.identity.name.clone()}
                    <span class="brand-suffix">{props.identity.name_suffix.clone()}</span>
                </div>

                <div class="nav-links">
                    { for props.nav.items.iter().map(|item| html! {
                        <ScrollLink to={item.target} class="nav-link">{item.label.clone()}</ScrollLink>
                    }) }
                    <ScrollLink to={SectionId::Contact} class="nav-cta">{props.nav.contact_label.clone()}</ScrollLink>
                </div>

                <button
                    class="menu-toggle"
                    type="button"
                    aria-label={props.menu.toggle_label()}
                    aria-expanded={props.menu.is_open().to_string()}
                    aria-controls="mobile-nav"
                    onclick={onclick}
                >
                    <span aria-hidden="true">{props.menu.icon()}</span>
                </button>
            </div>

            if props.menu.is_open() {
                <div id="mobile-nav" class="mobile-nav">
                    { for props.nav.items.iter().map(|item| html! {
                        <ScrollLink to={item.target} class="mobile-link" on_navigate={props.on_close.clone()}>
                            {item.label.clone()}
                        </ScrollLink>
                    }) }
                    <ScrollLink to={SectionId::Contact} class="mobile-link" on_navigate={props.on_close.clone()}>
                        {props.nav.contact_short_label.clone()}
                    </ScrollLink>
                </div>
            }
        </nav>
    }
}
