use super::dom::RevealObserver;
use super::Motion;
use crate::content::SectionId;
use crate::reveal::RevealState;
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: SectionId,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Page section that fades up the first time it scrolls into view.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let motion = use_context::<Motion>().unwrap_or_default();
    let node = use_node_ref();
    let revealed = use_state_eq(RevealState::default);

    {
        let revealed = revealed.clone();
        let section = props.id.as_str();
        use_effect_with(node.clone(), move |node| {
            let mut state = RevealState::default();
            let setter = revealed.setter();
            let observer = node.cast::<Element>().and_then(|element| {
                RevealObserver::observe(&element, move |intersecting| {
                    if state.observe(intersecting) {
                        log::debug!(section = section; "section_revealed");
                        setter.set(state);
                    }
                    state.is_revealed()
                })
            });

            let initial = RevealState::initial(observer.is_some());
            if initial.is_revealed() {
                revealed.set(initial);
            }

            move || drop(observer)
        });
    }

    html! {
        <section id={props.id.as_str()} class={classes!("section", props.class.clone())}>
            <div ref={node} class="section-inner" style={revealed.style(motion.reduced)}>
                {props.children.clone()}
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            <div class="section-rule" aria-hidden="true"></div>
            <h2>{props.title.clone()}</h2>
        </div>
    }
}
