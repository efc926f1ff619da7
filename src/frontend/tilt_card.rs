use super::dom::element_bounds;
use super::Motion;
use crate::motion::{Depth, TiltSurface, PERSPECTIVE_PX};
use gloo_render::{request_animation_frame, AnimationFrame};
use std::{cell::RefCell, rc::Rc};
use web_sys::{Element, HtmlElement, MouseEvent};
use yew::prelude::*;

const FIRST_FRAME_SECONDS: f64 = 1.0 / 60.0;

struct TiltDriver {
    surface: TiltSurface,
    frame: Option<AnimationFrame>,
}

type SharedDriver = Rc<RefCell<TiltDriver>>;

fn apply_transform(node: &NodeRef, transform: &str) {
    if let Some(element) = node.cast::<HtmlElement>() {
        let _ = element.style().set_property("transform", transform);
    }
}

fn ensure_animating(driver: &SharedDriver, node: &NodeRef) {
    if driver.borrow().frame.is_none() {
        schedule_frame(driver.clone(), node.clone(), None);
    }
}

/// Keeps requesting frames until both springs come to rest.
fn schedule_frame(driver: SharedDriver, node: NodeRef, last_timestamp: Option<f64>) {
    let frame_driver = driver.clone();
    let frame = request_animation_frame(move |timestamp| {
        let dt = last_timestamp
            .map(|last| (timestamp - last) / 1_000.0)
            .unwrap_or(FIRST_FRAME_SECONDS);

        let (moving, transform) = {
            let mut state = frame_driver.borrow_mut();
            let moving = state.surface.tick(dt);
            (moving, state.surface.transform())
        };
        apply_transform(&node, &transform);

        if moving {
            schedule_frame(frame_driver, node, Some(timestamp));
        } else {
            frame_driver.borrow_mut().frame = None;
        }
    });
    driver.borrow_mut().frame = Some(frame);
}

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub panel_class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let motion = use_context::<Motion>().unwrap_or_default();
    let node = use_node_ref();
    let driver = use_mut_ref(|| TiltDriver {
        surface: TiltSurface::new(),
        frame: None,
    });

    {
        let driver = driver.clone();
        use_effect_with((), move |_| {
            move || {
                driver.borrow_mut().frame = None;
            }
        });
    }

    {
        let driver = driver.clone();
        let node = node.clone();
        use_effect_with(motion.reduced, move |&reduced| {
            driver.borrow_mut().surface.set_reduced_motion(reduced);
            if reduced {
                ensure_animating(&driver, &node);
            }
        });
    }

    let onmousemove = {
        let driver = driver.clone();
        let node = node.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(element) = node.cast::<Element>() else {
                return;
            };

            let bounds = element_bounds(&element);
            driver.borrow_mut().surface.on_pointer_move(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                bounds,
            );
            ensure_animating(&driver, &node);
        })
    };

    let onmouseleave = {
        let driver = driver.clone();
        let node = node.clone();
        Callback::from(move |_: MouseEvent| {
            driver.borrow_mut().surface.on_pointer_leave();
            ensure_animating(&driver, &node);
        })
    };

    html! {
        <div
            class={classes!("tilt-card", props.class.clone())}
            style={format!("perspective: {PERSPECTIVE_PX}px;")}
        >
            <div
                ref={node}
                class="tilt-card-body"
                style="transform-style: preserve-3d;"
                onmousemove={onmousemove}
                onmouseleave={onmouseleave}
            >
                <div class={classes!("tilt-card-panel", props.panel_class.clone())} style={Depth::Panel.style()}>
                    <div class="tilt-card-glare" style={Depth::Glare.style()} aria-hidden="true"></div>
                    {props.children.clone()}
                </div>
            </div>
        </div>
    }
}
