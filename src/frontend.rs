mod cards;
mod dom;
mod nav;
mod particles;
mod scroll_link;
mod section;
mod tilt_card;

use crate::content::{SectionId, SiteContent};
use crate::logging;
use crate::menu::MenuState;
use cards::{
    rich_text, BootConsole, ContactCard, ExperienceItem, HighlightCard, ProjectCard, SkillCard,
};
use dom::BodyScroll;
use log::LevelFilter;
use nav::NavBar;
use particles::ParticleBackdrop;
use scroll_link::ScrollLink;
use section::{Section, SectionHeading};
use std::rc::Rc;
use web_sys::window;
use yew::prelude::*;

/// Motion preference shared with every animated component.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Motion {
    pub reduced: bool,
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
struct AppProps {
    content: Rc<SiteContent>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let content = &props.content;
    let motion = use_state(|| Motion {
        reduced: prefers_reduced_motion(),
    });
    let menu = use_state_eq(MenuState::default);

    use_effect_with(*menu, |menu| {
        let lock = menu.scroll_lock(BodyScroll);
        move || drop(lock)
    });

    let on_toggle = {
        let menu = menu.clone();
        Callback::from(move |_| {
            let next = (*menu).toggled();
            log::debug!(open = next.is_open(); "menu_toggled");
            menu.set(next);
        })
    };

    let on_close = {
        let menu = menu.clone();
        Callback::from(move |_| menu.set(MenuState::closed()))
    };

    let identity = &content.identity;

    html! {
        <ContextProvider<Motion> context={*motion}>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <div class="page-shell">
                <ParticleBackdrop />

                <NavBar
                    identity={identity.clone()}
                    nav={content.nav.clone()}
                    menu={*menu}
                    on_toggle={on_toggle}
                    on_close={on_close}
                />

                <main id="content">
                    <section class="hero">
                        <div class="hero-grid">
                            <div class="hero-copy">
                                <div class="role-badge">
                                    <span class="pulse" aria-hidden="true"></span>
                                    {identity.role_badge.clone()}
                                </div>
                                <h1>
                                    {identity.hero_title.clone()}
                                    <br />
                                    <span class="gradient-text">{identity.hero_accent.clone()}</span>
                                </h1>
                                <p class="hero-summary">{rich_text(&identity.hero_summary)}</p>
                                <div class="hero-actions">
                                    <a
                                        class="button primary"
                                        href={identity.resume.href.clone()}
                                        download={identity.resume.download_name.clone()}
                                    >
                                        <span aria-hidden="true">{"⤓"}</span>
                                        {"Download CV"}
                                    </a>
                                    <ScrollLink to={SectionId::Projects} class="button secondary">
                                        {content.nav.projects_cta.clone()}
                                        <span aria-hidden="true">{" ⌄"}</span>
                                    </ScrollLink>
                                </div>
                            </div>
                            <div class="hero-visual">
                                <BootConsole boot_log={content.boot_log.clone()} />
                            </div>
                        </div>
                    </section>

                    <Section id={SectionId::About}>
                        <SectionHeading title={content.about.heading.clone()} />
                        <div class="about-grid">
                            <div class="about-copy">
                                { for content.about.paragraphs.iter().map(|paragraph| html! {
                                    <p>{rich_text(paragraph)}</p>
                                }) }
                            </div>
                            <div class="about-highlights">
                                { for content.about.highlights.iter().map(|highlight| html! {
                                    <HighlightCard highlight={highlight.clone()} />
                                }) }
                            </div>
                        </div>
                    </Section>

                    <Section id={SectionId::Skills}>
                        <SectionHeading title={content.skills.heading.clone()} />
                        <div class="card-grid three">
                            { for content.skills.groups.iter().map(|group| html! {
                                <SkillCard group={group.clone()} />
                            }) }
                        </div>
                    </Section>

                    <Section id={SectionId::Experience}>
                        <SectionHeading title={content.experience.heading.clone()} />
                        <div class="timeline">
                            { for content.experience.entries.iter().map(|entry| html! {
                                <ExperienceItem entry={entry.clone()} />
                            }) }
                        </div>
                    </Section>

                    <Section id={SectionId::Projects}>
                        <SectionHeading title={content.projects.heading.clone()} />
                        <div class="card-grid two">
                            { for content.projects.entries.iter().map(|project| html! {
                                <ProjectCard project={project.clone()} />
                            }) }
                        </div>
                    </Section>

                    <Section id={SectionId::Contact} class="contact-section">
                        <ContactCard contact={content.contact.clone()} />
                        <footer class="site-footer">
                            <p>{content.footer.clone()}</p>
                        </footer>
                    </Section>
                </main>
            </div>
        </ContextProvider<Motion>>
    }
}

pub fn run() {
    logging::init(if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    let content = SiteContent::embedded()
        .unwrap_or_else(|err| panic!("embedded site content is invalid: {err}"));
    log::info!(sections = content.nav.items.len(); "site_mounted");

    yew::Renderer::<App>::with_root_and_props(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
        AppProps {
            content: Rc::new(content),
        },
    )
    .render();
}
