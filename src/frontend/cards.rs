use super::tilt_card::TiltCard;
use crate::content::{
    Accent, BootLog, Contact, ExperienceEntry, Highlight, Icon, Project, SkillGroup, Span,
};
use crate::motion::Depth;
use yew::prelude::*;

pub fn rich_text(spans: &[Span]) -> Html {
    spans
        .iter()
        .map(|span| match span {
            Span::Plain(text) => html! { {text.clone()} },
            Span::Strong { strong, accent } => html! {
                <strong class={classes!("strong", accent.map(Accent::class))}>{strong.clone()}</strong>
            },
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct SkillCardProps {
    pub group: SkillGroup,
}

#[function_component(SkillCard)]
pub fn skill_card(props: &SkillCardProps) -> Html {
    let group = &props.group;

    html! {
        <TiltCard>
            <div class="card-body">
                <div class={classes!("card-title-row", group.accent.class())}>
                    <div class="icon-tile" style={Depth::Raised.style()} aria-hidden="true">
                        {group.icon.glyph()}
                    </div>
                    <h3 style={Depth::Shallow.style()}>{group.title.clone()}</h3>
                </div>
                <ul class="skill-list" style={Depth::Panel.style()}>
                    { for group.skills.iter().map(|skill| html! {
                        <li>
                            <span class={classes!("skill-dot", group.accent.class())} aria-hidden="true"></span>
                            {skill.clone()}
                        </li>
                    }) }
                </ul>
            </div>
        </TiltCard>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;

    html! {
        <TiltCard>
            <div class="card-body">
                <div class="project-header" style={Depth::Raised.style()}>
                    <div class="icon-tile accent-blue" aria-hidden="true">{project.icon.glyph()}</div>
                    <span class="pill">{project.category.clone()}</span>
                </div>
                <h3 class="project-title" style={Depth::Panel.style()}>{project.title.clone()}</h3>
                <p class="project-description" style={Depth::Shallow.style()}>{project.description.clone()}</p>
                <div class="tag-row" style={Depth::Lifted.style()}>
                    { for project.tags.iter().map(|tag| html! { <span class="tag">{tag.clone()}</span> }) }
                </div>
            </div>
        </TiltCard>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExperienceItemProps {
    pub entry: ExperienceEntry,
}

#[function_component(ExperienceItem)]
pub fn experience_item(props: &ExperienceItemProps) -> Html {
    let entry = &props.entry;

    html! {
        <div class={classes!("experience-item", entry.current.then_some("is-current"))}>
            <div class="timeline-marker" aria-hidden="true"></div>
            <div class="experience-header">
                <h3>{entry.role.clone()}</h3>
                <span class="period">{entry.period.clone()}</span>
            </div>
            <p class="company">
                <span class="company-icon" aria-hidden="true">{Icon::Server.glyph()}</span>
                {entry.company.clone()}
            </p>
            <ul class="bullet-list">
                { for entry.bullets.iter().map(|bullet| html! { <li>{bullet.clone()}</li> }) }
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HighlightCardProps {
    pub highlight: Highlight,
}

#[function_component(HighlightCard)]
pub fn highlight_card(props: &HighlightCardProps) -> Html {
    let highlight = &props.highlight;

    html! {
        <TiltCard>
            <div class="card-body highlight">
                <div class={classes!("highlight-value", highlight.accent.class())} style={Depth::Raised.style()}>
                    {highlight.value.clone()}
                </div>
                <div class="highlight-label" style={Depth::Shallow.style()}>{highlight.label.clone()}</div>
            </div>
        </TiltCard>
    }
}

#[derive(Properties, PartialEq)]
pub struct BootConsoleProps {
    pub boot_log: BootLog,
}

#[function_component(BootConsole)]
pub fn boot_console(props: &BootConsoleProps) -> Html {
    let boot_log = &props.boot_log;

    html! {
        <TiltCard class="hero-card">
            <div class="card-body console">
                <div class="console-title" style={Depth::Panel.style()}>
                    <span class="accent-purple" aria-hidden="true">{Icon::BrainCircuit.glyph()}</span>
                    <span>{boot_log.title.clone()}</span>
                </div>
                <div class="console-lines" style={Depth::Glare.style()}>
                    { for boot_log.lines.iter().map(|line| html! {
                        <div class="console-line">
                            <span class={classes!("console-arrow", line.accent.class())} aria-hidden="true">{"➔"}</span>
                            <span>{line.text.clone()}{" "}<span class="console-ok">{"OK"}</span></span>
                        </div>
                    }) }
                    <div class="console-status">
                        <span class="status-dot" aria-hidden="true"></span>
                        <span>{boot_log.status_line.clone()}</span>
                    </div>
                </div>
            </div>
        </TiltCard>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactCardProps {
    pub contact: Contact,
}

#[function_component(ContactCard)]
pub fn contact_card(props: &ContactCardProps) -> Html {
    let contact = &props.contact;

    html! {
        <TiltCard class="contact-card" panel_class="contact-panel">
            <div class="card-body contact">
                <h2 style={Depth::Floating.style()}>{contact.heading.clone()}</h2>
                <p style={Depth::Raised.style()}>{contact.blurb.clone()}</p>
                <div class="contact-actions" style={Depth::Glare.style()}>
                    <a class="button primary" href={format!("mailto:{}", contact.email)}>
                        <span aria-hidden="true">{"✉"}</span>
                        {contact.email.clone()}
                    </a>
                    <a class="button secondary" href={contact.github.href.clone()} target="_blank" rel="noreferrer">
                        <span aria-hidden="true">{Icon::Code.glyph()}</span>
                        {contact.github.label.clone()}
                        <span class="sr-only">{" (opens in a new tab)"}</span>
                    </a>
                </div>
            </div>
        </TiltCard>
    }
}
