use std::sync::Arc;

use leptos::prelude::*;

use super::effects::{RevealSection, SpotlightCard};
use crate::{
    content::{Profile, Theme, Variant},
    sections::SectionId,
};

#[component]
fn SectionHeading(theme: &'static Theme, #[prop(into)] text: String) -> impl IntoView {
    view! { <h2 class=format!("text-4xl font-bold mb-12 {}", theme.accent_text)>{text}</h2> }
}

#[component]
pub fn Skills(profile: Arc<Profile>, variant: Variant) -> impl IntoView {
    let theme = variant.theme();
    let bars = profile
        .skills
        .iter()
        .map(|skill| {
            let width = format!("width: {};", skill.fill_width());
            view! {
                <div class=format!("p-4 group transition-all duration-300 {}", theme.card)>
                    <span>{skill.name.clone()}</span>
                    <div class="h-3 mt-2 bg-gray-500/30 rounded-full overflow-hidden opacity-0 group-hover:opacity-100 transition-opacity duration-500">
                        <div
                            class=format!(
                                "h-3 rounded-full transition-all duration-1000 {}",
                                theme.accent_bg,
                            )
                            style=width
                        ></div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <RevealSection id=SectionId::Skills class="min-h-screen py-32 px-6 container mx-auto">
            <SectionHeading theme text="Skills & Expertise" />
            <div class="grid md:grid-cols-2 gap-6">{bars}</div>
        </RevealSection>
    }
}

#[component]
pub fn Certificates(profile: Arc<Profile>, variant: Variant) -> impl IntoView {
    let theme = variant.theme();
    let cards = profile
        .certificates
        .iter()
        .map(|cert| {
            let byline = cert.byline();
            let skills = format!("Skills: {}", cert.skills.join(", "));
            let (logo, issuer, title) = (cert.logo.clone(), cert.issuer.clone(), cert.title.clone());
            view! {
                <SpotlightCard theme class="hover:shadow-xl hover:scale-105 transform transition-all duration-300">
                    <div class="flex items-center mb-4">
                        <img src=logo alt=issuer class="w-10 h-10 mr-3" />
                        <h3 class="text-xl font-semibold">{title}</h3>
                    </div>
                    <p class=format!("text-sm mb-2 {}", theme.muted_text)>{byline}</p>
                    <p class="text-sm">{skills}</p>
                </SpotlightCard>
            }
        })
        .collect_view();

    view! {
        <RevealSection id=SectionId::Certificates class="min-h-screen py-32 px-6 container mx-auto">
            <SectionHeading theme text="Certificates & Licenses" />
            <div class="grid md:grid-cols-3 gap-8">{cards}</div>
        </RevealSection>
    }
}

/// Project grid. Rendered under the `projects` anchor or, in the scholar
/// layout, under `work`.
#[component]
pub fn Projects(profile: Arc<Profile>, variant: Variant, id: SectionId) -> impl IntoView {
    let theme = variant.theme();
    let cards = profile
        .projects
        .iter()
        .map(|proj| {
            let link = proj.link.clone().map(|href| {
                view! {
                    <a
                        href=href
                        target="_blank"
                        rel="noopener noreferrer"
                        class=format!("mt-2 inline-block {}", theme.accent_text)
                    >
                        "View Project"
                    </a>
                }
            });
            let (title, tech, desc) = (proj.title.clone(), proj.tech.clone(), proj.desc.clone());
            view! {
                <SpotlightCard theme class="hover:shadow-xl hover:scale-105 transform transition-all duration-300">
                    <h3 class="text-xl font-semibold mb-1">{title}</h3>
                    <p class=format!("mb-2 {}", theme.muted_text)>{tech}</p>
                    <p>{desc}</p>
                    {link}
                </SpotlightCard>
            }
        })
        .collect_view();

    view! {
        <RevealSection
            id
            class="min-h-screen flex flex-col justify-center items-start py-32 px-6 container mx-auto"
        >
            <SectionHeading theme text=id.label() />
            <div class="grid md:grid-cols-2 gap-8">{cards}</div>
        </RevealSection>
    }
}

#[component]
fn SampleBadge() -> impl IntoView {
    view! {
        <span class="inline-block mb-2 px-2 py-0.5 text-xs uppercase tracking-wide border border-dashed rounded opacity-70">
            "Sample entry"
        </span>
    }
}

#[component]
pub fn Research(profile: Arc<Profile>, variant: Variant) -> impl IntoView {
    let theme = variant.theme();
    let papers = profile
        .research
        .iter()
        .map(|paper| {
            let title = match paper.link.clone() {
                Some(href) => view! {
                    <a href=href target="_blank" rel="noopener noreferrer" class="hover:underline">
                        {paper.title.clone()}
                    </a>
                }
                .into_any(),
                None => paper.title.clone().into_any(),
            };
            let byline = format!("{} • {}", paper.venue, paper.year);
            let summary = paper.summary.clone();
            let sample = paper.placeholder.then(|| view! { <SampleBadge /> });
            view! {
                <SpotlightCard theme>
                    {sample}
                    <h3 class="text-xl font-semibold">{title}</h3>
                    <p class=format!("text-sm mb-2 {}", theme.muted_text)>{byline}</p>
                    <p>{summary}</p>
                </SpotlightCard>
            }
        })
        .collect_view();

    view! {
        <RevealSection id=SectionId::Research class="py-32 px-6 container mx-auto">
            <SectionHeading theme text="Research" />
            <div class="space-y-6">{papers}</div>
        </RevealSection>
    }
}

#[component]
pub fn Education(profile: Arc<Profile>, variant: Variant) -> impl IntoView {
    let theme = variant.theme();
    let entries = profile
        .education
        .iter()
        .map(|edu| {
            view! {
                <div class=format!("p-6 border-l-2 {}", theme.accent_border)>
                    {edu.placeholder.then(|| view! { <SampleBadge /> })}
                    <h3 class="text-2xl font-semibold">{edu.degree.clone()}</h3>
                    <p class=theme.muted_text>
                        {format!("{} • {}", edu.institution, edu.period)}
                    </p>
                    {edu.detail.clone().map(|d| view! { <p class="mt-2">{d}</p> })}
                </div>
            }
        })
        .collect_view();

    view! {
        <RevealSection id=SectionId::Education class="py-32 px-6 container mx-auto">
            <SectionHeading theme text="Education" />
            <div class="space-y-6">{entries}</div>
        </RevealSection>
    }
}

#[component]
pub fn Experience(profile: Arc<Profile>, variant: Variant) -> impl IntoView {
    let theme = variant.theme();
    let entries = profile
        .experience
        .iter()
        .map(|exp| {
            let tech = (!exp.tech.is_empty()).then(|| {
                let chips = exp
                    .tech
                    .iter()
                    .map(|t| {
                        view! {
                            <span class=format!(
                                "text-xs px-2 py-0.5 rounded border {}",
                                theme.accent_border,
                            )>{t.clone()}</span>
                        }
                    })
                    .collect_view();
                view! { <div class="flex flex-wrap gap-2 mt-3">{chips}</div> }
            });
            view! {
                <div class=format!(
                    "p-6 border-l-2 hover:shadow-lg transition-shadow rounded-lg {}",
                    theme.accent_border,
                )>
                    <h3 class="text-2xl font-semibold">{exp.role.clone()}</h3>
                    <p class=theme.muted_text>{format!("{} • {}", exp.company, exp.period)}</p>
                    <p class="mt-2">{exp.description.clone()}</p>
                    {tech}
                </div>
            }
        })
        .collect_view();

    view! {
        <RevealSection
            id=SectionId::Experience
            class="min-h-screen flex flex-col justify-center items-start py-32 px-6 container mx-auto"
        >
            <SectionHeading theme text="Experience" />
            <div class="space-y-6">{entries}</div>
        </RevealSection>
    }
}
