//! Static portfolio content mounted inside application windows.

use leptos::*;
use system_ui::{
    Badge, Button, ButtonVariant, Card, Cluster, EmptyState, Grid, Heading, Icon, IconSize,
    LayoutGap, LayoutPadding, Stack, Text, TextRole, TextTone,
};

use crate::{
    apps::{app_entry, app_icon},
    model::AppType,
};

struct Project {
    name: &'static str,
    tagline: &'static str,
    summary: &'static str,
    period: &'static str,
    technologies: &'static [&'static str],
    highlights: &'static [(&'static str, &'static str)],
}

static PROJECTS: [Project; 2] = [
    Project {
        name: "Financial Copilot",
        tagline: "Because manual bookkeeping is so 2019",
        summary: "A fintech platform that uses OCR and NLP to automate receipt processing.",
        period: "Jun 2025 - Present",
        technologies: &["React 18", "TypeScript", "Flask", "PostgreSQL", "Docker"],
        highlights: &[
            ("60%", "Reduced manual bookkeeping"),
            ("<200ms", "Response times"),
            ("100%", "Automated deployments"),
        ],
    },
    Project {
        name: "SecureScale",
        tagline: "Infrastructure that actually stays up",
        summary: "Multi-AZ AWS infrastructure with Terraform automation.",
        period: "Jan 2025 - Apr 2025",
        technologies: &["AWS", "Terraform", "GitHub Actions", "CloudWatch"],
        highlights: &[
            ("99.9%", "Uptime achieved"),
            ("85%", "Less deployment effort"),
            ("30%", "Cost reduction"),
        ],
    },
];

static SKILL_GROUPS: [(&str, &[(&str, u8)]); 3] = [
    (
        "Frontend",
        &[("TypeScript", 90), ("React", 88), ("CSS", 80)],
    ),
    (
        "Backend",
        &[("Python", 85), ("PostgreSQL", 78), ("Rust", 65)],
    ),
    (
        "Infrastructure",
        &[("AWS", 82), ("Terraform", 80), ("Docker", 86)],
    ),
];

static CONTACT_LINKS: [(&str, &str); 3] = [
    ("Email", "mailto:hello@example.com"),
    ("GitHub", "https://github.com/"),
    ("LinkedIn", "https://www.linkedin.com/"),
];

#[component]
pub(super) fn AboutMeApp() -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg>
            <Heading>"Hi, I build software that ships."</Heading>
            <Text tone=TextTone::Secondary>
                "Full-stack engineer working across product frontends, Python services and cloud \
                 infrastructure. This desktop is my portfolio: open an app from the icons, the \
                 start menu, or Ctrl+1 through Ctrl+4."
            </Text>
            <Card>
                <Stack gap=LayoutGap::Sm>
                    <Heading role=TextRole::Label>"Currently"</Heading>
                    <Text>"Building automation tools for small-business finance."</Text>
                </Stack>
            </Card>
        </Stack>
    }
}

#[component]
pub(super) fn ProjectsApp() -> impl IntoView {
    let selected = create_rw_signal(0_usize);

    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg>
            <Stack gap=LayoutGap::Sm>
                <Heading>"My Projects"</Heading>
                <Text tone=TextTone::Secondary>"Things I've built that I'm actually proud of"</Text>
            </Stack>
            <Cluster gap=LayoutGap::Sm>
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(index, project)| {
                        view! {
                            <Button
                                variant=ButtonVariant::Quiet
                                selected=Signal::derive(move || selected.get() == index)
                                on_click=Callback::new(move |_| selected.set(index))
                            >
                                {project.name}
                            </Button>
                        }
                    })
                    .collect_view()}
            </Cluster>
            {move || {
                let project = &PROJECTS[selected.get().min(PROJECTS.len() - 1)];
                view! {
                    <Card>
                        <Stack gap=LayoutGap::Md>
                            <Heading role=TextRole::Label>{project.name}</Heading>
                            <Text tone=TextTone::Accent>{project.tagline}</Text>
                            <Text>{project.summary}</Text>
                            <Text role=TextRole::Caption tone=TextTone::Secondary>
                                {project.period}
                            </Text>
                            <Grid gap=LayoutGap::Sm>
                                {project
                                    .highlights
                                    .iter()
                                    .map(|(metric, label)| {
                                        view! {
                                            <Stack gap=LayoutGap::None>
                                                <Text role=TextRole::Title>{*metric}</Text>
                                                <Text role=TextRole::Caption>{*label}</Text>
                                            </Stack>
                                        }
                                    })
                                    .collect_view()}
                            </Grid>
                            <Cluster gap=LayoutGap::Sm>
                                {project
                                    .technologies
                                    .iter()
                                    .map(|tech| view! { <Badge>{*tech}</Badge> })
                                    .collect_view()}
                            </Cluster>
                        </Stack>
                    </Card>
                }
            }}
        </Stack>
    }
}

#[component]
pub(super) fn SkillsApp() -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg>
            <Heading>"Skills"</Heading>
            <Grid gap=LayoutGap::Md>
                {SKILL_GROUPS
                    .iter()
                    .map(|(group, skills)| {
                        view! {
                            <Card>
                                <Stack gap=LayoutGap::Sm>
                                    <Heading role=TextRole::Label>{*group}</Heading>
                                    {skills
                                        .iter()
                                        .map(|(skill, level)| {
                                            view! {
                                                <Cluster gap=LayoutGap::Sm>
                                                    <Text>{*skill}</Text>
                                                    <meter min="0" max="100" value=level.to_string()></meter>
                                                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                                                        {format!("{level}%")}
                                                    </Text>
                                                </Cluster>
                                            }
                                        })
                                        .collect_view()}
                                </Stack>
                            </Card>
                        }
                    })
                    .collect_view()}
            </Grid>
        </Stack>
    }
}

#[component]
pub(super) fn ContactApp() -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg>
            <Heading>"Get in touch"</Heading>
            <Text tone=TextTone::Secondary>
                "Open to full-stack and platform roles, and always happy to talk shop."
            </Text>
            <Stack gap=LayoutGap::Sm>
                {CONTACT_LINKS
                    .iter()
                    .map(|(label, href)| {
                        view! {
                            <a href=*href target="_blank" rel="noopener noreferrer">
                                <Text tone=TextTone::Accent>{*label}</Text>
                            </a>
                        }
                    })
                    .collect_view()}
            </Stack>
        </Stack>
    }
}

#[component]
pub(super) fn ComingSoon(app_type: AppType) -> impl IntoView {
    let entry = app_entry(app_type);
    view! {
        <EmptyState>
            <Icon icon=app_icon(app_type) size=IconSize::Lg />
            <Heading role=TextRole::Label>{entry.launcher_label}</Heading>
            <Text tone=TextTone::Secondary>"Coming soon."</Text>
        </EmptyState>
    }
}
