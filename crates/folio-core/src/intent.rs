//! Intent classifier and command dispatcher.
//!
//! Free-text utterances are matched against an **ordered** list of
//! rules, first match wins. The order encodes tie-breaking precedence
//! ("show projects" must be checked before the generic help fallback)
//! and is part of the contract — the priority is data, not nested
//! control flow, so rules can be inserted and tested independently.
//!
//! [`dispatch`] is total: the two fallback rules at the bottom of the
//! cascade guarantee a match for every string input. Side effects
//! (navigation, downloads, toggles) are only ever invoked by rules
//! 1–8; the help and fallback rules are response-only.

use tracing::debug;

use crate::catalog::{Catalog, Project};
use crate::host::{Host, View};
use crate::models::ActionKind;
use crate::session::ConversationContext;

/// Everything a rule matcher may consult: the lowercased utterance,
/// the rolling conversation context, and the catalog (for matching
/// entity names).
pub struct MatchCx<'a> {
    pub lc: &'a str,
    pub context: &'a ConversationContext,
    pub catalog: &'a Catalog,
}

/// Everything a rule handler may use to produce its outcome.
pub struct RuleCx<'a> {
    pub raw: &'a str,
    pub lc: &'a str,
    pub catalog: &'a Catalog,
    pub context: &'a ConversationContext,
    pub host: &'a mut dyn Host,
}

/// The result of one dispatch: a natural-language response, the
/// action category (if any), the topic tag to append to the
/// conversation context, and the name of the rule that won.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub response: String,
    pub action: Option<ActionKind>,
    pub context_tag: Option<&'static str>,
    pub rule: &'static str,
}

/// One prioritized (predicate, handler) pair.
pub struct Rule {
    pub name: &'static str,
    matches: fn(&MatchCx) -> bool,
    respond: fn(&mut RuleCx) -> Outcome,
}

/// Classify an utterance and execute the winning rule.
///
/// Never fails: unmatched input falls through to a context-aware
/// clarification (when the context ring is non-empty) or an echo of
/// the utterance with a capability hint.
pub fn dispatch(
    utterance: &str,
    context: &ConversationContext,
    catalog: &Catalog,
    host: &mut dyn Host,
) -> Outcome {
    let lc = utterance.trim().to_lowercase();
    let mcx = MatchCx {
        lc: &lc,
        context,
        catalog,
    };

    for rule in RULES {
        if (rule.matches)(&mcx) {
            debug!(rule = rule.name, "intent matched");
            let mut rcx = RuleCx {
                raw: utterance.trim(),
                lc: &lc,
                catalog,
                context,
                host,
            };
            return (rule.respond)(&mut rcx);
        }
    }

    unreachable!("the echo fallback rule matches every utterance")
}

static RULES: &[Rule] = &[
    Rule { name: "navigate", matches: nav_matches, respond: nav_respond },
    Rule { name: "download-resume", matches: resume_matches, respond: resume_respond },
    Rule { name: "project-detail", matches: project_matches, respond: project_respond },
    Rule { name: "project-aspect", matches: aspect_matches, respond: aspect_respond },
    Rule { name: "tech-blurb", matches: tech_matches, respond: tech_respond },
    Rule { name: "settings-toggle", matches: toggle_matches, respond: toggle_respond },
    Rule { name: "external-link", matches: link_matches, respond: link_respond },
    Rule { name: "direct-contact", matches: contact_matches, respond: contact_respond },
    Rule { name: "help", matches: help_matches, respond: help_respond },
    Rule { name: "context-fallback", matches: context_fallback_matches, respond: context_fallback_respond },
    Rule { name: "echo-fallback", matches: always, respond: echo_respond },
];

fn contains_any(lc: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| lc.contains(n))
}

fn always(_: &MatchCx) -> bool {
    true
}

// ── Rule 1: navigation ──────────────────────────────────────────────

struct NavTarget {
    view: View,
    tag: &'static str,
    keywords: &'static [&'static str],
    response: &'static str,
}

static NAV: &[NavTarget] = &[
    NavTarget {
        view: View::Projects,
        tag: "projects",
        keywords: &["project", "portfolio"],
        response: "Taking you to the projects section — these are the things I have built.",
    },
    NavTarget {
        view: View::Skills,
        tag: "skills",
        keywords: &["skill", "expertise"],
        response: "Here is an overview of my technical skills.",
    },
    NavTarget {
        view: View::Experience,
        tag: "experience",
        keywords: &["experience", "career", "work history"],
        response: "Showing my professional experience.",
    },
    NavTarget {
        view: View::About,
        tag: "about",
        keywords: &["about", "welcome", "home"],
        response: "Welcome! Here is a little about me.",
    },
    NavTarget {
        view: View::Contact,
        tag: "contact",
        keywords: &["contact"],
        response: "Opening the contact section — feel free to reach out.",
    },
    NavTarget {
        view: View::Blog,
        tag: "blog",
        keywords: &["blog", "article"],
        response: "Taking you to the blog.",
    },
    NavTarget {
        view: View::Achievements,
        tag: "achievements",
        keywords: &["achievement", "award"],
        response: "Here are some achievements I am proud of.",
    },
    NavTarget {
        view: View::Certifications,
        tag: "certifications",
        keywords: &["certification", "certificate"],
        response: "Showing my certifications.",
    },
    NavTarget {
        view: View::Recommendations,
        tag: "recommendations",
        keywords: &["recommendation", "testimonial"],
        response: "Here is what people say about working with me.",
    },
    NavTarget {
        view: View::Settings,
        tag: "settings",
        keywords: &["settings", "preferences"],
        response: "Opening settings.",
    },
];

fn nav_target(lc: &str) -> Option<&'static NavTarget> {
    NAV.iter().find(|t| contains_any(lc, t.keywords))
}

fn nav_matches(m: &MatchCx) -> bool {
    nav_target(m.lc).is_some()
}

fn nav_respond(cx: &mut RuleCx) -> Outcome {
    let target = match nav_target(cx.lc) {
        Some(t) => t,
        None => unreachable!("nav_respond only runs after nav_matches"),
    };
    cx.host.set_active_view(target.view);
    Outcome {
        response: target.response.to_string(),
        action: Some(ActionKind::Navigate),
        context_tag: Some(target.tag),
        rule: "navigate",
    }
}

// ── Rule 2: resume download ─────────────────────────────────────────

fn resume_matches(m: &MatchCx) -> bool {
    contains_any(m.lc, &["resume", "cv"])
}

fn resume_respond(cx: &mut RuleCx) -> Outcome {
    let url = if cx.catalog.profile.resume_url.is_empty() {
        "resume.pdf"
    } else {
        cx.catalog.profile.resume_url.as_str()
    };
    cx.host.trigger_download(url);
    Outcome {
        response: "Downloading my resume now — happy reading!".to_string(),
        action: Some(ActionKind::Download),
        context_tag: None,
        rule: "download-resume",
    }
}

// ── Rule 3: named project / details follow-up ───────────────────────

fn named_project<'a>(lc: &str, catalog: &'a Catalog) -> Option<&'a Project> {
    catalog
        .projects
        .iter()
        .find(|p| !p.name.is_empty() && lc.contains(&p.name.to_lowercase()))
}

fn project_matches(m: &MatchCx) -> bool {
    if named_project(m.lc, m.catalog).is_some() {
        return true;
    }
    contains_any(m.lc, &["detail", "more info"]) && m.context.contains("projects")
}

fn project_respond(cx: &mut RuleCx) -> Outcome {
    let project = named_project(cx.lc, cx.catalog).or_else(|| cx.catalog.flagship());
    let response = match project {
        Some(p) => project_narrative(p),
        None => "I don't have any projects to show yet.".to_string(),
    };
    Outcome {
        response,
        action: Some(ActionKind::Info),
        context_tag: Some("projects"),
        rule: "project-detail",
    }
}

fn project_narrative(p: &Project) -> String {
    let mut s = format!("{} — {}", p.name, p.description);
    if !p.technologies.is_empty() {
        s.push_str(&format!(" Built with {}.", p.technologies.join(", ")));
    }
    if !p.period.is_empty() {
        s.push_str(&format!(" ({})", p.period));
    }
    s
}

// ── Rule 4: project sub-aspects, conditioned on context ─────────────

const ASPECTS: &[(&str, &str)] = &[
    ("challenge", "challenges"),
    ("feature", "features"),
    ("technolog", "technologies"),
    ("outcome", "outcomes"),
    ("result", "outcomes"),
];

fn aspect_matches(m: &MatchCx) -> bool {
    m.context.contains("projects") && ASPECTS.iter().any(|(kw, _)| m.lc.contains(kw))
}

fn aspect_respond(cx: &mut RuleCx) -> Outcome {
    let response = match cx.catalog.flagship() {
        Some(p) => {
            let (_, aspect) = ASPECTS
                .iter()
                .find(|(kw, _)| cx.lc.contains(kw))
                .copied()
                .unwrap_or(("", "features"));
            let items = match aspect {
                "challenges" => &p.challenges,
                "technologies" => &p.technologies,
                "outcomes" => &p.outcomes,
                _ => &p.features,
            };
            if items.is_empty() {
                format!("I haven't written up the {} for {} yet.", aspect, p.name)
            } else {
                format!("{} of {}: {}.", title_case(aspect), p.name, items.join("; "))
            }
        }
        None => "I don't have any projects to show yet.".to_string(),
    };
    Outcome {
        response,
        action: Some(ActionKind::Info),
        context_tag: Some("projects"),
        rule: "project-aspect",
    }
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ── Rule 5: named technologies ──────────────────────────────────────

/// Fixed keyword → blurb lookup; first matching keyword wins.
const TECH_BLURBS: &[(&str, &str)] = &[
    ("rust", "I use Rust for CLI tooling and WebAssembly modules where performance matters."),
    ("angular", "Angular is my main frontend framework — component architecture, RxJS, the lot."),
    ("react", "I build React apps with hooks and server components."),
    ("typescript", "TypeScript keeps my full-stack code honest with strict typing everywhere."),
    ("javascript", "JavaScript runs through everything I ship on the web."),
    ("python", "I reach for Python for scripting, data wrangling, and quick prototypes."),
    ("node", "Node.js powers my APIs, streaming endpoints, and background workers."),
    ("postgres", "PostgreSQL is my default database — schema design through query planning."),
];

fn tech_matches(m: &MatchCx) -> bool {
    TECH_BLURBS.iter().any(|(kw, _)| m.lc.contains(kw))
}

fn tech_respond(cx: &mut RuleCx) -> Outcome {
    let blurb = TECH_BLURBS
        .iter()
        .find(|(kw, _)| cx.lc.contains(kw))
        .map(|(_, b)| *b)
        .unwrap_or("Here is an overview of my technical skills.");
    cx.host.set_active_view(View::Skills);
    Outcome {
        response: blurb.to_string(),
        action: Some(ActionKind::Navigate),
        context_tag: Some("skills"),
        rule: "tech-blurb",
    }
}

// ── Rule 6: settings toggles ────────────────────────────────────────

fn toggle_matches(m: &MatchCx) -> bool {
    contains_any(m.lc, &["theme", "dark mode", "light mode", "language"])
}

fn toggle_respond(cx: &mut RuleCx) -> Outcome {
    let response = if contains_any(cx.lc, &["theme", "dark mode", "light mode"]) {
        let theme = cx.host.toggle_theme();
        format!("Switched to the {} theme.", theme)
    } else {
        let locale = cx.host.toggle_language();
        format!("Language switched to {}.", locale)
    };
    Outcome {
        response,
        action: Some(ActionKind::Settings),
        context_tag: Some("settings"),
        rule: "settings-toggle",
    }
}

// ── Rule 7: outbound links ──────────────────────────────────────────

fn link_matches(m: &MatchCx) -> bool {
    contains_any(m.lc, &["linkedin", "github"])
}

fn link_respond(cx: &mut RuleCx) -> Outcome {
    let (label, url) = if cx.lc.contains("linkedin") {
        ("LinkedIn", cx.catalog.profile.linkedin.as_str())
    } else {
        ("GitHub", cx.catalog.profile.github.as_str())
    };
    cx.host.open_external(url);
    Outcome {
        response: format!("Opening my {} profile in a new tab.", label),
        action: Some(ActionKind::External),
        context_tag: None,
        rule: "external-link",
    }
}

// ── Rule 8: direct contact ──────────────────────────────────────────

fn contact_matches(m: &MatchCx) -> bool {
    contains_any(m.lc, &["mail", "reach out", "get in touch", "hire"])
}

fn contact_respond(cx: &mut RuleCx) -> Outcome {
    let email = cx.catalog.profile.email.as_str();
    cx.host.open_mailto(email);
    cx.host.set_active_view(View::Contact);
    let response = if email.is_empty() {
        "Opening the contact section — feel free to reach out.".to_string()
    } else {
        format!("Opening your mail client — you can reach me at {email}.")
    };
    Outcome {
        response,
        action: Some(ActionKind::Contact),
        context_tag: Some("contact"),
        rule: "direct-contact",
    }
}

// ── Rule 9: help ────────────────────────────────────────────────────

const HELP_TEXT: &str = "I can navigate the portfolio (\"show projects\", \"skills\", \
\"experience\"), download my resume, tell you about specific projects and technologies, \
toggle the theme or language, open my LinkedIn or GitHub, and put you in touch by email. \
Just ask in plain words.";

fn help_matches(m: &MatchCx) -> bool {
    contains_any(m.lc, &["help", "what can you do", "commands"])
}

fn help_respond(_cx: &mut RuleCx) -> Outcome {
    Outcome {
        response: HELP_TEXT.to_string(),
        action: None,
        context_tag: None,
        rule: "help",
    }
}

// ── Rules 10 & 11: fallbacks ────────────────────────────────────────

fn context_fallback_matches(m: &MatchCx) -> bool {
    !m.context.is_empty()
}

fn context_fallback_respond(cx: &mut RuleCx) -> Outcome {
    let topic = cx.context.most_recent().unwrap_or("the portfolio");
    Outcome {
        response: format!(
            "I'm not sure I caught that. Are you still asking about {topic}? \
You can also say \"help\" to see what I understand."
        ),
        action: None,
        context_tag: None,
        rule: "context-fallback",
    }
}

fn echo_respond(cx: &mut RuleCx) -> Outcome {
    Outcome {
        response: format!(
            "I heard \"{}\" but I don't have an answer for that yet. \
Try \"show projects\", \"skills\", or \"help\".",
            cx.raw
        ),
        action: None,
        context_tag: None,
        rule: "echo-fallback",
    }
}
