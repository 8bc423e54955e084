#![cfg(feature = "ssr")]

use leptos::prelude::*;
use portfolio_site::app::{
    About, Contact, ContactFormView, Experience, HomePage, Projects, ScrollProgress, SkillBar,
    Skills,
};
use portfolio_site::content::{Skill, SkillLevel, EXPERIENCE, FOCUS_AREAS};
use portfolio_site::form::{ContactForm, FormField};
use portfolio_site::theme::Accent;

fn render<F, V>(f: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| f().to_html())
}

// text nodes come out html-escaped
fn escaped(s: &str) -> String {
    s.replace('&', "&amp;")
}

#[test]
fn test_anchor_ids_present_once() {
    let html = render(|| view! { <HomePage /> });
    for id in ["about", "experience", "skills", "projects", "contact"] {
        let needle = format!("id=\"{id}\"");
        assert_eq!(html.matches(&needle).count(), 1, "{needle} should appear once");
    }
}

#[test]
fn test_experience_timeline_order_and_highlights() {
    let html = render(|| view! { <Experience /> });
    assert_eq!(html.matches("<article").count(), 3);

    let positions = EXPERIENCE
        .iter()
        .map(|e| {
            html.find(&escaped(e.title))
                .unwrap_or_else(|| panic!("missing entry {}", e.title))
        })
        .collect::<Vec<_>>();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    for entry in EXPERIENCE {
        for highlight in entry.highlights {
            assert!(html.contains(&escaped(highlight)), "missing {highlight}");
        }
    }
}

#[test]
fn test_sections_render_hidden_on_server() {
    let html = render(|| view! { <Experience /> });
    assert!(html.contains("opacity:0;"));
    assert!(!html.contains("opacity:1;transform:translate(0px, 0px) scale(1);transition"));
}

#[test]
fn test_empty_lists_render_no_rows() {
    let projects = render(|| view! { <Projects projects=&[] /> });
    assert!(projects.contains("id=\"projects\""));
    assert_eq!(projects.matches("<article").count(), 0);

    let experience = render(|| view! { <Experience entries=&[] /> });
    assert!(experience.contains("id=\"experience\""));
    assert_eq!(experience.matches("<article").count(), 0);

    let skills = render(|| view! { <Skills categories=&[] /> });
    assert!(skills.contains("id=\"skills\""));
    assert!(!skills.contains("skill-fill"));

    let about = render(|| view! { <About paragraphs=&[] stats=&[] focus=&[] /> });
    assert!(about.contains("id=\"about\""));
    assert!(!about.contains("<p"));
    assert!(!about.contains("<li"));
    assert!(!about.contains("text-center p-4"));

    let contact = render(|| view! { <Contact methods=&[] socials=&[] /> });
    assert!(contact.contains("id=\"contact\""));
    assert!(!contact.contains("href="));
    // the form itself is not list-driven
    assert!(contact.contains("<form"));
}

#[test]
fn test_focus_dots_use_accent_classes() {
    let html = render(|| view! { <About /> });
    for area in FOCUS_AREAS {
        assert!(html.contains(&format!("w-2 h-2 {} rounded-full", area.accent.classes().dot)));
    }
}

#[test]
fn test_submitting_form_disables_button() {
    let html = render(|| {
        let form = RwSignal::new(ContactForm::default());
        form.update(|f| {
            f.set(FormField::Name, "Ada");
            f.begin_submit();
        });
        view! { <ContactFormView form visible=Signal::derive(|| true) /> }
    });
    // `disabled:` prefixed tailwind variants don't count
    assert!(html.matches("disabled").count() > html.matches("disabled:").count());
    assert!(html.contains("animate-spin"));
    assert!(!html.contains("Send Message"));
}

#[test]
fn test_idle_form_enables_button() {
    let html = render(|| {
        let form = RwSignal::new(ContactForm::default());
        view! { <ContactFormView form visible=Signal::derive(|| true) /> }
    });
    assert_eq!(html.matches("disabled").count(), html.matches("disabled:").count());
    assert!(!html.contains("animate-spin"));
    assert!(html.contains("Send Message"));
}

#[test]
fn test_scroll_progress_starts_empty() {
    let html = render(|| view! { <ScrollProgress /> });
    assert!(html.contains("role=\"progressbar\""));
    assert!(html.contains("transform:scaleX(0.0000)"));
}

#[test]
fn test_skill_bar_fill_matches_level() {
    let skill = Skill {
        name: "Tableau",
        level: SkillLevel::new(88),
    };
    let shown = render(move || {
        view! { <SkillBar skill accent=Accent::Purple visible=Signal::derive(|| true) delay=0.0 /> }
    });
    assert!(shown.contains("width:88%;"));

    let hidden = render(move || {
        view! { <SkillBar skill accent=Accent::Purple visible=Signal::derive(|| false) delay=0.0 /> }
    });
    assert!(hidden.contains("width:0%;"));
}

#[test]
fn test_skills_render_every_bar() {
    let html = render(|| view! { <Skills /> });
    let bars = portfolio_site::content::SKILL_CATEGORIES
        .iter()
        .map(|c| c.skills.len())
        .sum::<usize>();
    assert_eq!(html.matches("skill-fill").count(), bars);
}
