use leptos::{
    either::Either,
    ev::{Event, SubmitEvent},
    html,
    prelude::*,
};

use super::heading::SectionHeading;
use super::icon::Icon;
use super::visibility::use_reveal;
use crate::content::{ContactMethod, IconKind, SocialLink, CONTACT_METHODS, SOCIAL_LINKS};
use crate::form::{ContactForm, FormField, SUBMIT_DELAY};
use crate::motion::{Entrance, Stagger};

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-slate-800/50 border border-slate-600/50 rounded-lg text-slate-100 placeholder-slate-400 focus:outline-none focus:border-blue-400 focus:ring-1 focus:ring-blue-400 transition-all duration-200";

#[component]
pub fn Contact(
    #[prop(default = CONTACT_METHODS)] methods: &'static [ContactMethod],
    #[prop(default = SOCIAL_LINKS)] socials: &'static [SocialLink],
) -> impl IntoView {
    let grid_ref = NodeRef::<html::Div>::new();
    let visible = use_reveal(grid_ref, "contact");
    let form = RwSignal::new(ContactForm::default());
    let columns = Stagger::new(0.0, 0.2);
    let column = move |i: usize| Entrance::fade_up(30.0).delay(columns.at(i));
    let method_delays = Stagger::new(0.3, 0.1);
    let social_delays = Stagger::new(0.6, 0.1);

    view! {
        <section id="contact" class="py-24 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    lead="Get In"
                    highlight="Touch"
                    blurb="Ready to collaborate on your next data analytics project? Let's discuss how we can turn your data into actionable insights."
                    visible
                />

                <div node_ref=grid_ref class="grid lg:grid-cols-2 gap-12">
                    <div class="space-y-8" style=move || column(0).style(visible.get())>
                        <div>
                            <h3 class="text-2xl font-semibold mb-6 text-blue-400">"Let's Connect"</h3>
                            <p class="text-slate-300 mb-8 leading-relaxed">
                                "I'm always interested in discussing new opportunities, innovative projects, and ways to leverage data for business growth. Whether you're looking for analytics expertise or want to explore collaboration possibilities, I'd love to hear from you."
                            </p>
                        </div>

                        <div class="space-y-4">
                            {methods
                                .iter()
                                .enumerate()
                                .map(|(i, method)| {
                                    let c = method.accent.classes();
                                    let slide = Entrance::slide_in(-20.0).delay(method_delays.at(i));
                                    view! {
                                        <a
                                            href=method.href
                                            class="block"
                                            style=move || slide.style(visible.get())
                                        >
                                            <div class=format!(
                                                "flex items-center gap-4 p-4 {} rounded-lg hover:scale-[1.02] hover:translate-x-1 transition-all duration-300 group",
                                                c.card(),
                                            )>
                                                <div class=format!(
                                                    "p-3 {} rounded-lg border {}",
                                                    c.bg,
                                                    c.border,
                                                )>
                                                    <Icon kind=method.icon class=format!("w-5 h-5 {}", c.text) />
                                                </div>
                                                <div>
                                                    <div class="text-slate-400 text-sm">{method.label}</div>
                                                    <div class=format!(
                                                        "{} font-medium group-hover:text-white transition-colors",
                                                        c.text,
                                                    )>{method.value}</div>
                                                </div>
                                            </div>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="pt-6">
                            <h4 class="text-lg font-medium mb-4 text-slate-300">"Follow Me"</h4>
                            <div class="flex gap-4">
                                {socials
                                    .iter()
                                    .enumerate()
                                    .map(|(i, social)| {
                                        let c = social.accent.classes();
                                        let grow = Entrance::zoom(0.0).delay(social_delays.at(i));
                                        view! {
                                            <a
                                                href=social.href
                                                aria-label=social.label
                                                style=move || grow.style(visible.get())
                                            >
                                                <div class=format!(
                                                    "p-3 {} rounded-lg hover:scale-110 hover:-translate-y-0.5 active:scale-95 transition-all duration-300",
                                                    c.card(),
                                                )>
                                                    <Icon kind=social.icon class=format!("w-5 h-5 {}", c.text) />
                                                </div>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div style=move || column(1).style(visible.get())>
                        <ContactFormView form visible />
                    </div>
                </div>
            </div>
        </section>
    }
}

/// The simulated form: submitting waits [`SUBMIT_DELAY`] and clears the
/// fields. Nothing is sent anywhere.
#[component]
pub fn ContactFormView(form: RwSignal<ContactForm>, visible: Signal<bool>) -> impl IntoView {
    let submitting = Signal::derive(move || form.with(ContactForm::is_submitting));
    let button = Entrance::fade_up(20.0).delay(0.8);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !form.try_update(ContactForm::begin_submit).unwrap_or(false) {
            return;
        }
        log::debug!("contact form submitted, resetting in {SUBMIT_DELAY:?}");
        set_timeout(
            move || {
                form.update(ContactForm::finish_submit);
                log::debug!("contact form reset");
            },
            SUBMIT_DELAY,
        );
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div class="grid md:grid-cols-2 gap-6">
                <Field form field=FormField::Name label="Name" placeholder="Your Name" visible delay=0.4 />
                <Field
                    form
                    field=FormField::Email
                    label="Email"
                    placeholder="your.email@example.com"
                    input_type="email"
                    visible
                    delay=0.5
                />
            </div>
            <Field
                form
                field=FormField::Subject
                label="Subject"
                placeholder="Project Discussion"
                visible
                delay=0.6
            />
            <Field
                form
                field=FormField::Message
                label="Message"
                placeholder="Tell me about your project or how we can collaborate..."
                multiline=true
                visible
                delay=0.7
            />

            <div style=move || button.style(visible.get())>
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full px-8 py-4 bg-gradient-to-r from-blue-600 to-purple-600 text-white rounded-lg font-semibold flex items-center justify-center gap-2 hover:from-blue-700 hover:to-purple-700 hover:scale-[1.02] active:scale-[0.98] transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {move || {
                        if submitting.get() {
                            Either::Left(
                                view! {
                                    <div class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></div>
                                },
                            )
                        } else {
                            Either::Right(
                                view! {
                                    <Icon kind=IconKind::Send size=20 />
                                    "Send Message"
                                },
                            )
                        }
                    }}
                </button>
            </div>
        </form>
    }
}

#[component]
fn Field(
    form: RwSignal<ContactForm>,
    field: FormField,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
    visible: Signal<bool>,
    delay: f32,
) -> impl IntoView {
    let rise = Entrance::fade_up(20.0).delay(delay);
    let id = field.key();
    let value = move || form.with(|f| f.get(field).to_string());
    let on_input = move |ev: Event| form.update(|f| f.set(field, event_target_value(&ev)));

    view! {
        <div style=move || rise.style(visible.get())>
            <label for=id class="block text-sm font-medium text-slate-300 mb-2">
                {label}
            </label>
            {if multiline {
                Either::Left(
                    view! {
                        <textarea
                            id=id
                            name=id
                            required
                            rows="6"
                            placeholder=placeholder
                            class=format!("{INPUT_CLASS} resize-none")
                            prop:value=value
                            on:input=on_input
                        ></textarea>
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <input
                            type=input_type
                            id=id
                            name=id
                            required
                            placeholder=placeholder
                            class=INPUT_CLASS
                            prop:value=value
                            on:input=on_input
                        />
                    },
                )
            }}
        </div>
    }
}
