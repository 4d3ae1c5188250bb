//! Contact section: details plus the enquiry form.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use site_core::contact::{ContactField, ContactForm, SUBMITTED_MESSAGE};
use site_core::content::{CONTACT_COPY, CONTACT_DETAILS};

use crate::components::SectionTitle;
use crate::components::reveal::{reveal_class, use_reveal};
use crate::config::use_site_config;

/// Input styling with a focus ring on the active field.
#[must_use]
pub fn field_class(focused: bool) -> &'static str {
    if focused {
        "w-full rounded-lg border border-blue-500 px-4 py-3 ring-2 ring-blue-200 outline-none transition"
    } else {
        "w-full rounded-lg border border-slate-300 px-4 py-3 outline-none transition"
    }
}

#[component]
fn Field(field: ContactField, form: RwSignal<ContactForm>) -> impl IntoView {
    let class = move || field_class(form.with(|f| f.is_focused(field)));
    let value = move || form.with(|f| f.value(field).to_owned());
    let control = if field == ContactField::Message {
        view! {
            <textarea
                name=field.key()
                rows="5"
                placeholder=field.placeholder()
                class=class
                prop:value=value
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                on:focus=move |_| form.update(|f| f.focus(field))
                on:blur=move |_| form.update(|f| f.blur(field))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=field.input_type()
                name=field.key()
                placeholder=field.placeholder()
                class=class
                prop:value=value
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                on:focus=move |_| form.update(|f| f.focus(field))
                on:blur=move |_| form.update(|f| f.blur(field))
            />
        }
        .into_any()
    };

    view! {
        <label class="block">
            <span class="mb-2 block text-sm font-medium text-slate-700">{field.label()}</span>
            {control}
        </label>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let revealed = use_reveal(node, use_site_config().reveal.contact);
    let form = RwSignal::new(ContactForm::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if form.try_update(ContactForm::submit).is_none() {
            return;
        }
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(SUBMITTED_MESSAGE) {
                tracing::warn!(error = ?e, "confirmation alert failed");
            }
        }
    };

    view! {
        <section id="contact" class="py-24 bg-white">
            <div class="container mx-auto px-6">
                <SectionTitle copy=CONTACT_COPY />
                <div node_ref=node class=move || reveal_class("grid gap-12 lg:grid-cols-5", revealed.get())>
                    <div class="lg:col-span-2 space-y-6">
                        {CONTACT_DETAILS
                            .into_iter()
                            .map(|detail| {
                                view! {
                                    <div class="flex items-start gap-4">
                                        <span class="text-2xl" aria-hidden="true">{detail.icon}</span>
                                        <div>
                                            <div class="text-sm font-semibold text-slate-500">{detail.label}</div>
                                            <div class="text-slate-800">{detail.value}</div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <form class="lg:col-span-3 grid gap-6 md:grid-cols-2" on:submit=on_submit>
                        {ContactField::ALL
                            .into_iter()
                            .map(|field| {
                                let span = if field == ContactField::Message { "md:col-span-2" } else { "" };
                                view! {
                                    <div class=span>
                                        <Field field=field form=form />
                                    </div>
                                }
                            })
                            .collect_view()}
                        <div class="md:col-span-2">
                            <button type="submit" class="rounded-lg bg-blue-600 px-8 py-3 font-semibold text-white hover:bg-blue-700 transition-colors">
                                "Send Message"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_focused_field_then_ring_shown() {
        assert!(field_class(true).contains("ring-2"));
        assert!(!field_class(false).contains("ring-2"));
    }
}
