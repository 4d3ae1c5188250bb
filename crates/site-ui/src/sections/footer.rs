//! Page footer.

use leptos::prelude::*;
use site_core::content::{CONTACT_DETAILS, FIRM_NAME, FIRM_TAGLINE, FOOTER_LINKS};

use crate::components::ScrollLink;

/// Copyright line for `year`.
#[must_use]
pub fn copyright(year: u32) -> String {
    format!("© {year} {FIRM_NAME}. All rights reserved.")
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-slate-900 py-16 text-slate-300">
            <div class="container mx-auto grid gap-12 px-6 md:grid-cols-3">
                <div>
                    <div class="text-xl font-bold text-white">{FIRM_NAME}</div>
                    <p class="mt-4 text-sm">{FIRM_TAGLINE}</p>
                </div>
                <div>
                    <h4 class="font-semibold text-white">"Quick Links"</h4>
                    <ul class="mt-4 space-y-2 text-sm">
                        {FOOTER_LINKS
                            .into_iter()
                            .map(|link| view! { <li><ScrollLink href=link.href()>{link.label}</ScrollLink></li> })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h4 class="font-semibold text-white">"Get in Touch"</h4>
                    <ul class="mt-4 space-y-2 text-sm">
                        {CONTACT_DETAILS
                            .into_iter()
                            .map(|detail| view! { <li>{detail.icon}" "{detail.value}</li> })
                            .collect_view()}
                    </ul>
                </div>
            </div>
            <div class="container mx-auto mt-12 border-t border-slate-800 px-6 pt-6 text-center text-sm">
                {copyright(current_year())}
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_year_when_formatting_copyright_then_includes_firm() {
        assert_eq!(
            copyright(2025),
            "© 2025 KCMP & Associates. All rights reserved."
        );
    }
}
