//! Static page content.
//!
//! Everything here is compiled in; sections read it at mount time and never
//! mutate it.

use crate::carousel::Slide;
use crate::nav::NavLink;

pub const FIRM_NAME: &str = "KCMP & Associates";
pub const FIRM_TAGLINE: &str =
    "Trusted financial advisors since 1982, providing comprehensive solutions for businesses across India.";

/// Header links, in page order.
pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Home", section_id: "home" },
    NavLink { label: "Services", section_id: "services" },
    NavLink { label: "Industries", section_id: "industries" },
    NavLink { label: "About", section_id: "about" },
    NavLink { label: "Careers", section_id: "careers" },
];

/// Footer quick links.
pub const FOOTER_LINKS: [NavLink; 6] = [
    NavLink { label: "Home", section_id: "home" },
    NavLink { label: "Services", section_id: "services" },
    NavLink { label: "Industries", section_id: "industries" },
    NavLink { label: "About", section_id: "about" },
    NavLink { label: "Careers", section_id: "careers" },
    NavLink { label: "Contact", section_id: "contact" },
];

/// A headline number with its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub key: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub target: u32,
    pub suffix: &'static str,
    /// Stagger before the card fades in, in milliseconds
    pub delay_ms: u32,
}

/// Counters shown in the hero.
pub const HERO_STATS: [Stat; 4] = [
    Stat { key: "years", icon: "📅", label: "Years of advisory", target: 40, suffix: "+", delay_ms: 200 },
    Stat { key: "clients", icon: "🤝", label: "Clients supported", target: 1000, suffix: "+", delay_ms: 400 },
    Stat { key: "professionals", icon: "👥", label: "Professionals", target: 55, suffix: "+", delay_ms: 600 },
    Stat { key: "groups", icon: "🏢", label: "Group Firms", target: 3, suffix: "+", delay_ms: 800 },
];

/// Counters shown in the impact band.
pub const IMPACT_STATS: [Stat; 4] = [
    Stat { key: "experience", icon: "📅", label: "Years of Experience", target: 15, suffix: "+", delay_ms: 0 },
    Stat { key: "clients", icon: "🤝", label: "Active Clients", target: 1000, suffix: "+", delay_ms: 100 },
    Stat { key: "team", icon: "👥", label: "Team Members", target: 55, suffix: "+", delay_ms: 200 },
    Stat { key: "firms", icon: "🏢", label: "Group Firms", target: 3, suffix: "+", delay_ms: 300 },
];

/// Icon plus one line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bullet {
    pub icon: &'static str,
    pub text: &'static str,
}

pub const DELIVERABLES: [Bullet; 5] = [
    Bullet { icon: "🌏", text: "Entry and expansion strategy for India" },
    Bullet { icon: "📊", text: "Audit, internal controls and risk assurance" },
    Bullet { icon: "💼", text: "Tax and regulatory guidance that's practical" },
    Bullet { icon: "📈", text: "Transaction support and valuations" },
    Bullet { icon: "🏢", text: "Corporate and secretarial services" },
];

pub const REASONS: [Bullet; 5] = [
    Bullet { icon: "🎯", text: "360° services spanning audit, tax, advisory, and corporate" },
    Bullet { icon: "👥", text: "Senior-led engagements with responsive teams" },
    Bullet { icon: "💡", text: "Clear, actionable insights, no jargon" },
    Bullet { icon: "🛡️", text: "Strong governance and risk focus without slowing operations" },
    Bullet { icon: "🌏", text: "Pan-India reach with global client experience" },
];

/// One tile of the industries grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Industry {
    pub title: &'static str,
    pub icon: &'static str,
}

pub const INDUSTRIES: [Industry; 12] = [
    Industry { title: "Technology", icon: "💻" },
    Industry { title: "Manufacturing", icon: "🏭" },
    Industry { title: "Healthcare", icon: "🏥" },
    Industry { title: "Financial Services", icon: "💰" },
    Industry { title: "Real Estate", icon: "🏢" },
    Industry { title: "Retail", icon: "🛍️" },
    Industry { title: "Education", icon: "📚" },
    Industry { title: "Hospitality", icon: "🏨" },
    Industry { title: "Energy", icon: "⚡" },
    Industry { title: "Automotive", icon: "🚗" },
    Industry { title: "Pharmaceuticals", icon: "💊" },
    Industry { title: "E-commerce", icon: "📦" },
];

/// A labelled contact channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail { icon: "📞", label: "Phone", value: "+91 98987 52053" },
    ContactDetail { icon: "📧", label: "Email", value: "info@kcmpassociates.com" },
    ContactDetail { icon: "📍", label: "Address", value: "KCMP & Associates (CA), The Millenium, Rajkot" },
];

/// Heading block shared by most sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCopy {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES_COPY: SectionCopy = SectionCopy {
    eyebrow: "What we do",
    title: "Full-service advisory, compliance and assurance",
    description: "We cover the lifecycle of your business from entry and set-up to scale, ensuring governance, tax efficiency and strategic clarity along the way.",
};

pub const INDUSTRIES_COPY: SectionCopy = SectionCopy {
    eyebrow: "Who we serve",
    title: "Experience across sectors and geographies",
    description: "From global conglomerates to fast-growing start-ups, we bring sector knowledge and local expertise to every engagement.",
};

pub const ABOUT_COPY: SectionCopy = SectionCopy {
    eyebrow: "About us",
    title: "KCMP & Associates – trusted advisors for over three decades",
    description: "Established in 1982 and headquartered in Mumbai, we are an established financial advisory firm with more than 55 professionals and a presence across India.",
};

pub const CONTACT_COPY: SectionCopy = SectionCopy {
    eyebrow: "Contact",
    title: "Let's start a conversation",
    description: "Tell us about your needs, whether it's a new set-up, a complex tax matter, or strengthening governance.",
};

/// Slides for the services carousel.
#[must_use]
pub fn service_slides() -> Vec<Slide> {
    const CTA_TARGET: &str = "#contact";
    [
        (
            "🔍",
            "Audit & Assurance",
            "Financial statement audits with depth",
            "Statutory, internal, and special audits that meet regulatory standards while uncovering actionable insights for improved controls.",
            "Learn more",
        ),
        (
            "💼",
            "Tax Advisory",
            "Direct and indirect tax planning",
            "Proactive tax strategies, compliance support, and representation before authorities to optimize your tax position.",
            "Explore services",
        ),
        (
            "📊",
            "Business Advisory",
            "Strategic guidance for growth",
            "Market entry strategies, business planning, and operational improvements tailored to your industry and goals.",
            "Get started",
        ),
        (
            "📈",
            "Transaction Services",
            "M&A and valuation support",
            "Due diligence, business valuations, and transaction structuring to help you make informed investment decisions.",
            "Discuss deals",
        ),
        (
            "🏢",
            "Corporate Services",
            "Company secretarial and compliance",
            "Entity formation, statutory compliance, board support, and corporate governance services across jurisdictions.",
            "View offerings",
        ),
        (
            "⚖️",
            "Risk & Compliance",
            "Governance and internal controls",
            "Risk assessments, internal control frameworks, and regulatory compliance to strengthen your governance posture.",
            "Strengthen controls",
        ),
    ]
    .into_iter()
    .map(|(icon, title, subtitle, description, cta)| {
        Slide::new(icon, title, subtitle, description, cta, CTA_TARGET)
    })
    .collect()
}
