//! Typed site content.
//!
//! Navigation, hero copy, the marketing feature grid, tech badges, footer
//! links, and social handles. Inert data with no invariants: presentation
//! layers render it, nothing branches on it. The only computed value is
//! the base URL, resolved from the environment once at construction.

use serde::{Deserialize, Serialize};

use crate::utils::get_env_with_prefix;

/// One navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    pub href: String,
    /// Opens in a new tab when true.
    #[serde(default)]
    pub external: bool,
}

/// One footer link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub title: String,
    pub href: String,
}

/// A titled group of footer links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterSection {
    pub title: String,
    pub links: Vec<FooterLink>,
}

/// A linked call-to-action button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub text: String,
    pub href: String,
}

/// Social-proof line shown under the hero CTAs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialProof {
    pub text: String,
    pub rating: String,
}

/// Landing page hero copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    pub badge: String,
    pub headline: String,
    /// The emphasized part rendered after the headline.
    pub headline_highlight: String,
    pub subheadline: String,
    pub primary_cta: CallToAction,
    pub secondary_cta: CallToAction,
    #[serde(default)]
    pub social_proof: Option<SocialProof>,
}

/// One tile in the marketing feature grid.
///
/// `icon` is an icon name for the frontend's icon set, not a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
    /// Tailwind gradient classes for the tile accent.
    pub gradient: String,
}

/// A technology badge shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechBadge {
    pub name: String,
    /// Tailwind classes for the badge.
    pub color: String,
}

/// Social profile links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub discord: Option<String>,
}

/// Everything the presentation layer needs to render the site chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub tagline: String,
    pub description: String,
    /// Absolute base URL of the deployment, without a trailing slash.
    pub base_url: String,
    pub company: String,
    pub main_nav: Vec<NavItem>,
    pub dashboard_nav: Vec<NavItem>,
    pub hero: HeroContent,
    pub features: Vec<Feature>,
    pub tech_stack: Vec<TechBadge>,
    pub footer_sections: Vec<FooterSection>,
    pub footer_copyright: String,
    pub social: SocialLinks,
}

impl SiteConfig {
    /// Build the standard Slipway site content.
    ///
    /// The base URL comes from `APP_URL` when set, then the hosting
    /// platform (`RAILWAY_PUBLIC_DOMAIN` as `https://{domain}`, then
    /// `RENDER_EXTERNAL_URL`), and falls back to `http://localhost:3000`
    /// for local development.
    #[must_use]
    pub fn standard() -> Self {
        let base_url = base_url_from_env();
        tracing::debug!(
            target: "slipway_config::site",
            base_url = %base_url,
            "site content constructed"
        );

        Self {
            name: "Slipway".to_string(),
            tagline: "The waitlist builder made for indie makers".to_string(),
            description: "Launch pages with built-in email capture, referral tracking, and countdown timers for $12/mo.".to_string(),
            base_url,
            company: "Slipway".to_string(),

            main_nav: nav(&[
                ("Features", "/features"),
                ("Pricing", "/pricing"),
                ("Gallery", "/gallery"),
                ("Blog", "/blog"),
            ]),

            dashboard_nav: nav(&[
                ("Dashboard", "/dashboard"),
                ("Waitlist Pages", "/dashboard/pages"),
                ("Subscribers", "/dashboard/subscribers"),
                ("Analytics", "/dashboard/analytics"),
                ("Settings", "/dashboard/settings"),
            ]),

            hero: HeroContent {
                badge: "Built for indie makers".to_string(),
                headline: "Launch Your Next Big Idea".to_string(),
                headline_highlight: "With a Waitlist That Converts".to_string(),
                subheadline: "Stop stitching together a page builder, a mailing list, and referral tools. Slipway gives you a polished coming-soon page with built-in email capture, referral tracking, a countdown timer, and analytics, all in one place for $12/mo.".to_string(),
                primary_cta: CallToAction {
                    text: "Start Building Free".to_string(),
                    href: "/register".to_string(),
                },
                secondary_cta: CallToAction {
                    text: "See Live Examples".to_string(),
                    href: "/gallery".to_string(),
                },
                social_proof: Some(SocialProof {
                    text: "Trusted by 1,200+ indie makers".to_string(),
                    rating: "4.9/5".to_string(),
                }),
            },

            features: vec![
                feature(
                    "mail",
                    "Built-In Email Capture",
                    "Collect subscriber emails directly on your page with no third-party forms required. Manage everything from one dashboard.",
                    "from-violet-500 to-purple-500",
                ),
                feature(
                    "users",
                    "Viral Referral Tracking",
                    "Every subscriber gets a unique referral link. Track shares, reward top referrers, and watch your waitlist grow, even on the free tier.",
                    "from-pink-500 to-rose-500",
                ),
                feature(
                    "clock",
                    "Countdown Timer",
                    "Build anticipation with a customizable countdown timer that supports timezones and auto-redirects when launch day arrives.",
                    "from-amber-500 to-orange-500",
                ),
                feature(
                    "bar-chart",
                    "Conversion Analytics",
                    "See signups by source, track your viral coefficient, and learn which channels bring the most engaged subscribers.",
                    "from-emerald-500 to-teal-500",
                ),
                feature(
                    "globe",
                    "Custom Domains",
                    "Connect your own domain so your waitlist page lives at launch.yourproduct.com, with no Slipway branding on Pro.",
                    "from-blue-500 to-cyan-500",
                ),
                feature(
                    "sparkles",
                    "Social Proof Widgets",
                    "Show a live signup counter and a recent-signups ticker to lift conversions with real-time social proof.",
                    "from-indigo-500 to-violet-500",
                ),
            ],

            tech_stack: vec![
                badge("Rust", "bg-orange-600 text-white"),
                badge("Axum", "bg-gray-900 text-white"),
                badge("PostgreSQL", "bg-sky-700 text-white"),
                badge("Stripe", "bg-purple-600 text-white"),
                badge("Tailwind CSS", "bg-sky-500 text-white"),
            ],

            footer_sections: vec![
                FooterSection {
                    title: "Product".to_string(),
                    links: links(&[
                        ("Features", "/features"),
                        ("Pricing", "/pricing"),
                        ("Gallery", "/gallery"),
                        ("Changelog", "/changelog"),
                    ]),
                },
                FooterSection {
                    title: "Company".to_string(),
                    links: links(&[
                        ("About", "/about"),
                        ("Blog", "/blog"),
                        ("Contact", "/contact"),
                    ]),
                },
                FooterSection {
                    title: "Legal".to_string(),
                    links: links(&[
                        ("Privacy Policy", "/privacy"),
                        ("Terms of Service", "/terms"),
                    ]),
                },
            ],

            footer_copyright: "2026 Slipway. All rights reserved.".to_string(),

            social: SocialLinks {
                twitter: Some("https://twitter.com/slipway_app".to_string()),
                github: Some("https://github.com/slipway".to_string()),
                discord: None,
            },
        }
    }
}

fn base_url_from_env() -> String {
    get_env_with_prefix("APP_URL")
        .or_else(|| get_env_with_prefix("RAILWAY_PUBLIC_DOMAIN").map(|d| format!("https://{d}")))
        .or_else(|| get_env_with_prefix("RENDER_EXTERNAL_URL"))
        .unwrap_or_else(|| "http://localhost:3000".to_string())
}

fn nav(items: &[(&str, &str)]) -> Vec<NavItem> {
    items
        .iter()
        .map(|(title, href)| NavItem {
            title: title.to_string(),
            href: href.to_string(),
            external: false,
        })
        .collect()
}

fn links(items: &[(&str, &str)]) -> Vec<FooterLink> {
    items
        .iter()
        .map(|(title, href)| FooterLink {
            title: title.to_string(),
            href: href.to_string(),
        })
        .collect()
}

fn feature(icon: &str, title: &str, description: &str, gradient: &str) -> Feature {
    Feature {
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        gradient: gradient.to_string(),
    }
}

fn badge(name: &str, color: &str) -> TechBadge {
    TechBadge {
        name: name.to_string(),
        color: color.to_string(),
    }
}
