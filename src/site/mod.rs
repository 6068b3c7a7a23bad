//! Static site content consumed by presentation layers.
//!
//! Everything here is display data: it has no failure modes and nothing
//! in the entitlement path reads it.

pub mod content;

pub use content::{
    CallToAction, Feature, FooterLink, FooterSection, HeroContent, NavItem, SiteConfig,
    SocialLinks, SocialProof, TechBadge,
};
