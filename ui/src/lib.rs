//! Shared UI crate for JobPulse. The dashboard view, its chart projections,
//! and localization all live here; the platform crates only launch it.

pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized page header with the locale switcher (components/page_header.rs)
    pub mod page_header;
    pub use page_header::PageHeader;

    // Inline SVG glyphs for cards and panels (components/icons.rs)
    pub mod icons;
}
