//! Site Context
//!
//! Configuration and current page provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::route::Route;

/// Site-wide values provided via context
#[derive(Clone, Copy)]
pub struct SiteContext {
    config: StoredValue<SiteConfig>,
    /// Page selected at mount
    pub route: Route,
}

impl SiteContext {
    pub fn new(config: SiteConfig, route: Route) -> Self {
        Self {
            config: StoredValue::new(config),
            route,
        }
    }

    pub fn school_name(&self) -> &'static str {
        self.config.with_value(|c| c.school_name)
    }

    pub fn school_address(&self) -> &'static str {
        self.config.with_value(|c| c.school_address)
    }

    pub fn logo_path(&self) -> &'static str {
        self.config.with_value(|c| c.logo_path)
    }

    pub fn apply_endpoint(&self) -> String {
        self.config.with_value(|c| c.apply_endpoint.clone())
    }
}

pub fn use_site_context() -> SiteContext {
    expect_context::<SiteContext>()
}
