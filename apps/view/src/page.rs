use crate::config::ViewConfig;
use crate::error::LoadError;
use crate::html::{Element, Fragment};
use crate::location::{ApiEndpoints, PageLocation};
use crate::model::RegionSnapshot;
use crate::render::{self, ids};

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// What replaces the loading indicator once the initial load settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettledLoad {
    pub content: Fragment,
    /// Lookup handlers and the secondary cards are attached only on success
    pub wire_widgets: bool,
}

/// One page load: which region to show and where to fetch it from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionView {
    region: String,
    endpoints: ApiEndpoints,
    config: ViewConfig,
}

impl RegionView {
    pub fn new(region: impl Into<String>, endpoints: ApiEndpoints, config: ViewConfig) -> Self {
        Self {
            region: region.into(),
            endpoints,
            config,
        }
    }

    /// Region and API base taken from the page's own URL.
    pub fn from_location(location: &PageLocation, config: ViewConfig) -> Self {
        let region = location.region(&config);
        Self::new(region, location.endpoints(), config)
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub const fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    pub const fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn region_url(&self) -> String {
        self.endpoints.region(&self.region)
    }

    /// Content that replaces the loading indicator once the initial load
    /// settles: the region cards, or a single error panel.
    pub fn render(&self, outcome: &Result<RegionSnapshot, LoadError>) -> Fragment {
        match outcome {
            Ok(snapshot) => render::render_region(snapshot, &self.config),
            Err(error) => render::error_panel(&self.region, error),
        }
    }

    pub fn settle(&self, outcome: &Result<RegionSnapshot, LoadError>) -> SettledLoad {
        SettledLoad {
            content: self.render(outcome),
            wire_widgets: outcome.is_ok(),
        }
    }

    /// Standalone page around already rendered content.
    pub fn document(&self, content: Fragment) -> String {
        let title = format!("Region {}", self.region);
        let head = Element::new("head")
            .child(Element::new("meta").attr("charset", "utf-8"))
            .child(
                Element::new("meta")
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1"),
            )
            .child(Element::new("title").text(title))
            .child(
                Element::new("link")
                    .attr("rel", "stylesheet")
                    .attr("href", BOOTSTRAP_CSS),
            );
        let body = Element::new("body").child(
            Element::new("main").class("container py-3").child(
                Element::new("div")
                    .id(ids::CONTENT)
                    .children(content.into_nodes()),
            ),
        );

        let html = Element::new("html").attr("lang", "en").child(head).child(body);
        format!("<!DOCTYPE html>\n{}\n", html.to_html())
    }
}
