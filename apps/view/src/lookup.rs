//! Frequency lookup widget: markup, input handling and the request sequence
//! that keeps only the newest submission on screen.

use crate::config::ViewConfig;
use crate::error::{FrequencyInputError, LoadError};
use crate::frequency::FrequencyHz;
use crate::html::Element;
use crate::location::ApiEndpoints;
use crate::model::FrequencyLookupResult;
use crate::render::{card, make_list};

pub mod ids {
    pub const INPUT: &str = "frequency-input";
    pub const BUTTON: &str = "frequency-button";
    pub const RESULT: &str = "frequency-result";
}

/// Identifies one submission; only the newest ticket may change the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupRequest {
    pub ticket: Ticket,
    pub frequency: FrequencyHz,
}

impl LookupRequest {
    pub fn url(&self, endpoints: &ApiEndpoints) -> String {
        endpoints.frequency(self.frequency)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupState {
    Idle,
    /// Still idle, with a warning about the last input
    Rejected(FrequencyInputError),
    Loading(FrequencyHz),
    Found {
        frequency: FrequencyHz,
        callsigns: Vec<String>,
    },
    NotFound(FrequencyHz),
    Failed {
        frequency: FrequencyHz,
        error: LoadError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyLookup {
    latest: u64,
    state: LookupState,
}

impl Default for FrequencyLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyLookup {
    pub const fn new() -> Self {
        Self {
            latest: 0,
            state: LookupState::Idle,
        }
    }

    pub const fn state(&self) -> &LookupState {
        &self.state
    }

    /// Handles a click or Enter. Every submission supersedes the ones before
    /// it; a request is returned only for valid input.
    pub fn submit(&mut self, input: &str) -> Option<LookupRequest> {
        self.latest += 1;

        match FrequencyHz::parse_khz(input) {
            Ok(frequency) => {
                self.state = LookupState::Loading(frequency);
                Some(LookupRequest {
                    ticket: Ticket(self.latest),
                    frequency,
                })
            }
            Err(error) => {
                log::debug!("rejected frequency input {input:?}: {error}");
                self.state = LookupState::Rejected(error);
                None
            }
        }
    }

    /// Applies a response. Returns `false` and leaves the state alone when the
    /// ticket has been superseded.
    pub fn complete(
        &mut self,
        request: LookupRequest,
        outcome: Result<FrequencyLookupResult, LoadError>,
    ) -> bool {
        if request.ticket != Ticket(self.latest) {
            log::debug!(
                "discarding stale lookup for {} (ticket {}, latest {})",
                request.frequency,
                request.ticket.0,
                self.latest
            );
            return false;
        }

        let frequency = request.frequency;
        self.state = match outcome {
            Ok(result) if result.callsigns.is_empty() => LookupState::NotFound(frequency),
            Ok(result) => LookupState::Found {
                frequency,
                callsigns: result.callsigns,
            },
            Err(error) => LookupState::Failed { frequency, error },
        };
        true
    }

    /// Contents of the result panel for the current state.
    pub fn render(&self, config: &ViewConfig) -> Element {
        match &self.state {
            LookupState::Idle => Element::new("div"),
            LookupState::Rejected(error) => alert("alert-warning", error.to_string()),
            LookupState::Loading(frequency) => Element::new("div")
                .class("d-flex align-items-center gap-2")
                .child(
                    Element::new("div")
                        .class("spinner-border spinner-border-sm")
                        .attr("role", "status"),
                )
                .child(Element::new("span").text(format!("Looking up {frequency}\u{2026}"))),
            LookupState::Found {
                frequency,
                callsigns,
            } => Element::new("div")
                .child(
                    Element::new("p")
                        .class("mb-1")
                        .text(format!("Callsigns on {frequency}:")),
                )
                .child(make_list(callsigns, Some(config.qrz_url.as_str()), None)),
            LookupState::NotFound(frequency) => Element::new("p")
                .class("text-muted mb-0")
                .text(format!("No callsigns found on {frequency}.")),
            LookupState::Failed { frequency, error } => {
                alert("alert-danger", format!("Lookup of {frequency} failed: {error}"))
            }
        }
    }
}

fn alert(kind: &str, message: String) -> Element {
    Element::new("div")
        .class(&format!("alert {kind} mb-0"))
        .attr("role", "alert")
        .text(message)
}

/// The lookup card as first mounted, in the idle state.
pub fn widget() -> Element {
    let input = Element::new("input")
        .id(ids::INPUT)
        .class("form-control")
        .attr("type", "text")
        .attr("inputmode", "decimal")
        .attr("placeholder", "Frequency in kHz, e.g. 7016.5")
        .attr("aria-label", "Frequency in kHz");

    let button = Element::new("button")
        .id(ids::BUTTON)
        .class("btn btn-primary")
        .attr("type", "button")
        .text("Lookup");

    card(
        "Frequency Lookup",
        Element::new("div")
            .class("card-body")
            .child(
                Element::new("div")
                    .class("input-group mb-2")
                    .child(input)
                    .child(button),
            )
            .child(Element::new("div").id(ids::RESULT)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(callsigns: &[&str]) -> Result<FrequencyLookupResult, LoadError> {
        Ok(FrequencyLookupResult {
            callsigns: callsigns.iter().map(|call| (*call).to_string()).collect(),
        })
    }

    #[test]
    fn valid_input_requests_frequency_in_hz() {
        let mut lookup = FrequencyLookup::new();
        let request = lookup.submit("7016.5");
        let endpoints = ApiEndpoints::new("http://localhost:8000");

        assert_eq!(
            request.map(|request| request.url(&endpoints)).as_deref(),
            Some("http://localhost:8000/frequency/7016500")
        );
        assert!(matches!(lookup.state(), LookupState::Loading(_)));
    }

    #[test]
    fn invalid_input_issues_no_request_and_warns() {
        for input in ["-3", "abc", ""] {
            let mut lookup = FrequencyLookup::new();

            assert_eq!(lookup.submit(input), None, "input {input:?}");
            assert!(matches!(lookup.state(), LookupState::Rejected(_)));

            let panel = lookup.render(&ViewConfig::default());
            assert!(panel.has_class("alert-warning"), "input {input:?}");
        }
    }

    #[test]
    fn empty_result_shows_not_found_message() {
        let mut lookup = FrequencyLookup::new();
        let Some(request) = lookup.submit("14025") else {
            panic!("valid input produced no request");
        };

        assert!(lookup.complete(request, found(&[])));

        let panel = lookup.render(&ViewConfig::default());
        assert!(panel.find_all("ul").is_empty());
        assert_eq!(panel.text_content(), "No callsigns found on 14025 kHz.");
    }

    #[test]
    fn result_lists_callsigns_with_links() {
        let mut lookup = FrequencyLookup::new();
        let Some(request) = lookup.submit("14025") else {
            panic!("valid input produced no request");
        };
        lookup.complete(request, found(&["K1ABC", "W1AW"]));

        let panel = lookup.render(&ViewConfig::default());
        let links = panel.find_all("a");
        assert_eq!(links.len(), 2);
        assert_eq!(links[1].attribute("href"), Some("https://qrz.com/db/W1AW"));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut lookup = FrequencyLookup::new();
        let (Some(first), Some(second)) = (lookup.submit("7000"), lookup.submit("14000")) else {
            panic!("valid input produced no request");
        };

        assert!(lookup.complete(second, found(&["W1AW"])));
        assert!(!lookup.complete(first, found(&["K1ABC"])));
        assert_eq!(
            lookup.state(),
            &LookupState::Found {
                frequency: second.frequency,
                callsigns: vec!["W1AW".to_string()],
            }
        );
    }

    #[test]
    fn rejected_input_supersedes_pending_request() {
        let mut lookup = FrequencyLookup::new();
        let Some(pending) = lookup.submit("7000") else {
            panic!("valid input produced no request");
        };
        lookup.submit("abc");

        assert!(!lookup.complete(pending, found(&["K1ABC"])));
        assert!(matches!(lookup.state(), LookupState::Rejected(_)));
    }

    #[test]
    fn failure_renders_inline_alert() {
        let mut lookup = FrequencyLookup::new();
        let Some(request) = lookup.submit("7000") else {
            panic!("valid input produced no request");
        };
        lookup.complete(request, Err(LoadError::Status(500)));

        let panel = lookup.render(&ViewConfig::default());
        assert!(panel.has_class("alert-danger"));
        assert_eq!(panel.text_content(), "Lookup of 7000 kHz failed: HTTP 500");
    }

    #[test]
    fn loading_state_shows_spinner() {
        let mut lookup = FrequencyLookup::new();
        lookup.submit("7000");

        let panel = lookup.render(&ViewConfig::default());
        assert_eq!(panel.find_all("div")[0].attribute("role"), Some("status"));
    }

    #[test]
    fn widget_exposes_input_button_and_result_panel() {
        let widget = widget();
        let found_ids: Vec<&str> = widget
            .descendants()
            .into_iter()
            .filter_map(|element| element.attribute("id"))
            .collect();

        assert_eq!(found_ids, vec![ids::INPUT, ids::BUTTON, ids::RESULT]);
    }
}
