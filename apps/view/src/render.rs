//! Pure renderers from API responses to HTML trees.

use std::collections::HashMap;

use crate::config::ViewConfig;
use crate::error::LoadError;
use crate::html::{Element, Fragment};
use crate::location::{encode_uri_component, region_link};
use crate::lookup;
use crate::model::{ActivityWindow, BandActivity, CallInfo, RegionList, RegionSnapshot, ServerStats};
use crate::tooltip::{format_call_info, EMPTY_PLACEHOLDER};

/// Element ids the web shell looks up after mounting.
pub mod ids {
    pub const CONTENT: &str = "content";
    pub const REGIONS_BODY: &str = "regions-body";
    pub const STATS_BODY: &str = "stats-body";
}

/// Class of the page's loading indicator.
pub const LOADING_CLASS: &str = "loading";

/// Unordered list of items, optionally linked and annotated with tooltips.
pub fn make_list(
    items: &[String],
    url_base: Option<&str>,
    call_info: Option<&HashMap<String, CallInfo>>,
) -> Element {
    let entries = items.iter().map(|item| {
        let li = Element::new("li").class("list-group-item p-1");
        let li = match call_info.and_then(|infos| infos.get(item)) {
            Some(info) => li.attr("title", format_call_info(info)),
            None => li,
        };

        match url_base {
            Some(base) => li.child(
                Element::new("a")
                    .attr("href", format!("{base}{}", encode_uri_component(item)))
                    .attr("target", "_blank")
                    .attr("rel", "noopener noreferrer")
                    .text(item.as_str()),
            ),
            None => li.text(item.as_str()),
        }
    });

    Element::new("ul").class("pill-list").children(entries)
}

/// Bands as columns, activity windows as rows.
pub fn band_matrix(
    activities: &[BandActivity],
    call_info: &HashMap<String, CallInfo>,
    config: &ViewConfig,
) -> Element {
    let header = Element::new("tr")
        .child(Element::new("th").attr("scope", "col"))
        .children(activities.iter().map(|activity| {
            Element::new("th")
                .attr("scope", "col")
                .text(activity.band.as_str())
        }));

    let rows = ActivityWindow::ALL.into_iter().map(|window| {
        Element::new("tr")
            .child(Element::new("th").attr("scope", "row").text(window.label()))
            .children(activities.iter().map(|activity| {
                Element::new("td").child(make_list(
                    activity.callsigns(window),
                    Some(config.qrz_url.as_str()),
                    Some(call_info),
                ))
            }))
    });

    Element::new("table")
        .class("table table-sm table-striped text-center align-middle")
        .child(Element::new("thead").child(header))
        .child(Element::new("tbody").children(rows))
}

pub fn card(title: impl Into<String>, body: Element) -> Element {
    Element::new("div")
        .class("card mb-3")
        .child(Element::new("div").class("card-header fw-bold").text(title))
        .child(body)
}

fn card_body() -> Element {
    Element::new("div").class("card-body")
}

fn card_text(text: impl Into<String>) -> Element {
    card_body().child(Element::new("p").class("card-text").text(text))
}

/// Everything shown for a successfully loaded region, in page order.
pub fn render_region(snapshot: &RegionSnapshot, config: &ViewConfig) -> Fragment {
    let mut fragment = Fragment::new();

    let name = if snapshot.name.is_empty() {
        EMPTY_PLACEHOLDER
    } else {
        snapshot.name.as_str()
    };
    fragment.push(card("Region", card_text(name)));

    fragment.push(lookup::widget());

    fragment.push(card(
        format!("Band Activities ({} spots)", snapshot.num_spotter_spots),
        band_matrix(&snapshot.band_activities, &snapshot.call_info, config),
    ));

    fragment.push(card(
        format!("Spotters ({})", snapshot.spotters.len()),
        card_body().child(make_list(&snapshot.spotters, Some(config.qrz_url.as_str()), None)),
    ));

    fragment.push(card("Regions", pending_body(ids::REGIONS_BODY)));
    fragment.push(card("Server", pending_body(ids::STATS_BODY)));

    fragment
}

/// Replaces the whole content area when the initial load fails.
pub fn error_panel(region: &str, error: &LoadError) -> Fragment {
    std::iter::once(
        Element::new("div")
            .class("alert alert-danger")
            .attr("role", "alert")
            .text(format!("Failed to load data for region \u{201c}{region}\u{201d}: {error}")),
    )
    .collect()
}

fn pending_body(id: &str) -> Element {
    card_body().id(id).child(
        Element::new("p")
            .class("card-text text-muted")
            .text("Loading\u{2026}"),
    )
}

/// Links to every known region, the current one marked active.
pub fn regions_body(list: &RegionList, current: &str) -> Element {
    if list.names.is_empty() {
        return Element::new("p").class("card-text text-muted").text("No regions known yet.");
    }

    let links = list.names.iter().map(|name| {
        let link = Element::new("a")
            .class("list-group-item list-group-item-action p-1")
            .attr("href", region_link(name))
            .text(name.as_str());
        if name == current {
            link.class("list-group-item list-group-item-action p-1 active")
                .attr("aria-current", "true")
        } else {
            link
        }
    });

    Element::new("div").class("list-group list-group-horizontal flex-wrap").children(links)
}

pub fn stats_body(stats: &ServerStats) -> Element {
    let row = |label: &str, value: String| {
        [
            Element::new("dt").class("col-sm-4").text(label),
            Element::new("dd").class("col-sm-8").text(value),
        ]
    };

    Element::new("dl")
        .class("row mb-0")
        .children(row("Running since", stats.running_since.clone()))
        .children(row("Total spots", stats.total_spots.to_string()))
        .children(row("Total regions", stats.total_regions.to_string()))
}

/// Local failure of a secondary card; the rest of the page is untouched.
pub fn secondary_failure(what: &str, error: &LoadError) -> Element {
    Element::new("div")
        .class("alert alert-warning mb-0")
        .attr("role", "alert")
        .text(format!("Could not load {what}: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| (*item).to_string()).collect()
    }

    fn single_band_snapshot() -> RegionSnapshot {
        RegionSnapshot {
            name: "CQ_14".to_string(),
            spotters: strings(&["DK8NE", "OH6BG"]),
            num_spotter_spots: 17,
            band_activities: vec![BandActivity {
                band: "20m".to_string(),
                active_1min: strings(&["K1ABC"]),
                active_5min: Vec::new(),
                active_15min: Vec::new(),
            }],
            call_info: HashMap::from([(
                "K1ABC".to_string(),
                CallInfo {
                    frequencies: vec![14025.5],
                    wpm: vec![25],
                    db: vec![11],
                },
            )]),
        }
    }

    fn rows(table: &Element) -> Vec<&Element> {
        table.find_all("tbody")[0].find_all("tr")
    }

    #[test]
    fn list_links_every_item_in_order() {
        let items = strings(&["K1ABC", "DL/W1AW", "OH6BG"]);
        let list = make_list(&items, Some("https://qrz.com/db/"), None);

        let hrefs: Vec<&str> = list
            .find_all("a")
            .into_iter()
            .filter_map(|link| link.attribute("href"))
            .collect();

        assert_eq!(list.find_all("li").len(), 3);
        assert_eq!(
            hrefs,
            vec![
                "https://qrz.com/db/K1ABC",
                "https://qrz.com/db/DL%2FW1AW",
                "https://qrz.com/db/OH6BG",
            ]
        );
        for link in list.find_all("a") {
            assert_eq!(link.attribute("target"), Some("_blank"));
            assert_eq!(link.attribute("rel"), Some("noopener noreferrer"));
        }
    }

    #[test]
    fn empty_list_has_no_items() {
        let list = make_list(&[], Some("https://qrz.com/db/"), None);

        assert_eq!(list.tag(), "ul");
        assert!(list.child_nodes().is_empty());
    }

    #[test]
    fn list_without_prefix_renders_plain_text() {
        let list = make_list(&strings(&["EU"]), None, None);

        assert!(list.find_all("a").is_empty());
        assert_eq!(list.text_content(), "EU");
    }

    #[test]
    fn known_callsigns_get_tooltips() {
        let snapshot = single_band_snapshot();
        let items = strings(&["K1ABC", "W1AW"]);
        let list = make_list(&items, None, Some(&snapshot.call_info));
        let entries = list.find_all("li");

        assert_eq!(
            entries[0].attribute("title"),
            Some("Frequencies (kHz): 14025.5\nWPM: 25\ndB: 11")
        );
        assert_eq!(entries[1].attribute("title"), None);
    }

    #[test]
    fn matrix_has_one_column_per_band_and_three_rows() {
        let snapshot = single_band_snapshot();
        let table = band_matrix(
            &snapshot.band_activities,
            &snapshot.call_info,
            &ViewConfig::default(),
        );

        let headers: Vec<String> = table.find_all("thead")[0]
            .find_all("th")
            .into_iter()
            .map(Element::text_content)
            .collect();
        assert_eq!(headers, vec!["", "20m"]);

        let rows = rows(&table);
        assert_eq!(rows.len(), 3);

        let labels: Vec<String> = rows
            .iter()
            .map(|row| row.find_all("th")[0].text_content())
            .collect();
        assert_eq!(labels, vec!["1 min", "5 min", "15 min"]);

        let one_minute = rows[0].find_all("td");
        assert_eq!(one_minute.len(), 1);
        let links = one_minute[0].find_all("a");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].attribute("href"), Some("https://qrz.com/db/K1ABC"));

        for row in &rows[1..] {
            let cells = row.find_all("td");
            assert_eq!(cells.len(), 1);
            assert!(cells[0].find_all("li").is_empty());
        }
    }

    #[test]
    fn matrix_keeps_band_order() {
        let activities: Vec<BandActivity> = ["40m", "160m", "20m"]
            .iter()
            .map(|band| BandActivity {
                band: (*band).to_string(),
                ..BandActivity::default()
            })
            .collect();
        let table = band_matrix(&activities, &HashMap::new(), &ViewConfig::default());

        let headers: Vec<String> = table.find_all("thead")[0]
            .find_all("th")
            .into_iter()
            .skip(1)
            .map(Element::text_content)
            .collect();
        assert_eq!(headers, vec!["40m", "160m", "20m"]);
    }

    #[test]
    fn empty_matrix_still_has_three_rows() {
        let table = band_matrix(&[], &HashMap::new(), &ViewConfig::default());
        let rows = rows(&table);

        assert_eq!(table.find_all("thead")[0].find_all("th").len(), 1);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.find_all("td").is_empty()));
    }

    #[test]
    fn region_page_has_cards_in_order() {
        let fragment = render_region(&single_band_snapshot(), &ViewConfig::default());

        let headers: Vec<String> = fragment
            .with_class("card-header")
            .into_iter()
            .map(Element::text_content)
            .collect();
        assert_eq!(
            headers,
            vec![
                "Region",
                "Frequency Lookup",
                "Band Activities (17 spots)",
                "Spotters (2)",
                "Regions",
                "Server",
            ]
        );
        assert!(fragment.find_by_id(ids::REGIONS_BODY).is_some());
        assert!(fragment.find_by_id(ids::STATS_BODY).is_some());
    }

    #[test]
    fn unnamed_region_shows_placeholder() {
        let fragment = render_region(&RegionSnapshot::default(), &ViewConfig::default());

        assert_eq!(fragment.with_class("card-text")[0].text_content(), "–");
    }

    #[test]
    fn failed_load_renders_only_one_alert() {
        let fragment = error_panel("CQ_14", &LoadError::Status(404));

        assert_eq!(fragment.nodes().len(), 1);
        assert_eq!(fragment.with_class("alert").len(), 1);
        assert!(fragment.with_class("card").is_empty());
        assert_eq!(
            fragment.with_class("alert")[0].text_content(),
            "Failed to load data for region “CQ_14”: HTTP 404"
        );
    }

    #[test]
    fn regions_card_marks_current_region() {
        let list = RegionList {
            names: strings(&["CQ_14", "CQ_5"]),
        };
        let body = regions_body(&list, "CQ_5");
        let links = body.find_all("a");

        assert_eq!(links[0].attribute("href"), Some("?region=CQ_14"));
        assert!(!links[0].has_class("active"));
        assert!(links[1].has_class("active"));
    }

    #[test]
    fn stats_card_lists_counters() {
        let stats = ServerStats {
            running_since: "2026-10-19 08:00:00".to_string(),
            total_spots: 1234,
            total_regions: 40,
        };
        let values: Vec<String> = stats_body(&stats)
            .find_all("dd")
            .into_iter()
            .map(Element::text_content)
            .collect();

        assert_eq!(values, vec!["2026-10-19 08:00:00", "1234", "40"]);
    }

    #[test]
    fn secondary_failure_names_the_card() {
        let alert = secondary_failure("regions", &LoadError::Status(500));

        assert!(alert.has_class("alert-warning"));
        assert_eq!(alert.text_content(), "Could not load regions: HTTP 500");
    }
}
