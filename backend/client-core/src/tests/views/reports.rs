use crate::views::format::DEFAULT_DATE_FORMAT;
use crate::views::{ChartPoint, ReportsView};

use models::{AnalyticsSummary, ClicksByDate, UrlRecord};

fn record(
    short_url: &str,
    alias: Option<&str>,
    topic: Option<&str>,
    total: Option<u64>,
) -> UrlRecord {
    UrlRecord {
        long_url: format!("https://example.com/{short_url}"),
        short_url: short_url.to_string(),
        custom_alias: alias.map(str::to_string),
        topic: topic.map(str::to_string),
        total_clicks: total,
        ..UrlRecord::default()
    }
}

fn view_with_urls() -> ReportsView {
    ReportsView {
        urls: vec![
            record(
                "https://sho.rt/aaaaaaaaaaaaaaaaaaaaaaaaaaaaaa-long",
                Some("promo"),
                None,
                Some(4),
            ),
            record("https://sho.rt/b", Some("blog"), Some("news"), None),
            record("https://sho.rt/c", Some("promo"), Some("news"), Some(2)),
            record("https://sho.rt/d", None, Some(""), Some(1)),
        ],
        ..ReportsView::default()
    }
}

fn summary_with_buckets() -> AnalyticsSummary {
    AnalyticsSummary {
        clicks_by_date: vec![ClicksByDate {
            date: "2025-01-31".to_string(),
            click_count: 8,
        }],
        ..AnalyticsSummary::default()
    }
}

/// **VALUE**: Verifies selector options are distinct, ordered by first appearance, and skip
/// blanks.
///
/// **WHY THIS MATTERS**: Duplicated options confuse the menu, and a blank option would be
/// indistinguishable from "All Topics".
#[test]
fn given_urls_when_listing_options_then_distinct_in_first_seen_order() {
    // GIVEN: URLs with repeated and empty topics/aliases
    let view = view_with_urls();

    // WHEN/THEN: Distinct non-empty values
    assert_eq!(view.topics(), ["news"]);
    assert_eq!(view.aliases(), ["promo", "blog"]);
}

/// **VALUE**: Verifies the two selectors are mutually exclusive.
///
/// **WHY THIS MATTERS**: The chart can show one series. If both selections could be set, the
/// title and the data would disagree.
///
/// **BUG THIS CATCHES**: Would catch if selecting an alias forgot to clear the topic.
#[test]
fn given_topic_selected_when_alias_selected_then_topic_is_cleared() {
    // GIVEN: A topic selection
    let mut view = view_with_urls();
    view.select_topic(Some("news".to_string()));
    assert!(!view.alias_menu_enabled());
    assert!(view.topic_menu_enabled());

    // WHEN: Selecting an alias
    view.select_alias(Some("promo".to_string()));

    // THEN: Only the alias remains, and the topic menu is now disabled
    assert_eq!(view.selected_topic(), None);
    assert_eq!(view.selected_alias(), Some("promo"));
    assert!(!view.topic_menu_enabled());
    assert!(view.alias_menu_enabled());
    assert_eq!(view.title(), "Data for URL: promo");
}

#[test]
fn given_empty_selection_when_selecting_then_treated_as_all() {
    let mut view = view_with_urls();
    view.select_topic(Some(String::new()));

    assert_eq!(view.selected_topic(), None);
    assert_eq!(view.title(), "Overall Data Distribution");
}

/// **VALUE**: Verifies the default chart: one bar per URL, labelled by topic or short URL.
///
/// **BUG THIS CATCHES**: Would catch using `clicks` instead of `totalClicks`, or failing to
/// shorten long short-URL labels.
#[test]
fn given_no_selection_when_charting_then_one_bar_per_url() {
    // GIVEN: No selection
    let view = view_with_urls();

    // WHEN: Building chart data
    let data = view.chart_data(DEFAULT_DATE_FORMAT);

    // THEN: Topic label when present, truncated short URL otherwise
    assert_eq!(
        data,
        vec![
            ChartPoint::new("https://sho.rt/aaaaaaaaaaaaaaa...", 4),
            ChartPoint::new("news", 0),
            ChartPoint::new("news", 2),
            ChartPoint::new("https://sho.rt/d...", 1),
        ]
    );
}

/// **VALUE**: Verifies a short URL under the label limit still ends in `...`.
///
/// **BUG THIS CATCHES**: Would catch only marking labels that were cut, which makes short and
/// long URLs render differently from the web dashboard's Reports chart.
#[test]
fn given_short_url_under_limit_when_charting_then_label_still_has_ellipsis() {
    // GIVEN: One URL with no topic and a short short URL
    let view = ReportsView::with_urls(vec![record("https://sho.rt/abc", None, None, Some(3))]);

    // WHEN: Building chart data
    let data = view.chart_data(DEFAULT_DATE_FORMAT);

    // THEN: The whole URL followed by the ellipsis
    assert_eq!(data, vec![ChartPoint::new("https://sho.rt/abc...", 3)]);
}

#[test]
fn given_topic_with_loaded_analytics_when_charting_then_uses_click_buckets() {
    let mut view = view_with_urls();
    view.select_topic(Some("news".to_string()));
    view.topic_data = Some(summary_with_buckets());

    assert_eq!(
        view.chart_data(DEFAULT_DATE_FORMAT),
        vec![ChartPoint::new("2025-01-31", 8)]
    );
    assert_eq!(view.title(), "Data for Topic: news");
}

#[test]
fn given_alias_without_loaded_analytics_when_charting_then_falls_back_to_urls() {
    let mut view = view_with_urls();
    view.select_alias(Some("blog".to_string()));

    assert_eq!(view.chart_data(DEFAULT_DATE_FORMAT).len(), 4);

    view.alias_data = Some(summary_with_buckets());
    assert_eq!(view.chart_data(DEFAULT_DATE_FORMAT).len(), 1);
}

#[test]
fn given_no_selection_when_setting_selection_data_then_ignored() {
    let mut view = ReportsView::with_urls(view_with_urls().urls);

    view.set_selection_data(summary_with_buckets());

    assert!(view.topic_data.is_none());
    assert!(view.alias_data.is_none());

    view.select_alias(Some("promo".to_string()));
    view.set_selection_data(summary_with_buckets());
    assert!(view.alias_data.is_some());
}
