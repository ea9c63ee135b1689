use crate::views::format::DEFAULT_DATE_FORMAT;
use crate::views::{AnalyticsView, ChartPoint};

use models::{AnalyticsSummary, ClicksByDate, DeviceTypeStat, OsTypeStat};

fn sample_summary() -> AnalyticsSummary {
    AnalyticsSummary {
        total_urls: 3,
        total_clicks: 20,
        unique_users: 7,
        clicks_by_date: vec![
            ClicksByDate {
                date: "2025-02-01T00:00:00.000Z".to_string(),
                click_count: 5,
            },
            ClicksByDate {
                date: "2025-02-02".to_string(),
                click_count: 15,
            },
        ],
        os_type: vec![OsTypeStat {
            os_name: "Linux".to_string(),
            unique_clicks: 12,
            unique_users: 4,
        }],
        device_type: vec![
            DeviceTypeStat {
                device_name: "desktop".to_string(),
                unique_clicks: 14,
                unique_users: 5,
            },
            DeviceTypeStat {
                device_name: "mobile".to_string(),
                unique_clicks: 6,
                unique_users: 2,
            },
        ],
        urls: Vec::new(),
    }
}

/// **VALUE**: Verifies the four stat cards and that "Device Types" counts entries.
///
/// **BUG THIS CATCHES**: Would catch summing device clicks instead of counting device types,
/// which the card label would then misrepresent.
#[test]
fn given_summary_when_building_stat_cards_then_counts_device_types() {
    // GIVEN: A summary with two device types
    let view = AnalyticsView::from_summary(sample_summary());

    // WHEN: Building cards
    let cards = view.stat_cards();

    // THEN: Titles and values in display order
    let pairs: Vec<(&str, u64)> = cards.iter().map(|c| (c.title, c.value)).collect();
    let expected: [(&str, u64); 4] = [
        ("Total URLs", 3),
        ("Total Clicks", 20),
        ("Unique Users", 7),
        ("Device Types", 2),
    ];
    assert_eq!(pairs, expected);
}

#[test]
fn given_summary_when_charting_then_series_use_display_labels() {
    let view = AnalyticsView::from_summary(sample_summary());

    assert_eq!(
        view.clicks_over_time(DEFAULT_DATE_FORMAT),
        vec![
            ChartPoint::new("2025-02-01", 5),
            ChartPoint::new("2025-02-02", 15)
        ]
    );
    assert_eq!(view.os_distribution(), vec![ChartPoint::new("Linux", 12)]);
    assert_eq!(view.device_distribution()[1], ChartPoint::new("mobile", 6));
}

#[test]
fn given_empty_view_when_building_cards_then_all_zero() {
    let view = AnalyticsView::new();

    assert!(view.stat_cards().iter().all(|card| card.value == 0));
    assert!(view.clicks_over_time(DEFAULT_DATE_FORMAT).is_empty());
}
