//! Human (colored) and JSON rendering of command results.

use crate::commands::Context;
use crate::error::DashboardError;

use client_core::session::Session;
use client_core::views::format::format_date;
use client_core::views::{AnalyticsView, ChartPoint, ProfileView, ReportsView};

use models::{ShortenResponse, UrlRecord};

use colored::Colorize;
use serde::Serialize;
use serde_json::json;

const BAR_WIDTH: usize = 40;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), DashboardError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| DashboardError::dashboard(format!("Failed to render JSON: {e}")))?;
    println!("{rendered}");
    Ok(())
}

pub fn message(ctx: &Context, text: &str) -> Result<(), DashboardError> {
    if ctx.json {
        return print_json(&json!({ "message": text }));
    }

    println!("{} {}", "✓".bold().green(), text);
    Ok(())
}

pub fn session(ctx: &Context, session: &Session) -> Result<(), DashboardError> {
    if ctx.json {
        return print_json(session);
    }

    println!(
        "{} Signed in. Welcome, {}!",
        "✓".bold().green(),
        session.user.greeting_name().cyan()
    );
    Ok(())
}

pub fn profile(ctx: &Context, session: &Session) -> Result<(), DashboardError> {
    if ctx.json {
        return print_json(session);
    }

    let view = ProfileView::new(&session.user, ctx.date_format());
    println!("{}", view.display_name.bold().green());
    println!(
        "  {} {}",
        "Email:".dimmed(),
        view.email.as_deref().unwrap_or("-")
    );
    println!("  {} {}", "Picture:".dimmed(), view.picture);
    println!("  {} {}", "Account Created:".dimmed(), view.created_at);
    Ok(())
}

pub fn created(ctx: &Context, created: &ShortenResponse) -> Result<(), DashboardError> {
    if ctx.json {
        return print_json(created);
    }

    match created.short_url.as_deref() {
        Some(short_url) => println!(
            "{} Short URL: {}",
            "✓".bold().green(),
            short_url.blue().underline()
        ),
        None => println!("{} Short URL created", "✓".bold().green()),
    }
    Ok(())
}

pub fn resolved(ctx: &Context, alias: &str, long_url: &str) -> Result<(), DashboardError> {
    if ctx.json {
        return print_json(&json!({ "alias": alias, "longUrl": long_url }));
    }

    println!("{} -> {}", alias.cyan(), long_url.blue().underline());
    Ok(())
}

pub fn url_list(ctx: &Context, urls: &[UrlRecord]) -> Result<(), DashboardError> {
    if ctx.json {
        return print_json(urls);
    }

    if urls.is_empty() {
        println!("{} No short URLs yet", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Your Short URLs:".bold().green());
    println!();
    for url in urls {
        let created_at = url
            .created_at
            .as_deref()
            .map(|raw| format_date(raw, ctx.date_format()))
            .unwrap_or_else(|| String::from("-"));

        println!(
            "  {} -> {}",
            url.short_url.cyan(),
            url.long_url.blue().underline()
        );
        println!(
            "    {} alias: {}  topic: {}  clicks: {}  created: {}",
            url.record_id().unwrap_or("-").dimmed(),
            url.alias_or_dash(),
            url.topic_or_dash(),
            url.clicks.to_string().yellow(),
            created_at
        );
    }
    println!();
    println!(
        "{} Total {} short URLs",
        "ℹ".bold().blue(),
        urls.len().to_string().green()
    );
    Ok(())
}

pub fn analytics(ctx: &Context, title: &str, view: &AnalyticsView) -> Result<(), DashboardError> {
    if ctx.json {
        return print_json(&json!({
            "title": title,
            "cards": view.stat_cards(),
            "clicksOverTime": view.clicks_over_time(ctx.date_format()),
            "osDistribution": view.os_distribution(),
            "deviceDistribution": view.device_distribution(),
        }));
    }

    println!("{}", title.bold().green());
    println!();
    for card in view.stat_cards() {
        println!("  {:<14} {}", card.title.dimmed(), card.value.to_string().bold());
    }

    print_series("Clicks Over Time", &view.clicks_over_time(ctx.date_format()));
    print_series("OS Distribution", &view.os_distribution());
    print_series("Device Distribution", &view.device_distribution());
    Ok(())
}

pub fn report(ctx: &Context, view: &ReportsView) -> Result<(), DashboardError> {
    let data = view.chart_data(ctx.date_format());

    if ctx.json {
        return print_json(&json!({
            "title": view.title(),
            "topics": view.topics(),
            "aliases": view.aliases(),
            "data": data,
        }));
    }

    print_series(&view.title(), &data);
    Ok(())
}

fn print_series(title: &str, points: &[ChartPoint]) {
    println!();
    println!("{}", title.bold().cyan());

    if points.is_empty() {
        println!("  {}", "No data".dimmed());
        return;
    }

    let label_width = points
        .iter()
        .map(|point| point.label.chars().count())
        .max()
        .unwrap_or(0);
    let max_value = points.iter().map(|point| point.value).max().unwrap_or(0);

    for point in points {
        println!(
            "  {:<label_width$} │{} {}",
            point.label,
            "█".repeat(bar_length(point.value, max_value)).green(),
            point.value
        );
    }
}

/// Bar length scaled to the largest value; any non-zero value gets a bar.
pub fn bar_length(value: u64, max_value: u64) -> usize {
    if value == 0 || max_value == 0 {
        return 0;
    }

    let scaled = (value as f64 / max_value as f64 * BAR_WIDTH as f64).round() as usize;
    scaled.max(1)
}
