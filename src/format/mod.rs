//! Plain-text rendering of API responses for LLM consumption.

use chrono::{DateTime, Local};

use crate::models::{QuotaInfo, SearchData};

/// Render a search payload as the text block returned to the MCP host.
///
/// Output shape: a `Query: "<q>"` header, then one `Title:`/`Content:`/
/// `Link:` block per result separated by blank lines, then a trailing
/// `Suggested queries:` line when the API offered non-empty suggestions.
pub fn format_search_results(data: &SearchData) -> String {
    let mut out = format!("Query: \"{}\"", data.query);

    for item in &data.results {
        out.push_str("\n\n");
        out.push_str(&format!(
            "Title: {}\nContent: {}\nLink: {}",
            item.title, item.content, item.url
        ));
    }

    if let Some(suggestions) = &data.suggestions {
        if !suggestions.is_empty() {
            out.push_str("\n\nSuggested queries: ");
            out.push_str(&suggestions.join(", "));
        }
    }

    out
}

/// Render a quota snapshot as the text block returned to the MCP host.
///
/// Remaining quota is total minus used and may be negative when the API
/// reports an overdrawn account. Usage renders as `n/a` when the total quota
/// is zero.
pub fn format_quota(info: &QuotaInfo) -> String {
    let usage = match info.quota.usage_percent() {
        Some(percent) => format!("{}%", percent),
        None => "n/a".to_string(),
    };

    format!(
        "Plan: {}\n\
         Monthly quota: {}\n\
         Used quota: {}\n\
         Remaining quota: {}\n\
         Usage: {}\n\
         QPS limit: {}\n\
         Last updated: {}",
        info.plan.name,
        info.quota.monthly_quota,
        info.quota.used_quota,
        info.quota.remaining(),
        usage,
        info.plan.qps_limit,
        format_update_time(info.quota.updated_at.as_deref()),
    )
}

/// Human-readable form of the provider's update timestamp. Unparseable
/// values pass through verbatim.
fn format_update_time(updated_at: Option<&str>) -> String {
    let Some(raw) = updated_at else {
        return "unknown".to_string();
    };

    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlanFeatures, QuotaCounters, SearchItem};

    fn one_result(suggestions: Option<Vec<String>>) -> SearchData {
        SearchData {
            query: "x".to_string(),
            results: vec![SearchItem {
                title: "T".to_string(),
                url: "U".to_string(),
                content: "C".to_string(),
            }],
            suggestions,
        }
    }

    #[test]
    fn test_single_result_no_suggestions_line_when_empty() {
        let text = format_search_results(&one_result(Some(vec![])));
        assert_eq!(text, "Query: \"x\"\n\nTitle: T\nContent: C\nLink: U");
    }

    #[test]
    fn test_suggestions_line_appended() {
        let text = format_search_results(&one_result(Some(vec![
            "a".to_string(),
            "b".to_string(),
        ])));
        assert_eq!(
            text,
            "Query: \"x\"\n\nTitle: T\nContent: C\nLink: U\n\nSuggested queries: a, b"
        );
    }

    #[test]
    fn test_empty_results_is_header_only() {
        let data = SearchData {
            query: "nothing".to_string(),
            results: vec![],
            suggestions: None,
        };
        assert_eq!(format_search_results(&data), "Query: \"nothing\"");
    }

    fn quota_info(used: i64, total: i64) -> QuotaInfo {
        QuotaInfo {
            quota: QuotaCounters {
                monthly_quota: total,
                used_quota: used,
                total_quota: total,
                ..Default::default()
            },
            plan: PlanFeatures {
                name: "free".to_string(),
                qps_limit: 1,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_quota_half_used() {
        let text = format_quota(&quota_info(50, 100));
        assert!(text.contains("Remaining quota: 50"));
        assert!(text.contains("Usage: 50%"));
        assert!(text.contains("Plan: free"));
        assert!(text.contains("QPS limit: 1"));
    }

    #[test]
    fn test_quota_zero_total_does_not_divide() {
        let text = format_quota(&quota_info(10, 0));
        assert!(text.contains("Usage: n/a"));
    }

    #[test]
    fn test_quota_overdrawn_goes_negative() {
        let text = format_quota(&quota_info(120, 100));
        assert!(text.contains("Remaining quota: -20"));
    }

    #[test]
    fn test_update_time_unknown_when_absent() {
        assert_eq!(format_update_time(None), "unknown");
    }

    #[test]
    fn test_update_time_passes_through_unparseable() {
        assert_eq!(format_update_time(Some("yesterday")), "yesterday");
    }

    #[test]
    fn test_update_time_parses_rfc3339() {
        let formatted = format_update_time(Some("2025-06-01T12:00:00Z"));
        assert!(formatted.starts_with("2025-06-01") || formatted.starts_with("2025-06-02"));
    }
}
