//! Account quota models.

use serde::{Deserialize, Serialize};

/// Read-only snapshot of the account's quota and plan, as returned by
/// `/me/quota`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaInfo {
    /// Quota counters
    #[serde(default)]
    pub quota: QuotaCounters,

    /// Plan features
    #[serde(default)]
    pub plan: PlanFeatures,
}

/// Quota counters for the current billing period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaCounters {
    /// Queries included in the monthly plan
    #[serde(default)]
    pub monthly_quota: i64,

    /// Extra queries purchased on top of the plan
    #[serde(default)]
    pub extra_quota: i64,

    /// Queries consumed so far
    #[serde(default)]
    pub used_quota: i64,

    /// Total queries available (monthly + extra)
    #[serde(default)]
    pub total_quota: i64,

    /// Plan name as reported with the counters
    #[serde(default)]
    pub plan_name: String,

    /// When the current quota period expires
    #[serde(default)]
    pub expiry_date: Option<String>,

    /// When the account was created
    #[serde(default)]
    pub created_at: Option<String>,

    /// When these counters were last updated
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl QuotaCounters {
    /// Remaining queries. The API may report `used > total`, so this can be
    /// negative and is intentionally not clamped.
    pub fn remaining(&self) -> i64 {
        self.total_quota - self.used_quota
    }

    /// Usage as a percentage rounded to the nearest integer, or `None` when
    /// the total quota is zero.
    pub fn usage_percent(&self) -> Option<i64> {
        if self.total_quota == 0 {
            return None;
        }
        Some((self.used_quota as f64 / self.total_quota as f64 * 100.0).round() as i64)
    }
}

/// Features of the subscribed plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanFeatures {
    /// Plan name
    #[serde(default)]
    pub name: String,

    /// Plan price
    #[serde(default)]
    pub price: f64,

    /// Queries included per month
    #[serde(default)]
    pub monthly_query_limit: i64,

    /// Queries allowed per second
    #[serde(default)]
    pub qps_limit: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_and_usage() {
        let counters = QuotaCounters {
            used_quota: 50,
            total_quota: 100,
            ..Default::default()
        };

        assert_eq!(counters.remaining(), 50);
        assert_eq!(counters.usage_percent(), Some(50));
    }

    #[test]
    fn test_remaining_goes_negative() {
        let counters = QuotaCounters {
            used_quota: 120,
            total_quota: 100,
            ..Default::default()
        };

        assert_eq!(counters.remaining(), -20);
        assert_eq!(counters.usage_percent(), Some(120));
    }

    #[test]
    fn test_zero_total_quota_has_no_percentage() {
        let counters = QuotaCounters {
            used_quota: 10,
            total_quota: 0,
            ..Default::default()
        };

        assert_eq!(counters.usage_percent(), None);
    }

    #[test]
    fn test_usage_percent_rounds() {
        let counters = QuotaCounters {
            used_quota: 1,
            total_quota: 3,
            ..Default::default()
        };

        assert_eq!(counters.usage_percent(), Some(33));
    }

    #[test]
    fn test_quota_info_deserializes_camel_case() {
        let json = r#"{
            "quota": {
                "monthlyQuota": 1000,
                "extraQuota": 0,
                "usedQuota": 250,
                "totalQuota": 1000,
                "planName": "free",
                "updatedAt": "2025-06-01T12:00:00Z"
            },
            "plan": {
                "name": "free",
                "price": 0.0,
                "monthlyQueryLimit": 1000,
                "qpsLimit": 1
            }
        }"#;

        let info: QuotaInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.quota.monthly_quota, 1000);
        assert_eq!(info.quota.remaining(), 750);
        assert_eq!(info.plan.qps_limit, 1);
    }
}
