//! Offline exhaustion rule and suggestion pricing.
//!
//! Both the listing resolver and the online-eligibility decider classify a
//! country's offline set with the same rule, so it lives here once.

use ticketing_core::Tag;

use crate::ticket::TicketRecord;

/// Number of sold-out offline ticket types at which a country is exhausted.
pub const SOLD_OUT_THRESHOLD: usize = 4;

/// Discount applied to suggested alternatives, in percent.
pub const DISCOUNT_PERCENT: u8 = 20;

/// The fixed availability rules, passed explicitly to the query layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AvailabilityPolicy {
    sold_out_threshold: usize,
    discount_percent: u8,
}

impl AvailabilityPolicy {
    pub const fn standard() -> Self {
        Self {
            sold_out_threshold: SOLD_OUT_THRESHOLD,
            discount_percent: DISCOUNT_PERCENT,
        }
    }

    pub const fn sold_out_threshold(&self) -> usize {
        self.sold_out_threshold
    }

    pub const fn discount_percent(&self) -> u8 {
        self.discount_percent
    }

    /// Label shown next to a discounted price, e.g. `"20%"`.
    pub fn discount_label(&self) -> String {
        format!("{}%", self.discount_percent)
    }

    /// `floor(price * (100 - discount) / 100)`.
    pub fn discounted_price(&self, price: i64) -> i64 {
        let keep = i128::from(100 - self.discount_percent);
        // |result| <= |price|, so narrowing back cannot overflow.
        (i128::from(price) * keep).div_euclid(100) as i64
    }

    /// Classify a country's offline set (records in store order).
    pub fn assess(&self, offline: &[TicketRecord]) -> OfflineAssessment {
        OfflineAssessment {
            total: offline.len(),
            sold_out: offline.iter().filter(|t| t.is_sold()).count(),
            last_tag: offline.last().map(|t| t.tag.clone()),
            threshold: self.sold_out_threshold,
        }
    }
}

impl Default for AvailabilityPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

/// Where a country's offline stock stands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OfflineStatus {
    /// No offline ticket types are recorded for the country+event.
    Empty,
    /// Fewer than the threshold are sold out.
    Available,
    /// At least the threshold are sold out.
    Exhausted,
}

/// Whether the online ticket may be sold.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OnlineEligibility {
    OfflineAvailable,
    OnlineEligible,
}

/// Result of [`AvailabilityPolicy::assess`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfflineAssessment {
    total: usize,
    sold_out: usize,
    last_tag: Option<Tag>,
    threshold: usize,
}

impl OfflineAssessment {
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn sold_out(&self) -> usize {
        self.sold_out
    }

    /// Tag of the last record in store order (the most expensive type).
    pub fn last_tag(&self) -> Option<&Tag> {
        self.last_tag.as_ref()
    }

    pub fn status(&self) -> OfflineStatus {
        if self.sold_out >= self.threshold {
            OfflineStatus::Exhausted
        } else if self.total == 0 {
            OfflineStatus::Empty
        } else {
            OfflineStatus::Available
        }
    }

    /// An empty offline set counts as eligible, same as an exhausted one.
    pub fn online_eligibility(&self) -> OnlineEligibility {
        match self.status() {
            OfflineStatus::Available => OnlineEligibility::OfflineAvailable,
            OfflineStatus::Empty | OfflineStatus::Exhausted => OnlineEligibility::OnlineEligible,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.status() == OfflineStatus::Exhausted
    }
}
