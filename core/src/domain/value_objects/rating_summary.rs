//! Aggregate view over the ratings a member has received.

use serde::{Deserialize, Serialize};

use crate::domain::entities::rating::{Rating, RatingDirection, MAX_RATING_VALUE, MIN_RATING_VALUE};

const BUCKETS: usize = (MAX_RATING_VALUE - MIN_RATING_VALUE + 1) as usize;

/// Count and mean for ratings received in one role
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct RoleSummary {
    pub count: u32,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub count: u32,
    /// 0.0 when there are no ratings
    pub average: f64,
    /// `histogram[i]` counts ratings with value `i + 1`
    pub histogram: [u32; BUCKETS],
    pub as_hirer: RoleSummary,
    pub as_worker: RoleSummary,
}

impl RatingSummary {
    pub fn from_ratings<'a, I>(ratings: I) -> Self
    where
        I: IntoIterator<Item = &'a Rating>,
    {
        let mut histogram = [0u32; BUCKETS];
        let mut total = Accumulator::default();
        let mut hirer = Accumulator::default();
        let mut worker = Accumulator::default();

        for rating in ratings {
            // Values outside the range never pass validation; skip rather than panic
            let Some(bucket) = bucket_of(rating.value) else {
                continue;
            };
            histogram[bucket] += 1;
            total.add(rating.value);
            match rating.direction {
                RatingDirection::Hirer => hirer.add(rating.value),
                RatingDirection::Worker => worker.add(rating.value),
            }
        }

        Self {
            count: total.count,
            average: total.average(),
            histogram,
            as_hirer: hirer.summary(),
            as_worker: worker.summary(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

fn bucket_of(value: i32) -> Option<usize> {
    if (MIN_RATING_VALUE..=MAX_RATING_VALUE).contains(&value) {
        Some((value - MIN_RATING_VALUE) as usize)
    } else {
        None
    }
}

#[derive(Default)]
struct Accumulator {
    count: u32,
    sum: i64,
}

impl Accumulator {
    fn add(&mut self, value: i32) {
        self.count += 1;
        self.sum += value as i64;
    }

    fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }

    fn summary(&self) -> RoleSummary {
        RoleSummary {
            count: self.count,
            average: self.average(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn rating(value: i32, direction: RatingDirection) -> Rating {
        Rating::new(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), direction, value, None)
    }

    #[test]
    fn test_empty_summary() {
        let summary = RatingSummary::from_ratings(&Vec::<Rating>::new());
        assert!(summary.is_empty());
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.histogram, [0; 5]);
        assert_eq!(summary.as_hirer, RoleSummary::default());
    }

    #[test]
    fn test_summary_splits_by_role() {
        let ratings = vec![
            rating(5, RatingDirection::Worker),
            rating(4, RatingDirection::Worker),
            rating(1, RatingDirection::Hirer),
        ];
        let summary = RatingSummary::from_ratings(&ratings);

        assert_eq!(summary.count, 3);
        assert!((summary.average - 10.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(summary.histogram, [1, 0, 0, 1, 1]);
        assert_eq!(summary.as_worker.count, 2);
        assert_eq!(summary.as_worker.average, 4.5);
        assert_eq!(summary.as_hirer.average, 1.0);
    }
}
