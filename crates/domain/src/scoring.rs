// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Worker and employer score arithmetic.
//!
//! Ratings are running averages over the number of reviewed checkouts.
//! Punctuality and attendance are 0-100 scores that only ever decay;
//! the penalty shrinks as a worker accumulates history, so one bad day
//! weighs less on a long record.

use crate::error::DomainError;
use crate::types::{Employer, Worker};

/// Validates a 0-5 rating value.
///
/// # Errors
///
/// Returns `DomainError::InvalidRating` if the value is out of range or
/// not finite.
pub fn validate_rating(rating: f64) -> Result<(), DomainError> {
    if rating.is_finite() && (0.0..=5.0).contains(&rating) {
        Ok(())
    } else {
        Err(DomainError::InvalidRating { rating })
    }
}

/// Folds an accepted checkout rating into the worker's scores.
///
/// The rating average absorbs the new value, the review count grows by
/// one, and a late arrival costs `100 / new_count` punctuality points,
/// floored at zero.
pub fn apply_checkout_rating(worker: &mut Worker, rating: f64, late: bool) {
    let new_count = worker.rating_count + 1;
    worker.rating = f64::from(worker.rating_count).mul_add(worker.rating, rating)
        / f64::from(new_count);
    if late {
        worker.punctuality = (worker.punctuality - 100.0 / f64::from(new_count)).max(0.0);
    }
    worker.rating_count = new_count;
}

/// Applies the lateness penalty for a rejected checkout.
///
/// A rejection carries no rating, but a late arrival still counts
/// against punctuality and grows the review count.
pub fn apply_late_rejection(worker: &mut Worker) {
    worker.rating_count += 1;
    worker.punctuality = (worker.punctuality - 100.0 / f64::from(worker.rating_count)).max(0.0);
}

/// Applies the attendance penalty for a no-show.
///
/// Attendance drops by `1 / rating_count` points, floored at zero.
/// Workers with no review history are treated as having one.
pub fn apply_no_show(worker: &mut Worker) {
    let count = worker.rating_count.max(1);
    worker.attendance = (worker.attendance - 1.0 / f64::from(count)).max(0.0);
}

/// Recomputes the employer's rating from all historical checkout ratings.
///
/// Called when a worker submits a checkout with a rating attached. The
/// slice holds every rating ever given to the employer, including the
/// new one. An empty slice leaves the scores untouched.
pub fn recompute_employer_rating(employer: &mut Employer, ratings: &[f64]) {
    if ratings.is_empty() {
        return;
    }
    let count = u32::try_from(ratings.len()).unwrap_or(u32::MAX);
    employer.rating = ratings.iter().sum::<f64>() / f64::from(count);
    employer.rating_count = count;
}
