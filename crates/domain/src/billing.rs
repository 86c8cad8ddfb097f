// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Invoice line arithmetic.
//!
//! All money math runs on `Decimal` and is rounded to cents with the
//! half-away-from-zero rule once per line, at the end of the
//! computation.

use crate::error::DomainError;
use crate::slot::ShiftSlot;
use rust_decimal::{Decimal, RoundingStrategy};

/// VAT multiplier applied to every invoice line.
pub const VAT_MULTIPLIER: Decimal = Decimal::from_parts(121, 0, 0, false, 2);

/// Per-hour platform markup charged to the employer on top of the
/// worker's rate.
pub const EMPLOYER_MARKUP: Decimal = Decimal::from_parts(250, 0, 0, false, 2);

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Which side of a slot an invoice line bills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingSide {
    /// Amount payable to the worker.
    Worker,
    /// Amount payable by the employer, including the platform markup.
    Employer,
}

/// Rounds an amount to cents, half away from zero.
#[must_use]
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes the billable hours of a slot from its checkout record.
///
/// Billable hours are the reported span minus the reported break. The
/// reported span never crosses midnight; a checkout whose end does not
/// fall after its start is invalid.
///
/// # Errors
///
/// Returns `DomainError::CheckoutMissing` if no checkout was submitted,
/// or `DomainError::NonPositiveCheckoutDuration` if the reported span
/// minus break is not positive.
pub fn billable_hours(slot: &ShiftSlot) -> Result<Decimal, DomainError> {
    let checkout = slot
        .checkout
        .as_ref()
        .ok_or(DomainError::CheckoutMissing { slot_id: slot.id })?;

    let span_minutes = (checkout.end - checkout.start).whole_minutes();
    let minutes = span_minutes - i64::from(checkout.break_minutes);
    if minutes <= 0 {
        return Err(DomainError::NonPositiveCheckoutDuration { slot_id: slot.id });
    }

    Ok(Decimal::from(minutes) / MINUTES_PER_HOUR)
}

/// Computes one invoice line for a slot, rounded to cents.
///
/// The worker side bills `hours x rate x VAT`; the employer side bills
/// `hours x (rate + markup) x VAT`.
///
/// # Errors
///
/// Returns an error if the checkout is missing or invalid, or if the
/// slot's hourly rate is not positive.
pub fn line_amount(slot: &ShiftSlot, side: BillingSide) -> Result<Decimal, DomainError> {
    if slot.hourly_rate <= Decimal::ZERO {
        return Err(DomainError::InvalidHourlyRate(format!(
            "slot {} has non-positive rate {}",
            slot.id, slot.hourly_rate
        )));
    }

    let hours = billable_hours(slot)?;
    let rate = match side {
        BillingSide::Worker => slot.hourly_rate,
        BillingSide::Employer => slot.hourly_rate + EMPLOYER_MARKUP,
    };

    Ok(round_cents(hours * rate * VAT_MULTIPLIER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::Checkout;
    use crate::slot_status::SlotStatus;
    use crate::timeframe::TimeWindow;
    use time::macros::{date, time};

    fn slot(rate: Decimal, checkout: Option<Checkout>) -> ShiftSlot {
        ShiftSlot {
            id: 8,
            posting: 2,
            employer: 5,
            employer_name: "Cafe Noord".to_string(),
            worker: Some(3),
            worker_name: Some("Mila Jansen".to_string()),
            title: "Bartender".to_string(),
            function: "Bartender".to_string(),
            address: "Kanaalstraat 1".to_string(),
            window: TimeWindow {
                date: date!(2026 - 04 - 03),
                start: time!(09:00),
                end: time!(17:00),
            },
            hourly_rate: rate,
            break_minutes: 30,
            status: SlotStatus::CheckoutAccepted,
            checkout,
        }
    }

    fn checkout(start: time::Time, end: time::Time, break_minutes: u32) -> Checkout {
        Checkout {
            start,
            end,
            break_minutes,
            rating: None,
            feedback: None,
            remark: None,
        }
    }

    #[test]
    fn test_worker_line_amount() {
        // 8h minus 30min break at 15.00/h: 7.5 x 15 x 1.21 = 136.125
        let s = slot(
            Decimal::new(1500, 2),
            Some(checkout(time!(09:00), time!(17:00), 30)),
        );
        assert_eq!(
            line_amount(&s, BillingSide::Worker).unwrap(),
            Decimal::new(13613, 2)
        );
    }

    #[test]
    fn test_employer_line_amount_includes_markup() {
        // 7.5 x 17.50 x 1.21 = 158.8125
        let s = slot(
            Decimal::new(1500, 2),
            Some(checkout(time!(09:00), time!(17:00), 30)),
        );
        assert_eq!(
            line_amount(&s, BillingSide::Employer).unwrap(),
            Decimal::new(15881, 2)
        );
    }

    #[test]
    fn test_missing_checkout_is_an_error() {
        let s = slot(Decimal::new(1500, 2), None);
        assert!(matches!(
            line_amount(&s, BillingSide::Worker),
            Err(DomainError::CheckoutMissing { slot_id: 8 })
        ));
    }

    #[test]
    fn test_break_swallowing_span_is_an_error() {
        let s = slot(
            Decimal::new(1500, 2),
            Some(checkout(time!(09:00), time!(09:30), 45)),
        );
        assert!(matches!(
            line_amount(&s, BillingSide::Worker),
            Err(DomainError::NonPositiveCheckoutDuration { slot_id: 8 })
        ));
    }

    #[test]
    fn test_end_before_start_is_an_error() {
        let s = slot(
            Decimal::new(1500, 2),
            Some(checkout(time!(17:00), time!(09:00), 0)),
        );
        assert!(line_amount(&s, BillingSide::Worker).is_err());
    }

    #[test]
    fn test_non_positive_rate_is_an_error() {
        let s = slot(
            Decimal::ZERO,
            Some(checkout(time!(09:00), time!(17:00), 30)),
        );
        assert!(matches!(
            line_amount(&s, BillingSide::Worker),
            Err(DomainError::InvalidHourlyRate(_))
        ));
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        assert_eq!(round_cents(Decimal::new(136125, 3)), Decimal::new(13613, 2));
        assert_eq!(round_cents(Decimal::new(1588125, 4)), Decimal::new(15881, 2));
    }
}
