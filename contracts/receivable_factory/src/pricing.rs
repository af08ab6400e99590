use crate::storage::BASIS_POINTS;
use receivable_oracle::RATING_CEILING;

/// Calculate the risk-adjusted purchase price for an instrument
///
/// Formula: premium_bps = base_risk_rate × (10 - rating) / 10
///          adjusted    = nominal × (10,000 + premium_bps) / 10,000
///
/// Lower rating means a larger premium and a higher price; a top-rated
/// issuer (or a zero base rate) pays no premium at all. The result is
/// capped at face_value - 1 so the discount is never erased.
///
/// Example:
/// - nominal: 1,000, base_risk_rate: 200 bps, rating: 5
/// - premium: 200 × 5 / 10 = 100 bps
/// - adjusted: 1,000 × 10,100 / 10,000 = 1,010
pub fn compute_adjusted_price(
    nominal_price: i128,
    rating: u32,
    base_risk_rate_bps: u32,
    face_value: i128,
) -> Option<i128> {
    let rating = rating.min(RATING_CEILING);
    let premium_bps =
        (base_risk_rate_bps as i128) * ((RATING_CEILING - rating) as i128) / (RATING_CEILING as i128);

    let adjusted = nominal_price
        .checked_mul(BASIS_POINTS + premium_bps)?
        .checked_div(BASIS_POINTS)?;

    // Preserve the discount invariant: adjusted price stays below face value
    Some(adjusted.min(face_value - 1))
}

/// Calculate the redemption payout proportional to the amount invested
///
/// Formula: payout = face_value × invested / discount_at_purchase
///
/// Multiplication is checked before the (truncating) division so precision
/// is only lost once, at the end. In the exact-payment lifecycle invested
/// equals the adjusted price charged, so a par purchase pays exactly face.
///
/// Example:
/// - face_value: 120, invested: 100, discount: 100
/// - payout: 120 × 100 / 100 = 120
pub fn compute_payout(face_value: i128, invested: i128, discount_at_purchase: i128) -> Option<i128> {
    if discount_at_purchase == 0 {
        // Free instruments carry no proportion to scale by
        return Some(face_value);
    }

    face_value
        .checked_mul(invested)?
        .checked_div(discount_at_purchase)
}
