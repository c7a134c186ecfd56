//! Correctness tests for paccommers-tier.
//!
//! Validates that:
//! 1. Every input classifies to one of the three tiers, and to the nearest one
//! 2. Reference points classify as their own tier
//! 3. The worked 7/12 example lands on gold
//! 4. Checkout pricing applies the tier discount and refuses unclassified users
//! 5. Determinism: same inputs always produce the same outputs

use paccommers_tier::{
    classify, euclidean_distance, price, price_for_label, MembershipError, MembershipRecord,
    ReferencePoint, Tier,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 42;

fn sample_basket() -> Vec<f64> {
    vec![500_000.0, 750_000.0, 1_200_000.0]
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[test]
fn random_points_classify_to_nearest_tier() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..10_000 {
        let expense = rng.gen_range(-20.0..40.0);
        let income = rng.gen_range(-20.0..60.0);
        let result = classify(expense, income);

        assert!(Tier::ALL.contains(&result.tier));
        assert_eq!(result.distances.len(), Tier::ALL.len());

        let member = ReferencePoint::new(expense, income);
        let winner = euclidean_distance(member, result.tier.reference_point());
        for tier in Tier::ALL {
            let d = euclidean_distance(member, tier.reference_point());
            assert!(
                winner <= d,
                "({}, {}) classified {} at {} but {} is at {}",
                expense,
                income,
                result.tier,
                winner,
                tier,
                d
            );
        }
    }
}

#[test]
fn exact_reference_points() {
    assert_eq!(classify(8.0, 15.0).tier, Tier::Platinum);
    assert_eq!(classify(6.0, 10.0).tier, Tier::Gold);
    assert_eq!(classify(5.0, 7.0).tier, Tier::Silver);
}

#[test]
fn worked_example_distances() {
    let result = classify(7.0, 12.0);
    let rounded: Vec<(Tier, String)> = result
        .distances
        .iter()
        .map(|d| (d.tier, format!("{:.3}", d.distance)))
        .collect();
    assert_eq!(
        rounded,
        vec![
            (Tier::Platinum, "3.162".to_string()),
            (Tier::Gold, "2.236".to_string()),
            (Tier::Silver, "5.385".to_string()),
        ]
    );
    assert_eq!(result.tier, Tier::Gold);
}

#[test]
fn platinum_gold_tie_prefers_platinum() {
    // Midpoint of platinum (8,15) and gold (6,10).
    let result = classify(7.0, 12.5);
    assert_eq!(
        result.distance_to(Tier::Platinum),
        result.distance_to(Tier::Gold)
    );
    assert_eq!(result.tier, Tier::Platinum);
}

#[test]
fn classification_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..100 {
        let expense = rng.gen_range(0.0..20.0);
        let income = rng.gen_range(0.0..30.0);
        assert_eq!(classify(expense, income), classify(expense, income));
    }
}

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

#[test]
fn gold_checkout_matches_worked_example() {
    let quote = price(Tier::Gold, &sample_basket());
    assert_eq!(quote.total_price, 2_450_000.0);
    assert_eq!(quote.final_price, 2_205_000.0);
}

#[test]
fn empty_basket_is_zero_for_every_label() {
    for label in ["platinum", "gold", "silver", "unknown"] {
        assert_eq!(price_for_label(label, &[]).final_price, 0.0);
    }
}

#[test]
fn higher_tiers_never_pay_more() {
    let basket = sample_basket();
    let platinum = price(Tier::Platinum, &basket).final_price;
    let gold = price(Tier::Gold, &basket).final_price;
    let silver = price(Tier::Silver, &basket).final_price;
    assert!(platinum < gold);
    assert!(gold < silver);
    assert!(silver < price_for_label("none", &basket).final_price);
}

// ---------------------------------------------------------------------------
// Record lifecycle
// ---------------------------------------------------------------------------

#[test]
fn record_must_be_classified_before_pricing() {
    let mut user = MembershipRecord::new("Kresna", 7.0, 12.0);
    assert_eq!(
        user.calculate_price(&sample_basket()).unwrap_err(),
        MembershipError::UninitializedMembership
    );

    user.predict_membership();
    let quote = user.calculate_price(&sample_basket()).unwrap();
    assert_eq!(quote.membership, Some(Tier::Gold));
    assert_eq!(quote.final_price, 2_205_000.0);
}

#[test]
fn independent_records_do_not_share_state() {
    let mut a = MembershipRecord::new("a", 8.0, 15.0);
    let b = MembershipRecord::new("b", 5.0, 7.0);
    a.predict_membership();
    assert_eq!(a.membership(), Some(Tier::Platinum));
    assert_eq!(b.membership(), None);
}
