//! Property-style checks that sweep the scoring engine over a grid of
//! answer sets, including blank, malformed, negative and extreme values.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use venture_core::{AnswerSet, FieldId, PaybackPeriod, Rating, VentureInputs, VentureScorer};

const PRICES: [&str; 6] = ["", "0", "1", "5", "250.75", "-3"];
const COSTS: [&str; 4] = ["", "1.5", "9", "abc"];
const TRAFFIC: [&str; 5] = ["", "10", "1000", "1500", "79228162514264337593543950335"];
const CONVERSION: [&str; 4] = ["0", "2", "2.5", "100"];
const EXPENSES: [&str; 3] = ["", "500", "-200"];
const INVESTMENT: [&str; 3] = ["", "0", "50000"];

fn answer_grid() -> Vec<AnswerSet> {
    let mut grid = Vec::new();
    for price in PRICES {
        for cost in COSTS {
            for traffic in TRAFFIC {
                for conversion in CONVERSION {
                    for expenses in EXPENSES {
                        for investment in INVESTMENT {
                            grid.push(
                                AnswerSet::new()
                                    .with(FieldId::PricePoint, price)
                                    .with(FieldId::CostPrice, cost)
                                    .with(FieldId::DailyTraffic, traffic)
                                    .with(FieldId::ConversionRate, conversion)
                                    .with(FieldId::MonthlyExpenses, expenses)
                                    .with(FieldId::InitialInvestment, investment),
                            );
                        }
                    }
                }
            }
        }
    }
    grid
}

#[test]
fn score_stays_within_bounds() {
    let scorer = VentureScorer::default();

    for answers in answer_grid() {
        let result = scorer.score(&answers);

        assert!(result.score <= 100, "score {} for {answers:?}", result.score);
    }
}

#[test]
fn every_factor_respects_its_cap() {
    let scorer = VentureScorer::default();

    for answers in answer_grid() {
        let factors = scorer.score(&answers).factors;

        assert!(factors.margin <= dec!(30), "{answers:?}");
        assert!(factors.demand <= dec!(20), "{answers:?}");
        assert!(factors.profitability <= dec!(20), "{answers:?}");
        assert!(factors.scalability <= dec!(15), "{answers:?}");
        assert!(factors.stability <= dec!(15), "{answers:?}");
    }
}

#[test]
fn payback_matches_daily_profit_sign() {
    let scorer = VentureScorer::default();

    for answers in answer_grid() {
        let inputs = VentureInputs::from_answers(&answers, dec!(1000));
        let result = scorer.score_inputs(&inputs);
        let unrounded_daily_profit = result
            .daily_buyers
            .saturating_mul(inputs.price.saturating_sub(inputs.cost));

        match result.payback {
            PaybackPeriod::Never => assert!(unrounded_daily_profit <= Decimal::ZERO),
            PaybackPeriod::Days(days) => {
                assert!(unrounded_daily_profit > Decimal::ZERO);
                assert_eq!(days, (inputs.initial_investment / unrounded_daily_profit).ceil());
            }
        }
    }
}

#[test]
fn rating_agrees_with_score() {
    let scorer = VentureScorer::default();

    for answers in answer_grid() {
        let result = scorer.score(&answers);

        assert_eq!(result.rating, Rating::from_score(result.score));
    }
}

#[test]
fn scoring_is_deterministic() {
    let scorer = VentureScorer::default();

    for answers in answer_grid().into_iter().step_by(37) {
        assert_eq!(scorer.score(&answers), scorer.score(&answers));
    }
}

#[test]
fn zero_price_never_yields_a_margin_percent() {
    let scorer = VentureScorer::default();

    for answers in answer_grid() {
        let inputs = VentureInputs::from_answers(&answers, dec!(1000));
        let result = scorer.score_inputs(&inputs);

        if inputs.price.is_zero() {
            assert_eq!(result.margin_pct, None);
            assert_eq!(result.factors.margin, Decimal::ZERO);
        } else {
            assert!(result.margin_pct.is_some());
        }
    }
}
