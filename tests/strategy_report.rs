use approx::assert_relative_eq;
use optstrat::core::{OptionType, PositionDirection};
use optstrat::instruments::StrategyLeg;
use optstrat::strategy::{PAYOFF_GRID_POINTS, Strategy, StrategyBuilder, evaluate};

fn base_builder() -> StrategyBuilder {
    Strategy::builder()
        .spot(100.0)
        .rate(0.05)
        .dividend_yield(0.0)
        .vol(0.20)
        .expiry(1.0)
}

fn leg(
    option_type: OptionType,
    position: PositionDirection,
    strike: f64,
    quantity: f64,
) -> StrategyLeg {
    StrategyLeg::new(option_type, position, strike, quantity)
}

#[test]
fn payoff_grid_invariants_hold_for_any_strategy() {
    let strategies = [
        base_builder().build().unwrap(),
        base_builder()
            .leg(leg(OptionType::Call, PositionDirection::Long, 100.0, 1.0))
            .build()
            .unwrap(),
        base_builder()
            .legs([
                leg(OptionType::Put, PositionDirection::Long, 90.0, 1.0),
                leg(OptionType::Put, PositionDirection::Short, 95.0, 1.0),
                leg(OptionType::Call, PositionDirection::Short, 105.0, 1.0),
                leg(OptionType::Call, PositionDirection::Long, 110.0, 1.0),
            ])
            .build()
            .unwrap(),
    ];

    for strategy in &strategies {
        let report = evaluate(strategy);
        let payoff = &report.payoff;

        assert_eq!(payoff.len(), PAYOFF_GRID_POINTS);
        assert_eq!(payoff[0].underlying, 0.5 * strategy.market.spot);
        assert_eq!(
            payoff[PAYOFF_GRID_POINTS - 1].underlying,
            1.5 * strategy.market.spot
        );
        assert!(payoff.windows(2).all(|w| w[0].underlying < w[1].underlying));
    }
}

#[test]
fn single_leg_strategy_equals_its_leg() {
    let strategy = base_builder()
        .leg(leg(OptionType::Put, PositionDirection::Short, 95.0, 2.0))
        .build()
        .unwrap();
    let report = evaluate(&strategy);

    assert_eq!(report.legs.len(), 1);
    assert_eq!(report.total_price, report.legs[0].price);
    assert_eq!(report.total_greeks, report.legs[0].greeks);
}

#[test]
fn long_straddle_symmetry_and_break_evens() {
    let strategy = base_builder()
        .legs([
            leg(OptionType::Call, PositionDirection::Long, 100.0, 1.0),
            leg(OptionType::Put, PositionDirection::Long, 100.0, 1.0),
        ])
        .build()
        .unwrap();
    let report = evaluate(&strategy);

    // Premium paid for both legs: about 10.4506 + 5.5735.
    let premium = report.total_price;
    assert_relative_eq!(premium, 16.0241, epsilon = 1e-3);

    // Payoff |P - K| - premium is symmetric about spot; the grid pairs up
    // exactly around it.
    for i in 0..PAYOFF_GRID_POINTS / 2 {
        let mirrored = PAYOFF_GRID_POINTS - 1 - i;
        assert_relative_eq!(
            report.payoff[i].profit,
            report.payoff[mirrored].profit,
            epsilon = 1e-9
        );
    }

    // One break-even each side of the strike, premium away from it.
    assert_eq!(report.break_evens.len(), 2);
    let (lower, upper) = (report.break_evens[0], report.break_evens[1]);
    assert!(lower < 100.0 && upper > 100.0);
    assert_relative_eq!(100.0 - lower, premium, epsilon = 0.02);
    assert_relative_eq!(upper - 100.0, premium, epsilon = 0.02);

    // Loss is capped near the premium. The grid has no sample exactly at the
    // strike, so the observed minimum sits half a grid step up the V shape.
    let half_step = strategy.market.spot / 49.0 / 2.0;
    assert_relative_eq!(
        report.max_loss.unwrap(),
        half_step - premium,
        epsilon = 1e-9
    );
    // Best sampled gain is at the grid edge, 1.5x spot.
    assert_relative_eq!(report.max_profit.unwrap(), 50.0 - premium, epsilon = 1e-9);
}

#[test]
fn iron_condor_has_two_break_evens_inside_the_wings() {
    // Long put 90 / short put 95 / short call 105 / long call 110.
    let strategy = base_builder()
        .legs([
            leg(OptionType::Put, PositionDirection::Long, 90.0, 1.0),
            leg(OptionType::Put, PositionDirection::Short, 95.0, 1.0),
            leg(OptionType::Call, PositionDirection::Short, 105.0, 1.0),
            leg(OptionType::Call, PositionDirection::Long, 110.0, 1.0),
        ])
        .build()
        .unwrap();
    let report = evaluate(&strategy);

    // The condor collects premium.
    let credit = -report.total_price;
    assert!(credit > 0.0);
    assert_relative_eq!(credit, 3.3844, epsilon = 1e-3);

    assert_eq!(report.break_evens.len(), 2);
    let (lower, upper) = (report.break_evens[0], report.break_evens[1]);

    // Break-evens sit credit away from the short strikes, inside the wings.
    assert!(90.0 < lower && lower < 95.0);
    assert!(105.0 < upper && upper < 110.0);
    assert_relative_eq!(lower, 95.0 - credit, epsilon = 0.01);
    assert_relative_eq!(upper, 105.0 + credit, epsilon = 0.01);

    // Flat top between the short strikes, capped loss past the wings.
    assert_relative_eq!(report.max_profit.unwrap(), credit, epsilon = 1e-9);
    assert_relative_eq!(report.max_loss.unwrap(), credit - 5.0, epsilon = 1e-9);
}

#[test]
fn quantity_scales_the_whole_report_linearly() {
    let unit = base_builder()
        .leg(leg(OptionType::Call, PositionDirection::Long, 100.0, 1.0))
        .build()
        .unwrap();
    let sized = base_builder()
        .leg(leg(OptionType::Call, PositionDirection::Long, 100.0, 4.0))
        .build()
        .unwrap();

    let unit_report = evaluate(&unit);
    let sized_report = evaluate(&sized);

    assert_relative_eq!(
        sized_report.total_price,
        4.0 * unit_report.total_price,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        sized_report.total_greeks.vega,
        4.0 * unit_report.total_greeks.vega,
        epsilon = 1e-12
    );
    for (sized_point, unit_point) in sized_report.payoff.iter().zip(&unit_report.payoff) {
        assert_relative_eq!(sized_point.profit, 4.0 * unit_point.profit, epsilon = 1e-9);
    }
}

#[test]
fn break_evens_are_ascending_and_rounded() {
    let strategy = base_builder()
        .legs([
            leg(OptionType::Put, PositionDirection::Long, 90.0, 1.0),
            leg(OptionType::Put, PositionDirection::Short, 95.0, 1.0),
            leg(OptionType::Call, PositionDirection::Short, 105.0, 1.0),
            leg(OptionType::Call, PositionDirection::Long, 110.0, 1.0),
        ])
        .build()
        .unwrap();
    let report = evaluate(&strategy);

    assert!(report.break_evens.windows(2).all(|w| w[0] < w[1]));
    for be in &report.break_evens {
        assert_relative_eq!(be * 100.0, (be * 100.0).round(), epsilon = 1e-9);
    }
}

#[test]
fn covered_short_call_report_is_consistent_with_its_parts() {
    // Short call financed by a long deeper call, uneven quantities.
    let strategy = base_builder()
        .legs([
            leg(OptionType::Call, PositionDirection::Long, 95.0, 1.0),
            leg(OptionType::Call, PositionDirection::Short, 105.0, 1.5),
        ])
        .build()
        .unwrap();
    let report = evaluate(&strategy);

    let recomputed_price: f64 = report.legs.iter().map(|l| l.price).sum();
    assert_relative_eq!(report.total_price, recomputed_price, epsilon = 1e-12);

    let recomputed_delta: f64 = report.legs.iter().map(|l| l.greeks.delta).sum();
    assert_relative_eq!(report.total_greeks.delta, recomputed_delta, epsilon = 1e-12);
}
