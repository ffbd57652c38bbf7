use approx::assert_relative_eq;
use satpress::cubic::{Cubic, CubicParameters, CubicRecord, CubicVariant};
use satpress_core::parameter::{ComponentTable, IdentifierOption, Parameter};
use satpress_core::{
    AntoineRecord, CubicEquationOfState, EosError, FugacityBalance, IterationEvent,
    SolverOptions, SolverStatus, VaporPressure, Verbosity, RGAS,
};
use std::error::Error;
use std::sync::Arc;

fn cubic(substance: &str, variant: CubicVariant) -> Result<(Cubic, AntoineRecord), Box<dyn Error>> {
    let table: ComponentTable<CubicRecord> =
        ComponentTable::from_json("parameters/components.json", IdentifierOption::Name)?;
    let parameters = CubicParameters::from_table(&table, substance)?;
    let antoine = *parameters.antoine()?;
    Ok((Cubic::new(Arc::new(parameters), variant), antoine))
}

#[test]
fn methane_120k() -> Result<(), Box<dyn Error>> {
    let expected = [
        (CubicVariant::SoaveRedlichKwong, 360289.281516),
        (CubicVariant::PengRobinson, 193041.174195),
    ];
    for (variant, p_expected) in expected {
        let (eos, antoine) = cubic("methane", variant)?;
        let options = SolverOptions::new().verbosity(Verbosity::Iter);
        let vp = VaporPressure::from_correlation(&eos, &antoine, 120.0, options)?;
        assert!(vp.converged);
        assert_eq!(vp.status(), SolverStatus::Converged);
        assert!(vp.iterations <= 5);
        assert_relative_eq!(vp.initial_pressure, 191629.7495, max_relative = 1e-8);
        assert_relative_eq!(vp.pressure, p_expected, max_relative = 1e-8);

        let fugacities = vp.fugacities.unwrap();
        assert!(fugacities.error() < 1e-3);
        assert!(fugacities.phi_vapor < 1.0);
        assert_relative_eq!(fugacities.phi_vapor, fugacities.phi_liquid, max_relative = 1e-8);
    }
    Ok(())
}

#[test]
fn methane_from_one_atmosphere() -> Result<(), Box<dyn Error>> {
    let (eos, _) = cubic("methane", CubicVariant::SoaveRedlichKwong)?;
    let vp = VaporPressure::pure(&eos, 120.0, 101325.0, SolverOptions::default())?;
    assert!(vp.converged);
    assert!(vp.iterations < 100);
    assert_eq!(vp.initial_pressure, 101325.0);
    assert_relative_eq!(vp.pressure, 360289.281516, max_relative = 1e-8);
    let phases = vp.phases.unwrap();
    assert!(phases.vapor > 0.9 && phases.vapor < 1.0);
    Ok(())
}

#[test]
fn fixed_point() -> Result<(), Box<dyn Error>> {
    for variant in [CubicVariant::SoaveRedlichKwong, CubicVariant::PengRobinson] {
        for substance in ["methane", "propane", "pentane", "heptane", "water"] {
            let (eos, antoine) = cubic(substance, variant)?;
            let t = 0.7 * eos.critical_temperature();
            let vp = VaporPressure::from_correlation(&eos, &antoine, t, Default::default())?;
            assert!(vp.converged, "{} {} at {} K", substance, variant, t);
            let again = VaporPressure::pure(&eos, t, vp.pressure, Default::default())?;
            assert!(again.converged);
            assert!(again.iterations <= 2);
            assert_relative_eq!(again.pressure, vp.pressure, max_relative = 1e-9);
        }
    }
    Ok(())
}

#[test]
fn single_phase() -> Result<(), Box<dyn Error>> {
    for variant in [CubicVariant::SoaveRedlichKwong, CubicVariant::PengRobinson] {
        let (eos, antoine) = cubic("heptane", variant)?;
        let result = VaporPressure::from_correlation(&eos, &antoine, 513.0, Default::default());
        assert!(matches!(result, Err(EosError::SinglePhase(..))));
        assert!(result.is_err_and(|e| e.is_domain_error()));
    }
    // water still has two phases close to its critical point
    let (eos, antoine) = cubic("water", CubicVariant::PengRobinson)?;
    let vp = VaporPressure::from_correlation(&eos, &antoine, 0.95 * 647.0, Default::default())?;
    assert!(vp.converged);
    Ok(())
}

#[test]
fn exhausted() -> Result<(), Box<dyn Error>> {
    let (eos, antoine) = cubic("methane", CubicVariant::SoaveRedlichKwong)?;
    let options = SolverOptions::new().max_iter(1);
    let vp = VaporPressure::from_correlation(&eos, &antoine, 120.0, options)?;
    assert!(!vp.converged);
    assert_eq!(vp.status(), SolverStatus::Exhausted);
    assert_eq!(vp.iterations, 1);
    // a single Newton step moves most of the way from the correlation estimate
    assert!(vp.pressure > 350000.0 && vp.pressure < 360289.281516);
    assert!(vp.to_string().contains("not converged"));
    Ok(())
}

#[test]
fn observer() -> Result<(), Box<dyn Error>> {
    let (eos, antoine) = cubic("propane", CubicVariant::PengRobinson)?;
    let p0 = antoine.vapor_pressure(250.0)?;
    let mut events: Vec<IterationEvent> = Vec::new();
    let vp = VaporPressure::pure_with_observer(
        &eos,
        250.0,
        p0,
        SolverOptions::default(),
        &mut |e: &IterationEvent| events.push(*e),
    )?;
    assert_eq!(events.len(), vp.iterations);
    assert_eq!(events[0].pressure, p0);
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.iteration, i + 1);
        assert_eq!(event.error, event.mismatch.abs());
        assert!(event.derivative != 0.0);
    }
    for pair in events.windows(2) {
        assert_eq!(pair[0].new_pressure, pair[1].pressure);
    }
    let last = events.last().unwrap();
    assert_eq!(last.new_pressure, vp.pressure);
    assert!(last.error < events[0].error);
    Ok(())
}

#[test]
fn fugacity_balance() -> Result<(), Box<dyn Error>> {
    let (eos, _) = cubic("methane", CubicVariant::SoaveRedlichKwong)?;
    let balance = FugacityBalance::new(&eos, 120.0)?;
    let p_sat = 360289.281516;
    // the vapor is more stable below the vapor pressure
    assert!(balance.mismatch(0.9 * p_sat)? < 0.0);
    assert!(balance.mismatch(1.1 * p_sat)? > 0.0);
    assert!(balance.error(p_sat)? < 1e-3);
    assert!(balance.derivative(p_sat, 0.01)? > 0.0);

    let state = balance.state(101325.0)?;
    assert_eq!(state.f_vapor, state.phi_vapor * 101325.0);
    assert_relative_eq!(state.f_liquid, state.phi_liquid * 101325.0, max_relative = 1e-15);
    assert!(FugacityBalance::new(&eos, 0.0).is_err());
    Ok(())
}

#[test]
fn enthalpy_of_vaporization() -> Result<(), Box<dyn Error>> {
    let t = 250.0;
    for variant in [CubicVariant::SoaveRedlichKwong, CubicVariant::PengRobinson] {
        let (eos, antoine) = cubic("propane", variant)?;
        let vp = VaporPressure::from_correlation(&eos, &antoine, t, Default::default())?;
        let dh = vp.enthalpy_of_vaporization(&eos)?;

        // Clapeyron equation with a central difference of the vapor pressure
        let p_plus = VaporPressure::pure(&eos, t + 0.5, vp.pressure, Default::default())?;
        let p_minus = VaporPressure::pure(&eos, t - 0.5, vp.pressure, Default::default())?;
        let phases = vp.phases.unwrap();
        let dv = (phases.vapor - phases.liquid.unwrap()) * RGAS * t / vp.pressure;
        let clapeyron = t * dv * (p_plus.pressure - p_minus.pressure);
        assert_relative_eq!(dh, clapeyron, max_relative = 1e-3);
        assert!(dh > 15000.0 && dh < 20000.0);
    }
    Ok(())
}
