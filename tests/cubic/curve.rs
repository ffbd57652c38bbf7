use satpress::cubic::{Cubic, CubicParameters, CubicVariant};
use satpress_core::parameter::{IdentifierOption, Parameter};
use satpress_core::{CubicEquationOfState, SolverOptions, VaporPressureCurve};
use std::error::Error;
use std::sync::Arc;

fn parameters(substance: &str) -> Result<Arc<CubicParameters>, Box<dyn Error>> {
    Ok(Arc::new(CubicParameters::from_json(
        substance,
        "parameters/components.json",
        IdentifierOption::Name,
    )?))
}

#[test]
fn methane_curve() -> Result<(), Box<dyn Error>> {
    let parameters = parameters("methane")?;
    let antoine = *parameters.antoine()?;
    let expected = [
        (CubicVariant::PengRobinson, 10),
        (CubicVariant::SoaveRedlichKwong, 7),
    ];
    for (variant, npoints) in expected {
        let eos = Cubic::new(parameters.clone(), variant);
        let curve = VaporPressureCurve::linspace(&eos, &antoine, 100.0, 10, SolverOptions::default())?;
        assert_eq!(curve.len(), npoints);
        assert!(curve.converged().iter().all(|&c| c));
        let t = curve.temperature();
        assert_eq!(t[0], 100.0);
        assert!(t[npoints - 1] < eos.critical_temperature());
        let p = curve.pressure();
        for i in 1..p.len() {
            assert!(p[i] > p[i - 1]);
        }
        assert!(curve.iterations().iter().all(|&i| i < 10));
    }
    // the correlation estimate has no liquid root above 160 K
    let eos = Cubic::soave_redlich_kwong(parameters);
    let curve = VaporPressureCurve::linspace(&eos, &antoine, 100.0, 10, SolverOptions::default())?;
    assert!(curve.temperature().iter().all(|&t| t < 160.0));
    Ok(())
}

#[test]
fn heptane_curve() -> Result<(), Box<dyn Error>> {
    // no liquid root at the correlation estimate close to the critical point
    let parameters = parameters("heptane")?;
    let antoine = *parameters.antoine()?;
    let eos = Cubic::soave_redlich_kwong(parameters);
    let curve = VaporPressureCurve::linspace(&eos, &antoine, 270.0, 10, SolverOptions::default())?;
    assert_eq!(curve.len(), 8);
    assert!(curve.temperature().iter().all(|&t| t < 486.0));
    assert_eq!(curve.initial_pressure()[0], antoine.vapor_pressure(270.0)?);
    Ok(())
}

#[test]
fn invalid_range() -> Result<(), Box<dyn Error>> {
    let parameters = parameters("propane")?;
    let antoine = *parameters.antoine()?;
    let eos = Cubic::peng_robinson(parameters);
    let options = SolverOptions::default();
    assert!(VaporPressureCurve::linspace(&eos, &antoine, 400.0, 10, options).is_err());
    assert!(VaporPressureCurve::linspace(&eos, &antoine, 200.0, 0, options).is_err());
    Ok(())
}

#[cfg(feature = "rayon")]
#[test]
fn parallel_curve() -> Result<(), Box<dyn Error>> {
    let parameters = parameters("water")?;
    let antoine = *parameters.antoine()?;
    let eos = Cubic::peng_robinson(parameters);
    let options = SolverOptions::default();
    let serial = VaporPressureCurve::linspace(&eos, &antoine, 320.0, 12, options)?;
    let thread_pool = rayon::ThreadPoolBuilder::new().num_threads(2).build()?;
    let parallel = VaporPressureCurve::par_pure(&eos, &antoine, 320.0, 12, 5, thread_pool, options)?;
    assert_eq!(serial.len(), parallel.len());
    assert_eq!(serial.temperature(), parallel.temperature());
    assert_eq!(serial.pressure(), parallel.pressure());
    Ok(())
}
