use satpress::cubic::{Cubic, CubicParameters, CubicRecord, CubicVariant};
use satpress_core::parameter::{ComponentTable, IdentifierOption, Parameter, ParameterError};
use satpress_core::{CubicEquationOfState, VaporPressure};
use std::error::Error;
use std::sync::Arc;

const COMPONENTS: &str = "parameters/components.json";

#[test]
fn component_table() -> Result<(), Box<dyn Error>> {
    let table: ComponentTable<CubicRecord> =
        ComponentTable::from_json(COMPONENTS, IdentifierOption::Name)?;
    assert_eq!(table.len(), 5);
    for substance in ["methane", "propane", "pentane", "heptane", "water"] {
        let record = table.get(substance)?;
        assert!(record.antoine().is_ok());
        assert!(record.model_record.pc > 1e6);
    }
    assert!(matches!(
        table.select(&["methane", "octane"]),
        Err(ParameterError::ComponentsNotFound(_))
    ));
    let water = CubicParameters::from_table(&table, "water")?;
    assert_eq!(water.tc, 647.0);
    assert_eq!(water.pc, 220.64e5);
    Ok(())
}

#[test]
fn identifier_options() -> Result<(), Box<dyn Error>> {
    let by_cas: ComponentTable<CubicRecord> =
        ComponentTable::from_json(COMPONENTS, IdentifierOption::Cas)?;
    assert_eq!(by_cas.get("74-98-6")?.model_record.tc, 369.9);
    let by_formula: ComponentTable<CubicRecord> =
        ComponentTable::from_json(COMPONENTS, IdentifierOption::Formula)?;
    assert_eq!(by_formula.get("C7H16")?.model_record.acentric_factor, 0.302);
    let propane = CubicParameters::from_json("C3H8", COMPONENTS, IdentifierOption::Formula)?;
    assert_eq!(propane.record().identifier.name.as_deref(), Some("propane"));
    assert!(CubicParameters::from_json("octane", COMPONENTS, IdentifierOption::Name).is_err());
    Ok(())
}

#[test]
fn variant_from_config() -> Result<(), Box<dyn Error>> {
    let table: ComponentTable<CubicRecord> =
        ComponentTable::from_json(COMPONENTS, IdentifierOption::Name)?;
    let parameters = Arc::new(CubicParameters::from_table(&table, "propane")?);
    let antoine = *parameters.antoine()?;
    for name in ["srk", "pr"] {
        let variant: CubicVariant = name.parse()?;
        let eos = Cubic::new(parameters.clone(), variant);
        assert_eq!(eos.form(), variant.form());
        let vp = VaporPressure::from_correlation(&eos, &antoine, 250.0, Default::default())?;
        assert!(vp.converged);
    }
    Ok(())
}
