// ============================================================================
// Grain Calculations
// Grain quantities, grain bills and weight conversions
// ============================================================================

use super::gravity::{expected_yield, sg_to_ppg, total_gravity_points};
use crate::domain::{GrainBill, GrainBillEntry, PoundsOunces, RecipeGrain, OUNCES_PER_POUND};
use crate::error::BrewResult;
use crate::interfaces::GravityLookup;
use crate::numeric::{
    checked_add, checked_div, checked_mul, checked_sub, normalize, NumericError, ToDecimal,
    DEFAULT_PLACES,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Ounces are reported with one decimal place
const OUNCE_PLACES: i32 = 1;

/// Split decimal pounds into whole pounds and ounces.
///
/// Whole pounds are truncated toward zero; the remainder is scaled by 16 and
/// rounded half-up to one decimal place. No carry is applied, so
/// `0.998 lb` becomes `0 lbs, 16.0 oz`.
///
/// # Example
/// ```
/// use brew_calc::engine::lbs_to_lbs_oz;
/// use rust_decimal::Decimal;
///
/// let weight = lbs_to_lbs_oz(1.5).unwrap();
/// assert_eq!(weight.pounds, 1);
/// assert_eq!(weight.ounces, Decimal::from(8));
/// ```
pub fn lbs_to_lbs_oz(lbs: impl ToDecimal) -> BrewResult<PoundsOunces> {
    let lbs = lbs.to_decimal()?;
    let whole = lbs.trunc();
    let pounds = whole.to_i64().ok_or(NumericError::Overflow)?;

    let fraction = checked_sub(lbs, whole)?;
    let ounces = normalize(
        checked_mul(fraction, Decimal::from(OUNCES_PER_POUND))?,
        OUNCE_PLACES,
    )?;

    Ok(PoundsOunces::new(pounds, ounces))
}

/// Pounds of a grain needed to supply its share of the total gravity points.
///
/// # Errors
/// Returns `DivisionByZero` when `expected_yield` is zero.
pub fn grain_qty(
    total_gravity_points: impl ToDecimal,
    grain_ratio: impl ToDecimal,
    expected_yield: impl ToDecimal,
) -> BrewResult<Decimal> {
    let points = checked_mul(total_gravity_points.to_decimal()?, grain_ratio.to_decimal()?)?;
    Ok(normalize(
        checked_div(points, expected_yield.to_decimal()?)?,
        DEFAULT_PLACES,
    )?)
}

/// Decimal-pound weight of every grain in the recipe, in recipe order.
///
/// Each grain's maximum gravity comes from `table`; the first missing
/// ingredient aborts the whole computation.
pub fn grain_weights<L>(
    table: &L,
    target_gravity: impl ToDecimal,
    volume: impl ToDecimal,
    recipe: &[RecipeGrain],
) -> BrewResult<Vec<(String, Decimal)>>
where
    L: GravityLookup + ?Sized,
{
    let total_points = total_gravity_points(target_gravity, volume)?;

    recipe
        .iter()
        .map(|grain| -> BrewResult<(String, Decimal)> {
            let max_yield = sg_to_ppg(table.max_gravity(&grain.name)?)?;
            let grain_yield = expected_yield(max_yield, grain.efficiency)?;
            let pounds = grain_qty(total_points, grain.ratio, grain_yield)?;
            Ok((grain.name.clone(), pounds))
        })
        .collect()
}

/// Compute a recipe's grain bill for a target gravity and post-boil volume.
///
/// # Errors
/// - `UnknownIngredient` if any grain is missing from `table`
/// - `DivisionByZero` if a grain's expected yield is zero
///
/// No partial bill is returned on failure.
pub fn grain_bill<L>(
    table: &L,
    target_gravity: impl ToDecimal,
    volume: impl ToDecimal,
    recipe: &[RecipeGrain],
) -> BrewResult<GrainBill>
where
    L: GravityLookup + ?Sized,
{
    grain_weights(table, target_gravity, volume, recipe)?
        .into_iter()
        .map(|(name, pounds)| -> BrewResult<GrainBillEntry> {
            Ok(GrainBillEntry::new(name, lbs_to_lbs_oz(pounds)?))
        })
        .collect()
}

/// Sum the weights of a grain bill given as `(name, pounds)` pairs.
pub fn total_grain_weight<S, W>(grain_bill: &[(S, W)]) -> BrewResult<Decimal>
where
    W: ToDecimal,
{
    let total = grain_bill
        .iter()
        .try_fold(Decimal::ZERO, |acc, (_, weight)| {
            checked_add(acc, weight.to_decimal()?)
        })?;

    Ok(normalize(total, DEFAULT_PLACES)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BrewError;
    use crate::reference::IngredientTable;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn two_grain_recipe() -> Vec<RecipeGrain> {
        vec![
            RecipeGrain::new("American Wheat", 0.67, 0.68).unwrap(),
            RecipeGrain::new("American Pale (2-Row)", 0.33, 0.68).unwrap(),
        ]
    }

    #[test]
    fn test_lbs_to_lbs_oz() {
        assert_eq!(
            lbs_to_lbs_oz(8.5).unwrap(),
            PoundsOunces::new(8, dec("8.0"))
        );
        assert_eq!(
            lbs_to_lbs_oz(12.33).unwrap(),
            PoundsOunces::new(12, dec("5.3"))
        );
        assert_eq!(
            lbs_to_lbs_oz(0.67).unwrap(),
            PoundsOunces::new(0, dec("10.7"))
        );
        assert_eq!(lbs_to_lbs_oz(8.5).unwrap().ounces.to_string(), "8.0");
    }

    #[test]
    fn test_lbs_to_lbs_oz_does_not_carry() {
        // 0.998 lb = 15.968 oz, which rounds to 16.0 and stays in the ounces
        let weight = lbs_to_lbs_oz(0.998).unwrap();
        assert_eq!(weight, PoundsOunces::new(0, dec("16.0")));
        assert_eq!(weight.to_string(), "0 lbs, 16.0 oz");

        assert_eq!(
            lbs_to_lbs_oz(4.999).unwrap(),
            PoundsOunces::new(4, dec("16.0"))
        );
    }

    #[test]
    fn test_grain_qty() {
        assert_eq!(grain_qty(300, 0.75, 25).unwrap().to_string(), "9.000");
        assert_eq!(grain_qty(200, 1, 35).unwrap(), dec("5.714"));
    }

    #[test]
    fn test_grain_qty_zero_yield() {
        assert_eq!(
            grain_qty(300, 0.75, 0),
            Err(BrewError::Numeric(NumericError::DivisionByZero))
        );
    }

    #[test]
    fn test_grain_bill() {
        let table = IngredientTable::standard();
        let bill = grain_bill(table, 1.052, 5.5, &two_grain_recipe()).unwrap();

        assert_eq!(bill.len(), 2);
        assert_eq!(bill[0].name, "American Wheat");
        assert_eq!(bill[0].weight, PoundsOunces::new(7, dec("6.7")));
        assert_eq!(bill[1].name, "American Pale (2-Row)");
        assert_eq!(bill[1].weight, PoundsOunces::new(3, dec("12.0")));
    }

    #[test]
    fn test_grain_bill_matches_step_by_step() {
        let table = IngredientTable::standard();
        let bill = grain_bill(table, 1.052, 5.5, &two_grain_recipe()).unwrap();
        let total = total_gravity_points(1.052, 5.5).unwrap();

        for (entry, grain) in bill.iter().zip(two_grain_recipe()) {
            let max = sg_to_ppg(table.lookup(&grain.name).unwrap()).unwrap();
            let grain_yield = expected_yield(max, grain.efficiency).unwrap();
            let pounds = grain_qty(total, grain.ratio, grain_yield).unwrap();
            assert_eq!(entry.weight, lbs_to_lbs_oz(pounds).unwrap());
        }
    }

    #[test]
    fn test_grain_bill_preserves_order() {
        let table = IngredientTable::standard();
        let mut recipe = two_grain_recipe();
        recipe.reverse();

        let bill = grain_bill(table, 1.052, 5.5, &recipe).unwrap();
        assert_eq!(bill[0].name, "American Pale (2-Row)");
        assert_eq!(bill[1].name, "American Wheat");
    }

    #[test]
    fn test_grain_bill_unknown_ingredient() {
        let mut recipe = two_grain_recipe();
        recipe.push(RecipeGrain::new("Unobtainium", 0.1, 0.7).unwrap());

        let result = grain_bill(IngredientTable::standard(), 1.052, 5.5, &recipe);
        assert_eq!(
            result,
            Err(BrewError::UnknownIngredient("Unobtainium".to_string()))
        );
    }

    #[test]
    fn test_grain_bill_with_substitute_table() {
        let table = IngredientTable::from_entries([("House Malt", dec("1.040"))]);
        let recipe = [RecipeGrain::new("House Malt", 1, 0.5).unwrap()];

        // 40 points * 5 gal / (40 * 0.5) = 10 lb
        let bill = grain_bill(&table, 1.040, 5, &recipe).unwrap();
        assert_eq!(bill[0].weight, PoundsOunces::new(10, dec("0.0")));

        assert!(grain_bill(IngredientTable::standard(), 1.040, 5, &recipe).is_err());
    }

    #[test]
    fn test_grain_weights_unrounded_pounds() {
        let weights =
            grain_weights(IngredientTable::standard(), 1.052, 5.5, &two_grain_recipe()).unwrap();
        assert_eq!(weights[0], ("American Wheat".to_string(), dec("7.416")));
        assert_eq!(weights[1], ("American Pale (2-Row)".to_string(), dec("3.751")));
    }

    #[test]
    fn test_total_grain_weight() {
        let bill = [("grain1", 1.1), ("grain2", 2.2), ("grain3", 3.3)];
        assert_eq!(total_grain_weight(&bill).unwrap(), dec("6.6"));

        let bill = [("grain1", 1.1234), ("grain2", 2.2345), ("grain3", 3.3456)];
        assert_eq!(total_grain_weight(&bill).unwrap(), dec("6.704"));

        let empty: [(&str, Decimal); 0] = [];
        assert_eq!(total_grain_weight(&empty).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_total_grain_weight_order_independent() {
        let forward = [("a", 1.1234), ("b", 2.2345), ("c", 3.3456)];
        let backward = [("c", 3.3456), ("a", 1.1234), ("b", 2.2345)];
        assert_eq!(
            total_grain_weight(&forward).unwrap(),
            total_grain_weight(&backward).unwrap()
        );
    }
}
