// ============================================================================
// Reference Data Module
// Static ingredient data consumed by the calculation engine
// ============================================================================

mod grains;
mod ingredient_table;

pub use ingredient_table::IngredientTable;
