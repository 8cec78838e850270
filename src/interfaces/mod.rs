// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod gravity_lookup;

pub use gravity_lookup::GravityLookup;
