// ============================================================================
// Currency Units
// Unit words that follow a spelled-out quantity
// ============================================================================

/// Unit of a monetary quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Dollar,
    Cent,
}

impl Unit {
    /// Unit word for `quantity`: singular iff the quantity is exactly one.
    pub const fn word(self, quantity: u32) -> &'static str {
        match (self, quantity == 1) {
            (Unit::Dollar, true) => "DOLLAR",
            (Unit::Dollar, false) => "DOLLARS",
            (Unit::Cent, true) => "CENT",
            (Unit::Cent, false) => "CENTS",
        }
    }
}
