/// Tablespoons in one cup.
pub const TABLESPOONS_PER_CUP: f64 = 16.0;

/// Units the reconciliation table knows how to convert between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitFamily {
    Cup,
    Tablespoon,
    Other,
}

impl UnitFamily {
    pub fn of(unit: &str) -> Self {
        match unit.trim().to_lowercase().as_str() {
            "cup" | "cups" => UnitFamily::Cup,
            "tbsp" | "tablespoon" | "tablespoons" => UnitFamily::Tablespoon,
            _ => UnitFamily::Other,
        }
    }
}

/// Running total for one ingredient folded into a single base unit
///
/// The base starts as the first variant's unit. Tablespoons added to a cup
/// base are divided down; a cup variant added to a tablespoon base converts
/// the running total to cups and becomes the new base. Every other pair is
/// summed as-is, whatever the units.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitAccumulator {
    unit: String,
    total: f64,
}

impl UnitAccumulator {
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            total: 0.0,
        }
    }

    /// Fold `quantity` of `unit` into the total. A cup meeting a tablespoon
    /// total divides that total by 16 before adding, so 8 tbsp + 2 cup is 2.5 cup.
    pub fn add(&mut self, quantity: f64, unit: &str) {
        match (UnitFamily::of(&self.unit), UnitFamily::of(unit)) {
            (UnitFamily::Cup, UnitFamily::Tablespoon) => {
                self.total += quantity / TABLESPOONS_PER_CUP;
            }
            (UnitFamily::Tablespoon, UnitFamily::Cup) => {
                self.total = self.total / TABLESPOONS_PER_CUP + quantity;
                unit.clone_into(&mut self.unit);
            }
            _ => self.total += quantity,
        }
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn into_parts(self) -> (f64, String) {
        (self.total, self.unit)
    }
}

/// Round to 2 decimal places.
pub fn round_quantity(quantity: f64) -> f64 {
    (quantity * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_family_aliases() {
        assert_eq!(UnitFamily::of("cup"), UnitFamily::Cup);
        assert_eq!(UnitFamily::of("Cups"), UnitFamily::Cup);
        assert_eq!(UnitFamily::of("tbsp"), UnitFamily::Tablespoon);
        assert_eq!(UnitFamily::of("tablespoons"), UnitFamily::Tablespoon);
        assert_eq!(UnitFamily::of("tsp"), UnitFamily::Other);
        assert_eq!(UnitFamily::of("lb"), UnitFamily::Other);
    }

    #[test]
    fn test_tablespoons_into_cups() {
        let mut acc = UnitAccumulator::new("cups");
        acc.add(2.0, "cups");
        acc.add(8.0, "tbsp");

        assert_eq!(acc.unit(), "cups");
        assert_eq!(acc.total(), 2.5);
    }

    #[test]
    fn test_cups_flip_tablespoon_base() {
        let mut acc = UnitAccumulator::new("tbsp");
        acc.add(8.0, "tbsp");
        acc.add(2.0, "cup");

        assert_eq!(acc.into_parts(), (2.5, "cup".to_string()));
    }

    #[test]
    fn test_unknown_pair_summed_as_is() {
        let mut acc = UnitAccumulator::new("whole");
        acc.add(2.0, "whole");
        acc.add(1.0, "cup");

        assert_eq!(acc.unit(), "whole");
        assert_eq!(acc.total(), 3.0);
    }

    #[test]
    fn test_round_quantity() {
        assert_eq!(round_quantity(0.333_333), 0.33);
        assert_eq!(round_quantity(1.005_1), 1.01);
        assert_eq!(round_quantity(2.0), 2.0);
    }
}
