// ============================================================================
// Formatter Module
// Renders grain bills as display lines
// ============================================================================

use crate::domain::{GrainBill, GrainBillEntry};

/// Format one grain bill line as `Name:  <lbs> lbs, <oz> oz`.
///
/// # Example
/// ```
/// use brew_calc::domain::{GrainBillEntry, PoundsOunces};
/// use brew_calc::format::format_grain_bill_line;
/// use rust_decimal::Decimal;
///
/// let entry = GrainBillEntry::new("American Wheat", PoundsOunces::new(7, Decimal::new(67, 1)));
/// assert_eq!(format_grain_bill_line(&entry), "American Wheat:  7 lbs, 6.7 oz");
/// ```
pub fn format_grain_bill_line(entry: &GrainBillEntry) -> String {
    entry.to_string()
}

/// Format every line of a grain bill, preserving order.
pub fn format_grain_bill(grain_bill: &GrainBill) -> Vec<String> {
    grain_bill.iter().map(format_grain_bill_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PoundsOunces;
    use rust_decimal::Decimal;
    use smallvec::smallvec;

    #[test]
    fn test_format_line() {
        let entry = GrainBillEntry::new("American Wheat", PoundsOunces::new(7, Decimal::new(67, 1)));
        assert_eq!(format_grain_bill_line(&entry), "American Wheat:  7 lbs, 6.7 oz");
    }

    #[test]
    fn test_format_bill_keeps_order() {
        let bill: GrainBill = smallvec![
            GrainBillEntry::new("American Wheat", PoundsOunces::new(7, Decimal::new(67, 1))),
            GrainBillEntry::new(
                "American Pale (2-Row)",
                PoundsOunces::new(3, Decimal::new(120, 1))
            ),
        ];

        assert_eq!(
            format_grain_bill(&bill),
            vec![
                "American Wheat:  7 lbs, 6.7 oz".to_string(),
                "American Pale (2-Row):  3 lbs, 12.0 oz".to_string(),
            ]
        );
    }

    #[test]
    fn test_format_empty_bill() {
        assert!(format_grain_bill(&GrainBill::new()).is_empty());
    }
}
