use rand::Rng;

use crate::drill_engine::models::{DigitSize, Grade};

/// Inclusive operand range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberRange {
    pub min: i64,
    pub max: i64,
}

impl NumberRange {
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Draw one value uniformly from the range.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> i64 {
        rng.gen_range(self.min..=self.max)
    }
}

/// Map a digit size and grade to the operand range for plain/written
/// arithmetic. Lower grades get truncated 2- and 3-digit ranges.
pub fn number_range(digit: DigitSize, grade: Grade) -> NumberRange {
    match digit {
        DigitSize::OneDigit => NumberRange { min: 1, max: 9 },
        DigitSize::TwoDigit => NumberRange {
            min: 10,
            max: if grade <= Grade::Second { 50 } else { 99 },
        },
        DigitSize::ThreeDigit => NumberRange {
            min: 100,
            max: if grade <= Grade::Second { 500 } else { 999 },
        },
    }
}

/// Flash sequences use the full range for a digit size, independent of
/// grade.
pub fn flash_range(digit: DigitSize) -> NumberRange {
    match digit {
        DigitSize::OneDigit => NumberRange { min: 1, max: 9 },
        DigitSize::TwoDigit => NumberRange { min: 10, max: 99 },
        DigitSize::ThreeDigit => NumberRange { min: 100, max: 999 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const GRADES: [Grade; 4] = [Grade::First, Grade::Second, Grade::Third, Grade::Fourth];
    const DIGITS: [DigitSize; 3] = [DigitSize::OneDigit, DigitSize::TwoDigit, DigitSize::ThreeDigit];

    #[test]
    fn ranges_are_well_formed() {
        for grade in GRADES {
            for digit in DIGITS {
                let r = number_range(digit, grade);
                assert!(r.min <= r.max, "min > max for {digit} at {grade}");
                assert!(r.min >= 1, "range must stay positive for {digit} at {grade}");
            }
        }
    }

    #[test]
    fn ranges_grow_with_digit_size() {
        for grade in GRADES {
            let one = number_range(DigitSize::OneDigit, grade);
            let two = number_range(DigitSize::TwoDigit, grade);
            let three = number_range(DigitSize::ThreeDigit, grade);
            assert!(one.max < two.min);
            assert!(two.max < three.min);
        }
    }

    #[test]
    fn lower_grades_get_truncated_ranges() {
        assert_eq!(number_range(DigitSize::TwoDigit, Grade::First).max, 50);
        assert_eq!(number_range(DigitSize::TwoDigit, Grade::Second).max, 50);
        assert_eq!(number_range(DigitSize::TwoDigit, Grade::Third).max, 99);
        assert_eq!(number_range(DigitSize::ThreeDigit, Grade::Second).max, 500);
        assert_eq!(number_range(DigitSize::ThreeDigit, Grade::Fourth).max, 999);
        assert_eq!(number_range(DigitSize::OneDigit, Grade::First), NumberRange { min: 1, max: 9 });
    }

    #[test]
    fn flash_ranges_ignore_grade_truncation() {
        assert_eq!(flash_range(DigitSize::OneDigit), NumberRange { min: 1, max: 9 });
        assert_eq!(flash_range(DigitSize::TwoDigit), NumberRange { min: 10, max: 99 });
        assert_eq!(flash_range(DigitSize::ThreeDigit), NumberRange { min: 100, max: 999 });
    }

    #[test]
    fn sample_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let r = NumberRange { min: 10, max: 50 };
        for _ in 0..500 {
            assert!(r.contains(r.sample(&mut rng)));
        }
    }
}
