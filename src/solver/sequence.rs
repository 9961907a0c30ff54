//! Numeric sequence and equation solvers

use crate::core::report::{Solution, SolveError};
use crate::core::text::{numeric_tokens, parse_numbers};
use regex::Regex;
use std::sync::OnceLock;

fn equation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\s*([+\-*/])\s*(\d+)\s*=\s*\?").unwrap())
}

/// Detect arithmetic and geometric progressions over the numeric tokens
///
/// Both candidates may fire on the same input; each predicts the next
/// value. A token that overflows `i64` skips candidate generation
/// silently.
#[must_use]
pub fn solve_pattern(text: &str) -> Vec<Solution> {
    let mut solutions = Vec::new();

    let tokens = numeric_tokens(text);
    if tokens.len() < 3 {
        return solutions;
    }
    let Some(nums) = parse_numbers(&tokens) else {
        return solutions;
    };

    let joined = tokens.join(", ");
    let last = nums[nums.len() - 1];

    // Arithmetic: constant difference
    let diffs: Vec<i64> = nums.windows(2).map(|w| w[1] - w[0]).collect();
    if diffs.iter().all(|&d| d == diffs[0]) {
        let next = last + diffs[0];
        solutions.push(Solution::new(
            "Arithmetic Sequence",
            vec![
                format!("Identify sequence: {joined}"),
                format!("Calculate difference: {}", diffs[0]),
                format!("Next number: {next}"),
            ],
            next.to_string(),
            0.9,
        ));
    }

    // Geometric: constant ratio; every term but the last must be nonzero
    if nums[..nums.len() - 1].iter().all(|&n| n != 0) {
        let ratios: Vec<f64> = nums.windows(2).map(|w| w[1] as f64 / w[0] as f64).collect();
        #[allow(clippy::float_cmp)]
        if ratios.iter().all(|&r| r == ratios[0]) {
            // Truncate toward zero, as int() of the float product does
            let next = (last as f64 * ratios[0]) as i64;
            solutions.push(Solution::new(
                "Geometric Sequence",
                vec![
                    format!("Identify sequence: {joined}"),
                    format!("Calculate ratio: {}", ratios[0]),
                    format!("Next number: {next}"),
                ],
                next.to_string(),
                0.85,
            ));
        }
    }

    solutions
}

/// Solve the first `<int> <op> <int> = ?` equation in the text
///
/// Operands are non-negative by construction (the pattern only matches
/// digit runs), so truncating division coincides with floor division.
/// Overflowing arithmetic skips the candidate.
///
/// # Errors
/// Returns [`SolveError::DivisionByZero`] when the matched equation
/// divides by zero. This is the engine's one hard failure: silently
/// reporting a wrong answer for an explicit equation would be worse.
pub fn solve_math(text: &str) -> Result<Vec<Solution>, SolveError> {
    let Some(caps) = equation_re().captures(text) else {
        return Ok(Vec::new());
    };

    let (Ok(lhs), Ok(rhs)) = (caps[1].parse::<i64>(), caps[3].parse::<i64>()) else {
        return Ok(Vec::new());
    };
    let op = &caps[2];

    let result = match op {
        "+" => lhs.checked_add(rhs),
        "-" => lhs.checked_sub(rhs),
        "*" => lhs.checked_mul(rhs),
        "/" => {
            if rhs == 0 {
                return Err(SolveError::DivisionByZero { dividend: lhs });
            }
            Some(lhs / rhs)
        }
        _ => unreachable!("operator restricted by the regex"),
    };
    let Some(result) = result else {
        return Ok(Vec::new());
    };

    Ok(vec![Solution::new(
        "Mathematical Equation",
        vec![
            format!("Identify equation: {lhs} {op} {rhs} = ?"),
            format!("Calculate: {result}"),
        ],
        result.to_string(),
        0.95,
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_sequence_predicts_next() {
        let solutions = solve_pattern("2, 4, 6, 8, ?");
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].label, "Arithmetic Sequence");
        assert_eq!(solutions[0].final_answer, "10");
        assert!((solutions[0].confidence - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn geometric_sequence_predicts_next() {
        let solutions = solve_pattern("3, 9, 27");
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].label, "Geometric Sequence");
        assert_eq!(solutions[0].final_answer, "81");
        assert!((solutions[0].confidence - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn constant_sequence_fires_both() {
        // Constant difference 0 and constant ratio 1
        let solutions = solve_pattern("5, 5, 5");
        assert_eq!(solutions.len(), 2);
        assert_eq!(solutions[0].label, "Arithmetic Sequence");
        assert_eq!(solutions[1].label, "Geometric Sequence");
        assert_eq!(solutions[0].final_answer, "5");
        assert_eq!(solutions[1].final_answer, "5");
    }

    #[test]
    fn too_few_numbers_yield_nothing() {
        assert!(solve_pattern("1 and 2").is_empty());
        assert!(solve_pattern("no numbers at all").is_empty());
    }

    #[test]
    fn irregular_sequence_yields_nothing() {
        assert!(solve_pattern("1, 4, 9, 16").is_empty());
    }

    #[test]
    fn zero_terms_block_geometric_only() {
        // Difference is constant but a zero denominator rules out ratios
        let solutions = solve_pattern("0, 0, 0");
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].label, "Arithmetic Sequence");
    }

    #[test]
    fn overflowing_token_skipped() {
        assert!(solve_pattern("99999999999999999999, 2, 3").is_empty());
    }

    #[test]
    fn math_equation_solved() {
        let solutions = solve_math("15 + 27 = ?").unwrap();
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].final_answer, "42");
        assert!((solutions[0].confidence - 0.95).abs() < f64::EPSILON);
        assert_eq!(solutions[0].steps[0], "Identify equation: 15 + 27 = ?");
    }

    #[test]
    fn math_all_operators() {
        assert_eq!(solve_math("10 - 4 = ?").unwrap()[0].final_answer, "6");
        assert_eq!(solve_math("7 * 6 = ?").unwrap()[0].final_answer, "42");
        assert_eq!(solve_math("20 / 5 = ?").unwrap()[0].final_answer, "4");
    }

    #[test]
    fn math_division_truncates() {
        assert_eq!(solve_math("7 / 2 = ?").unwrap()[0].final_answer, "3");
    }

    #[test]
    fn math_whitespace_flexible() {
        assert_eq!(solve_math("3+4=?").unwrap()[0].final_answer, "7");
        assert_eq!(solve_math("3  +  4  =  ?").unwrap()[0].final_answer, "7");
    }

    #[test]
    fn math_uses_first_match() {
        let solutions = solve_math("first 1 + 2 = ? then 3 + 4 = ?").unwrap();
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].final_answer, "3");
    }

    #[test]
    fn math_no_equation_is_fine() {
        assert!(solve_math("just words").unwrap().is_empty());
        assert!(solve_math("1 + 2 = 3").unwrap().is_empty());
    }

    #[test]
    fn math_division_by_zero_is_fatal() {
        let err = solve_math("10 / 0 = ?").unwrap_err();
        assert_eq!(err, SolveError::DivisionByZero { dividend: 10 });
    }
}
