// the collection of utility functions mainly for bracket parsing and proceeding

/// true if every '(' has a pair and no ')' closes before it is opened
pub fn brackets_are_balanced(s: &str) -> bool {
    let mut depth: usize = 0;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    depth == 0
}

// code finds the byte position of the bracket closing the one opened at `bracket_start`
pub fn find_pair_to_this_bracket(input: &str, bracket_start: usize) -> Option<usize> {
    if !input[bracket_start..].starts_with('(') {
        return None;
    }
    let mut stack: usize = 0;
    for (i, c) in input[bracket_start..].char_indices() {
        if c == '(' {
            stack += 1;
        } else if c == ')' {
            stack -= 1;
            if stack == 0 {
                return Some(bracket_start + i);
            }
        }
    }
    None
}

/// Splits `input` at the first space that lies outside brackets.
///
/// `"(+ x 1) (sin x)"` gives `("(+ x 1)", "(sin x)")`, `"x 2"` gives `("x", "2")`.
/// Returns None when there is no such space or when a ')' has no opening pair.
pub fn split_at_space_outside_brackets(input: &str) -> Option<(&str, &str)> {
    let mut depth: usize = 0;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1)?,
            ' ' if depth == 0 => return Some((&input[..i], &input[i + 1..])),
            _ => {}
        }
    }
    None
}

pub fn linspace(start: f64, end: f64, num_values: usize) -> Vec<f64> {
    if num_values == 1 {
        return vec![start];
    }
    let step = (end - start) / (num_values as f64 - 1.0);
    (0..num_values).map(|i| start + (i as f64 * step)).collect()
}

/// Central finite difference of `f` at every point of `x_values`.
pub fn numerical_derivative<F>(f: F, x_values: &[f64], h: f64) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    x_values
        .iter()
        .map(|&x| (f(x + h) - f(x - h)) / (2.0 * h))
        .collect()
}

// compute norm of two vectors
pub fn norm(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len());
    (1.0 / x.len() as f64)
        * x.iter()
            .zip(y.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
}
