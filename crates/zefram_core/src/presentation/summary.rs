//! Human-readable framework summary.
//!
//! Layout is fixed and must stay byte-compatible with the established
//! `printframework` output:
//!
//! ```text
//! =======================LTA========================
//!
//! Cell parameters
//! 	a= 11.919 Å  b= 11.919 Å  c= 11.919 Å
//! 	α= 90.000 °  β= 90.000 °  γ= 90.000 °
//! ```

use crate::error::{ZeframError, ZeframResult};
use crate::model::framework::Framework;

pub const HEADER_WIDTH: usize = 50;
pub const HEADER_FILL: char = '=';

/// Centers `text` in `width` characters of `fill`.
///
/// When the padding is odd, the extra fill character goes right, except for
/// odd widths where it goes left.
pub fn center(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }

    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    let right = margin - left;

    let mut centered = String::with_capacity(text.len() + margin * fill.len_utf8());
    centered.extend(std::iter::repeat(fill).take(left));
    centered.push_str(text);
    centered.extend(std::iter::repeat(fill).take(right));
    centered
}

/// Header line: the framework code centered in 50 `=` characters.
pub fn header_line(code: &str) -> String {
    center(code, HEADER_WIDTH, HEADER_FILL)
}

/// Renders the summary without a trailing newline.
///
/// # Errors
/// - `MissingField` when any unit cell parameter is missing.
pub fn format_summary(framework: &Framework) -> ZeframResult<String> {
    let cell = framework
        .unit_cell()
        .ok_or_else(|| ZeframError::MissingField {
            code: framework.code.clone(),
            field: "unit cell",
        })?;

    let lines = [
        header_line(&framework.code),
        String::new(),
        "Cell parameters".to_string(),
        format!(
            "\ta={:7.3} Å  b={:7.3} Å  c={:7.3} Å",
            cell.a, cell.b, cell.c
        ),
        format!(
            "\tα={:7.3} °  β={:7.3} °  γ={:7.3} °",
            cell.alpha, cell.beta, cell.gamma
        ),
    ];
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::{center, format_summary, header_line};
    use crate::error::ZeframError;
    use crate::model::framework::Framework;

    fn framework_abc() -> Framework {
        Framework {
            code: "ABC".to_string(),
            a: Some(24.345),
            b: Some(24.345),
            c: Some(101.685),
            alpha: Some(90.0),
            beta: Some(90.0),
            gamma: Some(90.0),
            ..Framework::default()
        }
    }

    #[test]
    fn header_centers_code_in_fifty_equals_signs() {
        let header = header_line("ABC");
        assert_eq!(header.chars().count(), 50);
        assert_eq!(header, format!("{}ABC{}", "=".repeat(23), "=".repeat(24)));
    }

    #[test]
    fn center_puts_odd_margin_left_for_odd_width() {
        assert_eq!(center("ab", 5, '*'), "**ab*");
        assert_eq!(center("ab", 6, '*'), "**ab**");
        assert_eq!(center("abc", 6, '*'), "*abc**");
        assert_eq!(center("toolong", 3, '*'), "toolong");
    }

    #[test]
    fn summary_matches_fixed_layout() {
        let summary = format_summary(&framework_abc()).unwrap();
        let expected = [
            format!("{}ABC{}", "=".repeat(23), "=".repeat(24)),
            String::new(),
            "Cell parameters".to_string(),
            "\ta= 24.345 Å  b= 24.345 Å  c=101.685 Å".to_string(),
            "\tα= 90.000 °  β= 90.000 °  γ= 90.000 °".to_string(),
        ]
        .join("\n");
        assert_eq!(summary, expected);
    }

    #[test]
    fn summary_requires_complete_unit_cell() {
        let mut framework = framework_abc();
        framework.beta = None;
        let err = format_summary(&framework).unwrap_err();
        assert!(matches!(
            err,
            ZeframError::MissingField { field: "unit cell", .. }
        ));
    }
}
