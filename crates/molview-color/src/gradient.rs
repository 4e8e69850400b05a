//! Gradient generation over ordered color stops

use crate::Color;

/// Generate `steps` colors evenly interpolated along the segments between
/// the given stops.
///
/// Interpolation is a per-channel linear RGB blend with truncating channel
/// arithmetic (see [`Color::lerp`]). The output always starts at the first
/// stop and ends at the last.
///
/// Edge cases: zero steps or no stops produce an empty result; a single step
/// yields the first stop; a single stop is repeated `steps` times.
pub fn generate_gradient(colors: &[Color], steps: usize) -> Vec<Color> {
    if steps == 0 || colors.is_empty() {
        return Vec::new();
    }
    if steps == 1 {
        return vec![colors[0]];
    }
    if colors.len() == 1 {
        return vec![colors[0]; steps];
    }

    let segments = (colors.len() - 1) as f64;
    let mut gradient = Vec::with_capacity(steps);

    for i in 0..steps {
        let position = i as f64 / (steps - 1) as f64 * segments;
        let segment = position as usize;

        if segment >= colors.len() - 1 {
            gradient.push(colors[colors.len() - 1]);
        } else {
            gradient.push(colors[segment].lerp(colors[segment + 1], position - segment as f64));
        }
    }

    gradient
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_to_white_midpoint() {
        let gradient = generate_gradient(&[Color::BLACK, Color::WHITE], 3);
        assert_eq!(
            gradient,
            vec![Color::BLACK, Color::new(0x7F, 0x7F, 0x7F), Color::WHITE]
        );
    }

    #[test]
    fn test_zero_steps() {
        assert!(generate_gradient(&[Color::RED, Color::BLUE], 0).is_empty());
    }

    #[test]
    fn test_no_stops() {
        assert!(generate_gradient(&[], 5).is_empty());
    }

    #[test]
    fn test_single_step() {
        assert_eq!(generate_gradient(&[Color::RED, Color::BLUE], 1), vec![Color::RED]);
    }

    #[test]
    fn test_single_stop_repeats() {
        assert_eq!(generate_gradient(&[Color::GREEN], 4), vec![Color::GREEN; 4]);
    }

    #[test]
    fn test_endpoints_preserved() {
        let stops = [Color::RED, Color::GREEN, Color::BLUE];
        let gradient = generate_gradient(&stops, 7);
        assert_eq!(gradient.len(), 7);
        assert_eq!(gradient[0], Color::RED);
        assert_eq!(gradient[6], Color::BLUE);
    }

    #[test]
    fn test_idempotent() {
        let stops = [Color::BLACK, Color::RED, Color::WHITE];
        assert_eq!(generate_gradient(&stops, 10), generate_gradient(&stops, 10));
    }
}
