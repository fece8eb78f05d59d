//! Secret code generation

use super::GameError;
use crate::core::{Code, Palette};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Draw `num_slots` colors uniformly, with replacement, from `palette`
///
/// # Errors
/// Returns `GameError::InvalidConfiguration` if `num_slots` is zero.
pub fn generate_secret<R: Rng + ?Sized>(
    palette: &Palette,
    num_slots: usize,
    rng: &mut R,
) -> Result<Code, GameError> {
    if num_slots == 0 {
        return Err(GameError::InvalidConfiguration(
            "num_slots must be at least 1".to_string(),
        ));
    }

    let colors = (0..num_slots)
        .filter_map(|_| palette.colors().choose(rng).copied())
        .collect();

    Ok(Code::new(colors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn secret_has_requested_length_and_palette_colors() {
        let palette = Palette::new(5).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for num_slots in 1..=8 {
            let secret = generate_secret(&palette, num_slots, &mut rng).unwrap();
            assert_eq!(secret.len(), num_slots);
            assert!(secret.colors().iter().all(|&c| palette.contains(c)));
        }
    }

    #[test]
    fn same_seed_same_secret() {
        let palette = Palette::new(8).unwrap();
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);

        assert_eq!(
            generate_secret(&palette, 6, &mut rng1).unwrap(),
            generate_secret(&palette, 6, &mut rng2).unwrap()
        );
    }

    #[test]
    fn zero_slots_rejected() {
        let palette = Palette::new(4).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            generate_secret(&palette, 0, &mut rng),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn every_palette_color_shows_up() {
        // 4 colors over 400 draws; each should appear well above zero
        let palette = Palette::new(4).unwrap();
        let mut rng = StdRng::seed_from_u64(12345);
        let secret = generate_secret(&palette, 400, &mut rng).unwrap();
        let counts = secret.color_counts();

        for color in palette.colors() {
            let count = counts.get(color).copied().unwrap_or(0);
            assert!(count > 50, "{color} drawn only {count} times");
        }
    }

    #[test]
    fn single_color_palette_is_constant() {
        let palette = Palette::new(1).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let secret = generate_secret(&palette, 5, &mut rng).unwrap();
        assert!(secret.colors().iter().all(|&c| c == palette.colors()[0]));
    }
}
