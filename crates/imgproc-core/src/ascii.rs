//! ASCII-art rendering on a fixed glyph grid.

use crate::error::{ImgprocError, Result};
use crate::image::PixelImage;
use crate::resample::resample;
use crate::transform::grayscale;

/// Height handed to the resampler.
pub const GRID_HEIGHT: u32 = 100;
/// Width handed to the resampler, i.e. glyphs per line.
pub const GRID_WIDTH: u32 = 62;
/// Columns averaged together into one glyph choice.
const RUN_LENGTH: usize = 4;

/// Brightness ramp, brightest first. A run uses the first glyph whose
/// threshold its average exceeds, falling back to `@`.
const GLYPH_RAMP: [(u32, char); 7] = [
    (200, ' '),
    (160, '.'),
    (130, '!'),
    (110, 'o'),
    (90, '$'),
    (70, '&'),
    (50, '#'),
];
const DARKEST_GLYPH: char = '@';

/// Glyph for an average brightness.
pub fn glyph_for(level: u32) -> char {
    GLYPH_RAMP
        .iter()
        .find(|(threshold, _)| level > *threshold)
        .map_or(DARKEST_GLYPH, |&(_, glyph)| glyph)
}

/// Render `image` as newline-terminated text, [`GRID_HEIGHT`] lines of
/// [`GRID_WIDTH`] glyphs.
pub fn render_ascii(image: &PixelImage) -> Result<String> {
    if image.is_empty() {
        return Err(ImgprocError::EmptyImage);
    }

    let gray = grayscale(&resample(image, GRID_HEIGHT, GRID_WIDTH));
    let mut out = String::with_capacity((GRID_WIDTH as usize + 1) * GRID_HEIGHT as usize);

    for row in gray.rows() {
        for run in row.chunks(RUN_LENGTH) {
            let sum: u32 = run.iter().map(|p| p[0] as u32).sum();
            let glyph = glyph_for(sum / run.len() as u32);
            out.extend(std::iter::repeat_n(glyph, run.len()));
        }
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_thresholds() {
        assert_eq!(glyph_for(255), ' ');
        assert_eq!(glyph_for(201), ' ');
        assert_eq!(glyph_for(200), '.');
        assert_eq!(glyph_for(131), '!');
        assert_eq!(glyph_for(111), 'o');
        assert_eq!(glyph_for(91), '$');
        assert_eq!(glyph_for(71), '&');
        assert_eq!(glyph_for(51), '#');
        assert_eq!(glyph_for(50), '@');
        assert_eq!(glyph_for(0), '@');
    }

    #[test]
    fn test_render_grid_shape() {
        let text = render_ascii(&PixelImage::filled(7, 13, [0, 0, 0, 255])).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), GRID_HEIGHT as usize);
        assert!(lines.iter().all(|l| l.chars().count() == GRID_WIDTH as usize));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_white_renders_blank_and_black_renders_at() {
        let white = render_ascii(&PixelImage::filled(3, 3, [255, 255, 255, 255])).unwrap();
        assert!(white.lines().all(|l| l.chars().all(|c| c == ' ')));

        let black = render_ascii(&PixelImage::filled(3, 3, [0, 0, 0, 255])).unwrap();
        assert!(black.lines().all(|l| l.chars().all(|c| c == '@')));
    }

    #[test]
    fn test_runs_share_a_glyph() {
        // Columns 0..31 white, 31.. black. The run 28..32 holds three white
        // columns and one black: 765 / 4 = 191.
        let pixels = (0..4)
            .flat_map(|_| (0..62).map(|x| if x < 31 { [255, 255, 255, 255] } else { [0, 0, 0, 255] }))
            .collect();
        let image = PixelImage::new(4, 62, pixels).unwrap();
        let text = render_ascii(&image).unwrap();
        let first: Vec<char> = text.lines().next().unwrap().chars().collect();
        assert!(first[..28].iter().all(|&c| c == ' '));
        assert!(first[28..32].iter().all(|&c| c == first[28]));
        assert_eq!(first[28], '.');
        assert!(first[32..].iter().all(|&c| c == '@'));
    }

    #[test]
    fn test_render_rejects_empty() {
        let empty = PixelImage::new(0, 0, vec![]).unwrap();
        assert!(render_ascii(&empty).is_err());
    }
}
