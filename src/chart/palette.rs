// tailplot - chart/palette.rs
//
// Fixed line-color palette, cycled by column index. An immutable constant
// injected into the renderer; columns beyond the palette length wrap around.

use plotters::style::RGBColor;

/// Display colors assigned to data columns in order.
pub const LINE_PALETTE: [RGBColor; 14] = [
    RGBColor(255, 0, 0),     // red
    RGBColor(0, 255, 0),     // green
    RGBColor(0, 0, 255),     // blue
    RGBColor(0, 255, 255),   // cyan
    RGBColor(255, 0, 255),   // magenta
    RGBColor(128, 0, 0),     // dark red
    RGBColor(128, 128, 0),   // olive
    RGBColor(0, 128, 0),     // dark green
    RGBColor(128, 0, 128),   // purple
    RGBColor(0, 128, 128),   // teal
    RGBColor(0, 0, 128),     // navy
    RGBColor(255, 165, 0),   // orange
    RGBColor(100, 100, 100), // dim grey
    RGBColor(128, 128, 0),   // dark yellow
];

/// Color for the data column at `index`, wrapping past the palette end.
pub fn color_for(index: usize) -> RGBColor {
    LINE_PALETTE[index % LINE_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(color_for(0), LINE_PALETTE[0]);
        assert_eq!(color_for(LINE_PALETTE.len()), LINE_PALETTE[0]);
        assert_eq!(color_for(LINE_PALETTE.len() + 3), LINE_PALETTE[3]);
    }
}
