//! Tests for per-screen-position rendering at every supported cell size

#[cfg(test)]
mod tests {
    use blueprintart::io::configuration::MAX_CELL_WIDTH;
    use blueprintart::render::screen::pad_centered;
    use blueprintart::render::{CellHeight, CellSize};
    use blueprintart::{ArtError, AsciiArt, Direction, Entity, Layout, Position, Tile};

    /// A single transport belt at the origin: a two by two cell grid
    fn belt(direction: Option<Direction>) -> Layout {
        Layout::new(
            vec![Entity::new(
                1,
                "transport-belt",
                Position::new(0.0, 0.0),
                direction,
            )],
            Vec::new(),
        )
    }

    fn emit(
        layout: &Layout,
        width: usize,
        height: usize,
        screen_x: usize,
        screen_y: usize,
    ) -> String {
        AsciiArt::new(layout, width, height)
            .string_at_screen_position(screen_x, screen_y)
            .unwrap()
    }

    // Tests a one-character cell shows only the glyph whatever the direction
    // Verified by drawing the indicator instead of the glyph
    #[test]
    fn test_single_height_width_one() {
        for direction in [None, Some(Direction::UP), Some(Direction::LEFT)] {
            assert_eq!(emit(&belt(direction), 1, 1, 0, 0), "v");
        }
    }

    // Tests up and left go before the glyph, down and right after it
    // Verified by placing every indicator before the glyph
    #[test]
    fn test_single_height_width_two() {
        assert_eq!(emit(&belt(Some(Direction::LEFT)), 2, 1, 0, 0), "<v");
        assert_eq!(emit(&belt(Some(Direction::UP)), 2, 1, 0, 0), "^v");
        assert_eq!(emit(&belt(Some(Direction::RIGHT)), 2, 1, 0, 0), "v>");
        assert_eq!(emit(&belt(Some(Direction::DOWN)), 2, 1, 0, 0), "vV");
        assert_eq!(emit(&belt(None), 2, 1, 0, 0), " v");
        assert_eq!(emit(&belt(Some(Direction(3))), 2, 1, 0, 0), " v");
    }

    // Tests wider cells center the two-character unit with the extra space on the right
    // Verified by giving the extra space to the left
    #[test]
    fn test_single_height_wide_cells() {
        let layout = belt(Some(Direction::UP));
        assert_eq!(emit(&layout, 3, 1, 0, 0), "^v ");
        assert_eq!(emit(&layout, 4, 1, 0, 0), " ^v ");
        assert_eq!(emit(&layout, 5, 1, 0, 0), " ^v  ");
    }

    // Tests positions inside an occupied cell return the rest of the cell
    // Verified by returning the full cell at every offset
    #[test]
    fn test_mid_cell_offsets_return_suffix() {
        let layout = belt(Some(Direction::UP));
        assert_eq!(emit(&layout, 5, 1, 2, 0), "v  ");
        assert_eq!(emit(&layout, 5, 1, 4, 0), " ");
        assert_eq!(emit(&layout, 5, 1, 5, 0), " ");
    }

    // Tests empty cells always yield a single space
    // Verified by padding empty cells to the full width
    #[test]
    fn test_empty_cells_yield_one_space() {
        let layout = belt(Some(Direction::UP));
        for (width, height) in [(1, 1), (4, 1), (2, 2), (5, 3)] {
            assert_eq!(emit(&layout, width, height, width, 0), " ");
            assert_eq!(emit(&layout, width, height, 0, height), " ");
        }
    }

    // Tests height two draws the bare glyph, then the centered indicator
    // Verified by keeping the indicator beside the glyph on the first line
    #[test]
    fn test_double_height() {
        let left = belt(Some(Direction::LEFT));
        assert_eq!(emit(&left, 2, 2, 0, 0), " v");
        assert_eq!(emit(&left, 2, 2, 0, 1), "< ");
        assert_eq!(emit(&belt(Some(Direction::UP)), 2, 2, 0, 1), "^ ");
        assert_eq!(emit(&belt(Some(Direction::DOWN)), 2, 2, 0, 1), "V ");
        assert_eq!(emit(&belt(None), 2, 2, 0, 1), "  ");

        assert_eq!(emit(&left, 1, 2, 0, 0), "v");
        assert_eq!(emit(&left, 1, 2, 0, 1), "<");

        let up = belt(Some(Direction::UP));
        assert_eq!(emit(&up, 5, 2, 0, 0), "  v  ");
        assert_eq!(emit(&up, 5, 2, 0, 1), "  ^  ");
    }

    // Tests height three puts up on the top line and down on the bottom line
    // Verified by drawing the down indicator on the glyph line
    #[test]
    fn test_triple_height_vertical() {
        let up = belt(Some(Direction::UP));
        assert_eq!(emit(&up, 5, 3, 0, 0), "  ^  ");
        assert_eq!(emit(&up, 5, 3, 0, 1), "  v  ");
        assert_eq!(emit(&up, 5, 3, 0, 2), "     ");

        let down = belt(Some(Direction::DOWN));
        assert_eq!(emit(&down, 5, 3, 0, 0), "     ");
        assert_eq!(emit(&down, 5, 3, 0, 1), "  v  ");
        assert_eq!(emit(&down, 5, 3, 0, 2), "  V  ");
    }

    // Tests height three keeps left and right beside the glyph on the middle line
    // Verified by moving the right indicator before the glyph
    #[test]
    fn test_triple_height_horizontal() {
        let left = belt(Some(Direction::LEFT));
        assert_eq!(emit(&left, 5, 3, 0, 0), "     ");
        assert_eq!(emit(&left, 5, 3, 0, 1), " <v  ");
        assert_eq!(emit(&left, 5, 3, 0, 2), "     ");
        assert_eq!(emit(&left, 3, 3, 0, 1), "<v ");

        let right = belt(Some(Direction::RIGHT));
        assert_eq!(emit(&right, 5, 3, 0, 1), " v>  ");
        assert_eq!(emit(&right, 3, 3, 0, 1), "v> ");
    }

    // Tests tiles are drawn without any indicator
    // Verified by giving tiles the up direction
    #[test]
    fn test_tiles_have_no_indicator() {
        let layout = Layout::new(
            Vec::new(),
            vec![Tile::new("concrete", Position::new(0.0, 0.0))],
        );
        assert_eq!(emit(&layout, 2, 1, 0, 0), " t");
        assert_eq!(emit(&layout, 3, 2, 0, 1), "   ");
        assert_eq!(emit(&layout, 3, 3, 0, 0), "   ");
    }

    // Tests every valid size and direction emits non-empty text that fits the cell
    // Verified by returning an empty suffix at the last column of a cell
    #[test]
    fn test_emission_never_empty() {
        for code in 0..8 {
            let layout = belt(Some(Direction(code)));
            for height in 1..=3 {
                for width in 1..=6 {
                    if CellSize::new(width, height).is_err() {
                        continue;
                    }
                    for screen_y in 0..height {
                        for screen_x in 0..width {
                            let text = emit(&layout, width, height, screen_x, screen_y);
                            assert!(!text.is_empty());
                            assert!(text.len() <= width - screen_x);
                        }
                    }
                }
            }
        }
    }

    // Tests unsupported heights and widths are rejected before drawing
    // Verified by accepting height three at width two
    #[test]
    fn test_cell_size_validation() {
        assert!(matches!(
            CellSize::new(1, 0),
            Err(ArtError::UnsupportedCellHeight { height: 0 })
        ));
        assert!(matches!(
            CellSize::new(4, 4),
            Err(ArtError::UnsupportedCellHeight { height: 4 })
        ));
        assert!(matches!(
            CellSize::new(0, 1),
            Err(ArtError::UnsupportedCellWidth { width: 0, .. })
        ));
        assert!(matches!(
            CellSize::new(2, 3),
            Err(ArtError::UnsupportedCellWidth {
                width: 2,
                height: 3,
                ..
            })
        ));

        assert!(matches!(
            CellSize::new(MAX_CELL_WIDTH + 1, 1),
            Err(ArtError::UnsupportedCellWidth { .. })
        ));
        assert!(CellSize::new(MAX_CELL_WIDTH, 2).is_ok());

        let size = CellSize::new(3, 3).unwrap();
        assert_eq!(size.width(), 3);
        assert_eq!(size.height(), CellHeight::Triple);
        assert_eq!(size.height().lines(), 3);
        assert_eq!(CellHeight::try_from(2).unwrap(), CellHeight::Double);

        let err = AsciiArt::new(&belt(None), 1, 4)
            .string_at_screen_position(0, 0)
            .unwrap_err();
        assert!(matches!(err, ArtError::UnsupportedCellHeight { height: 4 }));
    }

    // Tests centering splits the spare width with the odd space on the right
    // Verified by rounding the left padding up
    #[test]
    fn test_pad_centered() {
        assert_eq!(pad_centered("a", 4).unwrap(), " a  ");
        assert_eq!(pad_centered("a", 3).unwrap(), " a ");
        assert_eq!(pad_centered("ab", 5).unwrap(), " ab  ");
        assert_eq!(pad_centered("ab", 2).unwrap(), "ab");
        assert_eq!(pad_centered("abc", 3).unwrap(), "abc");
    }

    // Tests content other than one or two characters is refused unless it fills the width
    // Verified by padding content of any length
    #[test]
    fn test_pad_centered_rejects_bad_lengths() {
        assert!(matches!(
            pad_centered("abc", 5),
            Err(ArtError::PaddingLength { width: 5, .. })
        ));
        assert!(matches!(
            pad_centered("", 3),
            Err(ArtError::PaddingLength { .. })
        ));
    }
}
