//! Coarse character-grid rasterizer for debug snapshots

use glam::Vec2;

use crate::sim::{Balloon, Defender, Field};

const EMPTY: char = ' ';
const BALLOON: char = 'o';
const SPIKE: char = '|';
const TIP: char = 'v';

/// A `cols` x `rows` grid covering the whole field
pub struct AsciiCanvas {
    cols: usize,
    rows: usize,
    cells: Vec<Vec<char>>,
}

impl AsciiCanvas {
    pub fn new(cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            cells: vec![vec![EMPTY; cols]; rows],
        }
    }

    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(EMPTY);
        }
    }

    /// World-space center of a cell
    fn cell_center(&self, field: &Field, col: usize, row: usize) -> Vec2 {
        let cw = field.width() / self.cols as f32;
        let ch = field.height() / self.rows as f32;
        Vec2::new((col as f32 + 0.5) * cw, (row as f32 + 0.5) * ch)
    }

    /// Rasterize a frame. Balloons below the bottom edge are not visible.
    pub fn paint(&mut self, field: &Field, defender: &Defender, balloons: &[Balloon]) {
        self.clear();

        for row in 0..self.rows {
            for col in 0..self.cols {
                let p = self.cell_center(field, col, row);
                if balloons.iter().any(|b| p.distance(b.pos) <= b.radius) {
                    self.cells[row][col] = BALLOON;
                }
            }
        }

        let cw = field.width() / self.cols as f32;
        let ch = field.height() / self.rows as f32;
        if defender.x >= 0.0 && defender.x < field.width() {
            let col = (defender.x / cw) as usize;
            let tip_row = ((defender.height / ch) as usize).min(self.rows - 1);
            for row in 0..tip_row {
                self.cells[row][col] = SPIKE;
            }
            self.cells[tip_row][col] = TIP;
        }
    }

    /// Rows as strings, top edge first
    pub fn lines(&self) -> Vec<String> {
        self.cells.iter().map(|row| row.iter().collect()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::COLORS;
    use crate::sim::Color;

    #[test]
    fn test_paint_balloon_and_defender() {
        let field = Field::new(400.0, 600.0).unwrap();
        let mut canvas = AsciiCanvas::new(40, 60);
        let defender = Defender::new(205.0);
        let balloon = Balloon::new(1, Vec2::new(105.0, 305.0), 20.0, Color(COLORS[0]), 2.0);
        canvas.paint(&field, &defender, &[balloon]);

        let lines = canvas.lines();
        assert_eq!(lines.len(), 60);
        assert!(lines.iter().all(|l| l.chars().count() == 40));
        // Defender column 20, tip at row 5
        assert_eq!(lines[0].chars().nth(20), Some(SPIKE));
        assert_eq!(lines[5].chars().nth(20), Some(TIP));
        assert_eq!(lines[6].chars().nth(20), Some(EMPTY));
        // Balloon centered on cell (10, 30)
        assert_eq!(lines[30].chars().nth(10), Some(BALLOON));
        assert_eq!(lines[30].chars().nth(0), Some(EMPTY));
    }

    #[test]
    fn test_offscreen_defender_is_skipped() {
        let field = Field::new(400.0, 600.0).unwrap();
        let mut canvas = AsciiCanvas::new(8, 8);
        canvas.paint(&field, &Defender::new(-5.0), &[]);
        assert!(canvas.lines().iter().all(|l| l.trim().is_empty()));
    }
}
