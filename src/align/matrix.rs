use std::io::Write;

use anyhow::Result;

/// A dense `(m + 1) x (n + 1)` table of cumulative optimal prefix scores,
/// stored as a flat vector. Row `i`, column `j` holds the best score over
/// the length-`i` prefix of the first input and the length-`j` prefix of
/// the second. Owned by a single alignment call and discarded after
/// backtrace.
#[derive(Debug, Clone)]
pub struct ScoreMatrix {
    pub rows: usize,
    pub cols: usize,
    data: Vec<f32>,
}

impl ScoreMatrix {
    /// A zero-filled matrix; the zero base row and column are the boundary
    /// condition shared by the free-end-gap and local variants.
    pub fn new(rows: usize, cols: usize) -> Self {
        ScoreMatrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        debug_assert!(row < self.rows);
        debug_assert!(col < self.cols);
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        debug_assert!(row < self.rows);
        debug_assert!(col < self.cols);
        self.data[row * self.cols + col] = value;
    }

    /// The maximum over every cell; the best score of a local alignment.
    pub fn max(&self) -> f32 {
        self.data
            .iter()
            .copied()
            .fold(f32::NEG_INFINITY, f32::max)
    }

    pub fn dump(&self, out: &mut impl Write) -> Result<()> {
        let column_width = 8;
        let precision = 1;

        write!(out, "{}", " ".repeat(column_width + 1))?;
        for col in 0..self.cols {
            write!(out, "{:w$} ", col, w = column_width)?;
        }
        writeln!(out)?;

        for row in 0..self.rows {
            write!(out, "{:w$} ", row, w = column_width)?;
            for col in 0..self.cols {
                write!(
                    out,
                    "{:w$.p$} ",
                    self.get(row, col),
                    w = column_width,
                    p = precision
                )?;
            }
            writeln!(out)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_matrix_get_set() {
        let mut matrix = ScoreMatrix::new(4, 3);

        (0..4).for_each(|row| {
            (0..3).for_each(|col| {
                matrix.set(row, col, (row * 10 + col) as f32);
            });
        });

        (0..4).for_each(|row| {
            (0..3).for_each(|col| {
                assert_eq!(matrix.get(row, col), (row * 10 + col) as f32);
            });
        });
    }

    #[test]
    fn test_score_matrix_starts_zeroed() {
        let matrix = ScoreMatrix::new(3, 3);
        (0..3).for_each(|row| {
            (0..3).for_each(|col| {
                assert_eq!(matrix.get(row, col), 0.0);
            });
        });
    }

    #[test]
    fn test_score_matrix_max() {
        let mut matrix = ScoreMatrix::new(2, 2);
        matrix.set(0, 1, -3.0);
        matrix.set(1, 0, 5.0);
        matrix.set(1, 1, 2.0);
        assert_eq!(matrix.max(), 5.0);
    }

    #[test]
    fn test_dump_renders_every_row() {
        let matrix = ScoreMatrix::new(3, 2);
        let mut out: Vec<u8> = vec![];
        matrix.dump(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        // one header line plus one line per row
        assert_eq!(text.lines().count(), 4);
    }
}
