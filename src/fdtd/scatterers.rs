//! Perfect electric conductor scatterers.

mod corner_reflector;
mod disk;
mod plate;

pub use corner_reflector::CornerReflector;
pub use disk::Disk;
pub use plate::Plate;

use crate::fdtd::Grid2D;

/// Turns cell `(m, n)` into a perfect conductor. Returns false if it already was one.
#[inline]
pub(crate) fn make_pec(grid: &mut Grid2D, m: usize, n: usize) -> bool {
    let was_pec = grid.ceze[[m, n]] == 0.0 && grid.cezh[[m, n]] == 0.0;
    grid.ceze[[m, n]] = 0.0;
    grid.cezh[[m, n]] = 0.0;
    !was_pec
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fdtd::{GridDescriptor, Scatterer};
    use crate::Error;

    fn grid() -> Grid2D {
        Grid2D::new(GridDescriptor::new(101, 81, 2)).unwrap()
    }

    /// Cells whose electric coefficients differ from an untouched grid.
    fn changed_cells(grid: &Grid2D) -> Vec<(usize, usize)> {
        let baseline = self::grid();
        let mut changed = Vec::new();
        for ((m, n), &ceze) in grid.ceze().indexed_iter() {
            let cezh = grid.cezh()[[m, n]];
            if ceze.to_bits() != baseline.ceze()[[m, n]].to_bits()
                || cezh.to_bits() != baseline.cezh()[[m, n]].to_bits()
            {
                assert_eq!((ceze, cezh), (0.0, 0.0));
                changed.push((m, n));
            }
        }
        assert_eq!(grid.chxe(), baseline.chxe());
        assert_eq!(grid.chye(), baseline.chye());
        assert_eq!(grid.chxh(), baseline.chxh());
        assert_eq!(grid.chyh(), baseline.chyh());
        changed
    }

    #[test]
    fn plate_zeroes_one_column() {
        let mut g = grid();
        let cells = Plate::default().embed(&mut g).unwrap();

        let changed = changed_cells(&g);
        assert_eq!(cells, 41);
        assert_eq!(changed, (20..61).map(|n| (20, n)).collect::<Vec<_>>());
    }

    #[test]
    fn disk_zeroes_cells_inside_radius() {
        let mut g = grid();
        let cells = Disk::default().embed(&mut g).unwrap();

        let changed = changed_cells(&g);
        assert_eq!(cells, 437);
        assert_eq!(changed.len(), 437);
        for (m, n) in changed {
            let (dx, dy) = (m as i64 - 50, n as i64 - 40);
            assert!(dx * dx + dy * dy < 144);
        }
    }

    #[test]
    fn corner_reflector_arms_meet() {
        let mut g = grid();
        let cells = CornerReflector::default().embed(&mut g).unwrap();

        let changed = changed_cells(&g);
        assert_eq!(cells, 41);
        assert_eq!(changed.len(), 41);
        for k in 0..20 {
            assert!(changed.contains(&(50 + k, 20 + k)));
            assert!(changed.contains(&(50 + k, 60 - k)));
        }
        assert!(changed.contains(&(70, 40)));
    }

    #[test]
    fn embedding_twice_changes_nothing_new() {
        let mut g = grid();
        Disk::default().embed(&mut g).unwrap();
        let once = g.ceze().clone();
        assert_eq!(Disk::default().embed(&mut g).unwrap(), 0);
        assert_eq!(g.ceze(), &once);
    }

    #[test]
    fn rejects_shapes_outside_grid() {
        let mut g = Grid2D::new(GridDescriptor::new(15, 15, 2)).unwrap();
        let plate = Plate { column: 20, ..Plate::default() };
        assert!(matches!(plate.embed(&mut g), Err(Error::BadScatterer { .. })));
        assert!(matches!(Plate::default().embed(&mut g), Err(Error::BadScatterer { .. })));

        let disk = Disk { center: Some((3, 30)), ..Disk::default() };
        assert!(matches!(disk.embed(&mut g), Err(Error::BadScatterer { .. })));

        let corner = CornerReflector { span: 1.5 };
        assert!(matches!(corner.embed(&mut g), Err(Error::BadScatterer { .. })));
        assert!(g.ceze().iter().all(|&c| c == 1.0));
    }
}
