//! Reference figure list for the `demo` command.

use planimetry::prelude::*;

/// One of each construction path, with inputs whose results are known.
pub fn reference_figures(cfg: GeomCfg) -> Result<Vec<Box<dyn Figure>>, FigureError> {
    let figures: Vec<Box<dyn Figure>> = vec![
        Box::new(Point::new(3.3453, 4.768786)),
        Box::new(Segment::from_coords(1.0, 1.0, 2.0, 2.0)),
        Box::new(Segment::new(Point::new(2.0, 2.0), Point::new(-2.0, 2.0))),
        Box::new(Circle::from_coords(1.0, 1.0, 3.0)),
        Box::new(Circle::new(Point::new(3.11, 6.43), 66.5)),
        Box::new(Triangle::from_coords(0.0, 0.0, 1.0, 0.0, 0.0, 1.0)),
        Box::new(Triangle::new(
            Point::new(3.0, 5.0),
            Point::new(-3.0, 5.0),
            Point::new(7.0, 5.0),
        )),
        Box::new(Square::from_center_coords(0.0, 0.0, 1.0)),
        Box::new(Square::from_center(Point::new(-15.0, -2.44), 22.0)),
        Box::new(Square::from_diagonal_coords(-3.0, 1.0, -3.0, 3.0)),
        Box::new(Square::from_diagonal(Point::new(-15.0, 1.0), Point::new(-14.0, 0.0))),
        Box::new(Rectangle::from_center(Point::new(0.0, 0.0), 1.0, 2.0)),
        Box::new(Rectangle::from_center_coords(5.0, 6.0, 11.3, 2.0)),
        Box::new(Rectangle::from_three_vertices_with_cfg(
            Point::new(3.0, 3.0),
            Point::new(2.0, 4.0),
            Point::new(1.0, 1.0),
            cfg,
        )?),
        Box::new(Parallelogram::from_anchor(Point::new(1.0, 1.0), 5.0, 2.0, 1.0)),
        Box::new(Parallelogram::from_diagonals_with_cfg(
            Segment::from_coords(-8.0, 1.0, -6.0, 5.0),
            Segment::from_coords(-9.0, 3.0, -5.0, 3.0),
            cfg,
        )?),
        Box::new(Parallelogram::from_vertices_with_cfg(
            &[
                Point::new(-8.0, 1.0),
                Point::new(-9.0, 3.0),
                Point::new(-6.0, 5.0),
                Point::new(-5.0, 3.0),
            ],
            cfg,
        )?),
    ];
    Ok(figures)
}

/// `count` sampled figures from the replay stream `seed`.
pub fn random_figures(seed: u64, count: u64) -> Vec<Box<dyn Figure>> {
    (0..count)
        .map(|index| draw_figure(FigureCfg::default(), ReplayToken::new(seed, index)).into_boxed())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_list_builds_with_defaults() {
        let figures = reference_figures(GeomCfg::default()).unwrap();
        assert_eq!(figures.len(), 17);
        assert!(figures.iter().all(|f| f.kind().is_defined()));
    }

    #[test]
    fn reference_list_builds_with_strict_comparisons() {
        assert!(reference_figures(GeomCfg::exact()).is_ok());
    }

    #[test]
    fn random_stream_is_reproducible() {
        let a: Vec<String> = random_figures(9, 5).iter().map(|f| f.to_string()).collect();
        let b: Vec<String> = random_figures(9, 5).iter().map(|f| f.to_string()).collect();
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
    }
}
