//! `measure` subcommand: one figure from coordinates on the command line.

use anyhow::{bail, Result};
use clap::Subcommand;
use planimetry::prelude::*;

#[derive(Clone, Debug, Subcommand)]
pub enum FigureArgs {
    /// A single point
    Dot {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Segment between two points
    Line {
        #[arg(allow_negative_numbers = true)]
        x1: f64,
        #[arg(allow_negative_numbers = true)]
        y1: f64,
        #[arg(allow_negative_numbers = true)]
        x2: f64,
        #[arg(allow_negative_numbers = true)]
        y2: f64,
    },
    /// Circle from center and radius
    Circle {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        radius: f64,
    },
    /// Triangle from three vertices (x1 y1 x2 y2 x3 y3)
    Triangle {
        #[arg(allow_negative_numbers = true, num_args = 6, required = true)]
        coords: Vec<f64>,
    },
    /// Axis-aligned square from center and side length
    Square {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        side: f64,
    },
    /// Square from two opposite corners (xa ya xc yc)
    SquareDiagonal {
        #[arg(allow_negative_numbers = true, num_args = 4, required = true)]
        coords: Vec<f64>,
    },
    /// Axis-aligned rectangle from center, width and height
    Rectangle {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        width: f64,
        height: f64,
    },
    /// Rectangle from three corners (xa ya xb yb xc yc)
    RectangleVertices {
        #[arg(allow_negative_numbers = true, num_args = 6, required = true)]
        coords: Vec<f64>,
    },
    /// Parallelogram from anchor, horizontal side, altitude and shift
    Parallelogram {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        side: f64,
        altitude: f64,
        #[arg(allow_negative_numbers = true)]
        shift: f64,
    },
    /// Parallelogram from two diagonals (x1 y1 x2 y2 x3 y3 x4 y4)
    ParallelogramDiagonals {
        #[arg(allow_negative_numbers = true, num_args = 8, required = true)]
        coords: Vec<f64>,
    },
    /// Parallelogram from its vertices in any order (x y pairs)
    ParallelogramVertices {
        #[arg(allow_negative_numbers = true, num_args = 1.., required = true)]
        coords: Vec<f64>,
    },
}

impl FigureArgs {
    pub fn build(&self, cfg: GeomCfg) -> Result<Box<dyn Figure>> {
        let figure: Box<dyn Figure> = match self {
            FigureArgs::Dot { x, y } => Box::new(Point::new(*x, *y)),
            FigureArgs::Line { x1, y1, x2, y2 } => {
                Box::new(Segment::from_coords(*x1, *y1, *x2, *y2))
            }
            FigureArgs::Circle { x, y, radius } => Box::new(Circle::from_coords(*x, *y, *radius)),
            FigureArgs::Triangle { coords } => {
                let [a, b, c] = points::<3>(coords)?;
                Box::new(Triangle::new(a, b, c))
            }
            FigureArgs::Square { x, y, side } => {
                Box::new(Square::from_center_coords(*x, *y, *side))
            }
            FigureArgs::SquareDiagonal { coords } => {
                let [a, c] = points::<2>(coords)?;
                Box::new(Square::from_diagonal(a, c))
            }
            FigureArgs::Rectangle {
                x,
                y,
                width,
                height,
            } => Box::new(Rectangle::from_center_coords(*x, *y, *width, *height)),
            FigureArgs::RectangleVertices { coords } => {
                let [a, b, c] = points::<3>(coords)?;
                Box::new(Rectangle::from_three_vertices_with_cfg(a, b, c, cfg)?)
            }
            FigureArgs::Parallelogram {
                x,
                y,
                side,
                altitude,
                shift,
            } => Box::new(Parallelogram::from_anchor(
                Point::new(*x, *y),
                *side,
                *altitude,
                *shift,
            )),
            FigureArgs::ParallelogramDiagonals { coords } => {
                let [a, b, c, d] = points::<4>(coords)?;
                Box::new(Parallelogram::from_diagonals_with_cfg(
                    Segment::new(a, b),
                    Segment::new(c, d),
                    cfg,
                )?)
            }
            FigureArgs::ParallelogramVertices { coords } => {
                let pts = pairs(coords)?;
                Box::new(Parallelogram::from_vertices_with_cfg(&pts, cfg)?)
            }
        };
        Ok(figure)
    }
}

fn pairs(coords: &[f64]) -> Result<Vec<Point>> {
    if coords.len() % 2 != 0 {
        bail!("expected x y pairs, got {} numbers", coords.len());
    }
    Ok(coords
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect())
}

fn points<const N: usize>(coords: &[f64]) -> Result<[Point; N]> {
    let pts = pairs(coords)?;
    let found = pts.len();
    match <[Point; N]>::try_from(pts) {
        Ok(arr) => Ok(arr),
        Err(_) => bail!("expected {N} points, got {found}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planimetry::FigureKind;

    #[test]
    fn builds_rectangle_from_vertices() {
        let args = FigureArgs::RectangleVertices {
            coords: vec![3.0, 3.0, 2.0, 4.0, 1.0, 1.0],
        };
        let f = args.build(GeomCfg::default()).unwrap();
        assert_eq!(f.kind(), FigureKind::Rectangle);
        assert!((f.area() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn construction_error_surfaces() {
        let args = FigureArgs::RectangleVertices {
            coords: vec![0.0, 0.0, 1.0, 0.0, 2.0, 0.0],
        };
        let err = args.build(GeomCfg::default()).unwrap_err();
        let inner = err.downcast_ref::<FigureError>().unwrap();
        assert!(matches!(inner, FigureError::MismatchedConfiguration { .. }));
    }

    #[test]
    fn wrong_vertex_count_is_invalid_argument() {
        let args = FigureArgs::ParallelogramVertices {
            coords: vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0],
        };
        let err = args.build(GeomCfg::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FigureError>(),
            Some(FigureError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn odd_coordinate_count_rejected() {
        assert!(pairs(&[1.0, 2.0, 3.0]).is_err());
        assert!(points::<2>(&[1.0, 2.0]).is_err());
    }
}
