//! Two-dimensional points and polygons built from them.
//!
//! A [`Point`] is itself a two-element positional container, and a [`Polygon`] is a
//! mutable positional container of points. Every point-like input is validated before a
//! polygon is touched.
//!
//! # Examples
//!
//! ```
//! use lazyseq_core::{IndexedContainer, Point, Polygon, SliceSpec};
//!
//! let mut polygon = Polygon::try_from_points([(0, 0), (1, 1)])?;
//! polygon.append((2.5, 2.5))?;
//! polygon.extend_from(&Polygon::try_from_points([[3.0, 3.0]])?)?;
//!
//! assert_eq!(polygon.len(), 4);
//! assert_eq!(polygon.get(-1)?, Point::new(3.0, 3.0)?);
//! assert_eq!(
//!     polygon.get_range(SliceSpec::from(..2))?.to_string(),
//!     "Polygon(Point(x=0, y=0), Point(x=1, y=1))"
//! );
//!
//! // Non-finite coordinates are rejected and the polygon is unchanged.
//! assert!(polygon.append((f64::NAN, 0.0)).is_err());
//! assert_eq!(polygon.len(), 4);
//! # Ok::<(), lazyseq_core::SeqError>(())
//! ```

use std::{
    fmt::{self, Display},
    ops::{Add, AddAssign},
};

use crate::{
    Access, Assignment, IndexedContainer, InvalidArgument, MutableContainer, Seq, SeqError,
    SliceSpec,
};

/// A point in the plane with finite coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(f64, f64)", into = "(f64, f64)")
)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::NonFiniteCoordinate`] if either coordinate is NaN or
    /// infinite.
    pub fn new(x: f64, y: f64) -> Result<Self, SeqError> {
        if x.is_finite() && y.is_finite() {
            Ok(Self { x, y })
        } else {
            Err(InvalidArgument::NonFiniteCoordinate.into())
        }
    }

    /// Returns the x coordinate.
    #[must_use]
    pub const fn x(self) -> f64 {
        self.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub const fn y(self) -> f64 {
        self.y
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point(x={}, y={})", self.x, self.y)
    }
}

impl IndexedContainer for Point {
    type Item = f64;
    type Slice = Vec<f64>;

    fn len(&self) -> usize {
        2
    }

    fn element(&self, position: usize) -> Option<f64> {
        match position {
            0 => Some(self.x),
            1 => Some(self.y),
            _ => None,
        }
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl TryFrom<(f64, f64)> for Point {
    type Error = SeqError;

    fn try_from((x, y): (f64, f64)) -> Result<Self, SeqError> {
        Self::new(x, y)
    }
}

/// Values that can be validated into a [`Point`].
pub trait IntoPoint {
    /// Validates and converts `self`.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::InvalidArgument`] if the value is not a valid point.
    fn into_point(self) -> Result<Point, SeqError>;
}

impl IntoPoint for Point {
    fn into_point(self) -> Result<Point, SeqError> {
        Ok(self)
    }
}

impl IntoPoint for &Point {
    fn into_point(self) -> Result<Point, SeqError> {
        Ok(*self)
    }
}

impl IntoPoint for (f64, f64) {
    fn into_point(self) -> Result<Point, SeqError> {
        Point::new(self.0, self.1)
    }
}

impl IntoPoint for (i32, i32) {
    fn into_point(self) -> Result<Point, SeqError> {
        Point::new(self.0.into(), self.1.into())
    }
}

impl IntoPoint for [f64; 2] {
    fn into_point(self) -> Result<Point, SeqError> {
        Point::new(self[0], self[1])
    }
}

impl IntoPoint for &[f64] {
    fn into_point(self) -> Result<Point, SeqError> {
        match *self {
            [x, y] => Point::new(x, y),
            _ => Err(InvalidArgument::PointArity(self.len()).into()),
        }
    }
}

fn collect_points<I>(points: I) -> Result<Vec<Point>, SeqError>
where
    I: IntoIterator,
    I::Item: IntoPoint,
{
    points.into_iter().map(IntoPoint::into_point).collect()
}

/// An ordered, mutable collection of [`Point`]s.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Polygon {
    points: Seq<Point>,
}

impl Polygon {
    /// Creates a polygon with no points.
    #[must_use]
    pub const fn new() -> Self {
        Self { points: Seq::new() }
    }

    /// Creates a polygon from point-like values.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::InvalidArgument`] if any value is not a valid point.
    pub fn try_from_points<I>(points: I) -> Result<Self, SeqError>
    where
        I: IntoIterator,
        I::Item: IntoPoint,
    {
        Ok(Self {
            points: collect_points(points)?.into(),
        })
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polygon has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points as a slice.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        self.points.as_slice()
    }

    /// Appends a point-like value.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::InvalidArgument`] if the value is not a valid point.
    pub fn append(&mut self, point: impl IntoPoint) -> Result<(), SeqError> {
        self.points.push(point.into_point()?);
        Ok(())
    }

    /// Appends every point-like value, or none of them if any is invalid.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::InvalidArgument`] if any value is not a valid point.
    pub fn extend_from<I>(&mut self, points: I) -> Result<(), SeqError>
    where
        I: IntoIterator,
        I::Item: IntoPoint,
    {
        let points = collect_points(points)?;
        self.points.extend(points);
        Ok(())
    }

    /// Inserts a point-like value so that it ends up at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::InvalidArgument`] for an invalid point, or
    /// [`SeqError::IndexOutOfRange`] if the rebased index is outside `[0, len]`.
    pub fn insert_point(&mut self, index: isize, point: impl IntoPoint) -> Result<(), SeqError> {
        self.points.insert(index, point.into_point()?)
    }

    /// Stores point-like values through `access`, validating all of them first.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::InvalidArgument`] for an invalid point or a mismatched
    /// index/range pair, otherwise the error of [`MutableContainer::assign`].
    pub fn assign_points<P>(
        &mut self,
        access: impl Into<Access>,
        value: Assignment<P>,
    ) -> Result<(), SeqError>
    where
        P: IntoPoint,
    {
        let value = match value {
            Assignment::One(point) => Assignment::One(point.into_point()?),
            Assignment::Many(points) => Assignment::Many(collect_points(points)?),
        };
        self.points.assign(access, value)
    }
}

impl Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Polygon(")?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{point}")?;
        }
        f.write_str(")")
    }
}

impl IndexedContainer for Polygon {
    type Item = Point;
    type Slice = Self;

    fn len(&self) -> usize {
        self.points.len()
    }

    fn element(&self, position: usize) -> Option<Point> {
        self.points.element(position)
    }
}

impl MutableContainer for Polygon {
    fn set(&mut self, index: isize, item: Point) -> Result<Point, SeqError> {
        self.points.set(index, item)
    }

    fn insert(&mut self, index: isize, item: Point) -> Result<(), SeqError> {
        self.points.insert(index, item)
    }

    fn push(&mut self, item: Point) {
        self.points.push(item);
    }

    fn remove(&mut self, index: isize) -> Result<Point, SeqError> {
        self.points.remove(index)
    }

    fn remove_range(&mut self, spec: SliceSpec) -> Result<usize, SeqError> {
        self.points.remove_range(spec)
    }

    fn replace_range(&mut self, spec: SliceSpec, items: Vec<Point>) -> Result<(), SeqError> {
        self.points.replace_range(spec, items)
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl Add for Polygon {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            points: self.points + rhs.points,
        }
    }
}

impl Add for &Polygon {
    type Output = Polygon;

    fn add(self, rhs: Self) -> Self::Output {
        Polygon {
            points: &self.points + &rhs.points,
        }
    }
}

impl AddAssign for Polygon {
    fn add_assign(&mut self, rhs: Self) {
        self.points.extend(rhs.points);
    }
}
