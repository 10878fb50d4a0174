//! The closed set of shape classes and their rotational symmetry.

use std::fmt;
use std::str::FromStr;

use crate::error::SynthError;

/// Whether a shape's rotation angle is restricted to right angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymmetryClass {
    /// Only 0°, 90°, 180° and 270° are used.
    FixedAngle,
    /// Any whole-degree angle in `[0, 360)` is used.
    FreeAngle,
}

/// One of the 17 supported shape classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    Circle,
    Semicircle,
    Oval,
    Triangle,
    Square,
    Rectangle,
    Parallelogram,
    Rhombus,
    Trapezoid,
    Kite,
    Pentagon,
    Hexagon,
    Heptagon,
    Octagon,
    Nonagon,
    Decagon,
    Star,
}

impl ShapeKind {
    /// Every shape class, in dataset order.
    pub const ALL: [ShapeKind; 17] = [
        ShapeKind::Circle,
        ShapeKind::Semicircle,
        ShapeKind::Oval,
        ShapeKind::Triangle,
        ShapeKind::Square,
        ShapeKind::Rectangle,
        ShapeKind::Parallelogram,
        ShapeKind::Rhombus,
        ShapeKind::Trapezoid,
        ShapeKind::Kite,
        ShapeKind::Pentagon,
        ShapeKind::Hexagon,
        ShapeKind::Heptagon,
        ShapeKind::Octagon,
        ShapeKind::Nonagon,
        ShapeKind::Decagon,
        ShapeKind::Star,
    ];

    /// Lowercase class name, used as dataset label and directory name.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Semicircle => "semicircle",
            ShapeKind::Oval => "oval",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Square => "square",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Parallelogram => "parallelogram",
            ShapeKind::Rhombus => "rhombus",
            ShapeKind::Trapezoid => "trapezoid",
            ShapeKind::Kite => "kite",
            ShapeKind::Pentagon => "pentagon",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Heptagon => "heptagon",
            ShapeKind::Octagon => "octagon",
            ShapeKind::Nonagon => "nonagon",
            ShapeKind::Decagon => "decagon",
            ShapeKind::Star => "star",
        }
    }

    pub fn symmetry(self) -> SymmetryClass {
        match self {
            ShapeKind::Square
            | ShapeKind::Rectangle
            | ShapeKind::Parallelogram
            | ShapeKind::Rhombus
            | ShapeKind::Trapezoid
            | ShapeKind::Kite => SymmetryClass::FixedAngle,
            ShapeKind::Circle
            | ShapeKind::Semicircle
            | ShapeKind::Oval
            | ShapeKind::Triangle
            | ShapeKind::Pentagon
            | ShapeKind::Hexagon
            | ShapeKind::Heptagon
            | ShapeKind::Octagon
            | ShapeKind::Nonagon
            | ShapeKind::Decagon
            | ShapeKind::Star => SymmetryClass::FreeAngle,
        }
    }

    /// Side count for the regular n-gon classes, `None` for everything else.
    pub fn regular_sides(self) -> Option<u32> {
        match self {
            ShapeKind::Pentagon => Some(5),
            ShapeKind::Hexagon => Some(6),
            ShapeKind::Heptagon => Some(7),
            ShapeKind::Octagon => Some(8),
            ShapeKind::Nonagon => Some(9),
            ShapeKind::Decagon => Some(10),
            _ => None,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| SynthError::InvalidShapeKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seventeen_distinct_kinds() {
        let mut names: Vec<&str> = ShapeKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 17);
    }

    #[test]
    fn test_fixed_angle_set() {
        let fixed: Vec<ShapeKind> = ShapeKind::ALL
            .into_iter()
            .filter(|k| k.symmetry() == SymmetryClass::FixedAngle)
            .collect();
        assert_eq!(
            fixed,
            vec![
                ShapeKind::Square,
                ShapeKind::Rectangle,
                ShapeKind::Parallelogram,
                ShapeKind::Rhombus,
                ShapeKind::Trapezoid,
                ShapeKind::Kite,
            ]
        );
    }

    #[test]
    fn test_parse_names() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.name().parse::<ShapeKind>(), Ok(kind));
        }
        assert_eq!(
            "dodecagon".parse::<ShapeKind>(),
            Err(SynthError::InvalidShapeKind("dodecagon".into()))
        );
    }

    #[test]
    fn test_regular_sides() {
        assert_eq!(ShapeKind::Pentagon.regular_sides(), Some(5));
        assert_eq!(ShapeKind::Decagon.regular_sides(), Some(10));
        assert_eq!(ShapeKind::Star.regular_sides(), None);
        assert_eq!(ShapeKind::Square.regular_sides(), None);
    }
}
