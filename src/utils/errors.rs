use std::fmt;
use thiserror::Error;

/// Which response curve of an airfoil is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    Lift,
    FormDrag,
    ControlSurface,
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CurveKind::Lift => "lift",
            CurveKind::FormDrag => "form drag",
            CurveKind::ControlSurface => "control surface",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AeroError {
    #[error("Surface '{surface}' has no {curve} curve")]
    MissingCurve { surface: String, curve: CurveKind },

    #[error("Surface '{0}' is not registered")]
    UnknownSurface(String),
}
