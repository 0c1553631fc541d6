//! Validation and normalization of raw orientation measurements.
//!
//! Raw form input (a feature kind plus dip and strike strings) is either
//! rejected with an [`InputError`] or normalized into an immutable
//! [`Feature`]. Out-of-range numbers are never rejected: dip is folded into
//! `[0, 90]` and strike into `[0, 360)`.

use super::angles::wrap_degrees;

/// Kind of orientation measurement.
///
/// A linear orientation is called a "point" in the input vocabulary because
/// it plots as a single point on the net.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FeatureKind {
    Plane,
    Line,
}

impl FeatureKind {
    pub fn label(&self) -> &'static str {
        match self {
            FeatureKind::Plane => "plane",
            FeatureKind::Line => "point",
        }
    }

    /// Parses the input vocabulary (`"plane"` or `"point"`).
    pub fn from_input(raw: &str) -> Option<FeatureKind> {
        match raw {
            "plane" => Some(FeatureKind::Plane),
            "point" => Some(FeatureKind::Line),
            _ => None,
        }
    }

    pub fn all() -> &'static [FeatureKind] {
        &[FeatureKind::Plane, FeatureKind::Line]
    }
}

/// Errors that can reject a raw measurement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A required field was left empty.
    EmptyField(&'static str),
    /// A numeric field did not parse as a finite number.
    NotANumber(&'static str),
    /// The feature kind was not "plane" or "point".
    UnknownKind(String),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::EmptyField(field) => write!(f, "{} must not be empty", field),
            InputError::NotANumber(field) => write!(f, "{} is not a number", field),
            InputError::UnknownKind(kind) => {
                write!(f, "unknown feature type: {} (expected plane or point)", kind)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// One validated orientation measurement.
///
/// Invariants: `0 <= dip <= 90` and `0 <= strike < 360` (right-hand-rule
/// convention, dip direction 90 degrees clockwise of strike). Fields are
/// private so a `Feature` cannot be mutated after creation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Feature {
    kind: FeatureKind,
    dip: f64,
    strike: f64,
}

impl Feature {
    /// Validates and normalizes raw form input.
    ///
    /// Numbers outside the legal ranges are wrapped, not rejected: dip is
    /// folded into `[0, 90]` in ±90 steps (a positive multiple of 90 folds
    /// onto the vertical, not zero), strike into `[0, 360)`.
    pub fn normalize(
        raw_kind: &str,
        raw_dip: &str,
        raw_strike: &str,
    ) -> Result<Feature, InputError> {
        let raw_kind = raw_kind.trim();
        let raw_dip = raw_dip.trim();
        let raw_strike = raw_strike.trim();

        if raw_kind.is_empty() {
            return Err(InputError::EmptyField("type"));
        }
        if raw_dip.is_empty() {
            return Err(InputError::EmptyField("dip"));
        }
        if raw_strike.is_empty() {
            return Err(InputError::EmptyField("strike"));
        }

        let kind = FeatureKind::from_input(raw_kind)
            .ok_or_else(|| InputError::UnknownKind(raw_kind.to_string()))?;

        let mut dip: f64 = raw_dip
            .parse()
            .ok()
            .filter(|d: &f64| d.is_finite())
            .ok_or(InputError::NotANumber("dip"))?;
        let strike: f64 = raw_strike
            .parse()
            .ok()
            .filter(|s: &f64| s.is_finite())
            .ok_or(InputError::NotANumber("strike"))?;

        if dip > 90.0 {
            dip = dip.rem_euclid(90.0);
            // 180, 270, ... fold onto the vertical rather than zero
            if dip == 0.0 {
                dip = 90.0;
            }
        } else if dip < 0.0 {
            dip = dip.rem_euclid(90.0);
        }

        Ok(Feature {
            kind,
            dip,
            strike: wrap_degrees(strike),
        })
    }

    pub fn kind(&self) -> FeatureKind {
        self.kind
    }

    /// Dip (plunge for a line) in degrees, `[0, 90]`.
    pub fn dip(&self) -> f64 {
        self.dip
    }

    /// Strike (trend for a line) in degrees, `[0, 360)`.
    pub fn strike(&self) -> f64 {
        self.strike
    }
}
