//! Material cost estimates for the business calculator.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Stone materials with a list price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    /// Marble slabs.
    Marble,
    /// Granite slabs.
    Granite,
    /// Limestone slabs.
    Limestone,
    /// Sandstone slabs.
    Sandstone,
}

impl Material {
    /// Returns all priced materials.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Marble, Self::Granite, Self::Limestone, Self::Sandstone]
    }

    /// Display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Marble => "Marble",
            Self::Granite => "Granite",
            Self::Limestone => "Limestone",
            Self::Sandstone => "Sandstone",
        }
    }

    /// List price in dollars per square foot.
    #[must_use]
    pub const fn price_per_sq_ft(&self) -> u32 {
        match self {
            Self::Marble => 150,
            Self::Granite => 120,
            Self::Limestone => 80,
            Self::Sandstone => 70,
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Material {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidInput(format!("unknown material: {s}")))
    }
}

/// A priced area of stone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    /// Area in square feet.
    pub area: f64,
    /// Total cost in dollars.
    pub cost: f64,
    /// Material priced.
    pub material: Material,
}

/// Prices `length` × `width` feet of `material`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if either dimension is not a positive
/// finite number, or if the material is unknown.
///
/// # Examples
///
/// ```
/// use stonecat::services::estimate;
///
/// let quote = estimate(10.0, 12.0, "granite")?;
/// assert!((quote.area - 120.0).abs() < f64::EPSILON);
/// assert!((quote.cost - 14_400.0).abs() < f64::EPSILON);
/// # Ok::<(), stonecat::Error>(())
/// ```
pub fn estimate(length: f64, width: f64, material: &str) -> Result<Estimate> {
    for (name, value) in [("length", length), ("width", width)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "{name} must be a positive number, got {value}"
            )));
        }
    }
    let material: Material = material.parse()?;
    let area = length * width;
    Ok(Estimate {
        area,
        cost: area * f64::from(material.price_per_sq_ft()),
        material,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("marble", 150 ; "marble")]
    #[test_case("Granite", 120 ; "granite")]
    #[test_case("LIMESTONE", 80 ; "limestone")]
    #[test_case(" sandstone ", 70 ; "sandstone trimmed")]
    fn test_material_prices(name: &str, price: u32) {
        let material: Material = name.parse().unwrap();
        assert_eq!(material.price_per_sq_ft(), price);
    }

    #[test]
    fn test_estimate_marble() {
        let quote = estimate(4.0, 2.5, "marble").unwrap();
        assert!((quote.area - 10.0).abs() < f64::EPSILON);
        assert!((quote.cost - 1500.0).abs() < f64::EPSILON);
        assert_eq!(quote.material, Material::Marble);
    }

    #[test_case(0.0, 2.0 ; "zero length")]
    #[test_case(2.0, -1.0 ; "negative width")]
    #[test_case(f64::NAN, 2.0 ; "nan")]
    #[test_case(2.0, f64::INFINITY ; "infinite")]
    fn test_estimate_rejects_bad_dimensions(length: f64, width: f64) {
        assert!(matches!(
            estimate(length, width, "marble"),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_estimate_rejects_unknown_material() {
        let err = estimate(1.0, 1.0, "travertine").unwrap_err();
        assert!(err.to_string().contains("travertine"));
    }
}
