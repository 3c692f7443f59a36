//! core::identifier
//!
//! Classification of directory names into typed identifiers.
//!
//! # Types
//!
//! - [`Version`] - Four-component `major.minor.build.revision` version
//! - [`Identifier`] - Either a calendar date or a [`Version`]
//! - [`Variant`] - Which kind of identifier a value is
//!
//! # Grammar
//!
//! A name is tried as a date first (`YYYY-MM-DD`, must be a real calendar
//! day), then as a version (exactly four dot-separated runs of ASCII
//! digits). Anything else is unclassified. Failing to classify is an
//! ordinary outcome, so [`classify`] returns `Option` rather than `Result`.
//!
//! # Example
//!
//! ```
//! use dirpick::core::identifier::{classify, Variant};
//!
//! assert_eq!(classify("2015-12-13").unwrap().variant(), Variant::Date);
//! assert_eq!(classify("41.1.104.1").unwrap().variant(), Variant::Version);
//!
//! assert!(classify("41.1.104").is_none());
//! assert!(classify("abc").is_none());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use super::errors::ResolveError;

/// chrono format for date-named directories.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of components in a version name.
pub const VERSION_COMPONENTS: usize = 4;

/// Which grammar an identifier was parsed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Date,
    Version,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Date => write!(f, "date"),
            Variant::Version => write!(f, "version"),
        }
    }
}

/// A four-component version number.
///
/// Ordering is component-wise: major first, then minor, build, and
/// revision. The derived `Ord` gives exactly that because the fields are
/// declared in significance order.
///
/// # Example
///
/// ```
/// use dirpick::core::identifier::Version;
///
/// let a = Version::parse("41.1.104.1").unwrap();
/// let b = Version::parse("41.1.105.0").unwrap();
/// assert!(a < b);
/// assert_eq!(a.to_string(), "41.1.104.1");
///
/// assert!(Version::parse("41.1.104").is_none());
/// assert!(Version::parse(".41.1.104.1").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
    pub revision: u32,
}

impl Version {
    /// Create a version from its four components.
    pub const fn new(major: u32, minor: u32, build: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }

    /// Parse a version name.
    ///
    /// Returns `None` unless the whole string is exactly four non-empty
    /// digit runs separated by `.`, each fitting in a `u32`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = [0u32; VERSION_COMPONENTS];
        let mut count = 0;

        for component in s.split('.') {
            if count == VERSION_COMPONENTS {
                return None;
            }
            if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            // Digits only, so the only failure left is overflow.
            parts[count] = component.parse().ok()?;
            count += 1;
        }

        if count != VERSION_COMPONENTS {
            return None;
        }

        let [major, minor, build, revision] = parts;
        Some(Self::new(major, minor, build, revision))
    }

    /// The components in significance order.
    pub fn components(&self) -> [u32; VERSION_COMPONENTS] {
        [self.major, self.minor, self.build, self.revision]
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

/// A classified directory name.
///
/// Identifiers of different variants are never ordered against each
/// other: `partial_cmp` returns `None` for a date compared with a version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identifier {
    Date(NaiveDate),
    Version(Version),
}

impl Identifier {
    /// The variant of this identifier.
    pub fn variant(&self) -> Variant {
        match self {
            Identifier::Date(_) => Variant::Date,
            Identifier::Version(_) => Variant::Version,
        }
    }

    /// Compare with another identifier of the same variant.
    ///
    /// Returns `None` when the variants differ.
    pub fn cmp_same_variant(&self, other: &Identifier) -> Option<Ordering> {
        match (self, other) {
            (Identifier::Date(a), Identifier::Date(b)) => Some(a.cmp(b)),
            (Identifier::Version(a), Identifier::Version(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.cmp_same_variant(other)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            Identifier::Version(version) => write!(f, "{}", version),
        }
    }
}

impl FromStr for Identifier {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        classify(s).ok_or_else(|| ResolveError::InvalidMask {
            mask: s.to_string(),
        })
    }
}

/// Parse a date name.
///
/// chrono accepts loose input such as `+2015-9-5`, so the shape is checked
/// first: four-digit year, two-digit month, two-digit day.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Classify a name as a date or a version.
///
/// Dates are tried first. Returns `None` if neither grammar matches the
/// whole string.
pub fn classify(name: &str) -> Option<Identifier> {
    if let Some(date) = parse_date(name) {
        return Some(Identifier::Date(date));
    }
    Version::parse(name).map(Identifier::Version)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Identifier {
        Identifier::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    mod dates {
        use super::*;

        #[test]
        fn iso_dates_classify() {
            assert_eq!(classify("2015-09-15"), Some(date(2015, 9, 15)));
            assert_eq!(classify("2016-05-17"), Some(date(2016, 5, 17)));
        }

        #[test]
        fn leap_day_only_in_leap_years() {
            assert_eq!(classify("2016-02-29"), Some(date(2016, 2, 29)));
            assert!(classify("2015-02-29").is_none());
        }

        #[test]
        fn impossible_dates_rejected() {
            assert!(classify("2015-13-01").is_none());
            assert!(classify("2015-02-30").is_none());
            assert!(classify("2015-00-10").is_none());
            assert!(classify("2015-04-31").is_none());
        }

        #[test]
        fn loose_shapes_rejected() {
            assert!(classify("2015-9-15").is_none());
            assert!(classify("15-09-15").is_none());
            assert!(classify("+2015-09-15").is_none());
            assert!(classify(" 2015-09-15").is_none());
            assert!(classify("2015-09-15 ").is_none());
            assert!(classify("2015/09/15").is_none());
            assert!(classify("2015-09-15T10:00").is_none());
        }

        #[test]
        fn chronological_order() {
            assert!(date(2015, 12, 13) < date(2016, 1, 1));
            assert!(date(2015, 9, 20) > date(2015, 9, 15));
        }

        #[test]
        fn display_is_canonical() {
            assert_eq!(date(2015, 9, 5).to_string(), "2015-09-05");
        }
    }

    mod versions {
        use super::*;

        #[test]
        fn four_components_classify() {
            assert_eq!(
                classify("41.1.104.1"),
                Some(Identifier::Version(Version::new(41, 1, 104, 1)))
            );
            assert_eq!(
                classify("0.0.0.0"),
                Some(Identifier::Version(Version::new(0, 0, 0, 0)))
            );
        }

        #[test]
        fn wrong_component_count_rejected() {
            assert!(Version::parse("41").is_none());
            assert!(Version::parse("41.1").is_none());
            assert!(Version::parse("41.1.104").is_none());
            assert!(Version::parse("41.1.104.1.0").is_none());
        }

        #[test]
        fn separators_at_edges_rejected() {
            assert!(Version::parse(".41.1.104").is_none());
            assert!(Version::parse("41.1.104.").is_none());
            assert!(Version::parse("41..104.1").is_none());
        }

        #[test]
        fn non_numeric_rejected() {
            assert!(Version::parse("41.1.x.1").is_none());
            assert!(Version::parse("41.1.-1.1").is_none());
            assert!(Version::parse("41.1.+1.1").is_none());
            assert!(Version::parse("41.1.1 .1").is_none());
            assert!(Version::parse("41.1.1.*").is_none());
        }

        #[test]
        fn overflow_rejected() {
            assert!(Version::parse("4294967295.0.0.0").is_some());
            assert!(Version::parse("4294967296.0.0.0").is_none());
        }

        #[test]
        fn leading_zeros_compare_by_value() {
            let padded = Version::parse("41.01.104.1").unwrap();
            let plain = Version::parse("41.1.104.1").unwrap();
            assert_eq!(padded, plain);
        }

        #[test]
        fn component_wise_order() {
            let v = |s: &str| Version::parse(s).unwrap();
            assert!(v("41.1.104.1") < v("41.1.104.2"));
            assert!(v("41.1.104.9") < v("41.1.105.0"));
            assert!(v("41.2.0.0") > v("41.1.999.999"));
            assert!(v("9.0.0.0") < v("10.0.0.0"));
        }
    }

    #[test]
    fn unclassified_names() {
        assert!(classify("").is_none());
        assert!(classify("abc").is_none());
        assert!(classify("latest").is_none());
        assert!(classify("2015.09.15").is_none());
    }

    #[test]
    fn variants_do_not_compare() {
        let d = date(2015, 9, 15);
        let v = Identifier::Version(Version::new(41, 1, 104, 1));
        assert_eq!(d.partial_cmp(&v), None);
        assert_eq!(v.cmp_same_variant(&d), None);
        assert_eq!(d.variant(), Variant::Date);
        assert_eq!(v.variant(), Variant::Version);
    }

    #[test]
    fn from_str_reports_invalid_mask() {
        let err = "abc".parse::<Identifier>().unwrap_err();
        assert!(matches!(err, ResolveError::InvalidMask { ref mask } if mask == "abc"));
        assert!("41.1.104.1".parse::<Identifier>().is_ok());
    }
}
