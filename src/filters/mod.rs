//! Catalog of per-pixel color filters.
//!
//! Every filter is a pure function from one pixel's channels to a new RGB
//! triple. Filters never look at neighboring pixels and carry no state, so
//! the same input always yields the same output.
//!
//! ## Families
//!
//! | Family | Module | Output |
//! |--------|--------|--------|
//! | Simple | [`simple`] | Arbitrary RGB |
//! | Grayscale | [`grayscale`] | R = G = B |
//!
//! ## Pixel Format
//!
//! Filters read channels 0, 1 and 2 as red, green and blue. A pixel with
//! fewer than three channels fails with [`FilterError::ChannelOutOfRange`].
//! Output is always three channels; writing it into an image with a
//! different channel count is rejected by the engine.
//!
//! ## Arithmetic
//!
//! Two truncation rules are in play and each filter uses exactly one of
//! them per step:
//! - integer floor division for plain averages (`(a + b) / 2` on `u32`)
//! - float truncation toward zero for weighted formulas (`f64` cast to `u32`)
//!
//! Swapping one for the other shifts results by up to one level.

pub mod grayscale;
pub mod simple;

use crate::error::{FilterError, FilterResult};

/// One RGB output pixel.
pub type Rgb = [u8; 3];

/// Signature shared by every catalog entry.
pub type FilterFn = fn(&[u8]) -> FilterResult<Rgb>;

/// Read the red, green and blue channels of a pixel.
///
/// Channels are widened to `u32` so sums and weighted sums cannot overflow.
#[inline]
pub fn rgb_channels(color: &[u8]) -> FilterResult<(u32, u32, u32)> {
    match *color {
        [r, g, b, ..] => Ok((r as u32, g as u32, b as u32)),
        _ => Err(FilterError::ChannelOutOfRange {
            index: color.len(),
            channels: color.len(),
        }),
    }
}

/// Filter family, also used as the output subdirectory name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterFamily {
    Simple,
    Grayscale,
}

impl FilterFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterFamily::Simple => "simple",
            FilterFamily::Grayscale => "grayscale",
        }
    }
}

impl std::str::FromStr for FilterFamily {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(FilterFamily::Simple),
            "grayscale" => Ok(FilterFamily::Grayscale),
            other => Err(FilterError::UnknownFilter(format!("family '{other}'"))),
        }
    }
}

impl std::fmt::Display for FilterFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct PixelFilter {
    pub name: &'static str,
    pub family: FilterFamily,
    pub func: FilterFn,
}

impl PixelFilter {
    const fn new(name: &'static str, family: FilterFamily, func: FilterFn) -> Self {
        Self { name, family, func }
    }

    /// Run this filter on a single pixel.
    #[inline]
    pub fn apply_to(&self, color: &[u8]) -> FilterResult<Rgb> {
        (self.func)(color)
    }
}

/// Color-effect filters, in catalog order.
pub const SIMPLE_FILTERS: [PixelFilter; 9] = [
    PixelFilter::new("atmosphere", FilterFamily::Simple, simple::atmosphere),
    PixelFilter::new("blacklight", FilterFamily::Simple, simple::blacklight),
    PixelFilter::new("burn", FilterFamily::Simple, simple::burn),
    PixelFilter::new("color_shift", FilterFamily::Simple, simple::color_shift),
    PixelFilter::new("freeze", FilterFamily::Simple, simple::freeze),
    PixelFilter::new("lava", FilterFamily::Simple, simple::lava),
    PixelFilter::new("metal", FilterFamily::Simple, simple::metal),
    PixelFilter::new("negative", FilterFamily::Simple, simple::negative),
    PixelFilter::new("ocean", FilterFamily::Simple, simple::ocean),
];

/// Grayscale-reduction filters, in catalog order.
pub const GRAYSCALE_FILTERS: [PixelFilter; 7] = [
    PixelFilter::new("average", FilterFamily::Grayscale, grayscale::average),
    PixelFilter::new("binary", FilterFamily::Grayscale, grayscale::binary),
    PixelFilter::new("blue_channel", FilterFamily::Grayscale, grayscale::blue_channel),
    PixelFilter::new("desaturation", FilterFamily::Grayscale, grayscale::desaturation),
    PixelFilter::new("green_channel", FilterFamily::Grayscale, grayscale::green_channel),
    PixelFilter::new("luminance", FilterFamily::Grayscale, grayscale::luminance),
    PixelFilter::new("red_channel", FilterFamily::Grayscale, grayscale::red_channel),
];

/// All catalog entries, simple filters first.
pub fn all_filters() -> impl Iterator<Item = &'static PixelFilter> {
    SIMPLE_FILTERS.iter().chain(GRAYSCALE_FILTERS.iter())
}

/// Look up a catalog entry by name.
pub fn find_filter(name: &str) -> FilterResult<&'static PixelFilter> {
    all_filters()
        .find(|filter| filter.name == name)
        .ok_or_else(|| FilterError::UnknownFilter(name.to_string()))
}

/// Names of all catalog entries, simple filters first.
pub fn filter_names() -> Vec<&'static str> {
    all_filters().map(|filter| filter.name).collect()
}

/// Resolve a filter selection.
///
/// An empty `names` selects the whole catalog; otherwise entries come back
/// in the order given. Any unknown name fails the whole selection. When
/// `family` is set, entries of the other family are dropped.
pub fn select_filters<S: AsRef<str>>(
    names: &[S],
    family: Option<FilterFamily>,
) -> FilterResult<Vec<&'static PixelFilter>> {
    let selected: Vec<&'static PixelFilter> = if names.is_empty() {
        all_filters().collect()
    } else {
        names
            .iter()
            .map(|name| find_filter(name.as_ref()))
            .collect::<FilterResult<_>>()?
    };
    Ok(selected
        .into_iter()
        .filter(|filter| family.is_none_or(|family| filter.family == family))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_sixteen_unique_names() {
        let mut names = filter_names();
        assert_eq!(names.len(), 16);
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 16);
    }

    #[test]
    fn test_find_filter_resolves_every_name() {
        for name in filter_names() {
            let filter = find_filter(name).unwrap();
            assert_eq!(filter.name, name);
        }
    }

    #[test]
    fn test_find_filter_unknown() {
        assert_eq!(
            find_filter("sepia").unwrap_err(),
            FilterError::UnknownFilter("sepia".to_string())
        );
    }

    #[test]
    fn test_families_match_tables() {
        assert!(SIMPLE_FILTERS.iter().all(|f| f.family == FilterFamily::Simple));
        assert!(GRAYSCALE_FILTERS.iter().all(|f| f.family == FilterFamily::Grayscale));
        assert_eq!(find_filter("ocean").unwrap().family, FilterFamily::Simple);
        assert_eq!(find_filter("luminance").unwrap().family, FilterFamily::Grayscale);
    }

    #[test]
    fn test_family_parse_and_display() {
        assert_eq!("simple".parse::<FilterFamily>().unwrap(), FilterFamily::Simple);
        assert_eq!("grayscale".parse::<FilterFamily>().unwrap(), FilterFamily::Grayscale);
        assert!("sepia".parse::<FilterFamily>().is_err());
        assert_eq!(FilterFamily::Grayscale.to_string(), "grayscale");
    }

    #[test]
    fn test_select_filters_defaults_to_catalog() {
        let selected = select_filters::<&str>(&[], None).unwrap();
        let names: Vec<_> = selected.iter().map(|f| f.name).collect();
        assert_eq!(names, filter_names());
    }

    #[test]
    fn test_select_filters_keeps_given_order() {
        let selected = select_filters(&["ocean", "average", "burn"], None).unwrap();
        let names: Vec<_> = selected.iter().map(|f| f.name).collect();
        assert_eq!(names, ["ocean", "average", "burn"]);
    }

    #[test]
    fn test_select_filters_unknown_name() {
        assert_eq!(
            select_filters(&["negative", "sepia"], None).unwrap_err(),
            FilterError::UnknownFilter("sepia".to_string())
        );
    }

    #[test]
    fn test_select_filters_by_family() {
        let grey = select_filters::<&str>(&[], Some(FilterFamily::Grayscale)).unwrap();
        assert_eq!(grey.len(), 7);
        assert!(grey.iter().all(|f| f.family == FilterFamily::Grayscale));

        let names = ["negative".to_string(), "luminance".to_string(), "binary".to_string()];
        let simple = select_filters(&names, Some(FilterFamily::Simple)).unwrap();
        assert_eq!(simple.len(), 1);
        assert_eq!(simple[0].name, "negative");
    }

    #[test]
    fn test_rgb_channels_ignores_extra_channels() {
        assert_eq!(rgb_channels(&[1, 2, 3, 4]).unwrap(), (1, 2, 3));
    }

    #[test]
    fn test_short_pixel_fails_for_every_filter() {
        for filter in all_filters() {
            assert_eq!(
                filter.apply_to(&[10, 20]).unwrap_err(),
                FilterError::ChannelOutOfRange { index: 2, channels: 2 },
                "filter {}",
                filter.name
            );
        }
    }
}
