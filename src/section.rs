use std::fmt;
use std::str::FromStr;

/// One of the four scrollable regions of the page. The DOM id of each
/// `<section>` is the lowercase name returned by [`SectionId::id`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    /// Text shown in the navigation. Only home gets its own spelling, the
    /// others are the id rendered with `text-transform: capitalize`.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            other => other.id(),
        }
    }
}

impl Default for SectionId {
    fn default() -> Self {
        SectionId::Home
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section id: {}", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Vertical extent of a rendered section, in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: SectionId, top: f64, height: f64) -> Self {
        Self { id, top, height }
    }

    /// Bounds for a rendered `<section>` given its DOM `id` attribute.
    pub fn from_element_id(element_id: &str, top: f64, height: f64) -> Result<Self, UnknownSection> {
        Ok(Self::new(element_id.parse()?, top, height))
    }

    /// Half-open: a point exactly on `top + height` belongs to the next section.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Returns the first section containing `scroll_y + probe_offset`, or `None`
/// when the probe falls outside every region (callers keep the previous value).
pub fn section_at(scroll_y: f64, probe_offset: f64, bounds: &[SectionBounds]) -> Option<SectionId> {
    let probe = scroll_y + probe_offset;
    bounds
        .iter()
        .find(|b| b.contains(probe))
        .map(|b| b.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new(SectionId::Home, 0.0, 800.0),
            SectionBounds::new(SectionId::About, 800.0, 600.0),
            SectionBounds::new(SectionId::Skills, 1400.0, 700.0),
            SectionBounds::new(SectionId::Contact, 2100.0, 500.0),
        ]
    }

    #[test]
    fn ids_round_trip_through_from_str() {
        for section in SectionId::ALL {
            assert_eq!(section.id().parse::<SectionId>(), Ok(section));
        }
        assert!("footer".parse::<SectionId>().is_err());
    }

    #[test]
    fn element_ids_map_to_bounds() {
        let bounds = SectionBounds::from_element_id("skills", 1400.0, 700.0).unwrap();
        assert_eq!(bounds, SectionBounds::new(SectionId::Skills, 1400.0, 700.0));
        assert_eq!(
            SectionBounds::from_element_id("", 0.0, 10.0),
            Err(UnknownSection(String::new()))
        );
        assert!(SectionBounds::from_element_id("Home", 0.0, 10.0).is_err());
    }

    #[test]
    fn home_label_differs_from_id() {
        assert_eq!(SectionId::Home.label(), "Home");
        assert_eq!(SectionId::Skills.label(), "skills");
    }

    #[test]
    fn probe_sits_one_hundred_below_scroll_top() {
        let bounds = layout();
        assert_eq!(section_at(0.0, 100.0, &bounds), Some(SectionId::Home));
        assert_eq!(section_at(699.0, 100.0, &bounds), Some(SectionId::Home));
        assert_eq!(section_at(700.0, 100.0, &bounds), Some(SectionId::About));
        assert_eq!(section_at(2000.0, 100.0, &bounds), Some(SectionId::Contact));
    }

    #[test]
    fn probe_past_the_last_section_matches_nothing() {
        assert_eq!(section_at(2600.0, 100.0, &layout()), None);
        assert_eq!(section_at(0.0, 100.0, &[]), None);
    }

    #[test]
    fn overlapping_regions_resolve_to_the_first() {
        let bounds = vec![
            SectionBounds::new(SectionId::About, 0.0, 500.0),
            SectionBounds::new(SectionId::Skills, 200.0, 500.0),
        ];
        assert_eq!(section_at(250.0, 100.0, &bounds), Some(SectionId::About));
    }

    #[test]
    fn every_offset_yields_at_most_one_known_section() {
        let bounds = layout();
        let mut y = -200.0;
        while y < 3000.0 {
            if let Some(found) = section_at(y, 100.0, &bounds) {
                assert!(SectionId::ALL.contains(&found));
                let hits = bounds.iter().filter(|b| b.contains(y + 100.0)).count();
                assert_eq!(hits, 1);
            }
            y += 25.0;
        }
    }
}
