//! Prayer texts and their display names.

/// Services in the order they are listed, by file stem.
pub const SERVICE_ORDER: [&str; 4] = ["shacharit", "mincha", "arvit", "birkathamazon"];

/// One loaded prayer text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prayer {
    slug: String,
    name: String,
    text: String,
}

impl Prayer {
    /// Creates a prayer from its file stem and contents. The display name is
    /// derived from the stem.
    pub fn new(slug: impl Into<String>, text: impl Into<String>) -> Self {
        let slug = slug.into();
        let name = display_name(&slug).to_string();
        Self {
            slug,
            name,
            text: text.into(),
        }
    }

    /// File stem the prayer was loaded from, e.g. `"mincha"`.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Hebrew display name, e.g. `"מנחה"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full prayer text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Returns the Hebrew display name for a file stem, or the stem itself when
/// it is not a known service.
pub fn display_name(slug: &str) -> &str {
    match slug {
        "shacharit" => "שחרית",
        "mincha" => "מנחה",
        "arvit" => "ערבית",
        "birkathamazon" => "ברכת המזון",
        other => other,
    }
}

/// Finds a prayer by file stem or display name.
pub fn find_prayer<'a>(prayers: &'a [Prayer], name: &str) -> Option<&'a Prayer> {
    prayers.iter().find(|p| p.slug == name || p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_display_names() {
        assert_eq!(display_name("shacharit"), "שחרית");
        assert_eq!(display_name("mincha"), "מנחה");
        assert_eq!(display_name("arvit"), "ערבית");
        assert_eq!(display_name("birkathamazon"), "ברכת המזון");
    }

    #[test]
    fn unknown_slug_is_echoed() {
        assert_eq!(display_name("tehillim"), "tehillim");
    }

    #[test]
    fn every_service_has_a_hebrew_name() {
        for slug in SERVICE_ORDER {
            assert_ne!(display_name(slug), slug);
        }
    }

    #[test]
    fn find_by_slug_or_name() {
        let prayers = vec![Prayer::new("mincha", "a"), Prayer::new("arvit", "b")];
        assert_eq!(find_prayer(&prayers, "arvit").unwrap().text(), "b");
        assert_eq!(find_prayer(&prayers, "מנחה").unwrap().slug(), "mincha");
        assert!(find_prayer(&prayers, "shacharit").is_none());
    }
}
