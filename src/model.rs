//! The fully resolved document the composer lays out.
//!
//! Every string here is final display text: labels are localized, enums are
//! resolved and dates are formatted before a document reaches the engine.

use serde::{Deserialize, Serialize};

/// One dated item in the experience or education list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineEntry {
    pub title: String,
    pub organization: String,
    pub location: String,
    /// Preformatted range, e.g. `2019 – 2023`.
    pub date_range: String,
    pub description: String,
    /// Ascending display position.
    pub sort_order: i32,
}

pub type ExperienceEntry = TimelineEntry;
pub type EducationEntry = TimelineEntry;

impl TimelineEntry {
    pub fn new(title: impl Into<String>, sort_order: i32) -> Self {
        Self {
            title: title.into(),
            sort_order,
            ..Default::default()
        }
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = organization.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_date_range(mut self, date_range: impl Into<String>) -> Self {
        self.date_range = date_range.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillChip {
    pub text: String,
    pub sort_order: i32,
    /// Grouping key; the theme maps it to a chip color.
    pub category: Option<String>,
}

impl SkillChip {
    pub fn new(text: impl Into<String>, sort_order: i32) -> Self {
        Self {
            text: text.into(),
            sort_order,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FacetKind {
    DateOfBirth,
    Nationality,
    Gender,
    MaritalStatus,
    DrivingLicense,
    VisaStatus,
}

impl FacetKind {
    pub const ALL: [FacetKind; 6] = [
        FacetKind::DateOfBirth,
        FacetKind::Nationality,
        FacetKind::Gender,
        FacetKind::MaritalStatus,
        FacetKind::DrivingLicense,
        FacetKind::VisaStatus,
    ];
}

/// An optional personal detail together with its visibility flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalFacet {
    pub kind: FacetKind,
    pub label: String,
    pub value: String,
    pub visible: bool,
    /// True when `value` is the placeholder for "not provided",
    /// such as a gender of "prefer not to say".
    #[serde(default)]
    pub is_default: bool,
}

impl PersonalFacet {
    pub fn new(kind: FacetKind, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            value: value.into(),
            visible: true,
            is_default: false,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// A facet is drawn only when it is visible and carries a real value.
    pub fn is_drawn(&self) -> bool {
        self.visible && !self.is_default && !self.value.trim().is_empty()
    }
}

/// Immutable input to one render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderableDocument {
    pub name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub links: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillChip>,
    /// Encoded PNG or JPEG bytes.
    #[serde(skip)]
    pub photo: Option<Vec<u8>>,
    pub facets: Vec<PersonalFacet>,
}

impl RenderableDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Non-empty contact strings in header order.
    pub fn contact_parts(&self) -> impl Iterator<Item = &str> {
        [&self.email, &self.phone, &self.location]
            .into_iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    pub fn has_photo(&self) -> bool {
        self.photo.as_ref().is_some_and(|p| !p.is_empty())
    }

    pub fn drawn_facets(&self) -> impl Iterator<Item = &PersonalFacet> {
        self.facets.iter().filter(|f| f.is_drawn())
    }

    pub fn facet(&self, kind: FacetKind) -> Option<&PersonalFacet> {
        self.facets.iter().find(|f| f.kind == kind)
    }

    pub fn facet_mut(&mut self, kind: FacetKind) -> Option<&mut PersonalFacet> {
        self.facets.iter_mut().find(|f| f.kind == kind)
    }
}

/// References to `items` ordered by `key`; equal keys keep their input order.
pub(crate) fn sorted_by_order<T, F>(items: &[T], key: F) -> Vec<&T>
where
    F: Fn(&T) -> i32,
{
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by_key(|item| key(item));
    sorted
}
