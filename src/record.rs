//! Raw CV records and their resolution into a [`RenderableDocument`].
//!
//! This is the boundary where enums become display strings, dates are
//! formatted and the age is computed. Nothing past this point looks at the
//! raw record.

use crate::model::{
    EducationEntry, ExperienceEntry, FacetKind, PersonalFacet, RenderableDocument, SkillChip,
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Record JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Date format '{0}' cannot be applied to a date")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    Male,
    Female,
    Other,
    #[default]
    PreferNotToSay,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceRecord {
    pub position: String,
    pub company: String,
    pub location: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Still in this role; renders the end as "present".
    pub current: bool,
    pub description: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationRecord {
    pub degree: String,
    pub school: String,
    pub location: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    pub description: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillRecord {
    pub name: String,
    pub category: Option<String>,
    pub sort_order: i32,
}

/// A CV as stored by the application, camelCase JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CvRecord {
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub links: Vec<String>,
    pub experience: Vec<ExperienceRecord>,
    pub education: Vec<EducationRecord>,
    pub skills: Vec<SkillRecord>,
    pub photo_path: Option<PathBuf>,

    pub date_of_birth: Option<NaiveDate>,
    pub nationality: String,
    pub gender: Gender,
    pub marital_status: String,
    pub driving_license: String,
    pub visa_status: String,

    pub show_date_of_birth: bool,
    pub show_nationality: bool,
    pub show_gender: bool,
    pub show_marital_status: bool,
    pub show_driving_license: bool,
    pub show_visa_status: bool,
}

impl Default for CvRecord {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            job_title: String::new(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            summary: String::new(),
            links: Vec::new(),
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            photo_path: None,
            date_of_birth: None,
            nationality: String::new(),
            gender: Gender::default(),
            marital_status: String::new(),
            driving_license: String::new(),
            visa_status: String::new(),
            show_date_of_birth: true,
            show_nationality: true,
            show_gender: true,
            show_marital_status: true,
            show_driving_license: true,
            show_visa_status: true,
        }
    }
}

impl CvRecord {
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a record file. A relative `photoPath` is taken relative to the
    /// directory containing the record.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RecordError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| RecordError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut record = Self::from_json(&source)?;
        if let (Some(photo), Some(dir)) = (record.photo_path.as_mut(), path.parent()) {
            if photo.is_relative() {
                *photo = dir.join(&*photo);
            }
        }
        Ok(record)
    }
}

/// Display strings the resolver needs. Defaults are English.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Labels {
    pub date_of_birth: String,
    pub nationality: String,
    pub gender: String,
    pub marital_status: String,
    pub driving_license: String,
    pub visa_status: String,

    pub male: String,
    pub female: String,
    pub other: String,
    pub prefer_not_to_say: String,

    pub present: String,
    /// Unit after the age, e.g. "34 years".
    pub years: String,
    pub range_separator: String,
    /// `chrono` format for entry dates.
    pub month_format: String,
    /// `chrono` format for the date of birth.
    pub birth_date_format: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            date_of_birth: "Date of birth".into(),
            nationality: "Nationality".into(),
            gender: "Gender".into(),
            marital_status: "Marital status".into(),
            driving_license: "Driving license".into(),
            visa_status: "Visa status".into(),
            male: "Male".into(),
            female: "Female".into(),
            other: "Other".into(),
            prefer_not_to_say: "Prefer not to say".into(),
            present: "Present".into(),
            years: "years".into(),
            range_separator: " \u{2013} ".into(),
            month_format: "%b %Y".into(),
            birth_date_format: "%d %b %Y".into(),
        }
    }
}

impl Labels {
    pub fn gender(&self, gender: Gender) -> &str {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
            Gender::Other => &self.other,
            Gender::PreferNotToSay => &self.prefer_not_to_say,
        }
    }
}

/// Whole years between `birth` and `today`.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

/// Turns [`CvRecord`]s into [`RenderableDocument`]s.
#[derive(Debug, Clone)]
pub struct Resolver {
    labels: Labels,
    today: NaiveDate,
}

impl Resolver {
    /// `today` is the reference date for the age.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            labels: Labels::default(),
            today,
        }
    }

    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Resolves the record and loads its photo, if any.
    pub fn resolve(&self, record: &CvRecord) -> Result<RenderableDocument, RecordError> {
        let photo = match &record.photo_path {
            Some(path) => Some(fs::read(path).map_err(|source| RecordError::Io {
                path: path.clone(),
                source,
            })?),
            None => None,
        };
        self.resolve_with_photo(record, photo)
    }

    /// Resolves the record using already loaded photo bytes.
    pub fn resolve_with_photo(
        &self,
        record: &CvRecord,
        photo: Option<Vec<u8>>,
    ) -> Result<RenderableDocument, RecordError> {
        let mut experience: Vec<ExperienceEntry> = record
            .experience
            .iter()
            .map(|e| {
                Ok(ExperienceEntry {
                    title: e.position.trim().to_string(),
                    organization: e.company.trim().to_string(),
                    location: e.location.trim().to_string(),
                    date_range: self.date_range(e.start_date, e.end_date, e.current)?,
                    description: e.description.trim().to_string(),
                    sort_order: e.sort_order,
                })
            })
            .collect::<Result<_, RecordError>>()?;
        experience.sort_by_key(|e| e.sort_order);

        let mut education: Vec<EducationEntry> = record
            .education
            .iter()
            .map(|e| {
                Ok(EducationEntry {
                    title: e.degree.trim().to_string(),
                    organization: e.school.trim().to_string(),
                    location: e.location.trim().to_string(),
                    date_range: self.date_range(e.start_date, e.end_date, e.current)?,
                    description: e.description.trim().to_string(),
                    sort_order: e.sort_order,
                })
            })
            .collect::<Result<_, RecordError>>()?;
        education.sort_by_key(|e| e.sort_order);

        let mut skills: Vec<SkillChip> = record
            .skills
            .iter()
            .filter(|s| !s.name.trim().is_empty())
            .map(|s| SkillChip {
                text: s.name.trim().to_string(),
                sort_order: s.sort_order,
                category: s.category.clone(),
            })
            .collect();
        skills.sort_by_key(|s| s.sort_order);

        let links = record
            .links
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        let document = RenderableDocument {
            name: record.full_name.trim().to_string(),
            job_title: record.job_title.trim().to_string(),
            email: record.email.trim().to_string(),
            phone: record.phone.trim().to_string(),
            location: record.location.trim().to_string(),
            summary: record.summary.trim().to_string(),
            links,
            experience,
            education,
            skills,
            photo: photo.filter(|p| !p.is_empty()),
            facets: self.facets(record)?,
        };
        log::debug!(
            "Resolved record '{}': {} experience, {} education, {} skills, {} visible facets",
            document.name,
            document.experience.len(),
            document.education.len(),
            document.skills.len(),
            document.drawn_facets().count()
        );
        Ok(document)
    }

    fn facets(&self, record: &CvRecord) -> Result<Vec<PersonalFacet>, RecordError> {
        let labels = &self.labels;
        let birth = match record.date_of_birth {
            Some(date) if date > self.today => {
                return Err(RecordError::InvalidDate(format!(
                    "date of birth {} is after {}",
                    date, self.today
                )));
            }
            Some(date) => format!(
                "{} ({} {})",
                format_date(date, &labels.birth_date_format)?,
                age_on(date, self.today),
                labels.years
            ),
            None => String::new(),
        };

        let facet = |kind, label: &str, value: &str, visible: bool| PersonalFacet {
            kind,
            label: label.to_string(),
            value: value.trim().to_string(),
            visible,
            is_default: false,
        };

        let mut gender = facet(
            FacetKind::Gender,
            &labels.gender,
            labels.gender(record.gender),
            record.show_gender,
        );
        gender.is_default = record.gender == Gender::PreferNotToSay;

        Ok(vec![
            facet(
                FacetKind::DateOfBirth,
                &labels.date_of_birth,
                &birth,
                record.show_date_of_birth,
            ),
            facet(
                FacetKind::Nationality,
                &labels.nationality,
                &record.nationality,
                record.show_nationality,
            ),
            gender,
            facet(
                FacetKind::MaritalStatus,
                &labels.marital_status,
                &record.marital_status,
                record.show_marital_status,
            ),
            facet(
                FacetKind::DrivingLicense,
                &labels.driving_license,
                &record.driving_license,
                record.show_driving_license,
            ),
            facet(
                FacetKind::VisaStatus,
                &labels.visa_status,
                &record.visa_status,
                record.show_visa_status,
            ),
        ])
    }

    fn date_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        current: bool,
    ) -> Result<String, RecordError> {
        let format = |d: NaiveDate| format_date(d, &self.labels.month_format);
        let end = match end {
            Some(date) => Some(format(date)?),
            None if current => Some(self.labels.present.clone()),
            None => None,
        };
        Ok(match (start.map(format).transpose()?, end) {
            (Some(start), Some(end)) => format!("{}{}{}", start, self.labels.range_separator, end),
            (Some(only), None) | (None, Some(only)) => only,
            (None, None) => String::new(),
        })
    }
}

/// Formats `date` with a caller-supplied `strftime` pattern.
///
/// Patterns chrono cannot apply to a plain date (unknown specifiers, or
/// time and zone fields) are reported instead of panicking.
fn format_date(date: NaiveDate, pattern: &str) -> Result<String, RecordError> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern))
        .map_err(|_| RecordError::InvalidFormat(pattern.to_string()))?;
    Ok(out)
}
