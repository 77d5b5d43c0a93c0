//! Single-page CV layout and PDF rendering.
//!
//! A [`CvRecord`] is resolved into a [`RenderableDocument`], which the
//! [`Exporter`] lays out on one fixed-size page: a header with optional
//! photo, a divider, and a two-column body. Text is measured through a
//! [`TextMetrics`] provider, long labels are truncated, free text is wrapped
//! and skills are packed into rows of chips. Content that does not fit is
//! clipped, never moved to a second page.
//!
//! ```no_run
//! use vitae::{Exporter, RenderableDocument};
//!
//! let mut doc = RenderableDocument::new("Ada Lovelace");
//! doc.job_title = "Analyst".into();
//! let pdf = Exporter::default().export(&doc)?;
//! # Ok::<(), vitae::ExportError>(())
//! ```

pub mod composer;
pub mod context;
pub mod cursor;
pub mod error;
pub mod export;
pub mod geometry;
pub mod model;
pub mod record;
pub mod sections;
pub mod theme;

pub use composer::{ColumnReport, ComposerState, DocumentComposer, LayoutReport};
pub use context::RenderContext;
pub use cursor::LayoutCursor;
pub use error::{Error, ExportError};
pub use export::{DEFAULT_WATERMARK, Exporter, ExporterBuilder, export};
pub use geometry::{ColumnLayout, PageGeometry};
pub use model::{
    EducationEntry, ExperienceEntry, FacetKind, PersonalFacet, RenderableDocument, SkillChip,
    TimelineEntry,
};
pub use record::{CvRecord, Gender, Labels, RecordError, Resolver};
pub use sections::{ChipCollection, EntryList, FacetList, FreeText, Section, SectionContent};
pub use theme::{ChipStyle, ConfigError, Theme};

pub use vitae_layout::{StandardFontMetrics, TextMetrics};
pub use vitae_render_core::{DisplayList, DrawCommand, PageWriter, RenderError, TextRun};
pub use vitae_types::{Color, Point, Rect, Size};
