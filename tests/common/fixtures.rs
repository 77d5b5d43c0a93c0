#![allow(dead_code)]

use vitae::{
    EducationEntry, ExperienceEntry, FacetKind, PersonalFacet, RenderableDocument, SkillChip,
};

/// A document with only a name; every optional section is empty.
pub fn name_only() -> RenderableDocument {
    RenderableDocument::new("Grace Hopper")
}

/// One visible facet of every kind with distinct, searchable values.
pub fn all_facets() -> Vec<PersonalFacet> {
    vec![
        PersonalFacet::new(FacetKind::DateOfBirth, "Date of birth", "09 Dec 1906 (85 years)"),
        PersonalFacet::new(FacetKind::Nationality, "Nationality", "American"),
        PersonalFacet::new(FacetKind::Gender, "Gender", "Female"),
        PersonalFacet::new(FacetKind::MaritalStatus, "Marital status", "Married"),
        PersonalFacet::new(FacetKind::DrivingLicense, "Driving license", "Class B"),
        PersonalFacet::new(FacetKind::VisaStatus, "Visa status", "Citizen"),
    ]
}

/// The value each facet of [`all_facets`] shows.
pub fn facet_value(kind: FacetKind) -> &'static str {
    match kind {
        FacetKind::DateOfBirth => "09 Dec 1906 (85 years)",
        FacetKind::Nationality => "American",
        FacetKind::Gender => "Female",
        FacetKind::MaritalStatus => "Married",
        FacetKind::DrivingLicense => "Class B",
        FacetKind::VisaStatus => "Citizen",
    }
}

/// A realistic, fully populated document with deliberately long strings.
pub fn full_document() -> RenderableDocument {
    let mut doc = RenderableDocument::new("Grace Brewster Murray Hopper");
    doc.job_title = "Rear Admiral, Computer Scientist and Compiler Pioneer".into();
    doc.email = "grace.hopper@navy.example.mil".into();
    doc.phone = "+1 202 555 0143".into();
    doc.location = "Arlington, Virginia, United States".into();
    doc.summary = "Computer scientist who led the team that built the first compiler for a \
                   computer programming language and popularised machine-independent languages. \
                   Known for explaining complex ideas with nanosecond lengths of wire, for \
                   debugging an actual moth out of a relay, and for the conviction that it is \
                   easier to ask forgiveness than it is to get permission."
        .into();
    doc.links = "github.com/ghopper\nlinkedin.com/in/grace-hopper-compilers-and-cobol".into();

    doc.experience = vec![
        ExperienceEntry::new("Director of the Navy Programming Languages Group", 2)
            .with_organization("United States Navy, Office of Information Systems Planning")
            .with_location("Washington, D.C.")
            .with_date_range("Jan 1967 – Aug 1986")
            .with_description(
                "Standardised COBOL across the Navy and wrote validation software for \
                 compilers, turning a patchwork of dialects into one testable language.",
            ),
        ExperienceEntry::new("Senior Mathematician", 1)
            .with_organization("Eckert–Mauchly Computer Corporation")
            .with_date_range("1949 – 1952")
            .with_description("Built the A-0 system, the first linker-loader for UNIVAC I."),
        ExperienceEntry::new("Research Fellow", 0)
            .with_organization("Harvard Computation Lab")
            .with_location("Cambridge, MA")
            .with_date_range("1944 – 1949"),
    ];
    doc.education = vec![
        EducationEntry::new("Ph.D. Mathematics", 1)
            .with_organization("Yale University")
            .with_date_range("1934"),
        EducationEntry::new("B.A. Mathematics and Physics", 0)
            .with_organization("Vassar College")
            .with_date_range("1928"),
    ];
    doc.skills = [
        ("COBOL", "languages"),
        ("FLOW-MATIC", "languages"),
        ("Compiler design", "engineering"),
        ("Mathematics", "science"),
        ("Teaching", "people"),
        ("Standards work across many large organisations at once", "people"),
        ("UNIVAC", "hardware"),
        ("Harvard Mark I", "hardware"),
    ]
    .iter()
    .enumerate()
    .map(|(i, (text, category))| SkillChip::new(*text, i as i32).with_category(*category))
    .collect();
    doc.facets = all_facets();
    doc
}

/// A document with far more entries than fit on one page.
pub fn overflowing_document() -> RenderableDocument {
    let mut doc = full_document();
    doc.experience = (0..30)
        .map(|i| {
            ExperienceEntry::new(format!("Role {i}"), i)
                .with_organization("Somewhere")
                .with_date_range("2000 – 2001")
                .with_description("Did a great deal of important work. ".repeat(6))
        })
        .collect();
    doc
}

/// Encoded 8x8 PNG for header photo tests.
pub fn tiny_png() -> Vec<u8> {
    let img = image::RgbImage::from_fn(8, 8, |x, y| image::Rgb([(x * 30) as u8, (y * 30) as u8, 128]));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .expect("PNG encoding of an in-memory image");
    out.into_inner()
}

/// A record as the application stores it.
pub fn sample_record_json() -> &'static str {
    r#"{
        "fullName": "Ada Lovelace",
        "jobTitle": "Analyst of the Analytical Engine",
        "email": "ada@example.com",
        "phone": "+44 20 7946 0000",
        "location": "London",
        "summary": "Wrote the first published algorithm intended for a machine.",
        "links": ["github.com/ada", ""],
        "experience": [
            { "position": "Translator and annotator", "company": "Taylor's Scientific Memoirs",
              "startDate": "1842-10-01", "endDate": "1843-09-01", "sortOrder": 1,
              "description": "Added notes A to G, including a method for Bernoulli numbers." },
            { "position": "Student", "company": "Private tutoring with Augustus De Morgan",
              "startDate": "1840-01-01", "sortOrder": 0 }
        ],
        "skills": [
            { "name": "Mathematics", "sortOrder": 1, "category": "science" },
            { "name": "Poetical science", "sortOrder": 0 }
        ],
        "dateOfBirth": "1815-12-10",
        "nationality": "British",
        "gender": "preferNotToSay",
        "showGender": true,
        "maritalStatus": "Married",
        "showMaritalStatus": false
    }"#
}
