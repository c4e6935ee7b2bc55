//! The authoritative sample record set.
//!
//! One consolidated fixture catalog used by `seed` and the test suite:
//! six semesters, eight documents across the four document kinds, and
//! eight achievements.

use anyhow::Result;

use crate::domain::{Course, Details, DocumentKind, Record, RecordId};

use super::catalog::Catalog;

fn record(id: &str, title: &str, description: &str, date: &str, details: Details) -> Result<Record> {
    Ok(Record::new(RecordId::new(id), title, date.parse()?, details)?
        .with_description(description))
}

fn semester(gpa: &str, courses: Vec<Course>, notes: &str) -> Details {
    Details::Semester {
        gpa: gpa.to_string(),
        courses,
        notes: notes.to_string(),
    }
}

fn document(
    kind: DocumentKind,
    number: &str,
    expiry: Option<&str>,
    authority: &str,
    location: &str,
) -> Result<Details> {
    Ok(Details::Document {
        kind,
        document_number: number.to_string(),
        expiry_date: expiry.map(str::parse).transpose()?,
        issuing_authority: authority.to_string(),
        location: location.to_string(),
    })
}

fn achievement(
    organization: &str,
    position: &str,
    team_members: &[&str],
    project_name: &str,
    certificate: bool,
) -> Details {
    Details::Achievement {
        organization: organization.to_string(),
        position: position.to_string(),
        team_members: team_members.iter().map(|m| m.to_string()).collect(),
        project_name: project_name.to_string(),
        certificate,
    }
}

/// Build the sample catalog
pub fn sample_catalog() -> Result<Catalog> {
    let mut catalog = Catalog::new();

    for result in [
        // Semesters
        record(
            "sem-1",
            "Spring 2023",
            "Completed with 3.8 GPA. Courses included Advanced Database Systems, Web Development, and Machine Learning.",
            "2023-05-15",
            semester(
                "3.8",
                vec![
                    Course::new("CS301", "Advanced Database Systems", "A"),
                    Course::new("CS315", "Web Development", "A-"),
                    Course::new("CS350", "Machine Learning", "B+"),
                    Course::new("ENG201", "Technical Writing", "A"),
                ],
                "Excellent semester overall. Struggled a bit with Machine Learning initially.",
            ),
        ),
        record(
            "sem-2",
            "Fall 2022",
            "Completed with 3.6 GPA. Courses included Data Structures, Algorithms, and Computer Networks.",
            "2022-12-20",
            semester(
                "3.6",
                vec![
                    Course::new("CS201", "Data Structures", "A-"),
                    Course::new("CS210", "Algorithms", "B+"),
                    Course::new("CS230", "Computer Networks", "A-"),
                ],
                "Heavy project load this semester.",
            ),
        ),
        record(
            "sem-3",
            "Spring 2022",
            "Completed with 3.7 GPA. Courses included Introduction to Programming, Digital Logic, and Mathematics.",
            "2022-05-18",
            semester(
                "3.7",
                vec![
                    Course::new("CS101", "Introduction to Programming", "A"),
                    Course::new("EE120", "Digital Logic", "B+"),
                    Course::new("MTH102", "Mathematics II", "A-"),
                ],
                "",
            ),
        ),
        record(
            "sem-4",
            "Fall 2021",
            "Completed with 3.5 GPA. Courses included Computer Organization, Discrete Mathematics, and Physics.",
            "2021-12-15",
            semester(
                "3.5",
                vec![
                    Course::new("CS110", "Computer Organization", "B+"),
                    Course::new("MTH110", "Discrete Mathematics", "A-"),
                    Course::new("PHY101", "Physics I", "B"),
                ],
                "",
            ),
        ),
        record(
            "sem-5",
            "Spring 2021",
            "Completed with 3.9 GPA. Courses included Introduction to Computer Science, Calculus, and Technical Writing.",
            "2021-05-20",
            semester(
                "3.9",
                vec![
                    Course::new("CS100", "Introduction to Computer Science", "A"),
                    Course::new("MTH101", "Calculus I", "A"),
                    Course::new("ENG101", "Technical Writing", "A-"),
                ],
                "Best semester so far.",
            ),
        ),
        record(
            "sem-6",
            "Fall 2020",
            "Completed with 3.7 GPA. Courses included English Composition, Introduction to College, and General Psychology.",
            "2020-12-18",
            semester(
                "3.7",
                vec![
                    Course::new("ENG100", "English Composition", "A-"),
                    Course::new("UNI101", "Introduction to College", "A"),
                    Course::new("PSY101", "General Psychology", "A-"),
                ],
                "",
            ),
        ),
        // Documents
        record(
            "doc-1",
            "Passport",
            "Valid until 2028. Document number: AB123456.",
            "2023-02-10",
            document(
                DocumentKind::Identification,
                "AB123456",
                Some("2028-02-10"),
                "Department of State",
                "Washington DC",
            )?,
        ),
        record(
            "doc-2",
            "Driver's License",
            "Valid until 2026. License number: DL789012.",
            "2022-05-15",
            document(
                DocumentKind::Identification,
                "DL789012",
                Some("2026-05-15"),
                "Department of Motor Vehicles",
                "Springfield",
            )?,
        ),
        record(
            "doc-3",
            "Birth Certificate",
            "Official birth certificate issued by the government.",
            "2020-01-05",
            document(
                DocumentKind::Identification,
                "BC445566",
                None,
                "County Registrar",
                "Springfield",
            )?,
        ),
        record(
            "doc-4",
            "Health Insurance",
            "Health insurance policy documents and coverage information.",
            "2023-01-01",
            document(
                DocumentKind::Insurance,
                "HI-2023-0042",
                Some("2024-01-01"),
                "BlueShield Mutual",
                "Hartford",
            )?,
        ),
        record(
            "doc-5",
            "Car Insurance",
            "Vehicle insurance policy for Toyota Camry.",
            "2022-11-15",
            document(
                DocumentKind::Insurance,
                "CI-88421",
                Some("2023-11-15"),
                "AutoSure Insurance",
                "Columbus",
            )?,
        ),
        record(
            "doc-6",
            "Resume",
            "Updated professional resume with recent work experiences and skills.",
            "2023-03-20",
            document(
                DocumentKind::Career,
                "RES-2023-03",
                None,
                "Self-prepared",
                "Personal drive",
            )?,
        ),
        record(
            "doc-7",
            "Cover Letter Template",
            "Customizable cover letter template for job applications.",
            "2023-03-22",
            document(
                DocumentKind::Career,
                "CLT-2023-03",
                None,
                "Self-prepared",
                "Personal drive",
            )?,
        ),
        record(
            "doc-8",
            "Rental Agreement",
            "Current apartment lease agreement valid until December 2023.",
            "2022-12-01",
            document(
                DocumentKind::Housing,
                "LEASE-2022-12",
                Some("2023-12-01"),
                "Oakwood Property Management",
                "Unit 4B, Oakwood Apartments",
            )?,
        ),
        // Achievements
        record(
            "ach-1",
            "Web Design Competition",
            "First place in the national web design hackathon.",
            "2023-03-22",
            achievement(
                "National Design Hackathon",
                "Team Lead",
                &["John Doe", "Jane Smith", "Alex Johnson"],
                "EcoTrack - Sustainability Monitoring System",
                true,
            ),
        ),
        record(
            "ach-2",
            "Dean's List",
            "Recognized on the Dean's List for academic excellence for Fall 2022 semester.",
            "2022-12-15",
            achievement(
                "Tech University",
                "Student",
                &[],
                "Fall 2022 Dean's List",
                true,
            ),
        ),
        record(
            "ach-3",
            "Coding Hackathon",
            "Second place in the 24-hour coding challenge organized by Tech Innovators.",
            "2022-11-05",
            achievement(
                "Tech Innovators",
                "Backend Developer",
                &["Priya Patel", "Marcus Lee"],
                "QuickQueue - Event Check-In App",
                true,
            ),
        ),
        record(
            "ach-4",
            "Leadership Award",
            "Received the Student Leadership Award for contributions to the Computer Science Club.",
            "2022-05-28",
            achievement(
                "Computer Science Club",
                "Vice President",
                &[],
                "Peer Mentoring Program",
                true,
            ),
        ),
        record(
            "ach-5",
            "Research Publication",
            "Co-authored a research paper on machine learning applications in healthcare.",
            "2022-08-12",
            achievement(
                "Tech University",
                "Co-author",
                &["Elena Ortiz", "Sam Nguyen"],
                "Machine Learning Applications in Healthcare",
                false,
            ),
        ),
        record(
            "ach-6",
            "Math Olympiad",
            "Honorable mention at the State Mathematics Olympiad.",
            "2021-11-20",
            achievement(
                "State Mathematics Society",
                "Participant",
                &[],
                "State Mathematics Olympiad",
                true,
            ),
        ),
        record(
            "ach-7",
            "Scholarship",
            "Awarded merit-based scholarship for academic excellence.",
            "2021-08-05",
            achievement(
                "Tech University",
                "Recipient",
                &[],
                "Merit Scholarship Program",
                false,
            ),
        ),
        record(
            "ach-8",
            "Debate Competition",
            "First place in the inter-university debate competition on technology ethics.",
            "2021-04-15",
            achievement(
                "Inter-University Debate League",
                "Speaker",
                &["Dana Whitfield"],
                "Technology Ethics Debate",
                true,
            ),
        ),
    ] {
        catalog.add(result?)?;
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    #[test]
    fn test_sample_catalog_counts() {
        let catalog = sample_catalog().unwrap();

        assert_eq!(catalog.count(Category::Semester), 6);
        assert_eq!(catalog.count(Category::Document), 8);
        assert_eq!(catalog.count(Category::Achievement), 8);
        assert_eq!(catalog.len(), 22);
    }

    #[test]
    fn test_sample_catalog_known_records() {
        let catalog = sample_catalog().unwrap();

        let sem = catalog.get(&RecordId::new("sem-1")).unwrap();
        assert_eq!(sem.title, "Spring 2023");
        assert_eq!(sem.category(), Category::Semester);

        let doc = catalog.get(&RecordId::new("doc-1")).unwrap();
        assert_eq!(doc.title, "Passport");
        assert_eq!(doc.details.document_kind(), Some(DocumentKind::Identification));
    }

    #[test]
    fn test_sample_ids_match_category_prefix() {
        let catalog = sample_catalog().unwrap();

        for record in &catalog.records {
            let prefix = record.category().id_prefix();
            assert!(
                record.id.as_str().starts_with(&format!("{}-", prefix)),
                "id {} does not match category {}",
                record.id,
                record.category()
            );
        }
    }
}
