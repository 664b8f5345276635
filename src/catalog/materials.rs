use serde::Serialize;

const PLACEHOLDER_LINK: &str = "#";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub link: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: &'static str,
    pub link: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub title: String,
    pub video_url: &'static str,
}

/// Mock reading list for a topic. Titles are derived from the request.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StudyMaterials {
    pub pdfs: Vec<Document>,
    pub books: Vec<Book>,
    pub videos: Vec<Video>,
}

impl StudyMaterials {
    pub fn for_topic(topic: &str, level: &str, department: &str) -> Self {
        Self {
            pdfs: vec![
                Document {
                    title: format!("{topic} Fundamentals Guide"),
                    link: PLACEHOLDER_LINK,
                },
                Document {
                    title: format!("{department} {topic} Textbook"),
                    link: PLACEHOLDER_LINK,
                },
            ],
            books: vec![
                Book {
                    title: format!("Introduction to {topic}"),
                    author: "Expert Author",
                    link: PLACEHOLDER_LINK,
                },
                Book {
                    title: format!("{topic} for {level} Students"),
                    author: "Education Press",
                    link: PLACEHOLDER_LINK,
                },
            ],
            videos: vec![
                Video {
                    title: format!("{topic} Crash Course"),
                    video_url: PLACEHOLDER_LINK,
                },
                Video {
                    title: format!("{department} {topic} Tutorial"),
                    video_url: PLACEHOLDER_LINK,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_use_request_fields() {
        let materials = StudyMaterials::for_topic("Algebra", "200", "Mathematics");

        let pdfs: Vec<_> = materials.pdfs.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(pdfs, ["Algebra Fundamentals Guide", "Mathematics Algebra Textbook"]);

        assert_eq!(materials.books[1].title, "Algebra for 200 Students");
        assert_eq!(materials.books[1].author, "Education Press");
        assert_eq!(materials.videos[1].title, "Mathematics Algebra Tutorial");
        assert!(materials.videos.iter().all(|v| v.video_url == "#"));
    }
}
