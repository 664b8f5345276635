use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reel {
    pub course: &'static str,
    pub caption: &'static str,
    pub video_url: &'static str,
}

const REELS: [Reel; 5] = [
    Reel {
        course: "Programming",
        caption: "Python Basics Tutorial",
        video_url: "https://youtu.be/Gua2Bo_G-J0?si=FNnNZBbmBh0yqvrk",
    },
    Reel {
        course: "Mathematics",
        caption: "Calculus Fundamentals",
        video_url: "https://youtu.be/fb7YCVR5fIU?si=XWozkxGoBV2HP2HW",
    },
    Reel {
        course: "Science",
        caption: "Physics Concepts Explained",
        video_url: "https://youtu.be/qISkyoiGHcI?si=BKRnkFfl-fqKXgLG",
    },
    Reel {
        course: "Programming",
        caption: "JavaScript Crash Course",
        video_url: "https://youtu.be/27gabbJQZqc?si=rsOLmkD2QXOoxSoi",
    },
    Reel {
        course: "Mathematics",
        caption: "Algebra Made Easy",
        video_url: "https://youtu.be/Cox8rLXYAGQ?si=CvKUaPuPJOxPb6cr",
    },
];

/// All reels, or only those whose course matches exactly.
pub fn reels_for(course: Option<&str>) -> Vec<Reel> {
    match course {
        Some(course) => REELS.iter().filter(|r| r.course == course).copied().collect(),
        None => REELS.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filter_returns_everything_in_order() {
        let reels = reels_for(None);
        assert_eq!(reels.len(), 5);
        assert_eq!(reels[0].caption, "Python Basics Tutorial");
        assert_eq!(reels[4].caption, "Algebra Made Easy");
    }

    #[test]
    fn filter_is_exact_and_case_sensitive() {
        let captions: Vec<_> = reels_for(Some("Mathematics"))
            .into_iter()
            .map(|r| r.caption)
            .collect();
        assert_eq!(captions, ["Calculus Fundamentals", "Algebra Made Easy"]);

        assert!(reels_for(Some("mathematics")).is_empty());
        assert!(reels_for(Some("History")).is_empty());
    }
}
