//! Essay Ideas & Titles
//!
//! Template-based outlines and title suggestions for a topic.

use super::random::{shuffle, RandomSource};

/// How many titles are offered per request
pub const TITLES_PER_REQUEST: usize = 5;

const IDEA_APPROACHES: [&str; 3] = [
    "Historical Analysis",
    "Contemporary Relevance",
    "Comparative Study",
];

fn idea_points(approach: usize, topic: &str) -> [String; 3] {
    match approach {
        0 => [
            format!("The evolution of {topic} throughout history"),
            format!("Key historical figures in {topic}"),
            format!("Lessons from historical events related to {topic}"),
        ],
        1 => [
            format!("Current applications of {topic}"),
            format!("Modern challenges in {topic}"),
            format!("Future implications of {topic}"),
        ],
        _ => [
            format!("{topic} across different cultures/societies"),
            format!("Contrasting approaches to {topic}"),
            "Benefits and drawbacks of various perspectives".to_string(),
        ],
    }
}

/// The ten fixed title templates, filled with `topic`
pub fn title_templates(topic: &str) -> [String; 10] {
    [
        format!("The Impact of {topic} on Modern Society"),
        format!("Understanding {topic}: A Comprehensive Analysis"),
        format!("{topic} in the 21st Century: Challenges and Opportunities"),
        format!("The Evolution of {topic}: Past, Present, and Future"),
        format!("Exploring the Role of {topic} in Contemporary Life"),
        format!("{topic}: A Critical Examination of Current Trends"),
        format!("The Significance of {topic} in Today's World"),
        format!("{topic} and Its Implications for Future Generations"),
        format!("Rethinking {topic}: New Perspectives and Approaches"),
        format!("The Complexity of {topic}: Multiple Viewpoints"),
    ]
}

/// A suggested title with a stable 1-based index for later selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EssayTitle {
    pub index: usize,
    pub text: String,
}

/// Outline with one randomly chosen approach
pub fn essay_ideas(topic: &str, rng: &dyn RandomSource) -> String {
    let approach = rng
        .next_index(IDEA_APPROACHES.len())
        .min(IDEA_APPROACHES.len() - 1);
    let points: Vec<String> = idea_points(approach, topic)
        .iter()
        .enumerate()
        .map(|(i, point)| format!("{}. {}", i + 1, point))
        .collect();

    format!(
        "<strong>Essay Ideas for \"{topic}\"</strong><br><br>\
         <strong>Approach: {title}</strong><br><br>\
         <strong>Key Points to Explore:</strong><br>\
         {points}<br><br>\
         <strong>Structure Suggestion:</strong><br>\
         • Introduction: Define {topic} and its significance<br>\
         • Body: Develop each key point with evidence and examples<br>\
         • Conclusion: Synthesize insights and propose future directions",
        title = IDEA_APPROACHES[approach],
        points = points.join("<br>"),
    )
}

/// Shuffle the ten templates and keep five
pub fn essay_titles(topic: &str, rng: &dyn RandomSource) -> Vec<EssayTitle> {
    let mut titles = title_templates(topic);
    shuffle(rng, &mut titles);
    titles
        .into_iter()
        .take(TITLES_PER_REQUEST)
        .enumerate()
        .map(|(i, text)| EssayTitle { index: i + 1, text })
        .collect()
}

/// Selectable title list markup
pub fn render_titles(topic: &str, titles: &[EssayTitle]) -> String {
    let mut html = format!(
        "<strong>Essay Title Suggestions for \"{topic}\"</strong><br><br><div class=\"essay-titles\">"
    );
    for title in titles {
        html.push_str(&format!(
            "<div class=\"title-item\" data-index=\"{index}\"><div class=\"title-number\">{index}.</div><strong>{text}</strong></div>",
            index = title.index,
            text = title.text
        ));
    }
    html.push_str(
        "</div><br><strong>Writing Tips:</strong><br>\
         • Choose the title that best matches your assignment requirements<br>\
         • Modify any title to better fit your specific angle or focus<br>\
         • Ensure your chosen title is neither too broad nor too narrow",
    );
    html
}

/// Look up a previously offered title by its index
pub fn select_title(titles: &[EssayTitle], index: usize) -> Option<&EssayTitle> {
    titles.iter().find(|t| t.index == index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::{SeededRandom, ThreadRandom};
    use std::collections::HashSet;

    struct Fixed(usize);

    impl RandomSource for Fixed {
        fn next_index(&self, upper: usize) -> usize {
            self.0.min(upper - 1)
        }
    }

    #[test]
    fn test_titles_are_five_distinct_templates() {
        for topic in ["Climate Change", "AI", "the French Revolution"] {
            let titles = essay_titles(topic, &ThreadRandom);
            let templates: HashSet<String> = title_templates(topic).into_iter().collect();
            let texts: HashSet<&str> = titles.iter().map(|t| t.text.as_str()).collect();

            assert_eq!(titles.len(), 5);
            assert_eq!(texts.len(), 5);
            for title in &titles {
                assert!(templates.contains(&title.text));
                assert!(title.text.contains(topic));
            }
        }
    }

    #[test]
    fn test_title_indices_are_stable() {
        let titles = essay_titles("Energy", &SeededRandom::new(3));
        let indices: Vec<usize> = titles.iter().map(|t| t.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5]);
        assert_eq!(select_title(&titles, 2), Some(&titles[1]));
        assert!(select_title(&titles, 6).is_none());
    }

    #[test]
    fn test_seeded_titles_are_reproducible() {
        let a = essay_titles("Energy", &SeededRandom::new(11));
        let b = essay_titles("Energy", &SeededRandom::new(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_titles_tags_indices() {
        let titles = essay_titles("Energy", &ThreadRandom);
        let html = render_titles("Energy", &titles);
        for i in 1..=5 {
            assert!(html.contains(&format!("data-index=\"{}\"", i)));
        }
    }

    #[test]
    fn test_pinned_essay_ideas() {
        let html = essay_ideas("Democracy", &Fixed(1));
        assert!(html.contains("Approach: Contemporary Relevance"));
        assert!(html.contains("1. Current applications of Democracy"));
        assert!(html.contains("3. Future implications of Democracy"));
        assert!(html.contains("Introduction: Define Democracy"));

        let html = essay_ideas("Democracy", &Fixed(2));
        assert!(html.contains("Approach: Comparative Study"));
    }
}
