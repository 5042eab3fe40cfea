//! Final feedback composition: rule fragments plus score-tier commentary.

/// Below this score the "low score" message is appended.
const LOW_SCORE: u32 = 50;
/// Below this score (and at or above [`LOW_SCORE`]) the "good start"
/// message is appended.
const STRONG_SCORE: u32 = 80;

/// Appends the score-tier message to the rule fragments and guarantees a
/// non-empty result: an otherwise empty list is replaced by a single
/// success message.
pub fn compose(mut fragments: Vec<String>, score: u32) -> Vec<String> {
    if score < LOW_SCORE {
        fragments.push(format!(
            "Your ATS Score is low ({score}/100). Add more detailed descriptions and skills."
        ));
    } else if score < STRONG_SCORE {
        fragments.push(format!(
            "Good start! boost your ATS score ({score}/100) by adding more measurable results (numbers, %)."
        ));
    }

    if fragments.is_empty() {
        fragments.push(format!(
            "Your resume looks strong and well-structured! ATS Score: {score}/100"
        ));
    }

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_score_appends_the_low_message() {
        let feedback = compose(vec!["Add your email address.".into()], 12);
        assert_eq!(feedback.len(), 2);
        assert!(feedback[1].contains("low (12/100)"));
    }

    #[test]
    fn middling_score_appends_the_good_start_message() {
        let feedback = compose(Vec::new(), 65);
        assert_eq!(feedback.len(), 1);
        assert!(feedback[0].starts_with("Good start!"));
        assert!(feedback[0].contains("(65/100)"));
    }

    #[test]
    fn strong_score_with_no_fragments_yields_the_success_message() {
        let feedback = compose(Vec::new(), 92);
        assert_eq!(feedback.len(), 1);
        assert!(feedback[0].contains("ATS Score: 92/100"));
    }

    #[test]
    fn strong_score_with_fragments_adds_nothing() {
        let fragments = vec!["Good job adding certifications! They validate your expertise.".into()];
        let feedback = compose(fragments.clone(), 85);
        assert_eq!(feedback, fragments);
    }

    #[test]
    fn tier_boundaries() {
        assert!(compose(Vec::new(), 49)[0].contains("low"));
        assert!(compose(Vec::new(), 50)[0].starts_with("Good start!"));
        assert!(compose(Vec::new(), 79)[0].starts_with("Good start!"));
        assert!(compose(Vec::new(), 80)[0].contains("strong and well-structured"));
    }
}
