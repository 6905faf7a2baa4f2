// Turns free-form model output into a structured Advisory.
use crate::model::Advisory;
use serde::Deserialize;

/// Keywords that switch the section cursor while scanning a reply.
/// Configurable so deployments prompting in another language can supply
/// their own header words; matching is case-insensitive substring.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SectionKeywords {
    pub opportunities: Vec<String>,
    pub risks: Vec<String>,
    pub recommendations: Vec<String>,
}

impl Default for SectionKeywords {
    fn default() -> Self {
        Self {
            opportunities: vec!["opportunities".to_string()],
            risks: vec!["risks".to_string()],
            recommendations: vec!["recommendations".to_string()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Summary,
    Opportunities,
    Risks,
    Recommendations,
}

/// Scans the reply line by line with a section cursor that starts at the
/// summary. A header line moves the cursor and is discarded. Summary lines
/// accumulate as running text; list sections only accept bullet lines
/// ("-" or "*") and silently drop everything else. The lossy handling of
/// non-bullet lines under a list cursor is deliberate and must stay.
pub fn parse_advisory(text: &str, keywords: &SectionKeywords) -> Advisory {
    let mut advisory = Advisory {
        summary: String::new(),
        opportunities: vec![],
        risks: vec![],
        recommendations: vec![],
    };
    let mut section = Section::Summary;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let lower = line.to_lowercase();
        if matches_any(&lower, &keywords.opportunities) {
            section = Section::Opportunities;
            continue;
        } else if matches_any(&lower, &keywords.risks) {
            section = Section::Risks;
            continue;
        } else if matches_any(&lower, &keywords.recommendations) {
            section = Section::Recommendations;
            continue;
        }

        match section {
            Section::Summary => {
                advisory.summary.push_str(line);
                advisory.summary.push(' ');
            }
            _ => {
                if let Some(item) = strip_bullet(line) {
                    match section {
                        Section::Opportunities => advisory.opportunities.push(item),
                        Section::Risks => advisory.risks.push(item),
                        Section::Recommendations => advisory.recommendations.push(item),
                        Section::Summary => unreachable!(),
                    }
                }
            }
        }
    }

    advisory
}

fn matches_any(lower_line: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| lower_line.contains(&k.to_lowercase()))
}

fn strip_bullet(line: &str) -> Option<String> {
    if line.starts_with('-') || line.starts_with('*') {
        Some(line.trim_start_matches(['-', '*', ' ']).to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY: &str = "\
This product shows solid potential.
Competition is moderate.

Opportunities:
- Growing niche demand
- Bundle with accessories
not a bullet, silently dropped

Risks:
* Price erosion from new entrants
- Single-supplier dependency

Recommendations:
- Differentiate on build quality
- Revisit pricing quarterly
";

    #[test]
    fn sections_are_split_on_header_keywords() {
        let advisory = parse_advisory(REPLY, &SectionKeywords::default());
        assert_eq!(
            advisory.summary,
            "This product shows solid potential. Competition is moderate. "
        );
        assert_eq!(
            advisory.opportunities,
            vec!["Growing niche demand", "Bundle with accessories"]
        );
        assert_eq!(
            advisory.risks,
            vec!["Price erosion from new entrants", "Single-supplier dependency"]
        );
        assert_eq!(
            advisory.recommendations,
            vec!["Differentiate on build quality", "Revisit pricing quarterly"]
        );
    }

    #[test]
    fn non_bullet_lines_under_list_sections_are_dropped() {
        let advisory = parse_advisory(
            "Summary text.\nRisks:\nthis line has no bullet\n- real risk\n",
            &SectionKeywords::default(),
        );
        assert_eq!(advisory.risks, vec!["real risk"]);
    }

    #[test]
    fn header_match_is_case_insensitive_substring() {
        let advisory = parse_advisory(
            "Intro.\n2. Key OPPORTUNITIES on the market\n- expand variants\n",
            &SectionKeywords::default(),
        );
        assert_eq!(advisory.opportunities, vec!["expand variants"]);
        // the header line itself never lands in the summary
        assert_eq!(advisory.summary, "Intro. ");
    }

    #[test]
    fn localized_keywords_drive_the_cursor() {
        let keywords = SectionKeywords {
            opportunities: vec!["chancen".to_string()],
            risks: vec!["risiken".to_string()],
            recommendations: vec!["empfehlungen".to_string()],
        };
        let advisory = parse_advisory(
            "Kurzfassung.\nChancen:\n- Nische besetzen\nRisiken:\n- Preisdruck\n",
            &keywords,
        );
        assert_eq!(advisory.opportunities, vec!["Nische besetzen"]);
        assert_eq!(advisory.risks, vec!["Preisdruck"]);
    }

    #[test]
    fn everything_before_a_header_is_summary() {
        let advisory = parse_advisory("only prose\nacross two lines", &SectionKeywords::default());
        assert_eq!(advisory.summary, "only prose across two lines ");
        assert!(advisory.opportunities.is_empty());
    }
}
