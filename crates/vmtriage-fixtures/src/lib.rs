//! # vmtriage-fixtures
//!
//! Synthetic voicemail scenarios for the vmtriage generator.
//!
//! Provides the six transcript templates (one per category), the fixed
//! patient / drug / clinician vocabularies, and [`TemplateSelector`], the
//! `ScenarioSource` that fills templates from those vocabularies.
//!
//! All data is hardcoded and fictional.

pub mod selector;
pub mod templates;
pub mod vocab;

pub use selector::TemplateSelector;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};

    use vmtriage_contracts::category::Category;
    use vmtriage_core::traits::ScenarioSource;

    use crate::selector::fill;
    use crate::templates::{template_for, TEMPLATES};
    use crate::vocab::{CLINICIANS, DRUGS, PATIENTS};
    use crate::TemplateSelector;

    // ── Templates ─────────────────────────────────────────────────────────────

    #[test]
    fn one_template_per_category() {
        assert_eq!(TEMPLATES.len(), Category::ALL.len());
        for category in Category::ALL {
            assert!(template_for(category).is_some(), "no template for {category}");
        }
    }

    #[test]
    fn every_template_has_keywords() {
        for template in TEMPLATES {
            assert!(!template.keywords.is_empty(), "{:?}", template.category);
        }
    }

    #[test]
    fn templates_only_use_known_placeholders() {
        for template in TEMPLATES {
            let filled = fill(template.text_pattern, "N", "D", "C");
            assert!(!filled.contains('{') && !filled.contains('}'), "{filled}");
        }
    }

    #[test]
    fn fill_replaces_every_placeholder() {
        let text = fill("{name} asked {doctor} about {drug}; {name} again", "Emma", "Panadol", "Dr. Lee");
        assert_eq!(text, "Emma asked Dr. Lee about Panadol; Emma again");
    }

    // ── TemplateSelector ──────────────────────────────────────────────────────

    #[test]
    fn draw_fills_from_vocabularies() {
        let selector = TemplateSelector::new();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..200 {
            let transcript = selector.draw(&mut rng);
            assert!(PATIENTS.contains(&transcript.patient_name.as_str()));
            assert!(!transcript.text.contains('{'));

            let template = template_for(transcript.category).unwrap();
            assert_eq!(transcript.keywords, template.keywords);

            if template.text_pattern.contains("{name}") {
                assert!(transcript.text.contains(&transcript.patient_name));
            }
            if template.text_pattern.contains("{drug}") {
                assert!(DRUGS.iter().any(|d| transcript.text.contains(d)));
            }
            if template.text_pattern.contains("{doctor}") {
                assert!(CLINICIANS.iter().any(|c| transcript.text.contains(c)));
            }
        }
    }

    #[test]
    fn draw_reaches_every_category() {
        let selector = TemplateSelector::new();
        let mut rng = StdRng::seed_from_u64(12);

        let seen: HashSet<Category> = (0..500).map(|_| selector.draw(&mut rng).category).collect();
        assert_eq!(seen.len(), Category::ALL.len());
    }

    #[test]
    fn draw_is_reproducible_for_a_seed() {
        let selector = TemplateSelector::new();
        let a: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(13);
            (0..20).map(|_| selector.draw(&mut rng)).collect()
        };
        let b: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(13);
            (0..20).map(|_| selector.draw(&mut rng)).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn custom_template_set_is_used() {
        let selector = TemplateSelector::with_templates(&TEMPLATES[3..4]).unwrap();
        let mut rng = StdRng::seed_from_u64(14);
        for _ in 0..20 {
            assert_eq!(selector.draw(&mut rng).category, Category::Unknown);
        }
    }

    #[test]
    fn empty_template_set_is_rejected() {
        assert!(TemplateSelector::with_templates(&[]).is_none());
    }
}
