use rand::seq::IndexedRandom;
use rand::Rng;

/// SEO headline templates for different business types and locations.
/// Both `{name}` and `{location}` appear in every template.
pub const TEMPLATES: [&str; 20] = [
    "Why {name} is {location}'s Best Kept Secret in 2025",
    "{name}: The {location} Hotspot Everyone's Talking About",
    "Discover Why {name} Dominates {location}'s Local Scene",
    "From Local Favorite to {location} Legend: The {name} Story",
    "{name} Transforms {location}'s Dining Experience Forever",
    "Why {location} Locals Choose {name} Over Big Chains",
    "The {name} Revolution: Changing {location} One Customer at a Time",
    "{name}: Where {location} Meets Excellence in 2025",
    "How {name} Became {location}'s Most Reviewed Business",
    "The Secret Behind {name}'s Success in {location}",
    "{name}: Leading {location}'s New Business Renaissance",
    "Why {name} is {location}'s Rising Star This Year",
    "{name} - {location}'s Premier Destination for Quality Service",
    "The {name} Experience: Redefining {location}'s Business Standards",
    "Why {location} Residents Trust {name} for Their Needs",
    "{name}: Setting New Standards in {location}'s Business Landscape",
    "The {name} Phenomenon: How One Business Changed {location}",
    "{name}: Your {location} Partner for Success",
    "Discover the {name} Difference in {location}",
    "{name}: Where {location} Meets Innovation and Quality",
];

/// Generate a star rating, uniform in [3.8, 4.9], rounded to one decimal.
pub fn generate_rating() -> f64 {
    let raw = rand::rng().random_range(3.8_f64..=4.9);
    (raw * 10.0).round() / 10.0
}

/// Generate a review count, uniform in [50, 499].
pub fn generate_review_count() -> u32 {
    rand::rng().random_range(50..=499)
}

/// Pick a random template and substitute the business name and location.
///
/// Inputs are assumed non-empty; the boundary validates before calling.
pub fn generate_headline(name: &str, location: &str) -> String {
    let template = TEMPLATES
        .choose(&mut rand::rng())
        .unwrap_or(&TEMPLATES[0]);
    apply_template(template, name, location)
}

/// Replace every occurrence of both placeholders, not just the first.
fn apply_template(template: &str, name: &str, location: &str) -> String {
    template
        .replace("{name}", name)
        .replace("{location}", location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_carries_both_placeholders() {
        assert_eq!(TEMPLATES.len(), 20);
        for template in TEMPLATES {
            assert!(template.contains("{name}"), "missing {{name}}: {template}");
            assert!(
                template.contains("{location}"),
                "missing {{location}}: {template}"
            );
        }
    }

    #[test]
    fn rating_stays_in_range_with_one_decimal() {
        for _ in 0..1_000 {
            let rating = generate_rating();
            assert!((3.8..=4.9).contains(&rating), "out of range: {rating}");
            let tenths = rating * 10.0;
            assert!(
                (tenths - tenths.round()).abs() < 1e-9,
                "more than one decimal: {rating}"
            );
        }
    }

    #[test]
    fn review_count_stays_in_range() {
        for _ in 0..1_000 {
            let reviews = generate_review_count();
            assert!((50..=499).contains(&reviews), "out of range: {reviews}");
        }
    }

    #[test]
    fn headline_substitutes_both_placeholders() {
        for _ in 0..100 {
            let headline = generate_headline("Cake & Co", "Mumbai");
            assert!(!headline.contains("{name}"));
            assert!(!headline.contains("{location}"));
            assert!(headline.contains("Cake & Co"));
            assert!(headline.contains("Mumbai"));
        }
    }

    #[test]
    fn headline_is_always_a_known_template() {
        let expected: Vec<String> = TEMPLATES
            .iter()
            .map(|t| apply_template(t, "Cake & Co", "Mumbai"))
            .collect();
        for _ in 0..100 {
            let headline = generate_headline("Cake & Co", "Mumbai");
            assert!(
                expected.contains(&headline),
                "unknown headline: {headline}"
            );
        }
    }

    #[test]
    fn apply_template_replaces_repeated_occurrences() {
        let out = apply_template("{name} and {name} in {location}, {location}", "A", "B");
        assert_eq!(out, "A and A in B, B");
    }
}
