// Behavioural properties of the keyword categorizer over the built-in dictionary

use expense_categorizer::{
    classify, label_of, Categorizer, Category, KeywordDictionary, CONFIDENCE_DEFAULT,
    CONFIDENCE_EXACT, CONFIDENCE_KEYWORD,
};

const SAMPLES: &[&str] = &[
    "",
    "   ",
    "restaurante",
    "Uber ride downtown",
    "NETFLIX SUBSCRIPTION",
    "eu gastei 120 no restaurante",
    "gasolina 80 reais",
    "farmácia 25 reais",
    "ALMOÇO com a equipe",
    "aluguel de outubro",
    "conta de luz",
    "😀🎉 ✨",
    "日本語のレシート",
    "\u{0}\u{7f}",
];

#[test]
fn test_total_over_arbitrary_input() {
    let long = "x".repeat(100_000);
    let mut inputs: Vec<&str> = SAMPLES.to_vec();
    inputs.push(&long);

    for text in inputs {
        let result = classify(text);
        assert!(Category::ALL.contains(&result.category));
        assert!((0.0..=1.0).contains(&result.confidence), "{:?}", text);
    }
}

#[test]
fn test_deterministic() {
    for text in SAMPLES {
        assert_eq!(classify(text), classify(text));
    }
}

#[test]
fn test_confidence_is_one_of_three_tiers() {
    for text in SAMPLES {
        let confidence = classify(text).confidence;
        assert!(
            [CONFIDENCE_EXACT, CONFIDENCE_KEYWORD, CONFIDENCE_DEFAULT].contains(&confidence),
            "{:?} -> {}",
            text,
            confidence
        );
    }
}

#[test]
fn test_default_fallback() {
    let result = classify("");
    assert_eq!(result.category, Category::Other);
    assert_eq!(result.confidence, 0.50);

    let result = classify("zzqx 42");
    assert_eq!(result.category, Category::Other);
    assert_eq!(result.confidence, 0.50);
}

#[test]
fn test_keyword_precedence() {
    let result = classify("restaurante");
    assert_eq!(result.category, Category::Food);
    assert_eq!(result.confidence, 0.80);
}

#[test]
fn test_vendor_recognition() {
    let result = classify("Uber ride downtown");
    assert_eq!(result.category, Category::Transport);
    assert_eq!(result.confidence, 0.80);
}

#[test]
fn test_case_insensitive() {
    assert_eq!(classify("NETFLIX SUBSCRIPTION"), classify("netflix subscription"));
    assert_eq!(classify("netflix subscription").category, Category::Entertainment);

    // Non-ASCII lowercasing
    assert_eq!(classify("ALMOÇO").category, Category::Food);
}

#[test]
fn test_portuguese_descriptions() {
    assert_eq!(classify("eu gastei 120 no restaurante").category, Category::Food);
    assert_eq!(classify("gasolina 80 reais").category, Category::Transport);
    assert_eq!(classify("farmácia 25 reais").category, Category::Health);
    assert_eq!(classify("aluguel de outubro").category, Category::Housing);
    assert_eq!(classify("conta de luz").category, Category::Utilities);
}

#[test]
fn test_ambiguity_resolves_to_earlier_category() {
    // One keyword from food (earlier) and one from entertainment (later)
    let mixed = classify("pizza before the cinema");
    assert_eq!(mixed, classify("pizza"));
    assert_eq!(mixed.category, Category::Food);

    // Same pair in the opposite textual order: priority, not position, decides
    assert_eq!(classify("cinema then pizza").category, Category::Food);
}

#[test]
fn test_every_keyword_classifies_into_its_category_or_an_earlier_one() {
    let dict = KeywordDictionary::builtin();
    let categorizer = Categorizer::new(dict);

    for rule in dict.rules() {
        for keyword in &rule.keywords {
            let result = categorizer.classify(keyword);
            assert!(
                result.category.priority() <= rule.category.priority(),
                "{:?} listed under {} classified as {}",
                keyword,
                rule.category,
                result.category
            );
        }
    }
}

#[test]
fn test_category_names_are_exact_matches() {
    for category in Category::ALL {
        if category == Category::Other {
            continue;
        }
        let result = classify(&format!("monthly {} expense", category));
        assert_eq!(result.category, category);
        assert_eq!(result.confidence, CONFIDENCE_EXACT);
    }
}

#[test]
fn test_unknown_category_label() {
    assert_eq!(label_of("not_a_real_category"), label_of("other"));
}

#[test]
fn test_shared_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let text = if i % 2 == 0 { "uber" } else { "netflix" };
                classify(text).category
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let expected = if i % 2 == 0 {
            Category::Transport
        } else {
            Category::Entertainment
        };
        assert_eq!(handle.join().unwrap(), expected);
    }
}
