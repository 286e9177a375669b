use std::collections::HashSet;

use seqalign::align::{Aligner, GlobalAligner, SimpleScoring, SoftScoring};
use seqalign::structs::{Profile, Sequence, SoftElement};
use seqalign::Vocabulary;

fn words(sentence: &str) -> Sequence<String> {
    Sequence::from_elements(sentence.split_whitespace().map(str::to_string))
}

#[test]
fn test_word_alignment_through_vocabulary() {
    let mut vocabulary = Vocabulary::new("-".to_string());
    let first = vocabulary.encode_sequence(&words("what a beautiful day"));
    let second = vocabulary.encode_sequence(&words("what a disappointingly bad day"));

    let aligner = GlobalAligner::new(SimpleScoring::new(3.0, -1.0), -2.0);
    let (score, alignments) = aligner.align(&first, &second, true);
    let alignments = alignments.unwrap();

    assert_eq!(score, 6.0);
    // the unmatched word pairs with either of the two extra words
    assert_eq!(alignments.len(), 2);

    let pairs: HashSet<(String, String)> = alignments
        .iter()
        .map(|alignment| {
            let decoded = vocabulary.decode_alignment(alignment).unwrap();
            (decoded.first.to_string(), decoded.second.to_string())
        })
        .collect();
    let expected: HashSet<(String, String)> = [
        (
            "what a beautiful - day",
            "what a disappointingly bad day",
        ),
        (
            "what a - beautiful day",
            "what a disappointingly bad day",
        ),
    ]
    .iter()
    .map(|(a, b)| (a.to_string(), b.to_string()))
    .collect();
    assert_eq!(pairs, expected);

    for alignment in &alignments {
        assert_eq!(alignment.score, score);
        assert_eq!(alignment.identical_count(), 3);
        assert_eq!(alignment.gap_count(), 1);
        assert_eq!(alignment.percent_identity(), 60.0);
    }
}

#[test]
fn test_merged_profile_weights_count_contributors() {
    let mut vocabulary = Vocabulary::new("-".to_string());
    let aligner = GlobalAligner::new(SimpleScoring::new(3.0, -1.0), -2.0);

    let pairs = [
        ("the day was good", "the day was bad"),
        ("the day was long", "the day was short"),
    ];
    let mut profiles: Vec<Profile<u32>> = vec![];
    for (a, b) in pairs {
        let first = vocabulary.encode_sequence(&words(a));
        let second = vocabulary.encode_sequence(&words(b));
        let (_, alignments) = aligner.align(&first, &second, true);
        profiles.push(Profile::from_alignment(&alignments.unwrap()[0]));
    }

    let mut merged = profiles.remove(0);
    merged.merge_with(&profiles[0]);

    let decoded = vocabulary.decode_profile(&merged).unwrap();
    // two alignments of two rows each contribute to every column
    assert!(decoded.iter().all(|column| column.total_weight() == 4));
    assert_eq!(decoded[0], SoftElement::new([("the".to_string(), 4)]));
    assert_eq!(
        decoded[3],
        SoftElement::new([
            ("good".to_string(), 1),
            ("bad".to_string(), 1),
            ("long".to_string(), 1),
            ("short".to_string(), 1),
        ])
    );
}

#[test]
fn test_profile_against_sequence() {
    let mut vocabulary = Vocabulary::new("-".to_string());
    let first = vocabulary.encode_sequence(&words("what a beautiful day"));
    let second = vocabulary.encode_sequence(&words("what a disappointingly bad day"));

    let aligner = GlobalAligner::new(SimpleScoring::new(3.0, -1.0), -2.0);
    let (_, alignments) = aligner.align(&first, &second, true);
    let alignments = alignments.unwrap();

    // build the profile from the alignment that keeps "beautiful" paired
    // with "disappointingly", then align a new sentence against it
    let alignment = alignments
        .iter()
        .find(|alignment| {
            let decoded = vocabulary.decode_alignment(alignment).unwrap();
            decoded.first.to_string() == "what a beautiful - day"
        })
        .unwrap();
    let profile = Profile::from_alignment(alignment);
    let query = Profile::from_sequence(&vocabulary.encode_sequence(&words("what a bad day")));

    let profile_aligner =
        GlobalAligner::new(SoftScoring::new(SimpleScoring::new(3.0, -1.0)), -2.0);
    let (score, profile_alignments) = profile_aligner.align(&profile, &query, true);
    let profile_alignments = profile_alignments.unwrap();

    // what/what 3, a/a 3, ambiguous column skipped -2,
    // bad against {-, bad} scores 1, day/day 3
    assert_eq!(score, 8.0);
    assert_eq!(profile_alignments.len(), 1);

    let decoded = vocabulary
        .decode_profile_alignment(&profile_alignments[0])
        .unwrap();
    assert_eq!(decoded.score, score);
    assert_eq!(decoded.len(), 5);
    assert_eq!(decoded.second[2], SoftElement::single("-".to_string()));
    assert_eq!(
        decoded.first[3],
        SoftElement::new([("-".to_string(), 1), ("bad".to_string(), 1)])
    );
    // matched profile columns carry weight 2, so no column compares
    // identical to the weight-1 query columns
    assert_eq!(decoded.identical_count(), 0);
    assert_eq!(decoded.similar_count(), 4);
    assert_eq!(decoded.gap_count(), 1);
}
