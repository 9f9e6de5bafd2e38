mod support;

use lexbio_map::{compute_global_stats, compute_model_stats, field_count};

use support::{catalog, fields};

#[test]
fn override_absent_from_vocabulary_stays_unmapped() {
    let vocabulary = catalog(&[("occurrenceID", "Occurrence"), ("eventDate", "Occurrence")]);
    let lex = fields(&[("occurrenceID", true), ("notes", false)]);

    let stats = compute_model_stats(&vocabulary, &lex, &["Occurrence"]);

    assert_eq!(stats.mapped, 1);
    assert_eq!(stats.total, 2);
    assert_eq!(stats.missing, 1);
    assert_eq!(stats.pct, 50.0);
}

#[test]
fn override_reaches_renamed_term() {
    let vocabulary = catalog(&[("occurrenceRemarks", "Occurrence"), ("eventDate", "Event")]);
    let lex = fields(&[("notes", false)]);

    let stats = compute_model_stats(&vocabulary, &lex, &["Occurrence", "Event"]);

    assert_eq!(stats.mapped, 1);
    assert_eq!(stats.total, 2);
}

#[test]
fn protocol_fields_never_map() {
    let vocabulary = catalog(&[("location", "Location"), ("subject", "Location")]);
    let lex = fields(&[("location", true), ("subject", true)]);

    let stats = compute_model_stats(&vocabulary, &lex, &["Location"]);

    assert_eq!(stats.mapped, 0);
    assert_eq!(stats.total, 2);
    assert_eq!(field_count(&lex), 0);
}

#[test]
fn no_relevant_terms_gives_zero_pct() {
    let vocabulary = catalog(&[("eventDate", "Event")]);
    let lex = fields(&[("eventDate", true)]);

    let stats = compute_model_stats(&vocabulary, &lex, &["Taxon"]);

    assert_eq!(stats.total, 0);
    assert_eq!(stats.mapped, 0);
    assert_eq!(stats.pct, 0.0);
}

#[test]
fn terms_outside_the_classes_do_not_count() {
    let vocabulary = catalog(&[
        ("eventDate", "Event"),
        ("scientificName", "Taxon"),
        ("basisOfRecord", "Record-level"),
    ]);
    let lex = fields(&[("eventDate", true), ("scientificName", true)]);

    let stats = compute_model_stats(&vocabulary, &lex, &["Event", "Record-level"]);

    assert_eq!(stats.mapped, 1);
    assert_eq!(stats.total, 2);
    assert!(stats.mapped <= stats.total);
    assert_eq!(stats.mapped + stats.missing, stats.total);
}

#[test]
fn global_stats_union_fields_and_sum_counts() {
    let vocabulary = catalog(&[
        ("eventDate", "Event"),
        ("occurrenceRemarks", "Occurrence"),
        ("identificationRemarks", "Identification"),
        ("scientificName", "Taxon"),
    ]);
    let occurrence = fields(&[("eventDate", true), ("notes", false), ("subject", true)]);
    let identification = fields(&[
        ("eventDate", false),
        ("comment", false),
        ("subject", true),
        ("taxonId", false),
    ]);
    let classes = ["Occurrence", "Event", "Identification", "Taxon"];

    let global = compute_global_stats(&vocabulary, &[occurrence, identification], &classes);

    assert_eq!(global.stats.mapped, 3);
    assert_eq!(global.stats.total, 4);
    assert_eq!(global.stats.missing, 1);
    assert_eq!(global.stats.pct, 75.0);
    // eventDate is counted once per lexicon
    assert_eq!(global.total_fields, 4);
}

#[test]
fn global_stats_of_nothing() {
    let vocabulary = catalog(&[]);
    let global = compute_global_stats::<&str>(&vocabulary, &[], &[]);
    assert_eq!(global.stats.total, 0);
    assert_eq!(global.stats.pct, 0.0);
    assert_eq!(global.total_fields, 0);
}
