//! End-to-end ranking scenarios over an in-memory snapshot.

use podium::{
    rank, rank_all, rank_side_stage, Category, CategoryPolicy, ContestSnapshot, JudgeSlot,
    Participant,
};
use pretty_assertions::assert_eq;

fn register(snapshot: &mut ContestSnapshot, id: &str, category: &str, created: i64) {
    snapshot
        .participants
        .push(Participant::new(id, id, category, "entry", created));
}

fn score(snapshot: &mut ContestSnapshot, id: &str, scores: &[f64]) {
    for (i, v) in scores.iter().enumerate() {
        snapshot.record_score(id, JudgeSlot::ALL[i], *v);
    }
}

/// The scenario from the live event rules: two ANIME participants merge
/// into DESFILE LIVRE (count 2 < threshold 3) and rank alongside a native,
/// with the registration stamp breaking the tied means.
#[test]
fn merged_category_ranks_under_fallback_with_creation_tiebreak() {
    let policy = CategoryPolicy::default();
    let mut snapshot = ContestSnapshot::default();

    register(&mut snapshot, "A", "ANIME", 100);
    register(&mut snapshot, "B", "ANIME", 50);
    register(&mut snapshot, "C", "DESFILE LIVRE", 10);
    score(&mut snapshot, "A", &[9.0]);
    score(&mut snapshot, "B", &[9.0]);
    score(&mut snapshot, "C", &[7.0]);

    // ANIME itself is no longer rankable.
    assert_eq!(
        rank(
            Category::Anime,
            &snapshot.participants,
            &snapshot.sheets,
            &policy
        ),
        vec![]
    );

    let entries = rank(
        Category::DesfileLivre,
        &snapshot.participants,
        &snapshot.sheets,
        &policy,
    );
    let ids: Vec<&str> = entries.iter().map(|e| e.participant.id.as_str()).collect();
    assert_eq!(ids, ["B", "A", "C"]);
    assert_eq!(entries[0].mean, 9.0);
    assert_eq!(entries[2].mean, 7.0);
}

#[test]
fn anime_with_three_participants_keeps_its_own_board() {
    let policy = CategoryPolicy::default();
    let mut snapshot = ContestSnapshot::default();

    for (id, created) in [("A", 1), ("B", 2), ("C", 3)] {
        register(&mut snapshot, id, "ANIME", created);
    }
    score(&mut snapshot, "A", &[8.0, 9.0]);
    score(&mut snapshot, "B", &[10.0]);

    let entries = rank(
        Category::Anime,
        &snapshot.participants,
        &snapshot.sheets,
        &policy,
    );
    let ids: Vec<&str> = entries.iter().map(|e| e.participant.id.as_str()).collect();
    // C is unscored and absent entirely.
    assert_eq!(ids, ["B", "A"]);
}

#[test]
fn excluded_categories_never_appear_on_the_board() {
    let policy = CategoryPolicy::default();
    let mut snapshot = ContestSnapshot::default();

    for (id, category) in [
        ("k1", "COSPOBRE"),
        ("k2", "COSPOBRE"),
        ("k3", "COSPOBRE"),
        ("i1", "INFANTIL"),
        ("i2", "INFANTIL"),
        ("i3", "INFANTIL"),
    ] {
        register(&mut snapshot, id, category, 1);
        score(&mut snapshot, id, &[10.0, 10.0, 10.0]);
    }

    let board = rank_all(&snapshot.participants, &snapshot.sheets, &policy);
    assert_eq!(board, vec![]);
}

#[test]
fn full_board_covers_categories_in_canonical_order() {
    let policy = CategoryPolicy::default();
    let mut snapshot = ContestSnapshot::default();

    // GAME holds its own (3 registered), GEEK merges (1 registered).
    for (id, created) in [("g1", 1), ("g2", 2), ("g3", 3)] {
        register(&mut snapshot, id, "GAME", created);
    }
    register(&mut snapshot, "geek", "GEEK", 4);
    register(&mut snapshot, "livre", "DESFILE LIVRE", 5);

    score(&mut snapshot, "g1", &[7.0, 8.0]);
    score(&mut snapshot, "g2", &[9.0]);
    score(&mut snapshot, "geek", &[6.0]);
    score(&mut snapshot, "livre", &[8.0]);

    let board = rank_all(&snapshot.participants, &snapshot.sheets, &policy);
    let categories: Vec<Category> = board.iter().map(|r| r.category).collect();
    assert_eq!(categories, [Category::Game, Category::DesfileLivre]);

    let game = &board[0];
    assert_eq!(game.classified, 3);
    assert_eq!(game.entries.len(), 2);
    assert_eq!(game.entries[0].participant.id, "g2");

    let livre = &board[1];
    assert_eq!(livre.classified, 2);
    let ids: Vec<&str> = livre
        .entries
        .iter()
        .map(|e| e.participant.id.as_str())
        .collect();
    assert_eq!(ids, ["livre", "geek"]);
}

#[test]
fn unknown_category_strings_are_silent_noops() {
    let policy = CategoryPolicy::default();
    let mut snapshot = ContestSnapshot::default();

    register(&mut snapshot, "w1", "WILDCARD", 1);
    score(&mut snapshot, "w1", &[10.0]);
    register(&mut snapshot, "d1", "DESFILE LIVRE", 2);
    score(&mut snapshot, "d1", &[5.0]);

    let board = rank_all(&snapshot.participants, &snapshot.sheets, &policy);
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].category, Category::DesfileLivre);
    assert_eq!(board[0].entries.len(), 1);
    assert_eq!(board[0].entries[0].participant.id, "d1");
}

#[test]
fn determinism_across_repeated_calls() {
    let policy = CategoryPolicy::default();
    let mut snapshot = ContestSnapshot::default();

    for (id, created) in [("a", 3), ("b", 1), ("c", 2)] {
        register(&mut snapshot, id, "DESFILE LIVRE", created);
        score(&mut snapshot, id, &[8.0, 8.0, 8.0]);
    }

    let first = rank_all(&snapshot.participants, &snapshot.sheets, &policy);
    for _ in 0..10 {
        assert_eq!(
            rank_all(&snapshot.participants, &snapshot.sheets, &policy),
            first
        );
    }
    // Exact duplicates everywhere: creation order decides.
    let ids: Vec<&str> = first[0]
        .entries
        .iter()
        .map(|e| e.participant.id.as_str())
        .collect();
    assert_eq!(ids, ["b", "c", "a"]);
}

/// The side-stage panels rank independently of the main board: same
/// comparator and podium depth, but no merge rule and no minimum
/// population, and the main board never shows them.
#[test]
fn side_stage_panels_rank_next_to_the_main_board() {
    let policy = CategoryPolicy::default();
    let mut snapshot = ContestSnapshot::default();

    register(&mut snapshot, "solo-a", "K-POP SOLO", 1);
    register(&mut snapshot, "solo-b", "K-POP SOLO", 2);
    register(&mut snapshot, "grupo-a", "K-POP GRUPO", 3);
    register(&mut snapshot, "livre", "DESFILE LIVRE", 4);

    score(&mut snapshot, "solo-a", &[8.0, 8.0]);
    score(&mut snapshot, "solo-b", &[9.0]);
    score(&mut snapshot, "grupo-a", &[7.5]);
    score(&mut snapshot, "livre", &[6.0]);

    let main = rank_all(&snapshot.participants, &snapshot.sheets, &policy);
    let main_categories: Vec<Category> = main.iter().map(|r| r.category).collect();
    assert_eq!(main_categories, [Category::DesfileLivre]);

    let panels = rank_side_stage(&snapshot.participants, &snapshot.sheets, &policy);
    let panel_categories: Vec<Category> = panels.iter().map(|r| r.category).collect();
    assert_eq!(panel_categories, [Category::KpopSolo, Category::KpopGrupo]);

    let solo = &panels[0];
    let ids: Vec<&str> = solo
        .entries
        .iter()
        .map(|e| e.participant.id.as_str())
        .collect();
    assert_eq!(ids, ["solo-b", "solo-a"]);

    // One registrant is enough on a panel.
    assert_eq!(panels[1].entries.len(), 1);
    assert_eq!(panels[1].entries[0].mean, 7.5);
}

#[test]
fn raised_threshold_merges_larger_categories() {
    let policy = CategoryPolicy {
        merge_threshold: 4,
        ..CategoryPolicy::default()
    };
    let mut snapshot = ContestSnapshot::default();

    for (id, created) in [("a1", 1), ("a2", 2), ("a3", 3)] {
        register(&mut snapshot, id, "ANIME", created);
        score(&mut snapshot, id, &[7.0]);
    }

    // Three participants merge under a threshold of four.
    let entries = rank(
        Category::DesfileLivre,
        &snapshot.participants,
        &snapshot.sheets,
        &policy,
    );
    assert_eq!(entries.len(), 3);
}
