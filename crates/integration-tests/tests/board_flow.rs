//! A full session driven through the assembled board, the way a front end would.

use idea_board::{open_board, Backend, BoardConfig, Intent, SortMode, Theme};

fn titles(board: &idea_board::Board) -> Vec<String> {
    board.view().ideas.iter().map(|i| i.title.clone()).collect()
}

#[test]
fn session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = BoardConfig {
        backend: Backend::File,
        data_dir: dir.path().to_path_buf(),
        origin: "flow".to_string(),
        ..BoardConfig::default()
    };

    let mut board = open_board(&cfg).unwrap();
    board.set_draft_title("Reading list");
    board.set_draft_description("Attach links to an idea");
    board.set_draft_tags("Research, links");
    assert!(board.dispatch(Intent::SubmitDraft).is_applied());
    assert!(board.draft().is_empty());

    let id = board.ideas()[0].id.clone();
    for _ in 0..20 {
        let _ = board.dispatch(Intent::Upvote(id.clone()));
    }
    let _ = board.dispatch(Intent::ToggleSave(id.clone()));
    let _ = board.dispatch(Intent::ToggleTheme);

    board.set_sort(SortMode::Votes);
    assert_eq!(
        titles(&board),
        vec!["Reading list", "Dark mode scheduler", "Weekly idea digest"]
    );
    assert_eq!(
        board.view().tags,
        vec!["research", "links", "ui", "accessibility", "productivity", "email"]
    );
    drop(board);

    let mut board = open_board(&cfg).unwrap();
    // filters are transient
    assert_eq!(board.filters().sort, SortMode::Recent);
    assert_eq!(board.theme(), Theme::Light);
    assert!(board.is_saved(&id));
    assert_eq!(board.idea(&id).unwrap().votes, 20);

    board.set_tag_filter("links");
    assert_eq!(titles(&board), vec!["Reading list"]);
}
