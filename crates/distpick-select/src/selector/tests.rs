use distpick_distribution_filename::{DistributionKind, WheelFilenameError};

use super::*;

fn candidates(filenames: &[&str]) -> Vec<Candidate> {
    filenames
        .iter()
        .map(|filename| {
            Candidate::new(
                *filename,
                format!("https://files.example.com/packages/{filename}"),
            )
        })
        .collect()
}

fn selected(version: &str, filenames: &[&str]) -> String {
    select(version, &candidates(filenames))
        .unwrap()
        .best
        .candidate
        .filename
}

#[test]
fn any_beats_manylinux() {
    assert_eq!(
        selected(
            "1.0",
            &[
                "pkg-1.0-cp311-cp311-manylinux_2_17_x86_64.whl",
                "pkg-1.0-py3-none-any.whl",
            ]
        ),
        "pkg-1.0-py3-none-any.whl"
    );
    assert_eq!(
        selected(
            "1.0",
            &[
                "pkg-1.0-py3-none-any.whl",
                "pkg-1.0-cp311-cp311-manylinux_2_17_x86_64.whl",
            ]
        ),
        "pkg-1.0-py3-none-any.whl"
    );
}

#[test]
fn newer_manylinux_wins() {
    assert_eq!(
        selected(
            "1.0",
            &[
                "pkg-1.0-cp311-cp311-manylinux_2_17_x86_64.whl",
                "pkg-1.0-cp311-cp311-manylinux_2_28_x86_64.whl",
            ]
        ),
        "pkg-1.0-cp311-cp311-manylinux_2_28_x86_64.whl"
    );
}

#[test]
fn newer_cpython_wins() {
    assert_eq!(
        selected(
            "1.0",
            &[
                "pkg-1.0-cp39-cp39-win_amd64.whl",
                "pkg-1.0-cp312-cp312-win_amd64.whl",
            ]
        ),
        "pkg-1.0-cp312-cp312-win_amd64.whl"
    );
}

#[test]
fn gil_enabled_beats_free_threaded() {
    assert_eq!(
        selected(
            "1.0",
            &[
                "pkg-1.0-cp313-cp313t-win_amd64.whl",
                "pkg-1.0-cp313-cp313-win_amd64.whl",
            ]
        ),
        "pkg-1.0-cp313-cp313-win_amd64.whl"
    );
}

#[test]
fn wheel_beats_source_distribution() {
    let selection = select(
        "1.0",
        &candidates(&["pkg-1.0.tar.gz", "pkg-1.0-py3-none-any.whl"]),
    )
    .unwrap();
    assert_eq!(selection.best.candidate.filename, "pkg-1.0-py3-none-any.whl");
    assert_eq!(selection.best.kind, DistributionKind::Built);
}

#[test]
fn source_distribution_when_no_wheel() {
    let selection = select("1.0", &candidates(&["pkg-1.0.zip", "pkg-1.0.tar.gz"])).unwrap();
    // Source distributions tie, so the first one wins.
    assert_eq!(selection.best.candidate.filename, "pkg-1.0.zip");
    assert_eq!(selection.best.kind, DistributionKind::Source);
    assert_eq!(selection.best.tags, None);
    assert_eq!(selection.best.key, RankingKey::source());
}

#[test]
fn unknown_platform_loses_to_any() {
    assert_eq!(
        selected(
            "1.0",
            &["pkg-1.0-py3-none-foobar_tag.whl", "pkg-1.0-py3-none-any.whl"]
        ),
        "pkg-1.0-py3-none-any.whl"
    );
}

#[test]
fn unknown_platform_is_still_selectable() {
    let selection = select("1.0", &candidates(&["pkg-1.0-py3-none-foobar_tag.whl"])).unwrap();
    assert_eq!(selection.best.tags.unwrap().platform, "foobar_tag");
}

#[test]
fn expands_compressed_tag_sets() {
    // The second alternative of the compressed platform tag set is the best one overall.
    let selection = select(
        "1.0",
        &candidates(&[
            "pkg-1.0-cp311-cp311-manylinux_2_17_x86_64.whl",
            "pkg-1.0-cp311-cp311-manylinux2014_x86_64.manylinux_2_28_x86_64.whl",
        ]),
    )
    .unwrap();
    assert_eq!(
        selection.best.candidate.filename,
        "pkg-1.0-cp311-cp311-manylinux2014_x86_64.manylinux_2_28_x86_64.whl"
    );
    assert_eq!(
        selection.best.tags,
        Some(WheelTags {
            language: "cp311".to_string(),
            abi: "cp311".to_string(),
            platform: "manylinux_2_28_x86_64".to_string(),
        })
    );
}

#[test]
fn py2_py3_prefers_newest_language() {
    let selection = select("1.0", &candidates(&["six-1.0-py2.py3-none-any.whl"])).unwrap();
    assert_eq!(selection.best.tags.unwrap().language, "py3");
}

#[test]
fn ties_break_on_input_order() {
    let filenames = [
        "pkg-1.0-py3-none-any.whl",
        "pkg-1.0-1-py3-none-any.whl",
        "pkg_alt-1.0-py3-none-any.whl",
    ];
    assert_eq!(selected("1.0", &filenames), "pkg-1.0-py3-none-any.whl");

    let reordered = ["pkg_alt-1.0-py3-none-any.whl", "pkg-1.0-py3-none-any.whl"];
    assert_eq!(selected("1.0", &reordered), "pkg_alt-1.0-py3-none-any.whl");
}

#[test]
fn deterministic() {
    let candidates = candidates(&[
        "pkg-1.0-cp312-cp312-macosx_11_0_arm64.whl",
        "pkg-1.0-cp312-cp312-macosx_11_0_x86_64.whl",
        "pkg-1.0-cp312-abi3-win32.whl",
        "pkg-1.0.tar.gz",
    ]);
    let first = select("1.0", &candidates).unwrap();
    for _ in 0..10 {
        assert_eq!(select("1.0", &candidates).unwrap(), first);
    }
}

#[test]
fn singleton() {
    for filename in [
        "pkg-1.0-cp27-cp27mu-linux_armv7l.whl",
        "pkg-1.0.tar.bz2",
        "pkg-1.0-py3-none-any.whl",
    ] {
        assert_eq!(selected("1.0", &[filename]), filename);
    }
}

#[test]
fn empty_input() {
    let err = select("1.0", &[]).unwrap_err();
    assert!(matches!(err, SelectError::Empty));
    insta::assert_snapshot!(err, @"No candidate files were provided");
}

#[test]
fn nothing_for_requested_version() {
    let err = select(
        "2.0",
        &candidates(&["pkg-1.0-py3-none-any.whl", "pkg-1.0.tar.gz", "pkg-2.0.tar.gz.asc"]),
    )
    .unwrap_err();
    insta::assert_snapshot!(err, @"No distribution is available for version `2.0` (0 malformed candidate(s) skipped)");
}

#[test]
fn malformed_candidates_are_skipped() {
    let selection = select(
        "1.0",
        &candidates(&[
            "pkg-1.0-none-any.whl",
            "pkg-1.0-cp311-cp311-linux_x86_64.whl",
            "pkg-1.0-py3.-none-any.whl",
        ]),
    )
    .unwrap();
    assert_eq!(
        selection.best.candidate.filename,
        "pkg-1.0-cp311-cp311-linux_x86_64.whl"
    );
    assert_eq!(selection.skipped.len(), 2);
    assert!(matches!(
        selection.skipped[0].error,
        WheelFilenameError::UnexpectedShape { segments: 4, .. }
    ));
    assert!(matches!(
        selection.skipped[1].error,
        WheelFilenameError::EmptyTag { field: "language", .. }
    ));
}

#[test]
fn only_malformed_candidates() {
    let err = select("1.0", &candidates(&["pkg-1.0-none-any.whl"])).unwrap_err();
    let SelectError::Unavailable { version, skipped } = err else {
        panic!("expected `Unavailable`");
    };
    assert_eq!(version, "1.0");
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].candidate.filename, "pkg-1.0-none-any.whl");
}

#[test]
fn ranking_matches_selection() {
    let candidates = candidates(&[
        "pkg-1.0.tar.gz",
        "pkg-1.0-cp39-cp39-manylinux_2_17_x86_64.manylinux2014_x86_64.whl",
        "pkg-1.0-cp312-cp312-manylinux_2_17_x86_64.manylinux2014_x86_64.whl",
        "pkg-1.0-cp312-cp312-win_amd64.whl",
    ]);
    let ranking = rank("1.0", &candidates);
    let selection = select("1.0", &candidates).unwrap();
    assert_eq!(ranking.alternatives.len(), 6);
    assert_eq!(ranking.alternatives[0], selection.best);

    let order = ranking
        .alternatives
        .iter()
        .map(|alternative| match &alternative.tags {
            Some(tags) => tags.to_string(),
            None => alternative.candidate.filename.clone(),
        })
        .collect::<Vec<_>>();
    assert_eq!(
        order,
        [
            "cp312-cp312-manylinux_2_17_x86_64",
            "cp39-cp39-manylinux_2_17_x86_64",
            "cp312-cp312-manylinux2014_x86_64",
            "cp39-cp39-manylinux2014_x86_64",
            "cp312-cp312-win_amd64",
            "pkg-1.0.tar.gz",
        ]
    );
}

#[test]
fn results_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Selection>();
    assert_send_sync::<Ranking>();
    assert_send_sync::<SelectError>();
}
